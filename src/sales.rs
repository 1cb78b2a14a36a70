//! Demo sales series plotted on the dashboard chart.

/// A single month of sales
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalesPoint {
    pub month: &'static str,
    pub value: u32,
}

const DEMO_POINTS: [SalesPoint; 7] = [
    SalesPoint { month: "Jan", value: 65 },
    SalesPoint { month: "Feb", value: 59 },
    SalesPoint { month: "Mar", value: 80 },
    SalesPoint { month: "Apr", value: 81 },
    SalesPoint { month: "May", value: 56 },
    SalesPoint { month: "Jun", value: 55 },
    SalesPoint { month: "Jul", value: 90 },
];

/// Fixed, ordered series of monthly sales
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalesSeries {
    pub label: &'static str,
    pub points: &'static [SalesPoint],
}

impl SalesSeries {
    /// The hardcoded seven-month demo series
    pub const fn demo() -> Self {
        Self {
            label: "Sales",
            points: &DEMO_POINTS,
        }
    }

    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.month.to_string()).collect()
    }

    pub fn values(&self) -> Vec<u32> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for SalesSeries {
    fn default() -> Self {
        Self::demo()
    }
}

//! Stat Card Component
//!
//! Static summary figures shown above the chart.

use leptos::*;

/// Summary row as (title, value, Lucide icon)
const STATS: [(&str, &str, &str); 4] = [
    ("Total Sales", "$12,450", "dollar-sign"),
    ("Orders", "320", "shopping-bag"),
    ("Products", "48", "package"),
    ("Pending Payouts", "$1,280", "wallet"),
];

/// Row of summary cards
#[component]
pub fn StatCards() -> impl IntoView {
    view! {
        <section class="stat-grid">
            {STATS
                .into_iter()
                .map(|(title, value, icon)| view! { <StatCard title=title value=value icon=icon /> })
                .collect::<Vec<_>>()}
        </section>
    }
}

/// Single summary card
#[component]
pub fn StatCard(
    /// Card title
    title: &'static str,
    /// Displayed figure
    value: &'static str,
    /// Lucide icon name
    icon: &'static str,
) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <div class="stat-icon">
                <i data-lucide=icon></i>
            </div>
            <div>
                <p class="stat-title">{title}</p>
                <p class="stat-value">{value}</p>
            </div>
        </div>
    }
}

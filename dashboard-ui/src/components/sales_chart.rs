//! Sales Chart Component
//!
//! Card holding the canvas Chart.js draws the sales series on.

use leptos::*;

use crate::state::DashboardState;

/// Sales overview card
#[component]
pub fn SalesChartCard() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let canvas_id = state.ids().chart_canvas.clone();

    view! {
        <section class="card chart-card">
            <div class="card-header">
                <h2 class="card-title">"Sales Overview"</h2>
                <span class="card-subtitle">"Jan – Jul"</span>
            </div>

            // Chart.js sizes the canvas to this container
            <div class="chart-container">
                <canvas id=canvas_id></canvas>
            </div>
        </section>
    }
}

//! App Root Component
//!
//! Page layout and the shared dashboard state.

use leptos::*;

use crate::components::{Header, SalesChartCard, Sidebar, StatCards};
use crate::state::DashboardState;

/// Root application component
#[component]
pub fn App(state: DashboardState) -> impl IntoView {
    let wrapper_id = state.ids().wrapper.clone();

    // Provide the controller to all components
    provide_context(state);

    view! {
        <div id=wrapper_id class="wrapper">
            <Sidebar />

            <div class="page-content">
                <Header />

                <main class="main">
                    <StatCards />
                    <SalesChartCard />
                </main>
            </div>
        </div>
    }
}

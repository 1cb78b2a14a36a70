//! Header Component
//!
//! Top bar with the sidebar toggle and the theme toggle.

use leptos::*;

use crate::state::DashboardState;

/// Page header component
#[component]
pub fn Header() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let ids = state.ids().clone();

    let state_for_sidebar = state.clone();
    let on_sidebar_click = move |_| {
        state_for_sidebar.toggle_sidebar();
    };

    let on_theme_click = move |_| {
        state.toggle_theme();
    };

    view! {
        <header class="topbar">
            <div class="topbar-left">
                <button id={ids.sidebar_toggle} class="icon-button" title="Toggle sidebar" on:click=on_sidebar_click>
                    <i data-lucide="menu"></i>
                </button>
                <h1 class="page-title">"Dashboard"</h1>
            </div>

            <div class="topbar-right">
                // Icon is filled in by the page controller
                <button id={ids.theme_toggle} class="icon-button" title="Toggle theme" on:click=on_theme_click />
                <div class="avatar">"S"</div>
            </div>
        </header>
    }
}

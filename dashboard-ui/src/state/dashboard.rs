//! Dashboard State
//!
//! Owns the page controller and hands it to the components through Leptos
//! context.

use seller_dashboard::{DashboardConfig, ElementIds, PageController, PageWiring, Theme};
use std::cell::RefCell;
use std::rc::Rc;

use crate::web::{BrowserStore, ChartJsRenderer, DomPage};

/// Page controller over the browser adapters
pub type WebController = PageController<DomPage, ChartJsRenderer, BrowserStore>;

/// Shared handle to the page controller
#[derive(Clone)]
pub struct DashboardState {
    controller: Rc<RefCell<WebController>>,
    ids: ElementIds,
}

impl DashboardState {
    pub fn new(config: DashboardConfig) -> Self {
        let ids = config.elements.clone();
        let controller = PageController::new(
            DomPage::new(ids.clone()),
            ChartJsRenderer::new(&ids.chart_canvas),
            BrowserStore::open(),
            config,
        );

        Self {
            controller: Rc::new(RefCell::new(controller)),
            ids,
        }
    }

    /// DOM ids the markup must use
    pub fn ids(&self) -> &ElementIds {
        &self.ids
    }

    /// Run the start-up routine; call once the markup is mounted
    pub fn initialize(&self) -> PageWiring {
        self.controller.borrow_mut().initialize()
    }

    pub fn toggle_sidebar(&self) -> Option<bool> {
        self.controller.borrow_mut().toggle_sidebar()
    }

    pub fn toggle_theme(&self) -> Option<Theme> {
        self.controller.borrow_mut().toggle_theme()
    }
}

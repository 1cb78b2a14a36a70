//! Page Surface
//!
//! The DOM contract of the dashboard, expressed as a capability trait so the
//! controller runs against the browser or a headless page alike.

use crate::theme::{Theme, ThemeIcon};

/// Elements the page wires up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageElement {
    SidebarToggle,
    Wrapper,
    ChartCanvas,
    ThemeToggle,
}

impl PageElement {
    pub const ALL: [PageElement; 4] = [
        PageElement::SidebarToggle,
        PageElement::Wrapper,
        PageElement::ChartCanvas,
        PageElement::ThemeToggle,
    ];
}

/// Mutations the controller performs on the page.
///
/// Operations on missing elements are no-ops.
pub trait PageSurface {
    /// Replace icon marker elements with glyphs
    fn render_icons(&mut self);

    /// Flip `class` on the layout wrapper; `None` when the wrapper is missing
    fn toggle_layout_class(&mut self, class: &str) -> Option<bool>;

    /// Set the theme attribute on the document root
    fn set_theme_attribute(&mut self, theme: Theme);

    /// Show `icon` inside the theme toggle; `false` when the toggle is missing
    fn set_theme_icon(&mut self, icon: ThemeIcon) -> bool;

    fn has_element(&self, element: PageElement) -> bool;
}

/// Which parts of the page were wired during initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageWiring {
    pub sidebar_toggle: bool,
    pub theme_toggle: bool,
    pub chart: bool,
}

impl PageWiring {
    pub fn probe<P: PageSurface + ?Sized>(page: &P) -> Self {
        Self {
            sidebar_toggle: page.has_element(PageElement::SidebarToggle)
                && page.has_element(PageElement::Wrapper),
            theme_toggle: page.has_element(PageElement::ThemeToggle),
            chart: page.has_element(PageElement::ChartCanvas),
        }
    }
}

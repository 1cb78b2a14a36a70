//! DOM page surface.

use seller_dashboard::{ElementIds, PageElement, PageSurface, Theme, ThemeIcon};
use web_sys::{Document, Element};

use super::lucide;

/// Attribute on `<html>` selecting the CSS theme
const THEME_ATTRIBUTE: &str = "data-theme";

/// The live document, addressed by element id
pub struct DomPage {
    ids: ElementIds,
}

impl DomPage {
    pub fn new(ids: ElementIds) -> Self {
        Self { ids }
    }

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn element(&self, id: &str) -> Option<Element> {
        Self::document()?.get_element_by_id(id)
    }

    fn id_of(&self, element: PageElement) -> &str {
        match element {
            PageElement::SidebarToggle => &self.ids.sidebar_toggle,
            PageElement::Wrapper => &self.ids.wrapper,
            PageElement::ChartCanvas => &self.ids.chart_canvas,
            PageElement::ThemeToggle => &self.ids.theme_toggle,
        }
    }
}

impl PageSurface for DomPage {
    fn render_icons(&mut self) {
        lucide::render_icons();
    }

    fn toggle_layout_class(&mut self, class: &str) -> Option<bool> {
        self.element(&self.ids.wrapper)?.class_list().toggle(class).ok()
    }

    fn set_theme_attribute(&mut self, theme: Theme) {
        let Some(root) = Self::document().and_then(|d| d.document_element()) else {
            return;
        };
        if let Err(e) = root.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
            web_sys::console::warn_1(&format!("Failed to set theme attribute: {:?}", e).into());
        }
    }

    fn set_theme_icon(&mut self, icon: ThemeIcon) -> bool {
        match self.element(&self.ids.theme_toggle) {
            Some(toggle) => {
                toggle.set_inner_html(&icon.markup());
                true
            }
            None => false,
        }
    }

    fn has_element(&self, element: PageElement) -> bool {
        self.element(self.id_of(element)).is_some()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn test_ids(prefix: &str) -> ElementIds {
        ElementIds {
            sidebar_toggle: format!("{}-sidebar-toggle", prefix),
            wrapper: format!("{}-wrapper", prefix),
            chart_canvas: format!("{}-chart", prefix),
            theme_toggle: format!("{}-theme-toggle", prefix),
            ..ElementIds::default()
        }
    }

    fn append(tag: &str, id: &str) -> Element {
        let document = DomPage::document().unwrap();
        let element = document.create_element(tag).unwrap();
        element.set_id(id);
        document.body().unwrap().append_child(&element).unwrap();
        element
    }

    #[wasm_bindgen_test]
    fn test_layout_class_follows_click_parity() {
        let ids = test_ids("parity");
        let wrapper = append("div", &ids.wrapper);
        let mut page = DomPage::new(ids);

        assert_eq!(page.toggle_layout_class("sidebar-toggled"), Some(true));
        assert!(wrapper.class_list().contains("sidebar-toggled"));
        assert_eq!(page.toggle_layout_class("sidebar-toggled"), Some(false));
        assert!(!wrapper.class_list().contains("sidebar-toggled"));
        assert_eq!(page.toggle_layout_class("sidebar-toggled"), Some(true));

        wrapper.remove();
        assert_eq!(page.toggle_layout_class("sidebar-toggled"), None);
    }

    #[wasm_bindgen_test]
    fn test_theme_attribute_on_document_element() {
        let mut page = DomPage::new(test_ids("attr"));
        let root = DomPage::document().unwrap().document_element().unwrap();

        page.set_theme_attribute(Theme::Light);
        assert_eq!(root.get_attribute(THEME_ATTRIBUTE), Some("light".to_string()));
        page.set_theme_attribute(Theme::Dark);
        assert_eq!(root.get_attribute(THEME_ATTRIBUTE), Some("dark".to_string()));
    }

    #[wasm_bindgen_test]
    fn test_theme_icon_written_to_toggle() {
        let ids = test_ids("icon");
        let mut page = DomPage::new(ids.clone());
        assert!(!page.set_theme_icon(ThemeIcon::Sun));
        assert!(!page.has_element(PageElement::ThemeToggle));

        let toggle = append("button", &ids.theme_toggle);
        assert!(page.has_element(PageElement::ThemeToggle));
        assert!(page.set_theme_icon(ThemeIcon::Moon));
        assert!(toggle.inner_html().contains(r#"data-lucide="moon""#));

        toggle.remove();
    }
}

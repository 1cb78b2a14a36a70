//! Headless Page
//!
//! In-memory implementations of the page and chart capabilities. They record
//! what the controller did so it can be inspected without a browser, from the
//! `simulate` command and from tests.

use std::collections::HashSet;

use crate::chart::{ChartConfig, ChartRenderer};
use crate::error::{DashboardError, DashboardResult};
use crate::page::{PageElement, PageSurface};
use crate::theme::{Theme, ThemeIcon};

/// A page held in memory
#[derive(Debug, Clone)]
pub struct HeadlessPage {
    present: HashSet<PageElement>,
    theme_attribute: Option<Theme>,
    toggle_markup: Option<String>,
    layout_classes: HashSet<String>,
    icon_renders: usize,
}

impl HeadlessPage {
    /// Page with every expected element present
    pub fn new() -> Self {
        Self {
            present: PageElement::ALL.into_iter().collect(),
            theme_attribute: None,
            toggle_markup: None,
            layout_classes: HashSet::new(),
            icon_renders: 0,
        }
    }

    /// Remove `element` from the page
    pub fn without(mut self, element: PageElement) -> Self {
        self.present.remove(&element);
        self
    }

    pub fn theme_attribute(&self) -> Option<Theme> {
        self.theme_attribute
    }

    /// Current inner markup of the theme toggle
    pub fn toggle_markup(&self) -> Option<&str> {
        self.toggle_markup.as_deref()
    }

    pub fn has_layout_class(&self, class: &str) -> bool {
        self.layout_classes.contains(class)
    }

    /// Number of icon-library passes
    pub fn icon_renders(&self) -> usize {
        self.icon_renders
    }
}

impl Default for HeadlessPage {
    fn default() -> Self {
        Self::new()
    }
}

impl PageSurface for HeadlessPage {
    fn render_icons(&mut self) {
        self.icon_renders += 1;
    }

    fn toggle_layout_class(&mut self, class: &str) -> Option<bool> {
        if !self.present.contains(&PageElement::Wrapper) {
            return None;
        }
        if self.layout_classes.remove(class) {
            Some(false)
        } else {
            self.layout_classes.insert(class.to_string());
            Some(true)
        }
    }

    fn set_theme_attribute(&mut self, theme: Theme) {
        self.theme_attribute = Some(theme);
    }

    fn set_theme_icon(&mut self, icon: ThemeIcon) -> bool {
        if !self.present.contains(&PageElement::ThemeToggle) {
            return false;
        }
        self.toggle_markup = Some(icon.markup());
        true
    }

    fn has_element(&self, element: PageElement) -> bool {
        self.present.contains(&element)
    }
}

/// Chart handle produced by [`RecordingRenderer`]
#[derive(Debug, PartialEq, Eq)]
pub struct RecordedChart {
    pub id: usize,
}

/// Lifecycle event seen by [`RecordingRenderer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderEvent {
    Constructed(usize),
    Destroyed(usize),
}

/// Chart renderer that keeps a log instead of drawing
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    next_id: usize,
    live: HashSet<usize>,
    events: Vec<RenderEvent>,
    last_config: Option<ChartConfig>,
    fail_next: bool,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next construction fail
    pub fn fail_next(&mut self) {
        self.fail_next = true;
    }

    pub fn constructed(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, RenderEvent::Constructed(_)))
            .count()
    }

    pub fn destroyed(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, RenderEvent::Destroyed(_)))
            .count()
    }

    /// Charts constructed and not yet destroyed
    pub fn live(&self) -> usize {
        self.live.len()
    }

    pub fn events(&self) -> &[RenderEvent] {
        &self.events
    }

    pub fn last_config(&self) -> Option<&ChartConfig> {
        self.last_config.as_ref()
    }

    /// Border color of the most recent construction
    pub fn last_accent(&self) -> Option<String> {
        self.last_config
            .as_ref()
            .and_then(|c| c.data.datasets.first())
            .map(|d| d.border_color.clone())
    }
}

impl ChartRenderer for RecordingRenderer {
    type Instance = RecordedChart;

    fn construct(&mut self, config: &ChartConfig) -> DashboardResult<RecordedChart> {
        if std::mem::take(&mut self.fail_next) {
            return Err(DashboardError::Chart("construction rejected".to_string()));
        }

        let id = self.next_id;
        self.next_id += 1;
        self.live.insert(id);
        self.events.push(RenderEvent::Constructed(id));
        self.last_config = Some(config.clone());
        Ok(RecordedChart { id })
    }

    fn destroy(&mut self, instance: RecordedChart) {
        self.live.remove(&instance.id);
        self.events.push(RenderEvent::Destroyed(instance.id));
    }
}

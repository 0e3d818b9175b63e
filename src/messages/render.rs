//! Render state - data structure sent from App layer to UI for rendering

use crate::catalog::{Selector, SelectorField};
use crate::constants::FAQ;
use crate::messages::ui_events::Section;
use crate::models::{Device, Quote, Selection};

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    pub active_section: Section,

    // Catalog
    pub loading: bool,
    pub devices: Vec<Device>,
    pub devices_scroll: u16,

    // Selector
    pub brands: Vec<String>,
    pub models: Vec<String>,
    pub storages: Vec<u32>,
    pub selection: Selection,
    pub focused_field: SelectorField,

    // Quote
    pub quote: Option<Quote>,
    pub quote_pending: bool,

    // FAQ
    pub faq_selected: usize,
    pub faq_open: Vec<bool>,

    // Popups
    pub show_help: bool,
}

impl RenderState {
    /// Quote form and device grid are only drawn once a non-empty catalog is in
    pub fn show_catalog(&self) -> bool {
        !self.loading && !self.devices.is_empty()
    }
}

impl Default for RenderState {
    fn default() -> Self {
        let selector = Selector::default();
        RenderState {
            active_section: Section::Hero,
            loading: true,
            devices: Vec::new(),
            devices_scroll: 0,
            brands: Vec::new(),
            models: Vec::new(),
            storages: Vec::new(),
            selection: selector.selection().clone(),
            focused_field: SelectorField::Brand,
            quote: None,
            quote_pending: false,
            faq_selected: 0,
            faq_open: vec![false; FAQ.len()],
            show_help: false,
        }
    }
}

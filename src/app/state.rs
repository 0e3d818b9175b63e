//! App state - pure data structure with no I/O logic

use crate::catalog::{Selector, SelectorField};
use crate::constants::FAQ;
use crate::error::FetchError;
use crate::messages::ui_events::Section;
use crate::messages::RenderState;
use crate::models::Quote;

/// Outcome of the latest completed request for a slot
#[derive(Clone, Debug, PartialEq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Pending,
    Ready,
    Failed(FetchError),
}

/// Remembers the most recent outstanding request id for one response slot.
///
/// Only the response carrying that id may be applied; anything older is stale.
#[derive(Clone, Debug, Default)]
pub struct RequestTracker {
    latest: Option<u64>,
}

impl RequestTracker {
    pub fn begin(&mut self, id: u64) {
        self.latest = Some(id);
    }

    pub fn is_pending(&self) -> bool {
        self.latest.is_some()
    }

    /// Consume the outstanding id if `id` is it; false means the response is stale
    pub fn complete(&mut self, id: u64) -> bool {
        if self.latest == Some(id) {
            self.latest = None;
            true
        } else {
            false
        }
    }
}

/// Main application state - pure data, no I/O
pub struct AppState {
    // Navigation
    pub active_section: Section,

    // Device catalog slot; the list itself lives in the selector
    pub loading: bool,
    pub catalog_status: LoadStatus,
    pub catalog_request: RequestTracker,
    pub devices_scroll: u16,

    // Selector
    pub selector: Selector,
    pub focused_field: SelectorField,

    // Quote slot
    pub quote: Option<Quote>,
    pub quote_status: LoadStatus,
    pub quote_request: RequestTracker,

    // Request ids, shared by both slots
    pub next_request_id: u64,

    // FAQ
    pub faq_selected: usize,
    pub faq_open: Vec<bool>,

    // Popups
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            active_section: Section::Hero,
            loading: true,
            catalog_status: LoadStatus::Idle,
            catalog_request: RequestTracker::default(),
            devices_scroll: 0,
            selector: Selector::default(),
            focused_field: SelectorField::Brand,
            quote: None,
            quote_status: LoadStatus::Idle,
            quote_request: RequestTracker::default(),
            next_request_id: 1,
            faq_selected: 0,
            faq_open: vec![false; FAQ.len()],
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Whether the quote form and device grid are visible
    pub fn has_catalog(&self) -> bool {
        !self.loading && !self.selector.is_empty()
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            active_section: self.active_section,
            loading: self.loading,
            devices: self.selector.devices().to_vec(),
            devices_scroll: self.devices_scroll,
            brands: self.selector.brands().to_vec(),
            models: self.selector.models().to_vec(),
            storages: self.selector.storages().to_vec(),
            selection: self.selector.selection().clone(),
            focused_field: self.focused_field,
            quote: self.quote.clone(),
            quote_pending: self.quote_request.is_pending(),
            faq_selected: self.faq_selected,
            faq_open: self.faq_open.clone(),
            show_help: self.show_help,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_only_accepts_latest() {
        let mut tracker = RequestTracker::default();
        tracker.begin(1);
        tracker.begin(2);
        assert!(!tracker.complete(1));
        assert!(tracker.is_pending());
        assert!(tracker.complete(2));
        assert!(!tracker.is_pending());
        assert!(!tracker.complete(2));
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert!(state.loading);
        assert!(!state.has_catalog());
        let render = state.to_render_state();
        assert!(!render.show_catalog());
        assert_eq!(render.faq_open.len(), FAQ.len());
    }
}

//! Command handlers - business logic for processing UI events

use crate::app::state::LoadStatus;
use crate::app::AppState;
use crate::catalog::Selector;
use crate::constants::FAQ;
use crate::messages::ui_events::Section;
use crate::messages::{NetworkCommand, NetworkResponse};

impl AppState {
    // ========================
    // Navigation
    // ========================

    fn is_visible(&self, section: Section) -> bool {
        !section.needs_catalog() || self.has_catalog()
    }

    /// Jump to a section; hidden sections land on the hero instead
    pub fn jump_to(&mut self, section: Section) {
        self.active_section = if self.is_visible(section) {
            section
        } else {
            Section::Hero
        };
    }

    pub fn next_section(&mut self) {
        self.step_section(true);
    }

    pub fn prev_section(&mut self) {
        self.step_section(false);
    }

    fn step_section(&mut self, forward: bool) {
        let all = Section::ALL;
        let len = all.len();
        let mut index = all
            .iter()
            .position(|s| *s == self.active_section)
            .unwrap_or(0);
        for _ in 0..len {
            index = if forward { (index + 1) % len } else { (index + len - 1) % len };
            if self.is_visible(all[index]) {
                self.active_section = all[index];
                return;
            }
        }
    }

    // ========================
    // Device selection
    // ========================

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    pub fn next_option(&mut self) {
        self.selector.cycle(self.focused_field, true);
    }

    pub fn prev_option(&mut self) {
        self.selector.cycle(self.focused_field, false);
    }

    // ========================
    // Devices grid
    // ========================

    pub fn scroll_up(&mut self) {
        self.devices_scroll = self.devices_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        let max = self.selector.devices().len().saturating_sub(1) as u16;
        self.devices_scroll = self.devices_scroll.saturating_add(1).min(max);
    }

    // ========================
    // FAQ
    // ========================

    pub fn next_question(&mut self) {
        if !FAQ.is_empty() {
            self.faq_selected = (self.faq_selected + 1) % FAQ.len();
        }
    }

    pub fn prev_question(&mut self) {
        if !FAQ.is_empty() {
            self.faq_selected = self.faq_selected.checked_sub(1).unwrap_or(FAQ.len() - 1);
        }
    }

    pub fn toggle_answer(&mut self) {
        if let Some(open) = self.faq_open.get_mut(self.faq_selected) {
            *open = !*open;
        }
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Backend requests
    // ========================

    /// Start (or restart) the catalog fetch
    pub fn load_devices(&mut self) -> NetworkCommand {
        let id = self.next_id();
        self.catalog_request.begin(id);
        self.catalog_status = LoadStatus::Pending;
        self.loading = true;
        NetworkCommand::FetchDevices { id }
    }

    /// Submit the current selection for pricing.
    ///
    /// An outstanding quote does not block a new one; the newer id wins.
    pub fn request_quote(&mut self) -> Option<NetworkCommand> {
        if !self.has_catalog() {
            return None;
        }
        if !self.selector.is_submittable() {
            tracing::debug!(
                model = %self.selector.selection().model,
                "No storage option to quote"
            );
            return None;
        }

        let id = self.next_id();
        self.quote_request.begin(id);
        self.quote_status = LoadStatus::Pending;
        Some(
            self.selector
                .submit(|selection| NetworkCommand::RequestQuote { id, selection }),
        )
    }

    // ========================
    // Response handling
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) {
        match response {
            NetworkResponse::Devices { id, result } => {
                if !self.catalog_request.complete(id) {
                    tracing::debug!(id, "Discarding stale device response");
                    return;
                }
                match result {
                    Ok(devices) => {
                        tracing::info!(id, count = devices.len(), "Catalog loaded");
                        self.selector = Selector::new(devices);
                        self.catalog_status = LoadStatus::Ready;
                    }
                    Err(err) => {
                        tracing::warn!(
                            id,
                            error = %err,
                            "Catalog unavailable, hiding device sections"
                        );
                        self.selector = Selector::default();
                        self.catalog_status = LoadStatus::Failed(err);
                    }
                }
                self.devices_scroll = 0;
                self.loading = false;
                if !self.is_visible(self.active_section) {
                    self.active_section = Section::Hero;
                }
            }
            NetworkResponse::Quote { id, result } => {
                if !self.quote_request.complete(id) {
                    tracing::debug!(id, "Discarding stale quote response");
                    return;
                }
                match result {
                    Ok(quote) => {
                        tracing::info!(id, offer = quote.offer, "Quote received");
                        self.quote = Some(quote);
                        self.quote_status = LoadStatus::Ready;
                    }
                    Err(err) => {
                        tracing::warn!(id, error = %err, "Quote failed, clearing offer");
                        self.quote = None;
                        self.quote_status = LoadStatus::Failed(err);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SelectorField;
    use crate::error::FetchError;
    use crate::models::{Condition, Device, Quote, Selection};

    fn catalog() -> Vec<Device> {
        vec![
            Device::new("Apple", "iPhone 12", vec![64, 128], 300.0),
            Device::new("Samsung", "Galaxy S21", vec![128, 256], 280.0),
        ]
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new();
        let NetworkCommand::FetchDevices { id } = state.load_devices() else {
            panic!("expected a device fetch");
        };
        state.handle_response(NetworkResponse::Devices {
            id,
            result: Ok(catalog()),
        });
        state
    }

    fn quote_id(cmd: Option<NetworkCommand>) -> (u64, Selection) {
        match cmd {
            Some(NetworkCommand::RequestQuote { id, selection }) => (id, selection),
            other => panic!("expected a quote request, got {:?}", other),
        }
    }

    fn offer(selection: &Selection, offer: f64) -> Quote {
        Quote {
            brand: selection.brand.clone(),
            model: selection.model.clone(),
            storage: selection.storage,
            condition: selection.condition,
            offer,
        }
    }

    #[test]
    fn test_catalog_load_initializes_selector() {
        let state = loaded_state();
        assert!(!state.loading);
        assert!(state.has_catalog());
        assert_eq!(state.catalog_status, LoadStatus::Ready);
        assert_eq!(state.selector.selection().brand, "Apple");
        assert_eq!(state.selector.selection().storage, 64);
    }

    #[test]
    fn test_catalog_network_error_hides_sections() {
        let mut state = AppState::new();
        let NetworkCommand::FetchDevices { id } = state.load_devices() else {
            panic!("expected a device fetch");
        };
        state.handle_response(NetworkResponse::Devices {
            id,
            result: Err(FetchError::Transport("connection refused".into())),
        });

        assert!(!state.loading);
        assert!(state.selector.devices().is_empty());
        assert!(matches!(state.catalog_status, LoadStatus::Failed(FetchError::Transport(_))));

        let render = state.to_render_state();
        assert!(!render.show_catalog());
        state.jump_to(Section::Quote);
        assert_eq!(state.active_section, Section::Hero);
        assert!(state.request_quote().is_none());
    }

    #[test]
    fn test_device_without_storages_is_not_quoted() {
        let mut state = AppState::new();
        let NetworkCommand::FetchDevices { id } = state.load_devices() else {
            panic!("expected a device fetch");
        };
        let devices = vec![
            Device::new("Apple", "iPhone 12", vec![512], 300.0),
            Device::new("Apple", "iPhone X", Vec::new(), 150.0),
        ];
        state.handle_response(NetworkResponse::Devices {
            id,
            result: Ok(devices),
        });

        state.focused_field = SelectorField::Model;
        state.next_option();
        assert_eq!(state.selector.selection().model, "iPhone X");
        assert!(state.request_quote().is_none());
        assert!(!state.quote_request.is_pending());

        state.next_option();
        let (_, selection) = quote_id(state.request_quote());
        assert_eq!(selection.storage, 512);
    }

    #[test]
    fn test_empty_catalog_is_not_a_failure() {
        let mut state = AppState::new();
        let NetworkCommand::FetchDevices { id } = state.load_devices() else {
            panic!("expected a device fetch");
        };
        state.handle_response(NetworkResponse::Devices {
            id,
            result: Ok(Vec::new()),
        });
        assert!(!state.loading);
        assert!(!state.has_catalog());
        assert_eq!(state.catalog_status, LoadStatus::Ready);
    }

    #[test]
    fn test_stale_catalog_response_ignored() {
        let mut state = AppState::new();
        let first = state.load_devices();
        let _second = state.load_devices();
        let NetworkCommand::FetchDevices { id } = first else {
            panic!("expected a device fetch");
        };
        state.handle_response(NetworkResponse::Devices {
            id,
            result: Ok(catalog()),
        });
        assert!(state.loading);
        assert!(state.selector.devices().is_empty());
    }

    #[test]
    fn test_quote_success_displays_offer() {
        let mut state = loaded_state();
        state.selector.select_storage(128).unwrap();
        state.selector.select_condition(Condition::Good);

        let (id, selection) = quote_id(state.request_quote());
        assert!(state.to_render_state().quote_pending);
        state.handle_response(NetworkResponse::Quote {
            id,
            result: Ok(offer(&selection, 210.0)),
        });

        let quote = state.to_render_state().quote.unwrap();
        assert_eq!(quote.offer, 210.0);
        assert_eq!(quote.brand, "Apple");
        assert_eq!(quote.model, "iPhone 12");
        assert_eq!(quote.storage, 128);
        assert_eq!(quote.condition, Condition::Good);
        assert_eq!(state.quote_status, LoadStatus::Ready);
        assert!(!state.to_render_state().quote_pending);
    }

    #[test]
    fn test_malformed_quote_clears_offer() {
        let mut state = loaded_state();
        let (id, selection) = quote_id(state.request_quote());
        state.handle_response(NetworkResponse::Quote {
            id,
            result: Ok(offer(&selection, 250.0)),
        });
        assert!(state.quote.is_some());

        let (id, _) = quote_id(state.request_quote());
        state.handle_response(NetworkResponse::Quote {
            id,
            result: Err(FetchError::Decode("expected value at line 1 column 1".into())),
        });
        assert!(state.quote.is_none());
        assert!(matches!(state.quote_status, LoadStatus::Failed(FetchError::Decode(_))));
    }

    #[test]
    fn test_latest_quote_wins_out_of_order() {
        let mut state = loaded_state();
        let (first_id, first) = quote_id(state.request_quote());

        state.focused_field = SelectorField::Brand;
        state.next_option();
        let (second_id, second) = quote_id(state.request_quote());
        assert_eq!(second.brand, "Samsung");

        state.handle_response(NetworkResponse::Quote {
            id: second_id,
            result: Ok(offer(&second, 180.0)),
        });
        state.handle_response(NetworkResponse::Quote {
            id: first_id,
            result: Ok(offer(&first, 300.0)),
        });

        let quote = state.quote.as_ref().unwrap();
        assert_eq!(quote.brand, "Samsung");
        assert_eq!(quote.offer, 180.0);
    }

    #[test]
    fn test_previous_quote_stays_after_reselection() {
        let mut state = loaded_state();
        let (id, selection) = quote_id(state.request_quote());
        state.handle_response(NetworkResponse::Quote {
            id,
            result: Ok(offer(&selection, 250.0)),
        });

        state.focused_field = SelectorField::Condition;
        state.next_option();
        assert_eq!(state.quote.as_ref().unwrap().condition, Condition::LikeNew);
    }

    #[test]
    fn test_option_cycling_respects_cascade() {
        let mut state = loaded_state();
        state.focused_field = SelectorField::Storage;
        state.next_option();
        assert_eq!(state.selector.selection().storage, 128);

        state.prev_field();
        state.prev_field();
        assert_eq!(state.focused_field, SelectorField::Brand);
        state.next_option();
        assert_eq!(state.selector.selection().model, "Galaxy S21");
        assert_eq!(state.selector.selection().storage, 128);
    }

    #[test]
    fn test_section_stepping_skips_hidden() {
        let mut state = AppState::new();
        state.next_section();
        assert_eq!(state.active_section, Section::HowItWorks);
        state.prev_section();
        assert_eq!(state.active_section, Section::Hero);

        let mut state = loaded_state();
        state.next_section();
        assert_eq!(state.active_section, Section::Quote);
    }

    #[test]
    fn test_faq_toggle() {
        let mut state = AppState::new();
        state.prev_question();
        assert_eq!(state.faq_selected, FAQ.len() - 1);
        state.toggle_answer();
        assert!(state.faq_open[FAQ.len() - 1]);
        state.toggle_answer();
        assert!(!state.faq_open[FAQ.len() - 1]);
    }

    #[test]
    fn test_device_scroll_bounds() {
        let mut state = loaded_state();
        state.scroll_up();
        assert_eq!(state.devices_scroll, 0);
        for _ in 0..5 {
            state.scroll_down();
        }
        assert_eq!(state.devices_scroll, 1);
    }
}

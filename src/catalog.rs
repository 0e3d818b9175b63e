//! Catalog selector - cascading brand → model → storage → condition chooser
//!
//! The derivation functions are pure; `Selector` calls them synchronously
//! after every brand or model change and resets the dependent fields to the
//! first valid option. Invalid combinations are never representable through
//! the public operations.

use std::collections::HashSet;

use crate::constants::FALLBACK_STORAGE_GB;
use crate::error::SelectionError;
use crate::models::{Condition, Device, Selection};

/// Field of the chooser that keyboard input currently targets
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SelectorField {
    #[default]
    Brand,
    Model,
    Storage,
    Condition,
}

impl SelectorField {
    pub fn next(&self) -> SelectorField {
        match self {
            SelectorField::Brand => SelectorField::Model,
            SelectorField::Model => SelectorField::Storage,
            SelectorField::Storage => SelectorField::Condition,
            SelectorField::Condition => SelectorField::Brand,
        }
    }

    pub fn prev(&self) -> SelectorField {
        match self {
            SelectorField::Brand => SelectorField::Condition,
            SelectorField::Model => SelectorField::Brand,
            SelectorField::Storage => SelectorField::Model,
            SelectorField::Condition => SelectorField::Storage,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SelectorField::Brand => "Brand",
            SelectorField::Model => "Model",
            SelectorField::Storage => "Storage",
            SelectorField::Condition => "Condition",
        }
    }
}

/// Distinct brands in first-seen order
pub fn brands(devices: &[Device]) -> Vec<String> {
    let mut seen = HashSet::new();
    devices
        .iter()
        .filter(|d| seen.insert(d.brand.as_str()))
        .map(|d| d.brand.clone())
        .collect()
}

/// Models listed under `brand`, in catalog order
pub fn models_for(devices: &[Device], brand: &str) -> Vec<String> {
    devices
        .iter()
        .filter(|d| d.brand == brand)
        .map(|d| d.model.clone())
        .collect()
}

pub fn find_device<'a>(devices: &'a [Device], brand: &str, model: &str) -> Option<&'a Device> {
    devices.iter().find(|d| d.brand == brand && d.model == model)
}

/// Storage options of the (brand, model) device; empty when there is no such device
pub fn storages_for(devices: &[Device], brand: &str, model: &str) -> Vec<u32> {
    find_device(devices, brand, model)
        .map(|d| d.storages.clone())
        .unwrap_or_default()
}

/// Next or previous entry after `current`, wrapping. Falls back to the first
/// option when `current` is not in the list.
fn step<T: PartialEq + Clone>(options: &[T], current: &T, forward: bool) -> Option<T> {
    if options.is_empty() {
        return None;
    }
    let len = options.len();
    let next = match options.iter().position(|o| o == current) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None => 0,
    };
    options.get(next).cloned()
}

/// Owns the device list and the draft selection derived from it
#[derive(Debug, Clone)]
pub struct Selector {
    devices: Vec<Device>,
    brands: Vec<String>,
    models: Vec<String>,
    // Position in `models`; names may repeat within a brand
    model_index: usize,
    selection: Selection,
}

impl Default for Selector {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Selector {
    /// Start from the first brand, its first model and that model's first storage.
    ///
    /// An empty catalog leaves brand and model empty and storage at 128 GB.
    pub fn new(devices: Vec<Device>) -> Self {
        let brands = brands(&devices);
        let brand = brands.first().cloned().unwrap_or_default();
        let mut selector = Selector {
            devices,
            brands,
            models: Vec::new(),
            model_index: 0,
            selection: Selection {
                brand: String::new(),
                model: String::new(),
                storage: FALLBACK_STORAGE_GB,
                condition: Condition::default(),
            },
        };
        selector.apply_brand(brand);
        selector
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    pub fn current_device(&self) -> Option<&Device> {
        find_device(&self.devices, &self.selection.brand, &self.selection.model)
    }

    pub fn storages(&self) -> &[u32] {
        self.current_device()
            .map(|d| d.storages.as_slice())
            .unwrap_or(&[])
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Whether the selection names a catalog device and one of its capacities
    pub fn is_submittable(&self) -> bool {
        self.storages().contains(&self.selection.storage)
    }

    /// Switch brand; model and storage reset to the new brand's first options.
    /// Re-selecting the current brand changes nothing.
    pub fn select_brand(&mut self, brand: &str) -> Result<(), SelectionError> {
        if brand == self.selection.brand {
            return Ok(());
        }
        if !self.brands.iter().any(|b| b == brand) {
            return Err(SelectionError::UnknownBrand(brand.to_string()));
        }
        self.apply_brand(brand.to_string());
        Ok(())
    }

    /// Switch model within the current brand; storage resets to the new device's first.
    pub fn select_model(&mut self, model: &str) -> Result<(), SelectionError> {
        if model == self.selection.model {
            return Ok(());
        }
        let Some(index) = self.models.iter().position(|m| m == model) else {
            return Err(SelectionError::UnknownModel {
                brand: self.selection.brand.clone(),
                model: model.to_string(),
            });
        };
        self.model_index = index;
        self.apply_model(model.to_string());
        Ok(())
    }

    pub fn select_storage(&mut self, storage: u32) -> Result<(), SelectionError> {
        if !self.storages().contains(&storage) {
            return Err(SelectionError::UnknownStorage(storage));
        }
        self.selection.storage = storage;
        Ok(())
    }

    /// Condition is user-owned and never reset by other fields.
    pub fn select_condition(&mut self, condition: Condition) {
        self.selection.condition = condition;
    }

    /// Move `field` to its next or previous valid option, wrapping around.
    pub fn cycle(&mut self, field: SelectorField, forward: bool) {
        match field {
            SelectorField::Brand => {
                if let Some(brand) = step(&self.brands, &self.selection.brand, forward) {
                    if brand != self.selection.brand {
                        self.apply_brand(brand);
                    }
                }
            }
            SelectorField::Model => {
                let len = self.models.len();
                if len == 0 {
                    return;
                }
                let index = if forward {
                    (self.model_index + 1) % len
                } else {
                    (self.model_index + len - 1) % len
                };
                self.model_index = index;
                let model = self.models[index].clone();
                if model != self.selection.model {
                    self.apply_model(model);
                }
            }
            SelectorField::Storage => {
                if let Some(storage) = step(self.storages(), &self.selection.storage, forward) {
                    self.selection.storage = storage;
                }
            }
            SelectorField::Condition => {
                if let Some(condition) = step(&Condition::ALL, &self.selection.condition, forward) {
                    self.selection.condition = condition;
                }
            }
        }
    }

    /// Hand the full current selection to the quote requester.
    pub fn submit<R>(&self, on_quote: impl FnOnce(Selection) -> R) -> R {
        on_quote(self.selection.clone())
    }

    fn apply_brand(&mut self, brand: String) {
        self.models = models_for(&self.devices, &brand);
        self.selection.brand = brand;
        self.model_index = 0;
        let model = self.models.first().cloned().unwrap_or_default();
        self.apply_model(model);
    }

    /// A device without capacities falls back to 128 GB, which is then not submittable
    fn apply_model(&mut self, model: String) {
        self.selection.model = model;
        self.selection.storage = self
            .storages()
            .first()
            .copied()
            .unwrap_or(FALLBACK_STORAGE_GB);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn catalog() -> Vec<Device> {
        vec![
            Device::new("Apple", "iPhone 12", vec![64, 128], 300.0),
            Device::new("Apple", "iPhone 13", vec![128, 256, 512], 420.0),
            Device::new("Samsung", "Galaxy S21", vec![128, 256], 280.0),
            Device::new("Google", "Pixel 7", vec![128], 250.0),
            Device::new("Samsung", "Galaxy S22", vec![256], 350.0),
        ]
    }

    #[test]
    fn test_single_device_defaults() {
        let selector = Selector::new(vec![Device::new("Apple", "iPhone 12", vec![64, 128], 300.0)]);
        assert_eq!(selector.brands(), ["Apple"]);
        assert_eq!(selector.models(), ["iPhone 12"]);
        assert_eq!(selector.selection().storage, 64);
        assert_eq!(selector.selection().condition, Condition::LikeNew);
    }

    #[test]
    fn test_brands_first_seen_order() {
        assert_eq!(brands(&catalog()), ["Apple", "Samsung", "Google"]);
    }

    #[test]
    fn test_models_follow_catalog_order() {
        assert_eq!(models_for(&catalog(), "Samsung"), ["Galaxy S21", "Galaxy S22"]);
        assert!(models_for(&catalog(), "Nokia").is_empty());
    }

    #[test]
    fn test_brand_change_resets_model_and_storage() {
        let mut selector = Selector::new(catalog());
        selector.select_model("iPhone 13").unwrap();
        selector.select_storage(512).unwrap();

        selector.select_brand("Samsung").unwrap();
        let selection = selector.selection();
        assert_eq!(selection.model, "Galaxy S21");
        assert_eq!(selection.storage, 128);
    }

    #[test]
    fn test_model_change_resets_storage_only() {
        let mut selector = Selector::new(catalog());
        selector.select_condition(Condition::Fair);
        selector.select_storage(128).unwrap();

        selector.select_model("iPhone 13").unwrap();
        assert_eq!(selector.selection().storage, 128);
        assert_eq!(selector.storages(), [128, 256, 512]);
        assert_eq!(selector.selection().condition, Condition::Fair);
    }

    #[test]
    fn test_reselecting_same_brand_keeps_model() {
        let mut selector = Selector::new(catalog());
        selector.select_model("iPhone 13").unwrap();
        selector.select_brand("Apple").unwrap();
        assert_eq!(selector.selection().model, "iPhone 13");
    }

    #[test]
    fn test_rejects_invalid_choices() {
        let mut selector = Selector::new(catalog());
        assert_eq!(
            selector.select_brand("Nokia"),
            Err(SelectionError::UnknownBrand("Nokia".into()))
        );
        assert!(matches!(
            selector.select_model("Galaxy S21"),
            Err(SelectionError::UnknownModel { .. })
        ));
        assert_eq!(selector.select_storage(1024), Err(SelectionError::UnknownStorage(1024)));
        assert_eq!(selector.selection().brand, "Apple");
        assert_eq!(selector.selection().model, "iPhone 12");
    }

    #[test]
    fn test_empty_catalog_fallbacks() {
        let mut selector = Selector::new(Vec::new());
        assert!(selector.is_empty());
        assert_eq!(selector.selection().brand, "");
        assert_eq!(selector.selection().model, "");
        assert_eq!(selector.selection().storage, FALLBACK_STORAGE_GB);
        selector.cycle(SelectorField::Brand, true);
        selector.cycle(SelectorField::Storage, true);
        assert_eq!(selector.selection().storage, FALLBACK_STORAGE_GB);
    }

    #[test]
    fn test_cycle_wraps_and_resets() {
        let mut selector = Selector::new(catalog());
        selector.cycle(SelectorField::Brand, false);
        assert_eq!(selector.selection().brand, "Google");
        assert_eq!(selector.selection().model, "Pixel 7");

        selector.cycle(SelectorField::Brand, true);
        assert_eq!(selector.selection().brand, "Apple");

        selector.cycle(SelectorField::Condition, false);
        assert_eq!(selector.selection().condition, Condition::Broken);
        selector.cycle(SelectorField::Condition, true);
        assert_eq!(selector.selection().condition, Condition::LikeNew);

        selector.cycle(SelectorField::Storage, true);
        assert_eq!(selector.selection().storage, 128);
        selector.cycle(SelectorField::Storage, true);
        assert_eq!(selector.selection().storage, 64);
    }

    #[test]
    fn test_submit_forwards_selection() {
        let mut selector = Selector::new(catalog());
        selector.select_brand("Samsung").unwrap();
        selector.select_condition(Condition::Good);
        let submitted = selector.submit(|selection| selection);
        assert_eq!(
            submitted,
            Selection {
                brand: "Samsung".into(),
                model: "Galaxy S21".into(),
                storage: 128,
                condition: Condition::Good,
            }
        );
    }

    #[test]
    fn test_device_without_storages_does_not_inherit_capacity() {
        let mut selector = Selector::new(vec![
            Device::new("Apple", "iPhone 12", vec![512], 300.0),
            Device::new("Apple", "iPhone X", Vec::new(), 150.0),
        ]);
        assert!(selector.is_submittable());

        selector.select_model("iPhone X").unwrap();
        assert!(selector.storages().is_empty());
        assert_eq!(selector.selection().storage, FALLBACK_STORAGE_GB);
        assert!(!selector.is_submittable());

        selector.cycle(SelectorField::Model, true);
        assert_eq!(selector.selection().model, "iPhone 12");
        assert_eq!(selector.selection().storage, 512);
        assert!(selector.is_submittable());
    }

    #[test]
    fn test_cycle_steps_past_repeated_model_names() {
        let mut selector = Selector::new(vec![
            Device::new("Apple", "iPhone 12", vec![64], 300.0),
            Device::new("Apple", "iPhone 12", vec![128], 310.0),
            Device::new("Apple", "iPhone 13", vec![256], 420.0),
        ]);
        assert_eq!(selector.models(), ["iPhone 12", "iPhone 12", "iPhone 13"]);

        selector.cycle(SelectorField::Model, true);
        assert_eq!(selector.selection().model, "iPhone 12");
        selector.cycle(SelectorField::Model, true);
        assert_eq!(selector.selection().model, "iPhone 13");
        assert_eq!(selector.selection().storage, 256);

        selector.cycle(SelectorField::Model, true);
        assert_eq!(selector.selection().model, "iPhone 12");
        selector.cycle(SelectorField::Model, false);
        assert_eq!(selector.selection().model, "iPhone 13");
    }

    #[test]
    fn test_field_focus_cycle() {
        let mut field = SelectorField::default();
        for _ in 0..4 {
            field = field.next();
        }
        assert_eq!(field, SelectorField::Brand);
        assert_eq!(SelectorField::Brand.prev(), SelectorField::Condition);
    }

    /// Catalogs with unique (brand, model) pairs and non-empty storage lists
    fn catalog_strategy() -> impl Strategy<Value = Vec<Device>> {
        let brands = ["Apple", "Samsung", "Google", "OnePlus"];
        let entry = (
            prop::sample::select(brands.to_vec()),
            0..5usize,
            prop::collection::vec(prop::sample::select(vec![32u32, 64, 128, 256, 512]), 1..4),
        );
        prop::collection::vec(entry, 1..12).prop_map(|entries| {
            let mut devices: Vec<Device> = Vec::new();
            for (brand, model, storages) in entries {
                let model = format!("Model {}", model);
                if find_device(&devices, brand, &model).is_none() {
                    devices.push(Device::new(brand, model, storages, 100.0));
                }
            }
            devices
        })
    }

    fn field_strategy() -> impl Strategy<Value = SelectorField> {
        prop_oneof![
            Just(SelectorField::Brand),
            Just(SelectorField::Model),
            Just(SelectorField::Storage),
            Just(SelectorField::Condition),
        ]
    }

    proptest! {
        #[test]
        fn brands_are_distinct_in_first_occurrence_order(devices in catalog_strategy()) {
            let mut expected: Vec<String> = Vec::new();
            for d in &devices {
                if !expected.contains(&d.brand) {
                    expected.push(d.brand.clone());
                }
            }
            prop_assert_eq!(brands(&devices), expected);
        }

        #[test]
        fn models_belong_to_selected_brand(devices in catalog_strategy(), pick in 0..4usize) {
            let all = brands(&devices);
            let brand = &all[pick % all.len()];
            for model in models_for(&devices, brand) {
                prop_assert!(devices.iter().any(|d| &d.brand == brand && d.model == model));
            }
        }

        #[test]
        fn brand_change_yields_valid_model_and_storage(
            devices in catalog_strategy(),
            pick in 0..4usize,
        ) {
            let mut selector = Selector::new(devices.clone());
            let brand = selector.brands()[pick % selector.brands().len()].clone();
            selector.select_brand(&brand).unwrap();

            let selection = selector.selection().clone();
            let device = find_device(&devices, &selection.brand, &selection.model);
            prop_assert!(device.is_some());
            prop_assert!(device.unwrap().storages.contains(&selection.storage));
        }

        #[test]
        fn submitted_selection_matches_catalog(
            devices in catalog_strategy(),
            moves in prop::collection::vec((field_strategy(), any::<bool>()), 0..20),
        ) {
            let mut selector = Selector::new(devices.clone());
            for (field, forward) in moves {
                selector.cycle(field, forward);
            }
            let selection = selector.submit(|s| s);
            prop_assert!(devices.iter().any(|d| d.brand == selection.brand
                && d.model == selection.model
                && d.storages.contains(&selection.storage)));
            prop_assert!(Condition::ALL.contains(&selection.condition));
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{BRAND_IMAGES, GENERIC_IMAGE};

/// Device wear, ordered best to worst
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Condition {
    #[default]
    #[serde(rename = "Like New")]
    LikeNew,
    Good,
    Fair,
    Broken,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::LikeNew,
        Condition::Good,
        Condition::Fair,
        Condition::Broken,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::LikeNew => "Like New",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::Broken => "Broken",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sellable brand/model entry from the backend catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub brand: String,
    pub model: String,
    /// Capacities in GB, in the order the backend lists them
    pub storages: Vec<u32>,
    pub base_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Device {
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        storages: Vec<u32>,
        base_price: f64,
    ) -> Self {
        Device {
            brand: brand.into(),
            model: model.into(),
            storages,
            base_price,
            image: None,
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Own image, else the brand's stock image, else a generic phone
    pub fn image_url(&self) -> &str {
        if let Some(image) = self.image.as_deref().filter(|s| !s.is_empty()) {
            return image;
        }
        BRAND_IMAGES
            .iter()
            .find(|(brand, _)| *brand == self.brand)
            .map(|(_, url)| *url)
            .unwrap_or(GENERIC_IMAGE)
    }
}

/// The user's brand/model/storage/condition choice; also the quote request body
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub brand: String,
    pub model: String,
    pub storage: u32,
    pub condition: Condition,
}

/// Priced response to a submitted selection
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub brand: String,
    pub model: String,
    pub storage: u32,
    pub condition: Condition,
    pub offer: f64,
}

impl Quote {
    /// `brand model · storage GB · condition`
    pub fn summary(&self) -> String {
        format!(
            "{} {} · {} GB · {}",
            self.brand, self.model, self.storage, self.condition
        )
    }
}

/// Dollar amount the way the storefront prints it: no trailing `.0`
pub fn format_price(amount: f64) -> String {
    format!("${}", amount)
}

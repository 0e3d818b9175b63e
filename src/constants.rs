//! Application constants
//!
//! Centralized location for storefront copy, image URLs and configuration defaults.

/// Backend used when no base URL is configured
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Device catalog endpoint
pub const DEVICES_PATH: &str = "/api/devices";

/// Quote pricing endpoint
pub const QUOTE_PATH: &str = "/api/quote";

/// Storage shown before a catalog is available
pub const FALLBACK_STORAGE_GB: u32 = 128;

/// Default log file, written next to the working directory
pub const DEFAULT_LOG_FILE: &str = "fonebuyers.log";

/// Environment override for the backend base URL
pub const ENV_BACKEND_URL: &str = "FONEBUYERS_BACKEND_URL";

/// Environment override for the log file
pub const ENV_LOG_FILE: &str = "FONEBUYERS_LOG_FILE";

/// Application name
pub const APP_NAME: &str = "The Fone Buyers";

/// Stock images per brand, used when a device has none
pub const BRAND_IMAGES: &[(&str, &str)] = &[
    (
        "Apple",
        "https://images.unsplash.com/photo-1677050319876-1a6d61dc0f7b?q=80&w=1600&auto=format&fit=crop",
    ),
    (
        "Samsung",
        "https://images.unsplash.com/photo-1610945265561-a34f84a20a9a?q=80&w=1600&auto=format&fit=crop",
    ),
    (
        "Google",
        "https://images.unsplash.com/photo-1609250291996-fdebe6020a3a?q=80&w=1600&auto=format&fit=crop",
    ),
];

pub const GENERIC_IMAGE: &str =
    "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?q=80&w=1600&auto=format&fit=crop";

/// "How it works" steps: (title, description)
pub const HOW_IT_WORKS: &[(&str, &str)] = &[
    ("Choose your device", "Pick your brand, model and storage."),
    ("Get an instant offer", "Transparent pricing based on condition."),
    ("Free pickup", "We collect from your door at a time that suits."),
    ("Paid today", "Fast payout via e-transfer or cash on collection."),
];

/// FAQ entries: (question, answer)
pub const FAQ: &[(&str, &str)] = &[
    (
        "How fast do I get paid?",
        "Most customers are paid the same day their device is collected.",
    ),
    (
        "Do you erase my data?",
        "Yes. We securely wipe every device upon receipt.",
    ),
    (
        "What areas do you cover?",
        "We offer free pickup in most urban areas and fast shipping labels elsewhere.",
    ),
];

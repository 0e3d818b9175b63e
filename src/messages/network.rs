//! Network messages - communication between App and Network layers

use crate::error::FetchError;
use crate::models::{Device, Quote, Selection};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// `GET /api/devices`
    FetchDevices { id: u64 },
    /// `POST /api/quote`
    RequestQuote { id: u64, selection: Selection },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    Devices {
        id: u64,
        result: Result<Vec<Device>, FetchError>,
    },
    Quote {
        id: u64,
        result: Result<Quote, FetchError>,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Devices { id, .. } => *id,
            NetworkResponse::Quote { id, .. } => *id,
        }
    }

    pub fn is_success(&self) -> bool {
        match self {
            NetworkResponse::Devices { result, .. } => result.is_ok(),
            NetworkResponse::Quote { result, .. } => result.is_ok(),
        }
    }
}

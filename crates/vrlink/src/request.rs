//! The launch request handed back to the host for dispatch.

use serde::{Deserialize, Serialize};

/// Action the host should perform with a launch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchAction {
    View,
}

/// Category hints attached to a launch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchCategory {
    Default,
    /// The request may be satisfied by a browser.
    Browsable,
}

/// A platform navigation request.
///
/// Owned by the caller, which performs the actual dispatch. Serializable so
/// hosts can ship it across a bridge boundary as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchRequest {
    pub action: LaunchAction,
    pub categories: Vec<LaunchCategory>,
    /// Explicit target application, set when a native viewer should handle
    /// the content. `None` leaves resolution to the platform.
    pub target_package: Option<String>,
    pub uri: String,
}

//! Actions for the search box and the lookup lifecycle

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::api::FetchError;
use crate::state::WeatherSnapshot;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Weather category =====
    /// Intent: look up the current query unconditionally (Search button, mount)
    WeatherFetch,

    /// Result: lookup `request` succeeded
    WeatherDidLoad {
        request: u64,
        snapshot: WeatherSnapshot,
    },

    /// Result: lookup `request` failed
    WeatherDidFail { request: u64, error: FetchError },

    // ===== Search category =====
    /// Search text edited
    SearchQueryChange(String),

    /// Enter pressed in the search box; ignored when the query is empty
    SearchSubmit,

    /// Move focus between the input and the Search button
    SearchFocusNext,

    // ===== Uncategorized (global) =====
    /// Force a re-render (cursor movement)
    Render,

    /// Exit the application
    Quit,
}

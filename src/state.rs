//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::icons::ConditionIcon;

/// City looked up when the widget first mounts
pub const DEFAULT_CITY: &str = "Chennai";

/// Message shown for any transport or parse failure
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while fetching weather data";

/// Display fields derived from one successful lookup
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherSnapshot {
    /// Degrees Celsius
    pub temperature: f64,
    pub city: String,
    /// ISO country code
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Percent, 0-100
    pub humidity: u8,
    /// Provider unit (m/s for metric)
    pub wind_speed: f64,
    /// Raw provider condition code, e.g. "10n"
    pub condition_code: String,
    pub icon: ConditionIcon,
}

/// Lookup lifecycle. Exactly one applies at a time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum LookupStatus {
    /// Nothing in flight; the snapshot (if any) is displayable
    #[default]
    Idle,
    Loading,
    Failed(String),
    NotFound,
}

impl LookupStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LookupStatus::Loading)
    }
}

/// Which control the Enter key applies to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum SearchFocus {
    #[default]
    Input,
    Button,
}

impl SearchFocus {
    pub fn toggle(&self) -> Self {
        match self {
            SearchFocus::Input => SearchFocus::Button,
            SearchFocus::Button => SearchFocus::Input,
        }
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Pending search text
    #[debug(section = "Search", label = "Query")]
    pub query: String,

    #[debug(section = "Search", label = "Focus", debug_fmt)]
    pub focus: SearchFocus,

    #[debug(section = "Lookup", label = "Status", debug_fmt)]
    pub status: LookupStatus,

    /// Last successful result; kept (hidden) across failed lookups
    #[debug(section = "Lookup", label = "Snapshot", debug_fmt)]
    pub snapshot: Option<WeatherSnapshot>,

    /// Token of the most recently issued request
    #[debug(section = "Lookup", label = "Request")]
    pub latest_request: u64,
}

impl AppState {
    /// Create state with the search box seeded with `query`
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            focus: SearchFocus::default(),
            status: LookupStatus::Idle,
            snapshot: None,
            latest_request: 0,
        }
    }

    /// The snapshot, but only while it may be shown
    pub fn visible_snapshot(&self) -> Option<&WeatherSnapshot> {
        match self.status {
            LookupStatus::Idle => self.snapshot.as_ref(),
            _ => None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_CITY)
    }
}

//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, LookupStatus, GENERIC_ERROR_MESSAGE};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Weather actions =====
        Action::WeatherFetch => begin_lookup(state),

        Action::WeatherDidLoad { request, snapshot } => {
            if request != state.latest_request {
                return DispatchResult::unchanged();
            }
            state.snapshot = Some(snapshot);
            state.status = LookupStatus::Idle;
            DispatchResult::changed()
        }

        Action::WeatherDidFail { request, error } => {
            if request != state.latest_request {
                return DispatchResult::unchanged();
            }
            // The previous snapshot stays in state but is no longer shown.
            state.status = if error.is_not_found() {
                LookupStatus::NotFound
            } else {
                LookupStatus::Failed(GENERIC_ERROR_MESSAGE.to_string())
            };
            DispatchResult::changed()
        }

        // ===== Search actions =====
        Action::SearchQueryChange(query) => {
            if query == state.query {
                return DispatchResult::unchanged();
            }
            state.query = query;
            DispatchResult::changed()
        }

        Action::SearchSubmit => {
            if state.query.trim().is_empty() {
                DispatchResult::unchanged()
            } else {
                begin_lookup(state)
            }
        }

        Action::SearchFocusNext => {
            state.focus = state.focus.toggle();
            DispatchResult::changed()
        }

        // ===== Global actions =====
        Action::Render => DispatchResult::changed(),

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Issue a new request token and ask for the fetch
fn begin_lookup(state: &mut AppState) -> DispatchResult<Effect> {
    state.latest_request = state.latest_request.wrapping_add(1);
    state.status = LookupStatus::Loading;
    DispatchResult::changed_with(Effect::FetchWeather {
        request: state.latest_request,
        query: state.query.trim().to_string(),
    })
}

//! Action and state tests using EffectStore and TestHarness

use tui_dispatch::testing::*;
use tui_dispatch::{assert_emitted, assert_not_emitted, EffectStore, NumericComponentId};
use weather_widget::{
    action::Action,
    api::FetchError,
    components::{Component, WeatherDisplay, WeatherDisplayProps},
    effect::Effect,
    reducer::reducer,
    state::{AppState, LookupStatus, SearchFocus, WeatherSnapshot, DEFAULT_CITY},
};

#[test]
fn test_initial_fetch_uses_seeded_city() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    assert_eq!(store.state().query, DEFAULT_CITY);

    // The runtime dispatches WeatherFetch once on mount
    let result = store.dispatch(Action::WeatherFetch);

    assert!(result.changed);
    assert!(store.state().status.is_loading());
    assert_eq!(
        result.effects,
        vec![Effect::FetchWeather {
            request: 1,
            query: DEFAULT_CITY.into()
        }]
    );
}

#[test]
fn test_typed_query_is_used_on_submit() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    store.dispatch(Action::SearchQueryChange("Reykjavik".into()));
    let result = store.dispatch(Action::SearchSubmit);

    assert!(matches!(
        &result.effects[0],
        Effect::FetchWeather { query, .. } if query == "Reykjavik"
    ));
}

#[test]
fn test_empty_submit_via_keyboard_issues_no_request() {
    let mut harness = TestHarness::<AppState, Action>::new(AppState::new(""));
    let mut component = WeatherDisplay::new();

    let actions = harness.send_keys::<NumericComponentId, _, _>("enter", |state, event| {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });
    actions.assert_empty();

    // Even if a submit reaches the store, nothing is requested
    let mut store = EffectStore::new(AppState::new(""), reducer);
    let result = store.dispatch(Action::SearchSubmit);
    assert!(result.effects.is_empty());
    assert_eq!(store.state().status, LookupStatus::Idle);
}

#[test]
fn test_keyboard_submit_with_query() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = WeatherDisplay::new();

    let actions = harness.send_keys::<NumericComponentId, _, _>("enter", |state, event| {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_count(1);
    actions.assert_first(Action::SearchSubmit);
}

#[test]
fn test_button_focus_then_enter_fetches() {
    let state = AppState {
        focus: SearchFocus::Button,
        ..AppState::new("")
    };
    let mut harness = TestHarness::<AppState, Action>::new(state);
    let mut component = WeatherDisplay::new();

    let actions = harness.send_keys::<NumericComponentId, _, _>("enter", |state, event| {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_first(Action::WeatherFetch);
}

#[test]
fn test_action_categories() {
    let did_load = Action::WeatherDidLoad {
        request: 1,
        snapshot: WeatherSnapshot::default(),
    };
    let quit = Action::Quit;

    assert_eq!(did_load.category(), Some("weather_did"));
    assert_eq!(quit.category(), None);
    assert!(did_load.is_weather_did());
}

#[test]
fn test_assert_emitted_macro() {
    let actions = vec![
        Action::WeatherFetch,
        Action::WeatherDidFail {
            request: 1,
            error: FetchError::NotFound("Atlantis".into()),
        },
    ];

    assert_emitted!(actions, Action::WeatherFetch);
    assert_emitted!(actions, Action::WeatherDidFail { .. });
    assert_not_emitted!(actions, Action::Quit);
    assert_not_emitted!(actions, Action::WeatherDidLoad { .. });
}

#[test]
fn test_only_latest_response_applies() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    store.dispatch(Action::SearchQueryChange("Paris".into()));
    store.dispatch(Action::SearchSubmit); // request 1
    store.dispatch(Action::SearchQueryChange("Rome".into()));
    store.dispatch(Action::SearchSubmit); // request 2

    let rome = WeatherSnapshot {
        city: "Rome".into(),
        ..Default::default()
    };
    let paris = WeatherSnapshot {
        city: "Paris".into(),
        ..Default::default()
    };

    // Newer response lands first, older one afterwards
    store.dispatch(Action::WeatherDidLoad {
        request: 2,
        snapshot: rome.clone(),
    });
    let late = store.dispatch(Action::WeatherDidLoad {
        request: 1,
        snapshot: paris,
    });

    assert!(!late.changed);
    assert_eq!(store.state().visible_snapshot(), Some(&rome));
}

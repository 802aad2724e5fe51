//! Store + component + render flows using EffectStoreTestHarness

use tui_dispatch::testing::*;
use weather_widget::{
    action::Action,
    api::FetchError,
    components::{Component, WeatherDisplay, WeatherDisplayProps, NOT_FOUND_MESSAGE},
    effect::Effect,
    icons::ConditionIcon,
    reducer::reducer,
    state::{AppState, LookupStatus, WeatherSnapshot, GENERIC_ERROR_MESSAGE},
};

fn mock_snapshot() -> WeatherSnapshot {
    WeatherSnapshot {
        temperature: 29.99,
        city: "Chennai".into(),
        country: "IN".into(),
        latitude: 13.0878,
        longitude: 80.2785,
        humidity: 79,
        wind_speed: 4.12,
        condition_code: "01d".into(),
        icon: ConditionIcon::Sun,
    }
}

/// Render the whole widget from the harness state
macro_rules! render_widget {
    ($harness:expr) => {{
        let mut component = WeatherDisplay::new();
        $harness.render_plain(60, 30, |frame, area, state| {
            let props = WeatherDisplayProps {
                state,
                is_focused: true,
            };
            component.render(frame, area, props);
        })
    }};
}

#[test]
fn test_fetch_flow_with_harness() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::WeatherFetch);
    harness.assert_state(|s| s.status.is_loading());

    let effects = harness.drain_effects();
    effects.effects_count(1);
    effects.effects_first_matches(
        |e| matches!(e, Effect::FetchWeather { request: 1, query } if query == "Chennai"),
    );

    harness.complete_action(Action::WeatherDidLoad {
        request: 1,
        snapshot: mock_snapshot(),
    });
    let (changed, total) = harness.process_emitted();

    assert_eq!(total, 1);
    assert_eq!(changed, 1);
    harness.assert_state(|s| s.status == LookupStatus::Idle);
    harness.assert_state(|s| s.visible_snapshot() == Some(&mock_snapshot()));
}

#[test]
fn test_not_found_flow_hides_card() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::WeatherFetch);
    harness.complete_action(Action::WeatherDidLoad {
        request: 1,
        snapshot: mock_snapshot(),
    });
    harness.process_emitted();

    harness.dispatch_collect(Action::SearchQueryChange("Atlantis".into()));
    harness.dispatch_collect(Action::SearchSubmit);
    harness.complete_action(Action::WeatherDidFail {
        request: 2,
        error: FetchError::NotFound("Atlantis".into()),
    });
    harness.process_emitted();

    harness.assert_state(|s| s.status == LookupStatus::NotFound);
    // Stale data is retained but not shown
    harness.assert_state(|s| s.snapshot == Some(mock_snapshot()));
    // The query survives the failed lookup
    harness.assert_state(|s| s.query == "Atlantis");

    let output = render_widget!(harness);
    assert!(output.contains(NOT_FOUND_MESSAGE), "{output}");
    assert!(!output.contains("Humidity"), "no card expected:\n{output}");
}

#[test]
fn test_network_failure_flow_shows_generic_error() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::WeatherFetch);
    harness.complete_action(Action::WeatherDidFail {
        request: 1,
        error: FetchError::Request("connection refused".into()),
    });
    harness.process_emitted();

    harness.assert_state(|s| s.status == LookupStatus::Failed(GENERIC_ERROR_MESSAGE.into()));

    let output = render_widget!(harness);
    assert!(output.contains(GENERIC_ERROR_MESSAGE), "{output}");
    assert!(!output.contains("connection refused"));
    assert!(!output.contains("Humidity"));
}

#[test]
fn test_new_search_after_error_clears_error() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::WeatherFetch);
    harness.complete_action(Action::WeatherDidFail {
        request: 1,
        error: FetchError::Parse("expected value".into()),
    });
    harness.process_emitted();

    harness.dispatch_collect(Action::SearchSubmit);
    harness.assert_state(|s| s.status.is_loading());

    harness.complete_action(Action::WeatherDidLoad {
        request: 2,
        snapshot: mock_snapshot(),
    });
    harness.process_emitted();

    let output = render_widget!(harness);
    assert!(!output.contains(GENERIC_ERROR_MESSAGE));
    assert!(output.contains("CHENNAI"), "{output}");
}

#[test]
fn test_keyboard_typing_then_enter() {
    let mut harness = EffectStoreTestHarness::new(AppState::new(""), reducer);
    let mut component = WeatherDisplay::new();

    let actions =
        harness.send_keys::<tui_dispatch::NumericComponentId, _, _>("x", |state, event| {
            let props = WeatherDisplayProps {
                state,
                is_focused: true,
            };
            component
                .handle_event(&event.kind, props)
                .into_iter()
                .collect::<Vec<_>>()
        });
    for action in actions {
        harness.dispatch_collect(action);
    }
    harness.assert_state(|s| s.query == "x");

    harness.dispatch_collect(Action::SearchSubmit);
    let effects = harness.drain_effects();
    effects.effects_first_matches(
        |e| matches!(e, Effect::FetchWeather { query, .. } if query == "x"),
    );
}

#[test]
fn test_effect_assertions() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    let effects = harness.drain_effects();
    effects.effects_empty();

    harness.dispatch_collect(Action::SearchFocusNext);
    harness.dispatch_collect(Action::SearchQueryChange("Oslo".into()));
    let effects = harness.drain_effects();
    effects.effects_empty();

    harness.dispatch_collect(Action::WeatherFetch);
    let effects = harness.drain_effects();
    effects.effects_not_empty();
    effects.effects_all_match(|e| matches!(e, Effect::FetchWeather { .. }));
}

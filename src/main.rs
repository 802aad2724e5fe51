//! Weather widget - look up current weather for a city from the terminal

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};
use weather_widget::action::Action;
use weather_widget::api::WeatherClient;
use weather_widget::components::{Component, WeatherDisplay, WeatherDisplayProps};
use weather_widget::config::{ProviderConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use weather_widget::effect::Effect;
use weather_widget::logging;
use weather_widget::reducer::reducer;
use weather_widget::state::{AppState, DEFAULT_CITY};

/// Current weather for a city, in the terminal
#[derive(Parser, Debug)]
#[command(name = "weather-widget")]
#[command(about = "Look up current weather for a city (OpenWeather)")]
struct Args {
    /// City looked up on startup
    #[arg(long, short, default_value = DEFAULT_CITY)]
    city: String,

    /// OpenWeather API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Current-weather endpoint
    #[arg(long, env = "OPENWEATHER_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Request timeout in seconds (minimum 1)
    #[arg(
        long,
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,

    /// Append logs to this file (filter with RUST_LOG)
    #[arg(long, env = "WEATHER_WIDGET_LOG")]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum WidgetComponentId {
    Display,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum WidgetContext {
    Main,
}

impl EventRoutingState<WidgetComponentId, WidgetContext> for AppState {
    fn focused(&self) -> Option<WidgetComponentId> {
        Some(WidgetComponentId::Display)
    }

    fn modal(&self) -> Option<WidgetComponentId> {
        None
    }

    fn binding_context(&self, _id: WidgetComponentId) -> WidgetContext {
        WidgetContext::Main
    }

    fn default_context(&self) -> WidgetContext {
        WidgetContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        city,
        api_key,
        endpoint,
        timeout,
        log_file,
        debug: debug_args,
    } = Args::parse();

    if let Some(path) = &log_file {
        logging::init_file_logging(path)?;
    }

    let client = match ProviderConfig::new(endpoint, api_key, Duration::from_secs(timeout))
        .and_then(WeatherClient::new)
    {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!(config = ?client.config(), city = %city, "starting weather widget");

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(move || async move {
            Ok::<AppState, io::Error>(AppState::new(city))
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, &client, replay_actions).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

struct WidgetUi {
    display: WeatherDisplay,
}

impl WidgetUi {
    fn new() -> Self {
        Self {
            display: WeatherDisplay::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<WidgetComponentId>,
    ) {
        event_ctx.set_component_area(WidgetComponentId::Display, area);

        let props = WeatherDisplayProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.display.render(frame, area, props);
    }

    fn handle_display_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self
            .display
            .handle_event(event, props)
            .into_iter()
            .collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    client: &WeatherClient,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(WidgetUi::new()));
    let mut bus: EventBus<AppState, Action, WidgetComponentId, WidgetContext> = EventBus::new();
    let keybindings: Keybindings<WidgetContext> = Keybindings::new();

    let ui_display = Rc::clone(&ui);
    bus.register(WidgetComponentId::Display, move |event, state| {
        ui_display
            .borrow_mut()
            .handle_display_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    // The initial WeatherFetch is the on-mount lookup of the seeded city.
    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::WeatherFetch),
            Some(Action::Quit),
            |_runtime| {},
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            |effect, ctx| handle_effect(effect, ctx, client),
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, client: &WeatherClient) {
    match effect {
        Effect::FetchWeather { request, query } => {
            let client = client.clone();
            // One task key: a newer lookup replaces the one in flight.
            ctx.tasks().spawn("weather", async move {
                match client.search(&query).await {
                    Ok(snapshot) => {
                        tracing::info!(request, city = %snapshot.city, "weather loaded");
                        Action::WeatherDidLoad { request, snapshot }
                    }
                    Err(error) if error.is_not_found() => {
                        tracing::info!(request, query = %query, "city not found");
                        Action::WeatherDidFail { request, error }
                    }
                    Err(error) => {
                        tracing::warn!(request, query = %query, %error, "weather lookup failed");
                        Action::WeatherDidFail { request, error }
                    }
                }
            });
        }
    }
}

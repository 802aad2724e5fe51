use ratatui::layout::{Constraint, Flex, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{Component, SearchBar, SearchBarProps, WeatherCard, WeatherCardProps};
use crate::action::Action;
use crate::state::{AppState, LookupStatus, WeatherSnapshot};

pub const LOADING_MESSAGE: &str = "Loading....";
pub const NOT_FOUND_MESSAGE: &str = "City Not Found";

/// Props for WeatherDisplay - read-only view of state
pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole widget: search bar, result region and key hints
#[derive(Default)]
pub struct WeatherDisplay {
    search: SearchBar,
}

impl WeatherDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let search_props = SearchBarProps {
            query: &props.state.query,
            focus: props.state.focus,
            is_focused: props.is_focused,
            on_query_change: Action::SearchQueryChange,
        };
        self.search
            .handle_event(event, search_props)
            .into_iter()
            .collect::<Vec<_>>()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherDisplayProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Search bar
            Constraint::Min(1),    // Result region
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        self.search.render(
            frame,
            chunks[0],
            SearchBarProps {
                query: &props.state.query,
                focus: props.state.focus,
                is_focused: props.is_focused,
                on_query_change: Action::SearchQueryChange,
            },
        );

        match ResultView::from_state(props.state) {
            ResultView::Card(snapshot) => {
                let mut card = WeatherCard;
                card.render(frame, chunks[1], WeatherCardProps { snapshot });
            }
            ResultView::Loading => render_message(
                frame,
                chunks[1],
                Line::from(Span::styled(
                    LOADING_MESSAGE,
                    Style::default().fg(Color::DarkGray),
                )),
            ),
            ResultView::Failed(message) => render_message(
                frame,
                chunks[1],
                Line::from(Span::styled(
                    message.to_string(),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
            ),
            ResultView::NotFound => render_message(
                frame,
                chunks[1],
                Line::from(Span::styled(
                    NOT_FOUND_MESSAGE,
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                )),
            ),
            ResultView::Empty => render_message(
                frame,
                chunks[1],
                Line::from(vec![
                    Span::styled("Type a city and press ", Style::default().fg(Color::DarkGray)),
                    Span::styled("Enter", Style::default().fg(Color::Cyan).bold()),
                ]),
            ),
        }

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[2],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("enter", "search"),
                    StatusBarHint::new("tab", "button"),
                    StatusBarHint::new("f5", "refresh"),
                    StatusBarHint::new("esc", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

fn render_message(frame: &mut Frame, area: Rect, line: Line<'_>) {
    let rows = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .split(area);
    frame.render_widget(Paragraph::new(line.centered()), rows[0]);
}

/// Which of the mutually exclusive blocks the result region shows
enum ResultView<'a> {
    Card(&'a WeatherSnapshot),
    Loading,
    Failed(&'a str),
    NotFound,
    Empty,
}

impl<'a> ResultView<'a> {
    fn from_state(state: &'a AppState) -> Self {
        match &state.status {
            LookupStatus::Loading => ResultView::Loading,
            LookupStatus::Failed(message) => ResultView::Failed(message),
            LookupStatus::NotFound => ResultView::NotFound,
            LookupStatus::Idle => match state.visible_snapshot() {
                Some(snapshot) => ResultView::Card(snapshot),
                None => ResultView::Empty,
            },
        }
    }
}

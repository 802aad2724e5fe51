use crossterm::event::{KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph},
    Frame,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::Component;
use crate::action::Action;
use crate::state::SearchFocus;

const PLACEHOLDER: &str = "Search...";
const BUTTON_WIDTH: u16 = 12;

/// City input plus the Search button
pub struct SearchBar {
    input: TextInput,
}

pub struct SearchBarProps<'a> {
    pub query: &'a str,
    pub focus: SearchFocus,
    pub is_focused: bool,
    pub on_query_change: fn(String) -> Action,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
        }
    }
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }
}

fn input_style() -> TextInputStyle {
    TextInputStyle {
        base: BaseStyle {
            border: None,
            padding: Padding::new(0, 1, 0, 1),
            bg: None,
            fg: None,
        },
        placeholder_style: None,
        cursor_style: None,
    }
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };
        if key.kind != KeyEventKind::Press {
            return Vec::new();
        }

        match key.code {
            KeyCode::Esc => return vec![Action::Quit],
            KeyCode::Tab | KeyCode::BackTab => return vec![Action::SearchFocusNext],
            // F5 presses the Search button from either control
            KeyCode::F(5) => return vec![Action::WeatherFetch],
            KeyCode::Enter => {
                return match props.focus {
                    SearchFocus::Button => vec![Action::WeatherFetch],
                    SearchFocus::Input if props.query.trim().is_empty() => Vec::new(),
                    SearchFocus::Input => vec![Action::SearchSubmit],
                };
            }
            _ => {}
        }

        if props.focus == SearchFocus::Button {
            return match key.code {
                KeyCode::Char(' ') => vec![Action::WeatherFetch],
                _ => Vec::new(),
            };
        }

        let input_props = TextInputProps {
            value: props.query,
            placeholder: PLACEHOLDER,
            is_focused: true,
            style: input_style(),
            on_change: props.on_query_change,
            on_submit: |_| Action::SearchSubmit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input
            .handle_event(event, input_props)
            .into_iter()
            .collect::<Vec<_>>()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::horizontal([
            Constraint::Min(10),              // Input
            Constraint::Length(BUTTON_WIDTH), // Button
        ])
        .split(area);

        let input_focused = props.is_focused && props.focus == SearchFocus::Input;
        let button_focused = props.is_focused && props.focus == SearchFocus::Button;

        let border = |focused: bool| {
            if focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            }
        };

        let input_block = Block::bordered()
            .title(" City ")
            .border_style(border(input_focused));
        let input_area = input_block.inner(chunks[0]);
        frame.render_widget(input_block, chunks[0]);

        let input_props = TextInputProps {
            value: props.query,
            placeholder: PLACEHOLDER,
            is_focused: input_focused,
            style: input_style(),
            on_change: props.on_query_change,
            on_submit: |_| Action::SearchSubmit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input.render(frame, input_area, input_props);

        let button_style = if button_focused {
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Blue)
        };
        let button = Paragraph::new("Search")
            .centered()
            .style(button_style)
            .block(Block::bordered().border_style(border(button_focused)));
        frame.render_widget(button, chunks[1]);
    }
}

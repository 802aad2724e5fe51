use artbox::{
    fonts, integrations::ratatui::ArtBox, Alignment as ArtAlignment, Color as ArtColor, Fill,
    LinearGradient, Renderer,
};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::icons;
use crate::state::WeatherSnapshot;

/// Rows the FIGlet temperature may use (terminus needs 6, miniwi 4)
const TEMP_CAP: u16 = 6;

/// Snapshot card: icon, temperature, place, coordinates, humidity and wind
pub struct WeatherCard;

pub struct WeatherCardProps<'a> {
    pub snapshot: &'a WeatherSnapshot,
}

impl Component<Action> for WeatherCard {
    type Props<'a> = WeatherCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let snapshot = props.snapshot;
        let chunks = Layout::vertical([
            Constraint::Length(icons::icon_height()),
            Constraint::Length(1), // Spacer
            Constraint::Max(TEMP_CAP),
            Constraint::Length(1), // City
            Constraint::Length(1), // Country
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Latitude / Longitude
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Humidity / Wind
        ])
        .flex(Flex::Center)
        .split(area);

        frame.render_widget(
            Paragraph::new(icons::icon_art(snapshot.icon)).alignment(Alignment::Center),
            chunks[0],
        );

        if !chunks[2].is_empty() {
            let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
                .with_plain_fallback()
                .with_alignment(ArtAlignment::Center)
                .with_fill(temperature_gradient(snapshot.temperature));
            let temp_text = format_temperature(snapshot.temperature);
            frame.render_widget(ArtBox::new(&renderer, &temp_text), chunks[2]);
        }

        let city = Line::from(Span::styled(
            snapshot.city.to_uppercase(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .centered();
        frame.render_widget(Paragraph::new(city), chunks[3]);

        let country = Line::from(Span::styled(
            snapshot.country.clone(),
            Style::default().fg(Color::Green),
        ))
        .centered();
        frame.render_widget(Paragraph::new(country), chunks[4]);

        render_pair(
            frame,
            chunks[6],
            [
                Stat::label_first("Latitude", snapshot.latitude.to_string()),
                Stat::label_first("Longitude", snapshot.longitude.to_string()),
            ],
        );

        render_pair(
            frame,
            chunks[8],
            [
                Stat::value_first("Humidity", format!("{} %", snapshot.humidity)),
                Stat::value_first("Wind Speed", format!("{} m/s", snapshot.wind_speed)),
            ],
        );
    }
}

/// Temperature as shown on the card; the number passes through unformatted
pub fn format_temperature(celsius: f64) -> String {
    format!("{celsius}°C")
}

struct Stat {
    label: &'static str,
    value: String,
    label_on_top: bool,
}

impl Stat {
    fn label_first(label: &'static str, value: String) -> Self {
        Self {
            label,
            value,
            label_on_top: true,
        }
    }

    fn value_first(label: &'static str, value: String) -> Self {
        Self {
            label,
            value,
            label_on_top: false,
        }
    }

    fn lines(self) -> Vec<Line<'static>> {
        let label = Line::from(Span::styled(self.label, Style::default().fg(Color::Gray)));
        let value = Line::from(Span::styled(
            self.value,
            Style::default().add_modifier(Modifier::BOLD),
        ));
        if self.label_on_top {
            vec![label, value]
        } else {
            vec![value, label]
        }
    }
}

fn render_pair(frame: &mut Frame, area: Rect, stats: [Stat; 2]) {
    let columns =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);
    for (stat, column) in stats.into_iter().zip(columns.iter()) {
        frame.render_widget(
            Paragraph::new(stat.lines()).alignment(Alignment::Center),
            *column,
        );
    }
}

fn temperature_gradient(celsius: f64) -> Fill {
    let (start, end) = match celsius {
        t if t < 0.0 => (
            ArtColor::rgb(150, 200, 255),
            ArtColor::rgb(200, 230, 255),
        ),
        t if t < 15.0 => (
            ArtColor::rgb(100, 180, 255),
            ArtColor::rgb(150, 220, 200),
        ),
        t if t < 25.0 => (
            ArtColor::rgb(100, 200, 150),
            ArtColor::rgb(255, 220, 100),
        ),
        t if t < 35.0 => (
            ArtColor::rgb(255, 180, 80),
            ArtColor::rgb(255, 120, 80),
        ),
        _ => (
            ArtColor::rgb(255, 100, 80),
            ArtColor::rgb(255, 60, 60),
        ),
    };
    Fill::Linear(LinearGradient::horizontal(start, end))
}

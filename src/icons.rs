//! Condition icons: provider code lookup and the terminal art for each icon
//!
//! The provider reports conditions as short codes ("01d", "10n", ...). The
//! widget only distinguishes two icons, so the codes collapse onto `Sun` or
//! `Cloud` through a fixed table. Codes missing from the table fall back to
//! `Sun`.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Icon shown on the snapshot card
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ConditionIcon {
    #[default]
    Sun,
    Cloud,
}

/// Provider condition code → icon.
///
/// "13n" and "50n" map to `Sun` while their daytime counterparts map to
/// `Cloud`. The table is kept exactly as recorded; see the tests.
pub const ICON_TABLE: [(&str, ConditionIcon); 16] = [
    ("01d", ConditionIcon::Sun),
    ("01n", ConditionIcon::Sun),
    ("02d", ConditionIcon::Sun),
    ("02n", ConditionIcon::Sun),
    ("03d", ConditionIcon::Cloud),
    ("03n", ConditionIcon::Cloud),
    ("04d", ConditionIcon::Cloud),
    ("04n", ConditionIcon::Cloud),
    ("09d", ConditionIcon::Sun),
    ("09n", ConditionIcon::Sun),
    ("10d", ConditionIcon::Cloud),
    ("10n", ConditionIcon::Cloud),
    ("13d", ConditionIcon::Cloud),
    ("13n", ConditionIcon::Sun),
    ("50d", ConditionIcon::Cloud),
    ("50n", ConditionIcon::Sun),
];

/// Look up the icon for a provider condition code
pub fn icon_for_code(code: &str) -> ConditionIcon {
    ICON_TABLE
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, icon)| *icon)
        .unwrap_or_default()
}

// ============================================================================
// Art - layered so that spaces in an upper layer let the lower one show
// ============================================================================

mod art {
    pub const SUN_RAYS: &str = "    \\   |   /
      .---.
  -- (     ) --
      `---'
    /   |   \\";

    pub const SUN_CORE: &str = "
      .---.
     (     )
      `---'
";

    pub const CLOUD_BACK: &str = "       .--.
    .-(    ).
   (___.__)__)
";

    pub const CLOUD_FRONT: &str = "
         .--.
      .-(    ).
     (___.__)__)";
}

struct ArtLayer {
    content: &'static str,
    color: Color,
}

/// Composite layers into Text; the last layer is drawn on top
fn composite_layers(layers: &[ArtLayer]) -> Text<'static> {
    let layer_lines: Vec<Vec<&str>> = layers.iter().map(|l| l.content.lines().collect()).collect();

    let max_lines = layer_lines.iter().map(|l| l.len()).max().unwrap_or(0);
    let max_width = layer_lines
        .iter()
        .flat_map(|lines| lines.iter())
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    let mut result_lines = Vec::with_capacity(max_lines);
    for line_idx in 0..max_lines {
        let mut spans = Vec::with_capacity(max_width);
        for col_idx in 0..max_width {
            let mut found_char = ' ';
            let mut found_color = Color::Reset;

            for (layer_idx, layer) in layers.iter().enumerate().rev() {
                let ch = layer_lines[layer_idx]
                    .get(line_idx)
                    .and_then(|line| line.chars().nth(col_idx));
                if let Some(ch) = ch.filter(|c| *c != ' ') {
                    found_char = ch;
                    found_color = layer.color;
                    break;
                }
            }

            spans.push(Span::styled(
                found_char.to_string(),
                Style::default().fg(found_color),
            ));
        }
        result_lines.push(Line::from(spans));
    }

    Text::from(result_lines)
}

/// Terminal art for an icon
pub fn icon_art(icon: ConditionIcon) -> Text<'static> {
    let layers = match icon {
        ConditionIcon::Sun => [
            ArtLayer {
                content: art::SUN_RAYS,
                color: Color::Rgb(255, 200, 60),
            },
            ArtLayer {
                content: art::SUN_CORE,
                color: Color::Rgb(255, 150, 40),
            },
        ],
        ConditionIcon::Cloud => [
            ArtLayer {
                content: art::CLOUD_BACK,
                color: Color::DarkGray,
            },
            ArtLayer {
                content: art::CLOUD_FRONT,
                color: Color::Gray,
            },
        ],
    };
    composite_layers(&layers)
}

/// Height of the tallest icon, used by the card layout
pub fn icon_height() -> u16 {
    [ConditionIcon::Sun, ConditionIcon::Cloud]
        .into_iter()
        .map(|icon| icon_art(icon).lines.len() as u16)
        .max()
        .unwrap_or(1)
}

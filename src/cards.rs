//! Card grid built from a `CountryRecord`.
//!
//! - One card per displayed field, always in the same order
//! - Absent nested fields (flag, coat of arms, map, start of week, status) render a
//!   "Not available" fallback instead of failing
//! - List-valued fields render as a comma-joined string, empty when absent
//! - `render_grid` lays cards out as a plain-text table for terminals

use crate::format::{format_population, join_list, shout};
use crate::models::CountryRecord;

/// Body shown for any card whose field the API did not send.
pub const NOT_AVAILABLE: &str = "Not available";

/// Upper bound for a text-grid cell, in characters.
const CELL_MAX: usize = 36;

#[derive(Debug, Clone, PartialEq)]
pub enum CardBody {
    Text(String),
    Image { url: String, alt: String },
    Link { url: String, label: String },
    Missing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: &'static str,
    pub body: CardBody,
}

impl Card {
    fn text(title: &'static str, value: Option<String>) -> Self {
        let body = value.map(CardBody::Text).unwrap_or(CardBody::Missing);
        Self { title, body }
    }

    /// Plain-text form of the body (URLs for images and links).
    pub fn display_text(&self) -> String {
        match &self.body {
            CardBody::Text(s) => s.clone(),
            CardBody::Image { url, .. } => url.clone(),
            CardBody::Link { url, .. } => url.clone(),
            CardBody::Missing => NOT_AVAILABLE.to_string(),
        }
    }
}

/// Build the card grid for `record`. Population grouping follows `locale_tag`.
///
/// Callers decide *whether* to show cards (see `CountryLookup::view`); this only decides *what*.
pub fn build_cards(record: &CountryRecord, locale_tag: &str) -> Vec<Card> {
    let common = record.common_name().map(str::to_string);

    let flag = match record.flag_png() {
        Some(url) => CardBody::Image {
            url: url.to_string(),
            alt: record
                .flags
                .as_ref()
                .and_then(|f| f.alt.clone())
                .unwrap_or_else(|| format!("{} flag", common.as_deref().unwrap_or("Country"))),
        },
        None => CardBody::Missing,
    };

    let coat_of_arms = match record.coat_of_arms_png() {
        Some(url) => CardBody::Image {
            url: url.to_string(),
            alt: format!("{} coat of arms", common.as_deref().unwrap_or("Country")),
        },
        None => CardBody::Missing,
    };

    let map_view = match record.google_maps() {
        Some(url) => CardBody::Link {
            url: url.to_string(),
            label: "Click to check Map View".to_string(),
        },
        None => CardBody::Missing,
    };

    vec![
        Card { title: "Country Flag", body: flag },
        Card::text("Country Name", common.clone()),
        Card::text("Official Name", record.official_name().map(str::to_string)),
        Card::text("Capital Name", Some(join_list(record.capital.as_deref()))),
        Card { title: "Coat Of Arms", body: coat_of_arms },
        Card::text("Language", Some(join_list(record.language_names().as_deref()))),
        Card::text("Currency", Some(join_list(record.currency_codes().as_deref()))),
        Card::text("Continent", Some(join_list(record.continents.as_deref()))),
        Card::text("Sub Region", record.subregion.clone()),
        Card::text("Start of Week", record.start_of_week.as_deref().map(shout)),
        Card::text("Status", record.status.as_deref().map(shout)),
        Card { title: "Map View", body: map_view },
        Card::text(
            "Population",
            record.population.map(|p| format_population(p, locale_tag)),
        ),
        Card::text("Border Share", Some(join_list(record.borders.as_deref()))),
    ]
}

fn wrap(s: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars.chunks(width).map(|c| c.iter().collect()).collect()
}

/// Render cards as a text table with `columns` cards per row.
pub fn render_grid(cards: &[Card], columns: usize) -> String {
    if cards.is_empty() {
        return String::new();
    }
    let columns = columns.max(1);
    let width = cards
        .iter()
        .map(|c| (c.title.chars().count() + 1).max(c.display_text().chars().count()))
        .max()
        .unwrap_or(0)
        .clamp(12, CELL_MAX);

    let mut out = String::new();
    for row in cards.chunks(columns) {
        let border = format!("+{}\n", format!("{}+", "-".repeat(width + 2)).repeat(row.len()));
        out.push_str(&border);

        let bodies: Vec<Vec<String>> = row.iter().map(|c| wrap(&c.display_text(), width)).collect();
        let height = bodies.iter().map(Vec::len).max().unwrap_or(1);

        out.push('|');
        for card in row {
            out.push_str(&format!(" {:<width$} |", format!("{}:", card.title)));
        }
        out.push('\n');

        for line in 0..height {
            out.push('|');
            for body in &bodies {
                let text = body.get(line).map(String::as_str).unwrap_or("");
                out.push_str(&format!(" {:<width$} |", text));
            }
            out.push('\n');
        }
        out.push_str(&border);
    }
    out
}

//! Field formatting shared by the card builder and the CLI.

use num_format::{Locale, ToFormattedString};

/// Map a user-provided locale tag to a `num_format::Locale`.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> &'static Locale {
    match tag.to_lowercase().replace('-', "_").as_str() {
        "de" | "de_de" | "german" => &Locale::de,
        "fr" | "fr_fr" => &Locale::fr,
        "es" | "es_es" => &Locale::es,
        "it" | "it_it" => &Locale::it,
        "pt" | "pt_pt" | "pt_br" => &Locale::pt,
        "nl" | "nl_nl" => &Locale::nl,
        _ => &Locale::en, // default
    }
}

/// Join a list-valued field for display: `["IND","AFG"]` -> `"IND,AFG"`.
/// Absent lists format to an empty string.
pub fn join_list(items: Option<&[String]>) -> String {
    match items {
        Some(items) => items.join(","),
        None => String::new(),
    }
}

/// Population with the locale's thousands grouping (`220892340` -> `220,892,340` for `en`).
pub fn format_population(population: u64, locale_tag: &str) -> String {
    population.to_formatted_string(map_locale(locale_tag))
}

/// Upper-cased display form of a text field.
pub fn shout(value: &str) -> String {
    value.to_uppercase()
}

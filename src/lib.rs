//! country_lookup
//!
//! A lightweight Rust library for looking up country metadata from the
//! REST Countries API and presenting it as a grid of informational cards.
//! Pairs with the `country` CLI and the `country-gui` desktop widget.
//!
//! ### Features
//! - Fetch the first country matching a code or name
//! - Tolerant data model: every field optional, API key order preserved
//! - Card grid with locale-aware population and fallbacks for missing fields
//! - Lookup state machine (idle / loading / error) where the latest query wins
//! - Save a record as JSON or its cards as CSV
//!
//! ### Example
//! ```no_run
//! use country_lookup::{Client, CountryLookup, lookup};
//!
//! let client = Client::default();
//! let mut widget = CountryLookup::new();
//! if let Some(ticket) = widget.on_query_change("pk") {
//!     widget.resolve(lookup::perform(&client, ticket));
//! }
//! let view = widget.view("en");
//! print!("{}", country_lookup::cards::render_grid(&view.cards, 3));
//! ```

pub mod api;
pub mod cards;
pub mod format;
pub mod lookup;
pub mod models;
pub mod storage;

pub use api::{Client, CountrySource, LookupError};
pub use lookup::{CountryLookup, RequestState};
pub use models::CountryRecord;

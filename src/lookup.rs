//! The country lookup widget as a host-independent state machine.
//!
//! The host (GUI frame loop, CLI prompt, tests) feeds input changes through
//! [`CountryLookup::on_query_change`], performs the returned [`Ticket`] however it
//! likes, and hands the outcome back via [`CountryLookup::resolve`]. Only the most
//! recently issued ticket is applied; late answers to superseded queries are dropped.

use crate::api::{CountrySource, LookupError};
use crate::cards::{Card, build_cards};
use crate::models::CountryRecord;
use log::{debug, warn};
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

/// The one message users see for any failed lookup.
pub const FETCH_ERROR_MESSAGE: &str = "Error in fetching country info";

/// Status of the most recent lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Error(String),
}

/// A request the host has to perform on behalf of the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub seq: u64,
    pub query: String,
}

/// A ticket paired with the outcome of its request.
#[derive(Debug)]
pub struct Resolution {
    pub ticket: Ticket,
    pub outcome: Result<CountryRecord, LookupError>,
}

/// Render snapshot of the widget.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub query: String,
    pub loading: bool,
    pub error: Option<String>,
    pub cards: Vec<Card>,
}

#[derive(Debug, Default)]
pub struct CountryLookup {
    query: String,
    record: Option<CountryRecord>,
    state: RequestState,
    issued: u64,
    pending: Option<u64>,
}

impl CountryLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn record(&self) -> Option<&CountryRecord> {
        self.record.as_ref()
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == RequestState::Loading
    }

    /// Replace the query and run the fetch-or-clear reaction.
    ///
    /// Returns the request to perform, or `None` when the query is empty or unchanged.
    /// An empty query clears the record and the error and supersedes any request in flight.
    /// A non-empty query keeps the current record visible until its answer arrives.
    pub fn on_query_change(&mut self, new_value: impl Into<String>) -> Option<Ticket> {
        let new_value = new_value.into();
        if new_value == self.query {
            return None;
        }
        self.query = new_value;

        if self.query.is_empty() {
            self.record = None;
            self.state = RequestState::Idle;
            self.pending = None;
            return None;
        }

        self.issued += 1;
        self.pending = Some(self.issued);
        self.state = RequestState::Loading;
        debug!("lookup #{} issued for {:?}", self.issued, self.query);
        Some(Ticket {
            seq: self.issued,
            query: self.query.clone(),
        })
    }

    /// Apply the outcome of a request. Returns `false` if the ticket was superseded.
    pub fn resolve(&mut self, resolution: Resolution) -> bool {
        let Resolution { ticket, outcome } = resolution;
        if self.pending != Some(ticket.seq) {
            debug!("lookup #{} for {:?} superseded, dropping", ticket.seq, ticket.query);
            return false;
        }
        self.pending = None;

        match outcome {
            Ok(record) => {
                self.record = Some(record);
                self.state = RequestState::Idle;
            }
            Err(err) => {
                warn!("lookup #{} for {:?} failed: {}", ticket.seq, ticket.query, err);
                self.state = RequestState::Error(FETCH_ERROR_MESSAGE.to_string());
            }
        }
        true
    }

    /// Cards are drawn only for a non-empty query and a record that carries a name.
    pub fn view(&self, locale_tag: &str) -> View {
        let cards = match &self.record {
            Some(record) if !self.query.is_empty() && record.has_name() => {
                build_cards(record, locale_tag)
            }
            _ => Vec::new(),
        };
        View {
            query: self.query.clone(),
            loading: self.is_loading(),
            error: match &self.state {
                RequestState::Error(msg) => Some(msg.clone()),
                _ => None,
            },
            cards,
        }
    }
}

/// Perform `ticket` on the calling thread.
pub fn perform(source: &dyn CountrySource, ticket: Ticket) -> Resolution {
    let outcome = source.lookup(&ticket.query);
    Resolution { ticket, outcome }
}

/// Perform `ticket` on a background thread and post the resolution to `sender`.
pub fn spawn_lookup(
    source: Arc<dyn CountrySource>,
    ticket: Ticket,
    sender: Sender<Resolution>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let resolution = perform(source.as_ref(), ticket);
        // Receiver gone means the widget was closed.
        let _ = sender.send(resolution);
    })
}

//! Application state and the reducer that advances it.
//!
//! All user-visible state lives in one [`AppState`] value; every event is a
//! [`Msg`] folded in through [`update`], which returns the next state. Search
//! responses carry the sequence number of the request that produced them, and
//! the reducer drops any response older than the latest submitted search, so
//! a second search issued while one is pending always wins.

use binsout_core::{
    model::ServiceArea,
    ports::LookupError,
    service::Resolution,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ViewMode {
    List,
    Map,
}

impl ViewMode {
    pub(crate) fn toggled(self) -> Self {
        match self {
            Self::List => Self::Map,
            Self::Map => Self::List,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) enum Phase {
    /// Nothing searched yet.
    Idle,
    /// A search with this sequence number is in flight.
    Loading { seq: u64 },
    /// The pipeline produced a resolution.
    Found(Resolution),
    /// The query matched no known address.
    NoResults { query: String },
    /// A provider backend failed.
    Failed { message: String },
}

#[derive(Debug, Clone)]
pub(crate) struct AppState {
    /// Current contents of the search input.
    pub query: String,
    /// Whether the result pane shows the schedule list or the area map.
    pub view: ViewMode,
    /// Where the current (or last) search stands.
    pub phase: Phase,
    /// Sequence number of the most recently submitted search.
    pub search_seq: u64,
    /// Service areas of every registered council, for the map view.
    pub areas: Vec<ServiceArea>,
}

impl AppState {
    pub(crate) fn new(areas: Vec<ServiceArea>) -> Self {
        Self {
            query: String::new(),
            view: ViewMode::List,
            phase: Phase::Idle,
            search_seq: 0,
            areas,
        }
    }
}

pub(crate) type SearchOutcome = Result<Option<Resolution>, LookupError>;

#[derive(Debug)]
pub(crate) enum Msg {
    /// A printable character was typed into the search input.
    Input(char),
    /// Delete the last character of the search input.
    Backspace,
    /// Replace the query with one of the example strings.
    QuickFill(&'static str),
    /// Run the search for the current query.
    Submit,
    /// A spawned search finished.
    Finished { seq: u64, outcome: SearchOutcome },
    /// Flip between list and map view.
    ToggleView,
}

/// Fold one message into the state.
pub(crate) fn update(state: AppState, msg: Msg) -> AppState {
    match msg {
        Msg::Input(character) => {
            let mut next = state;
            next.query.push(character);
            next
        }
        Msg::Backspace => {
            let mut next = state;
            next.query.pop();
            next
        }
        Msg::QuickFill(example) => {
            // Mirrors the portal's example buttons: fill the input, do not
            // start a search.
            let mut next = state;
            next.query = example.to_owned();
            next
        }
        Msg::Submit => {
            if state.query.trim().is_empty() {
                return state;
            }
            let mut next = state;
            next.search_seq += 1;
            next.phase = Phase::Loading {
                seq: next.search_seq,
            };
            next
        }
        Msg::Finished { seq, outcome } => {
            // Last request wins: responses from superseded searches are
            // discarded outright.
            if seq != state.search_seq {
                return state;
            }
            let mut next = state;
            next.phase = match outcome {
                Ok(Some(resolution)) => Phase::Found(resolution),
                Ok(None) => Phase::NoResults {
                    query: next.query.trim().to_owned(),
                },
                Err(err) => Phase::Failed {
                    message: format!("Search failed: {err}"),
                },
            };
            next
        }
        Msg::ToggleView => {
            let mut next = state;
            next.view = next.view.toggled();
            next
        }
    }
}

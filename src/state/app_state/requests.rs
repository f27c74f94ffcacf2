//! Request generations used to discard stale responses.
//!
//! Every async action takes a ticket before it goes out. When its response lands,
//! the result is applied only if no newer ticket of the same kind has been issued
//! (or the kind was invalidated) in the meantime.

use std::collections::HashMap;

/// Which slice of state a request writes to. Requests of the same kind fence each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Connect,
    Schema,
    /// Table, file and join previews all replace the same preview slice.
    Preview,
    /// Upload, export and join export.
    Transfer,
    Token,
    /// Column loading for one join table.
    JoinColumns(String),
}

impl RequestKind {
    /// Whether requests of this kind count towards the loading indicator.
    pub fn tracks_loading(&self) -> bool {
        !matches!(self, RequestKind::Token | RequestKind::JoinColumns(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    kind: RequestKind,
    generation: u64,
}

impl RequestTicket {
    pub fn kind(&self) -> &RequestKind {
        &self.kind
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Default)]
pub(crate) struct RequestTracker {
    next_generation: u64,
    latest: HashMap<RequestKind, u64>,
    in_flight: usize,
}

impl RequestTracker {
    fn bump(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }

    pub fn issue(&mut self, kind: RequestKind) -> RequestTicket {
        let generation = self.bump();
        self.latest.insert(kind.clone(), generation);
        if kind.tracks_loading() {
            self.in_flight += 1;
        }
        RequestTicket { kind, generation }
    }

    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        self.latest.get(&ticket.kind) == Some(&ticket.generation)
    }

    /// Make every outstanding ticket of `kind` stale.
    pub fn invalidate(&mut self, kind: RequestKind) {
        if self.latest.contains_key(&kind) {
            let generation = self.bump();
            self.latest.insert(kind, generation);
        }
    }

    /// Record that the request behind `ticket` has finished, stale or not.
    pub fn settle(&mut self, ticket: &RequestTicket) {
        if ticket.kind.tracks_loading() {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}

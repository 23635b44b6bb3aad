// File: crates/rt-core/src/session.rs
// Summary: Latest-wins fetch bookkeeping for one chart instance.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::FetchError;
use crate::fetch::{DataFetcher, TelemetrySink, Transport};
use crate::record::RTData;

/// Issued when a fetch starts; only the newest ticket may apply its result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    target: String,
}

impl FetchTicket {
    pub fn target(&self) -> &str {
        &self.target
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer fetch started before this one finished; its result was dropped.
    Superseded,
}

/// Data applied for the current target.
#[derive(Clone, Debug)]
pub struct Applied {
    pub target: String,
    pub data: Rc<RTData>,
}

/// Tracks the in-flight fetch for one chart. Starting a fetch supersedes any
/// earlier one; late responses from superseded fetches are discarded instead
/// of overwriting newer data. Single-threaded: shared by reference across
/// futures on one task, never across threads.
#[derive(Debug, Default)]
pub struct FetchSession {
    generation: Cell<u64>,
    applied: RefCell<Option<Applied>>,
}

impl FetchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self, target: impl Into<String>) -> FetchTicket {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        FetchTicket { generation, target: target.into() }
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation.get()
    }

    /// Store `data` if `ticket` is still the newest. Returns what happened.
    pub fn apply(&self, ticket: &FetchTicket, data: RTData) -> LoadOutcome {
        if !self.is_current(ticket) {
            tracing::debug!(
                url = %ticket.target,
                generation = ticket.generation,
                latest = self.generation.get(),
                "discarding superseded fetch result"
            );
            return LoadOutcome::Superseded;
        }
        *self.applied.borrow_mut() = Some(Applied { target: ticket.target.clone(), data: Rc::new(data) });
        LoadOutcome::Applied
    }

    /// Run a fetch through the session. Errors from a superseded fetch are
    /// dropped too; only the current fetch reports failure.
    pub async fn load<T, S>(&self, fetcher: &DataFetcher<T, S>) -> Result<LoadOutcome, FetchError>
    where
        T: Transport,
        S: TelemetrySink,
    {
        let ticket = self.begin(fetcher.data_url(None));
        match fetcher.fetch_latest(None).await {
            Ok(data) => Ok(self.apply(&ticket, data)),
            Err(_) if !self.is_current(&ticket) => Ok(LoadOutcome::Superseded),
            Err(e) => Err(e),
        }
    }

    pub fn current(&self) -> Option<Applied> {
        self.applied.borrow().clone()
    }

    pub fn current_data(&self) -> Option<Rc<RTData>> {
        self.applied.borrow().as_ref().map(|a| Rc::clone(&a.data))
    }
}

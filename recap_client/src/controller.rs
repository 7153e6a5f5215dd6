use std::cell::Cell;

use recap_core::helpers::creativity;
use recap_core::helpers::dto::SummarizeRequest;
use recap_core::helpers::pricing;
use recap_core::session::handler::{SessionStore, SessionTotals};
use thiserror::Error;

use crate::relay::RelayClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Requesting,
}

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("Please enter some text to summarize.")]
    EmptyInput,
    #[error("a summarization is already in progress")]
    Busy,
    #[error("{0}")]
    Relay(String),
    #[error(transparent)]
    Session(#[from] sled::Error),
}

/// Holds the controller in `Requesting` for the duration of one call and
/// returns it to `Idle` on every exit path, including panics.
struct BusyGuard<'a> {
    phase: &'a Cell<Phase>,
}

impl<'a> BusyGuard<'a> {
    fn acquire(phase: &'a Cell<Phase>) -> Result<Self, ControllerError> {
        if phase.get() == Phase::Requesting {
            return Err(ControllerError::Busy);
        }
        phase.set(Phase::Requesting);
        Ok(Self { phase })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.phase.set(Phase::Idle);
    }
}

#[derive(Debug)]
pub struct SummaryOutcome {
    pub summary: String,
    pub cost: f64,
    pub totals: SessionTotals,
}

pub struct Controller {
    relay: RelayClient,
    session: SessionStore,
    phase: Cell<Phase>,
}

impl Controller {
    pub fn new(relay: RelayClient, session: SessionStore) -> Self {
        Self {
            relay,
            session,
            phase: Cell::new(Phase::Idle),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    pub fn totals(&self) -> SessionTotals {
        self.session.load()
    }

    pub fn clear_session(&self) -> Result<SessionTotals, ControllerError> {
        self.session.clear()?;
        Ok(self.session.load())
    }

    /// Shown before a call is made; recomputed from the submitted text once a
    /// call succeeds.
    pub fn estimate(&self, text: &str) -> f64 {
        pricing::estimate_cost(pricing::word_count(text))
    }

    pub async fn summarize(
        &self,
        text: &str,
        level: u8,
    ) -> Result<SummaryOutcome, ControllerError> {
        if text.trim().is_empty() {
            return Err(ControllerError::EmptyInput);
        }

        let _busy = BusyGuard::acquire(&self.phase)?;

        let request = SummarizeRequest {
            text: text.to_string(),
            temperature: creativity::temperature(level),
            system_prompt: creativity::system_prompt(level).to_string(),
        };

        let summary = self
            .relay
            .summarize(&request)
            .await
            .map_err(|e| ControllerError::Relay(e.to_string()))?;

        let cost = self.estimate(text);
        let totals = self.session.add(cost)?;

        Ok(SummaryOutcome {
            summary,
            cost,
            totals,
        })
    }
}

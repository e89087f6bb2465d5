//! The question runner: one remote call, timed end to end.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, warn};

use crate::api::client::DocChatClient;
use crate::timer::{ElapsedTimer, SharedTimer, TickerGuard, spawn_ticker};
use crate::utils::markdown;

/// Fixed answer text substituted when the request fails for any reason.
pub const FALLBACK_ANSWER: &str = "Failed to process the question.";

/// Transform applied to the backend's markdown fields before display.
pub type Formatter = fn(&str) -> String;

/// Result of one question round trip.
///
/// Always produced, never an `Err`: a failed request is reported through
/// the fallback answer and the `error` field instead of aborting the
/// command.
#[derive(Debug, Serialize)]
pub struct QuestionOutcome {
    pub answer: String,
    pub verification_report: String,
    pub final_secs: Option<u64>,
    pub error: Option<String>,
}

/// Orchestrates one question against the backend, driving the shared
/// elapsed-time tracker while the request is in flight.
///
/// `run` takes `&mut self`, so a runner can never have two requests
/// outstanding; callers wanting concurrent questions need separate runners.
pub struct QuestionRunner {
    client: DocChatClient,
    timer: SharedTimer,
    busy: bool,
    formatter: Formatter,
    ticker: Option<TickerGuard>,
}

impl QuestionRunner {
    pub fn new(client: DocChatClient) -> Self {
        Self {
            client,
            timer: ElapsedTimer::shared(),
            busy: false,
            formatter: markdown::render,
            ticker: None,
        }
    }

    /// Replace the display transform. Tests substitute identity here.
    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Handle to the shared tracker, for display loops reading elapsed time
    /// while `run` is pending.
    pub fn timer(&self) -> SharedTimer {
        self.timer.clone()
    }

    /// Submit one question and wait for the answer.
    ///
    /// Starts a fresh timing session and ticker, flips the busy flag around
    /// the request, and feeds the flag's drop back to the tracker so the
    /// session completes on both the success and the failure path.
    pub async fn run(&mut self, question: &str, session_id: &str) -> QuestionOutcome {
        self.timer.lock().await.start();
        self.ticker = Some(spawn_ticker(self.timer.clone(), Duration::from_secs(1)));
        self.busy = true;

        let result = self.client.process_question(question, session_id).await;
        self.busy = false;

        let (answer, verification_report, error) = match result {
            Ok(answer) => {
                debug!("question answered");
                (
                    (self.formatter)(&answer.draft_answer),
                    (self.formatter)(&answer.verification_report),
                    None,
                )
            }
            Err(err) => {
                warn!(error = %err, "question request failed");
                (FALLBACK_ANSWER.to_string(), String::new(), Some(err.to_string()))
            }
        };

        let final_secs = {
            let mut tracker = self.timer.lock().await;
            tracker.observe(self.busy);
            tracker.final_secs()
        };
        self.ticker = None;

        QuestionOutcome {
            answer,
            verification_report,
            final_secs,
            error,
        }
    }
}

//! Interview session: the conversation state machine behind interview practice.
//!
//! States: `NotStarted → InProgress → InProgress …`, and any state → `NotStarted`
//! on reset. Each transition is split into `begin_*` (validate, optimistic append,
//! raise the busy flag, build the request) and `complete_*` (apply the settled
//! outcome), so the "answer appended, call failed" branch is observable on its own.
//! `start` / `submit_answer` run both halves against a gateway.

use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::gateway::{send_json, Endpoint, Gateway};
use crate::interview::transcript::Transcript;
use crate::models::interview::{InterviewAction, InterviewReply, InterviewRequest, Turn};
use crate::notify::{report, NoticeKind, Notifier, Outcome};

/// Shown when the backend starts a session without a question.
pub const OPENING_FALLBACK: &str = "Hello! I'm your AI interviewer. Let's start with a simple question: Tell me about yourself and your background.";

/// Shown when the backend answers with neither a question nor feedback.
pub const FOLLOW_UP_FALLBACK: &str =
    "Thank you for your answer. Let's continue with the next question.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress,
}

/// A request handed out by `begin_*`, tagged with the session epoch it belongs to.
#[derive(Debug, Clone)]
pub struct PendingTurn {
    epoch: u64,
    pub request: InterviewRequest,
}

#[derive(Debug)]
pub struct InterviewSession {
    id: Uuid,
    state: SessionState,
    transcript: Transcript,
    draft: String,
    busy: bool,
    /// Bumped on reset; completions from an older epoch are dropped.
    epoch: u64,
}

impl Default for InterviewSession {
    fn default() -> Self {
        Self::new()
    }
}

impl InterviewSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            state: SessionState::NotStarted,
            transcript: Transcript::default(),
            draft: String::new(),
            busy: false,
            epoch: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// True while a start/answer call is outstanding.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Whether the "start" control should be enabled.
    pub fn can_start(&self) -> bool {
        self.state == SessionState::NotStarted && !self.busy
    }

    // ── start ────────────────────────────────────────────────────────────

    pub fn begin_start(&mut self) -> Option<PendingTurn> {
        if !self.can_start() {
            debug!(session = %self.id, state = ?self.state, busy = self.busy, "start ignored");
            return None;
        }
        self.busy = true;
        Some(PendingTurn {
            epoch: self.epoch,
            request: InterviewRequest {
                action: InterviewAction::Start,
                message: String::new(),
            },
        })
    }

    pub fn complete_start(
        &mut self,
        pending: PendingTurn,
        result: Result<InterviewReply, AppError>,
        notifier: &dyn Notifier,
    ) -> Outcome {
        if pending.epoch != self.epoch {
            debug!(session = %self.id, "stale start completion dropped");
            return Outcome::Ignored;
        }
        self.busy = false;

        match result {
            Ok(reply) => {
                let question = reply.pick(false).unwrap_or(OPENING_FALLBACK);
                self.transcript.clear();
                self.transcript.push(Turn::ai(question));
                self.state = SessionState::InProgress;
                info!(session = %self.id, "interview started");
                notifier.notify(
                    NoticeKind::Success,
                    "Interview started. Good luck! Answer thoughtfully and take your time.",
                );
                Outcome::Completed
            }
            Err(e) => report(notifier, "start interview", &e),
        }
    }

    pub async fn start(&mut self, gateway: &dyn Gateway, notifier: &dyn Notifier) -> Outcome {
        let Some(pending) = self.begin_start() else {
            return Outcome::Ignored;
        };
        let result = send_json::<_, InterviewReply>(gateway, Endpoint::MockInterview, &pending.request)
            .await
            .map_err(AppError::from);
        self.complete_start(pending, result, notifier)
    }

    // ── answer ───────────────────────────────────────────────────────────

    /// Validates `text` and appends it as a user turn before any call is made.
    /// Returns `Ok(None)` when the session cannot accept an answer right now.
    pub fn begin_answer(&mut self, text: &str) -> Result<Option<PendingTurn>, AppError> {
        if self.state != SessionState::InProgress || self.busy {
            debug!(session = %self.id, state = ?self.state, busy = self.busy, "answer ignored");
            return Ok(None);
        }
        if text.trim().is_empty() {
            return Err(AppError::Validation(
                "Please provide an answer before submitting.".to_string(),
            ));
        }

        self.transcript.push(Turn::user(text));
        self.draft.clear();
        self.busy = true;
        Ok(Some(PendingTurn {
            epoch: self.epoch,
            request: InterviewRequest {
                action: InterviewAction::Answer,
                message: text.to_string(),
            },
        }))
    }

    /// Appends the AI reply on success. On failure the user turn stays in place.
    pub fn complete_answer(
        &mut self,
        pending: PendingTurn,
        result: Result<InterviewReply, AppError>,
        notifier: &dyn Notifier,
    ) -> Outcome {
        if pending.epoch != self.epoch {
            debug!(session = %self.id, "stale answer completion dropped");
            return Outcome::Ignored;
        }
        self.busy = false;

        match result {
            Ok(reply) => {
                let text = reply.pick(true).unwrap_or(FOLLOW_UP_FALLBACK);
                self.transcript.push(Turn::ai(text));
                debug!(session = %self.id, turns = self.transcript.len(), "answer acknowledged");
                Outcome::Completed
            }
            Err(e) => report(notifier, "get response", &e),
        }
    }

    pub async fn submit_answer(
        &mut self,
        text: &str,
        gateway: &dyn Gateway,
        notifier: &dyn Notifier,
    ) -> Outcome {
        let pending = match self.begin_answer(text) {
            Ok(Some(pending)) => pending,
            Ok(None) => return Outcome::Ignored,
            Err(e) => return report(notifier, "submit answer", &e),
        };
        let result = send_json::<_, InterviewReply>(gateway, Endpoint::MockInterview, &pending.request)
            .await
            .map_err(AppError::from);
        self.complete_answer(pending, result, notifier)
    }

    /// Submits whatever is in the draft.
    pub async fn submit_draft(&mut self, gateway: &dyn Gateway, notifier: &dyn Notifier) -> Outcome {
        let text = self.draft.clone();
        self.submit_answer(&text, gateway, notifier).await
    }

    // ── reset ────────────────────────────────────────────────────────────

    pub fn reset(&mut self) {
        self.transcript.clear();
        self.draft.clear();
        self.state = SessionState::NotStarted;
        self.busy = false;
        self.epoch += 1;
        self.id = Uuid::new_v4();
        info!(session = %self.id, "interview reset");
    }
}

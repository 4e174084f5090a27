use thiserror::Error;
use tokio::sync::oneshot;

use crate::provider::{ORACLE_SILENT_MESSAGE, ProviderError};

/// Result of a single seek, produced by the provider task.
pub type SeekResult = Result<Answer, ProviderError>;

/// An answer spoken by the oracle.
///
/// Always trimmed and non-empty; the provider's raw payload is validated at
/// the boundary so presentation never has to re-check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer(String);

#[derive(Debug, Error)]
#[error("answer text must not be empty")]
pub struct EmptyAnswerError;

impl Answer {
    pub fn new(raw: impl Into<String>) -> Result<Self, EmptyAnswerError> {
        let trimmed = raw.into().trim().to_string();
        if trimmed.is_empty() {
            Err(EmptyAnswerError)
        } else {
            Ok(Self(trimmed))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for Answer {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for Answer {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// The user-facing text shown when a seek fails.
///
/// Only ever carries the fixed "oracle is silent" sentence; the underlying
/// failure goes to the logs, never to the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessage(String);

impl ErrorMessage {
    fn silent() -> Self {
        Self(ORACLE_SILENT_MESSAGE.to_string())
    }

    fn from_failure(err: &ProviderError) -> Self {
        Self(err.user_message().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The receiving half of an in-flight seek - existence proves a provider
/// call is outstanding.
#[derive(Debug)]
pub struct PendingAnswer {
    receiver: oneshot::Receiver<SeekResult>,
}

/// Which view the presentation layer should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    AwaitingInput,
    Thinking,
    Answer,
    Error,
}

#[derive(Debug, Default)]
enum OracleState {
    #[default]
    AwaitingInput,
    Thinking(PendingAnswer),
    Answer(Answer),
    Error(ErrorMessage),
}

/// The oracle state machine.
///
/// Cycles `AwaitingInput -> Thinking -> Answer | Error -> AwaitingInput`
/// indefinitely. The answer and error texts live inside their variants, so
/// holding both at once is unrepresentable. All mutation goes through
/// [`begin_seek`](Self::begin_seek), [`poll`](Self::poll), and
/// [`reset`](Self::reset).
#[derive(Debug, Default)]
pub struct Oracle {
    state: OracleState,
}

impl Oracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            OracleState::AwaitingInput => Phase::AwaitingInput,
            OracleState::Thinking(_) => Phase::Thinking,
            OracleState::Answer(_) => Phase::Answer,
            OracleState::Error(_) => Phase::Error,
        }
    }

    pub fn is_thinking(&self) -> bool {
        matches!(self.state, OracleState::Thinking(_))
    }

    pub fn answer(&self) -> Option<&str> {
        match &self.state {
            OracleState::Answer(answer) => Some(answer.as_str()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            OracleState::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Begin a seek: move to `Thinking` and hand the caller the sender the
    /// provider task must resolve.
    ///
    /// Returns `None` while a seek is already in flight, so repeated submits
    /// cannot start a second call. Any prior answer or error is discarded by
    /// the transition itself.
    pub fn begin_seek(&mut self) -> Option<oneshot::Sender<SeekResult>> {
        if self.is_thinking() {
            return None;
        }

        let (tx, rx) = oneshot::channel();
        self.state = OracleState::Thinking(PendingAnswer { receiver: rx });
        Some(tx)
    }

    /// Drain a completed seek, if any.
    ///
    /// Non-blocking; called once per frame by the app shell. Stays in
    /// `Thinking` until the provider task resolves (or drops) its sender.
    pub fn poll(&mut self) {
        let OracleState::Thinking(pending) = &mut self.state else {
            return;
        };

        let result = match pending.receiver.try_recv() {
            Ok(result) => result,
            Err(oneshot::error::TryRecvError::Empty) => return,
            Err(oneshot::error::TryRecvError::Closed) => {
                tracing::warn!("seek task dropped its sender without answering");
                self.state = OracleState::Error(ErrorMessage::silent());
                return;
            }
        };

        self.state = match result {
            Ok(answer) => OracleState::Answer(answer),
            Err(err) => {
                tracing::warn!(error = %err, "oracle request failed");
                OracleState::Error(ErrorMessage::from_failure(&err))
            }
        };
    }

    /// Return to `AwaitingInput`, discarding the shown answer or error.
    ///
    /// Valid only after a result; from `AwaitingInput` or `Thinking` this is
    /// a no-op, so nothing can abandon an in-flight seek.
    pub fn reset(&mut self) {
        if matches!(
            self.state,
            OracleState::Answer(_) | OracleState::Error(_)
        ) {
            self.state = OracleState::AwaitingInput;
        }
    }
}

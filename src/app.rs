use crate::digits::DigitInput;
use crate::oracle::{Oracle, Phase};
use crate::provider::{self, ApiConfig};

/// Application state: the oracle machine, the digit field, and the few
/// presentation-only bits (tick, status line, quit flag).
pub struct App {
    config: ApiConfig,
    oracle: Oracle,
    digits: DigitInput,
    status_message: Option<String>,
    should_quit: bool,
    tick: usize,
}

impl App {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            oracle: Oracle::new(),
            digits: DigitInput::new(),
            status_message: None,
            should_quit: false,
            tick: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.oracle.phase()
    }

    pub fn oracle(&self) -> &Oracle {
        &self.oracle
    }

    pub fn digit_input(&self) -> &DigitInput {
        &self.digits
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn tick_count(&self) -> usize {
        self.tick
    }

    /// Increment the animation tick.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn enter_digit(&mut self, c: char) {
        if self.phase() != Phase::AwaitingInput {
            return;
        }
        self.digits.enter(c);
        self.clear_status();
    }

    pub fn backspace(&mut self) {
        if self.phase() != Phase::AwaitingInput {
            return;
        }
        self.digits.backspace();
    }

    pub fn focus_left(&mut self) {
        if self.phase() == Phase::AwaitingInput {
            self.digits.focus_left();
        }
    }

    pub fn focus_right(&mut self) {
        if self.phase() == Phase::AwaitingInput {
            self.digits.focus_right();
        }
    }

    /// Consult the oracle.
    ///
    /// Requires all three digits; while a seek is in flight the machine's
    /// guard makes this a no-op, so mashing Enter never doubles the request.
    pub fn seek(&mut self) {
        if !self.digits.is_complete() {
            self.set_status("Cast all three digits before consulting the oracle");
            return;
        }

        let Some(reply) = self.oracle.begin_seek() else {
            return;
        };

        self.clear_status();

        let config = self.config.clone();
        tokio::spawn(async move {
            let result = provider::fetch_answer(&config).await;
            // The receiver only disappears on shutdown.
            let _ = reply.send(result);
        });
    }

    /// Drain the in-flight seek, if it completed. Called once per frame.
    pub fn poll_oracle(&mut self) {
        self.oracle.poll();
    }

    /// Return to digit entry after a result was shown.
    pub fn reset(&mut self) {
        if !matches!(self.phase(), Phase::Answer | Phase::Error) {
            return;
        }
        self.oracle.reset();
        self.digits.clear();
        self.clear_status();
    }
}

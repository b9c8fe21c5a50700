//! Session state and its pure transition function.
//!
//! All request/result state lives in an immutable [`Session`] snapshot that
//! is only replaced through [`update`], a pure reducer keyed by [`Action`].
//! The UI layer translates key events into actions and never mutates the
//! session directly, which keeps every transition unit-testable without a
//! terminal.
//!
//! Completions carry the generation that was current when their request was
//! dispatched. A completion whose generation no longer matches the session
//! is discarded, so a response that arrives after the user has resubmitted
//! or switched modes can never overwrite newer state.

use crate::modes::Mode;

/// Maximum number of characters accepted in the input field.
pub const MAX_INPUT_CHARS: usize = 1000;

/// One immutable snapshot of the request/result state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Currently selected mode.
    pub mode: Mode,
    /// Current input text, never longer than [`MAX_INPUT_CHARS`] chars.
    pub input: String,
    /// True while a request is in flight.
    pub loading: bool,
    /// Monotonic counter identifying the newest submission. Bumped on
    /// submit and on mode change so stale completions can be recognized.
    pub generation: u64,
    /// Markdown returned by the last completed request, if it succeeded.
    pub result: Option<String>,
    /// User-visible message from the last completed request, if it failed.
    pub error: Option<String>,
}

/// Discrete state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The user selected a different mode tab.
    ModeChanged(Mode),
    /// The input text was edited to the given value.
    InputChanged(String),
    /// The user picked an example prompt.
    ExamplePicked(String),
    /// A submission was accepted and a request dispatched.
    SubmitStarted,
    /// The request tagged with `generation` completed successfully.
    SubmitSucceeded { generation: u64, markdown: String },
    /// The request tagged with `generation` failed.
    SubmitFailed { generation: u64, message: String },
}

impl Session {
    /// Fresh session in the given mode.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            input: String::new(),
            loading: false,
            generation: 0,
            result: None,
            error: None,
        }
    }

    /// Number of characters currently entered (drives the counter).
    pub fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// True when the input, after trimming, can be submitted.
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Mode::Plan)
    }
}

/// Apply one action to a session, producing the next session.
///
/// Pure: no IO, no clocks, no channels. Invalid transitions (submitting
/// blank input, completing a stale generation) return the session
/// unchanged.
pub fn update(session: &Session, action: Action) -> Session {
    match action {
        Action::ModeChanged(mode) => {
            // Switching tabs resets the form and invalidates any request
            // still in flight.
            Session {
                mode,
                input: String::new(),
                loading: false,
                generation: session.generation + 1,
                result: None,
                error: None,
            }
        }
        Action::InputChanged(text) => Session {
            input: clamp_input(text),
            ..session.clone()
        },
        Action::ExamplePicked(example) => Session {
            input: clamp_input(example),
            ..session.clone()
        },
        Action::SubmitStarted => {
            if !session.can_submit() {
                return session.clone();
            }
            Session {
                loading: true,
                generation: session.generation + 1,
                result: None,
                error: None,
                ..session.clone()
            }
        }
        Action::SubmitSucceeded {
            generation,
            markdown,
        } => {
            if stale(session, generation) {
                return session.clone();
            }
            Session {
                loading: false,
                result: Some(markdown),
                error: None,
                ..session.clone()
            }
        }
        Action::SubmitFailed {
            generation,
            message,
        } => {
            if stale(session, generation) {
                return session.clone();
            }
            Session {
                loading: false,
                result: None,
                error: Some(message),
                ..session.clone()
            }
        }
    }
}

/// A completion is stale when its generation no longer matches, or when
/// nothing is in flight at all.
fn stale(session: &Session, generation: u64) -> bool {
    if generation != session.generation || !session.loading {
        tracing::debug!(
            generation,
            current = session.generation,
            loading = session.loading,
            "discarding stale completion"
        );
        return true;
    }
    false
}

/// Truncate input to the character limit. Excess characters cannot be
/// entered; pastes are cut at the limit.
fn clamp_input(text: String) -> String {
    if text.chars().count() <= MAX_INPUT_CHARS {
        text
    } else {
        text.chars().take(MAX_INPUT_CHARS).collect()
    }
}

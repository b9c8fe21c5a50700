//! Application state and logic for the TUI.
//!
//! [`App`] owns the [`Session`] snapshot plus everything that is not part
//! of the request/result state: which screen is showing, cursor and scroll
//! positions, animations, transient notices, and the handles of cancellable
//! async work (the in-flight request and the scheduled timers).
//!
//! All session changes go through [`App::apply`], which funnels into the
//! pure reducer and then performs the side effects a transition implies
//! (cancelling an in-flight request on mode change, clamping the cursor).

mod messages;
mod timer;

pub use messages::AppMessage;
pub use timer::ScheduledTask;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::NexoraClient;
use crate::clipboard;
use crate::export;
use crate::markdown;
use crate::session::{self, Action, Session};

/// Delay between activating "Get Started" and the screen swap.
pub const LANDING_TRANSITION: Duration = Duration::from_millis(500);
/// Lifetime of the ripple animation.
pub const RIPPLE_DURATION: Duration = Duration::from_millis(1200);
/// How long a status notice stays on screen.
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Which screen is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Main,
}

/// Expanding-ring animation shown where "Get Started" was activated.
#[derive(Debug, Clone, Copy)]
pub struct Ripple {
    /// Tick at which the ripple started, drives the ring radius.
    pub started_tick: u64,
}

/// Outcome class of a status notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient status message for boundary operations (copy, export).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Temporary UI state held while a boundary operation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusyKind {
    Exporting,
}

/// Handle of the request currently in flight; aborted on drop so a new
/// submission or teardown cancels it.
#[derive(Debug)]
struct InFlightRequest {
    generation: u64,
    handle: JoinHandle<()>,
}

impl Drop for InFlightRequest {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Scope guard for [`BusyKind`] state: acquired before a boundary
/// operation, released on every exit path including early returns.
struct BusyGuard<'a> {
    app: &'a mut App,
}

impl<'a> BusyGuard<'a> {
    fn begin(app: &'a mut App, kind: BusyKind) -> Self {
        app.busy = Some(kind);
        app.needs_redraw = true;
        Self { app }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.app.busy = None;
        self.app.needs_redraw = true;
    }
}

/// Main application state.
pub struct App {
    /// Request/result state, replaced only through the reducer.
    pub session: Session,
    /// Current screen.
    pub screen: Screen,
    /// Flag to track if the app should quit.
    pub should_quit: bool,
    /// Dirty flag for redraws.
    pub needs_redraw: bool,
    /// Tick counter for animations (title reveal, spinner, ripple).
    pub tick_count: u64,
    /// Cursor position in the input, as a char index.
    pub cursor: usize,
    /// Highlighted example prompt, if any.
    pub example_cursor: Option<usize>,
    /// Scroll offset of the result region.
    pub result_scroll: u16,
    /// True while the landing screen is animating out.
    pub landing_leaving: bool,
    /// Active ripple animation.
    pub ripple: Option<Ripple>,
    /// Busy state of a boundary operation in progress.
    pub busy: Option<BusyKind>,
    /// Current status notice.
    pub notice: Option<Notice>,
    /// Local time the current result arrived, for the result header.
    pub result_generated_at: Option<chrono::DateTime<chrono::Local>>,
    /// Directory PDF exports are written to.
    pub export_dir: PathBuf,
    /// API client shared with request tasks.
    pub client: Arc<NexoraClient>,
    /// Sender side of the app message channel (cloned into tasks).
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver side, taken by the event loop.
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,

    notice_seq: u64,
    landing_timer: Option<ScheduledTask>,
    ripple_timer: Option<ScheduledTask>,
    notice_timer: Option<ScheduledTask>,
    request: Option<InFlightRequest>,
}

impl App {
    /// App pointed at the default API base URL.
    pub fn new() -> Self {
        Self::with_client(NexoraClient::new())
    }

    /// App with a custom client (tests point this at a mock server).
    pub fn with_client(client: NexoraClient) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            session: Session::default(),
            screen: Screen::Landing,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            cursor: 0,
            example_cursor: None,
            result_scroll: 0,
            landing_leaving: false,
            ripple: None,
            busy: None,
            notice: None,
            result_generated_at: None,
            export_dir: export::default_export_dir(),
            client: Arc::new(client),
            message_tx,
            message_rx: Some(message_rx),
            notice_seq: 0,
            landing_timer: None,
            ripple_timer: None,
            notice_timer: None,
            request: None,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance the animation tick.
    pub fn tick(&mut self) {
        self.tick_count += 1;
    }

    /// True while something on screen is animating and needs continuous
    /// redraws.
    pub fn is_animating(&self) -> bool {
        self.screen == Screen::Landing || self.session.loading || self.ripple.is_some()
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
        // Dropping the handles aborts outstanding work.
        self.request = None;
        self.landing_timer = None;
        self.ripple_timer = None;
        self.notice_timer = None;
    }

    // ------------------------------------------------------------------
    // Session transitions
    // ------------------------------------------------------------------

    /// Apply an action to the session and perform its side effects.
    pub fn apply(&mut self, action: Action) {
        if let Action::ModeChanged(_) = action {
            // Cancel-and-replace: navigation invalidates in-flight work.
            self.cancel_request();
            self.example_cursor = None;
            self.result_scroll = 0;
            self.result_generated_at = None;
        }
        self.session = session::update(&self.session, action);
        self.cursor = self.cursor.min(self.session.char_count());
        self.mark_dirty();
    }

    /// Switch to the next mode tab.
    pub fn next_mode(&mut self) {
        self.apply(Action::ModeChanged(self.session.mode.next()));
    }

    /// Switch to the previous mode tab.
    pub fn prev_mode(&mut self) {
        self.apply(Action::ModeChanged(self.session.mode.prev()));
    }

    // ------------------------------------------------------------------
    // Input editing
    // ------------------------------------------------------------------

    pub fn insert_char(&mut self, c: char) {
        self.insert_str(&c.to_string());
    }

    /// Insert text at the cursor. Characters past the limit are dropped.
    pub fn insert_str(&mut self, text: &str) {
        let before = self.session.char_count();
        let mut chars: Vec<char> = self.session.input.chars().collect();
        let insert: Vec<char> = text.chars().filter(|c| *c != '\r' && *c != '\n').collect();
        let at = self.cursor.min(chars.len());
        chars.splice(at..at, insert);
        self.apply(Action::InputChanged(chars.into_iter().collect()));
        let inserted = self.session.char_count().saturating_sub(before);
        self.cursor = (at + inserted).min(self.session.char_count());
        self.example_cursor = None;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut chars: Vec<char> = self.session.input.chars().collect();
        chars.remove(self.cursor - 1);
        self.cursor -= 1;
        self.apply(Action::InputChanged(chars.into_iter().collect()));
    }

    pub fn delete_char(&mut self) {
        let mut chars: Vec<char> = self.session.input.chars().collect();
        if self.cursor < chars.len() {
            chars.remove(self.cursor);
            self.apply(Action::InputChanged(chars.into_iter().collect()));
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.mark_dirty();
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.session.char_count());
        self.mark_dirty();
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
        self.mark_dirty();
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.session.char_count();
        self.mark_dirty();
    }

    pub fn clear_input(&mut self) {
        self.apply(Action::InputChanged(String::new()));
        self.cursor = 0;
    }

    // ------------------------------------------------------------------
    // Example prompts
    // ------------------------------------------------------------------

    /// Move the example highlight down, wrapping.
    pub fn next_example(&mut self) {
        let count = self.session.mode.spec().examples.len();
        self.example_cursor = Some(match self.example_cursor {
            Some(i) => (i + 1) % count,
            None => 0,
        });
        self.mark_dirty();
    }

    /// Move the example highlight up, wrapping.
    pub fn prev_example(&mut self) {
        let count = self.session.mode.spec().examples.len();
        self.example_cursor = Some(match self.example_cursor {
            Some(i) => (i + count - 1) % count,
            None => count - 1,
        });
        self.mark_dirty();
    }

    /// Fill the input with the highlighted example.
    pub fn pick_example(&mut self) {
        if let Some(i) = self.example_cursor {
            let example = self.session.mode.spec().examples[i];
            self.apply(Action::ExamplePicked(example.to_string()));
            self.cursor = self.session.char_count();
        }
    }

    // ------------------------------------------------------------------
    // Request dispatch
    // ------------------------------------------------------------------

    /// Submit the current input to the active mode's endpoint.
    ///
    /// Blank input and in-flight requests are rejected. A resubmission
    /// aborts the previous request (cancel-and-replace); its completion
    /// would be discarded by the generation check anyway.
    pub fn submit(&mut self) {
        if !self.session.can_submit() {
            tracing::debug!(
                loading = self.session.loading,
                "submission rejected by guard"
            );
            return;
        }

        self.cancel_request();
        self.apply(Action::SubmitStarted);
        if !self.session.loading {
            return;
        }

        let generation = self.session.generation;
        let mode = self.session.mode;
        let input = self.session.input.trim().to_string();
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();

        let handle = tokio::spawn(async move {
            let msg = match client.generate(mode, &input).await {
                Ok(markdown) => AppMessage::RequestSucceeded {
                    generation,
                    markdown,
                },
                Err(err) => {
                    tracing::warn!(%mode, error = %err, "generate request failed");
                    AppMessage::RequestFailed {
                        generation,
                        message: err.user_message(),
                    }
                }
            };
            let _ = tx.send(msg);
        });

        self.request = Some(InFlightRequest { generation, handle });
    }

    fn cancel_request(&mut self) {
        if let Some(req) = self.request.take() {
            tracing::debug!(generation = req.generation, "cancelling in-flight request");
        }
    }

    /// True when a request task is being tracked (used by tests).
    pub fn has_inflight_request(&self) -> bool {
        self.request.is_some()
    }

    // ------------------------------------------------------------------
    // Async message handling
    // ------------------------------------------------------------------

    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::RequestSucceeded {
                generation,
                markdown,
            } => {
                self.apply(Action::SubmitSucceeded {
                    generation,
                    markdown,
                });
                if self.session.result.is_some() {
                    self.result_generated_at = Some(chrono::Local::now());
                    self.result_scroll = 0;
                }
                self.request = None;
            }
            AppMessage::RequestFailed {
                generation,
                message,
            } => {
                self.apply(Action::SubmitFailed {
                    generation,
                    message,
                });
                self.request = None;
            }
            AppMessage::LandingDelayElapsed => {
                self.screen = Screen::Main;
                self.landing_leaving = false;
                self.landing_timer = None;
                self.mark_dirty();
            }
            AppMessage::RippleFinished => {
                self.ripple = None;
                self.ripple_timer = None;
                self.mark_dirty();
            }
            AppMessage::NoticeExpired(id) => {
                if self.notice.as_ref().is_some_and(|n| n.id == id) {
                    self.notice = None;
                    self.notice_timer = None;
                    self.mark_dirty();
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Landing transition
    // ------------------------------------------------------------------

    /// Activate "Get Started": ripple, fade flag, delayed screen swap.
    /// Re-activation during the delay is ignored.
    pub fn begin_landing_transition(&mut self) {
        if self.landing_leaving || self.screen != Screen::Landing {
            return;
        }
        self.landing_leaving = true;
        self.ripple = Some(Ripple {
            started_tick: self.tick_count,
        });
        self.ripple_timer = Some(ScheduledTask::after(
            RIPPLE_DURATION,
            self.message_tx.clone(),
            AppMessage::RippleFinished,
        ));
        self.landing_timer = Some(ScheduledTask::after(
            LANDING_TRANSITION,
            self.message_tx.clone(),
            AppMessage::LandingDelayElapsed,
        ));
        self.mark_dirty();
    }

    // ------------------------------------------------------------------
    // Result actions
    // ------------------------------------------------------------------

    /// Copy the raw markdown result to the clipboard. No-op without a
    /// result; success and failure both surface as a notice.
    pub fn copy_result(&mut self) {
        let Some(markdown) = self.session.result.clone() else {
            tracing::debug!("copy requested with no result");
            return;
        };
        match clipboard::copy_text(&markdown) {
            Ok(()) => self.notify(NoticeKind::Success, "Copied to clipboard"),
            Err(err) => {
                tracing::warn!(error = %err, "clipboard copy failed");
                self.notify(NoticeKind::Error, err.to_string());
            }
        }
    }

    /// Export the result as `{mode}-result.pdf`. No-op (logged) without a
    /// result; the busy state is released on every path by a scope guard.
    pub fn export_result(&mut self) {
        let Some(markdown) = self.session.result.clone() else {
            tracing::warn!("export requested with no result");
            return;
        };
        let doc = markdown::parse(&markdown);
        let mode = self.session.mode;
        let dir = self.export_dir.clone();

        let outcome = {
            let _busy = BusyGuard::begin(self, BusyKind::Exporting);
            export::write_pdf(mode, &doc, &dir)
        };

        match outcome {
            Ok(done) => self.notify(
                NoticeKind::Success,
                format!("Saved {} ({} pages)", done.path.display(), done.pages),
            ),
            Err(err) => {
                tracing::warn!(error = %err, "export failed");
                self.notify(NoticeKind::Error, err.to_string());
            }
        }
    }

    /// Show a transient status notice, replacing any current one.
    pub fn notify(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.notice_seq += 1;
        let id = self.notice_seq;
        self.notice = Some(Notice {
            id,
            kind,
            text: text.into(),
        });
        self.notice_timer = Some(ScheduledTask::after(
            NOTICE_DURATION,
            self.message_tx.clone(),
            AppMessage::NoticeExpired(id),
        ));
        self.mark_dirty();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_respects_char_limit() {
        let mut app = App::new();
        app.insert_str(&"x".repeat(session::MAX_INPUT_CHARS));
        assert_eq!(app.session.char_count(), session::MAX_INPUT_CHARS);
        app.insert_char('y');
        assert_eq!(app.session.char_count(), session::MAX_INPUT_CHARS);
        assert_eq!(app.cursor, session::MAX_INPUT_CHARS);
    }

    #[test]
    fn test_insert_at_cursor_position() {
        let mut app = App::new();
        app.insert_str("held");
        app.cursor = 2;
        app.insert_char('l');
        assert_eq!(app.session.input, "helld");
        assert_eq!(app.cursor, 3);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut app = App::new();
        app.insert_str("abc");
        app.backspace();
        assert_eq!(app.session.input, "ab");
        app.move_cursor_home();
        app.delete_char();
        assert_eq!(app.session.input, "b");
    }

    #[test]
    fn test_paste_strips_newlines() {
        let mut app = App::new();
        app.insert_str("line one\nline two");
        assert_eq!(app.session.input, "line oneline two");
    }

    #[test]
    fn test_mode_switch_resets_cursor_and_selection() {
        let mut app = App::new();
        app.insert_str("something");
        app.example_cursor = Some(2);
        app.next_mode();
        assert_eq!(app.session.input, "");
        assert_eq!(app.cursor, 0);
        assert_eq!(app.example_cursor, None);
    }

    #[test]
    fn test_example_cycling_wraps() {
        let mut app = App::new();
        app.next_example();
        assert_eq!(app.example_cursor, Some(0));
        app.prev_example();
        assert_eq!(app.example_cursor, Some(3));
        app.next_example();
        assert_eq!(app.example_cursor, Some(0));
    }

    #[test]
    fn test_pick_example_fills_input() {
        let mut app = App::new();
        app.next_example();
        app.pick_example();
        assert_eq!(
            app.session.input,
            app.session.mode.spec().examples[0].to_string()
        );
        assert_eq!(app.cursor, app.session.char_count());
    }

    #[test]
    fn test_copy_without_result_is_noop() {
        let mut app = App::new();
        app.copy_result();
        assert_eq!(app.notice, None);
    }

    #[tokio::test]
    async fn test_submit_rejects_blank_input() {
        let mut app = App::new();
        app.insert_str("   ");
        app.submit();
        assert!(!app.session.loading);
        assert!(!app.has_inflight_request());
    }

    #[tokio::test]
    async fn test_landing_transition_reentrancy_guard() {
        let mut app = App::new();
        app.begin_landing_transition();
        assert!(app.landing_leaving);
        let first_ripple = app.ripple.expect("ripple started").started_tick;

        app.tick();
        app.begin_landing_transition();
        assert_eq!(app.ripple.unwrap().started_tick, first_ripple);
    }

    #[tokio::test]
    async fn test_landing_message_swaps_screen() {
        let mut app = App::new();
        app.begin_landing_transition();
        app.handle_message(AppMessage::LandingDelayElapsed);
        assert_eq!(app.screen, Screen::Main);
        assert!(!app.landing_leaving);
    }

    #[tokio::test]
    async fn test_notice_expiry_ignores_stale_id() {
        let mut app = App::new();
        app.notify(NoticeKind::Success, "first");
        let stale = app.notice.as_ref().unwrap().id;
        app.notify(NoticeKind::Success, "second");
        app.handle_message(AppMessage::NoticeExpired(stale));
        assert_eq!(app.notice.as_ref().unwrap().text, "second");
    }

    #[tokio::test]
    async fn test_export_without_result_leaves_state_unchanged() {
        let mut app = App::new();
        let before = app.session.clone();
        app.export_result();
        assert_eq!(app.session, before);
        assert_eq!(app.busy, None);
        assert_eq!(app.notice, None);
    }

    #[tokio::test]
    async fn test_export_failure_releases_busy_and_notifies() {
        let mut app = App::new();
        app.session.result = Some("# Report".to_string());
        app.export_dir = PathBuf::from("/nonexistent/nexora-export");
        app.export_result();
        assert_eq!(app.busy, None);
        let notice = app.notice.expect("failure notice");
        assert_eq!(notice.kind, NoticeKind::Error);
    }

    #[tokio::test]
    async fn test_export_success_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new();
        app.session.result = Some("# Report".to_string());
        app.export_dir = dir.path().to_path_buf();
        app.export_result();
        assert!(dir.path().join("plan-result.pdf").exists());
        assert_eq!(app.busy, None);
        assert_eq!(app.notice.unwrap().kind, NoticeKind::Success);
    }

    #[tokio::test]
    async fn test_stale_completion_discarded_by_handle_message() {
        let mut app = App::new();
        app.insert_str("goal");
        app.apply(Action::SubmitStarted);
        let stale = app.session.generation - 1;
        app.handle_message(AppMessage::RequestSucceeded {
            generation: stale,
            markdown: "# old".to_string(),
        });
        assert!(app.session.loading);
        assert_eq!(app.session.result, None);
    }
}

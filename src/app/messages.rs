//! Messages delivered to the app from async tasks.

/// Messages received from async operations (the HTTP request and the
/// scheduled timers). Request completions carry the generation of the
/// submission that spawned them so stale responses can be discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// The request tagged with `generation` returned a markdown result.
    RequestSucceeded { generation: u64, markdown: String },
    /// The request tagged with `generation` failed; `message` is already
    /// collapsed to the user-visible string.
    RequestFailed { generation: u64, message: String },
    /// The landing transition delay elapsed; swap to the main screen.
    LandingDelayElapsed,
    /// The ripple animation finished and should be removed.
    RippleFinished,
    /// The notice with this id should be dismissed.
    NoticeExpired(u64),
}

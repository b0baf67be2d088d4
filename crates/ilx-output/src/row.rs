//! Plain data row type written by the event-log backend.

/// One persisted log event: the tick it was emitted at, its category tag,
/// and the message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub tick: u64,
    pub kind: String,
    pub message: String,
}

use serde::{Deserialize, Serialize};

// ===== REFRESH CONSTANTS =====

/// Id of the marker element that opts a page into auto-refresh.
pub const MARKER_ID: &str = "reload";

/// Delay between load completion and the forced reload, in milliseconds.
pub const RELOAD_DELAY_MS: u32 = 10_000;

// The two console diagnostics, byte-exact in the source locale. They are
// fixed strings, not templates: a non-default marker id (tests only) still
// produces the same text.
pub const RELOAD_PENDING_NOTICE: &str = "Страница обновляется...";
pub const MARKER_ABSENT_NOTICE: &str = "Элемент с id='reload' отсутствует.";

// ===== OPTIONS =====

/// Knobs for one trigger invocation.
///
/// Production always runs with `RefreshOptions::default()`; there is no file,
/// environment, or CLI input behind these fields. Non-default values exist so
/// tests and embedders can exercise the trigger against other documents.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RefreshOptions {
    pub marker_id: String,
    pub delay_ms: u32,
}

impl Default for RefreshOptions {
    fn default() -> Self {
        Self {
            marker_id: MARKER_ID.to_string(),
            delay_ms: RELOAD_DELAY_MS,
        }
    }
}

// ===== OUTCOME TYPES =====

/// Terminal outcome of the presence check. There are exactly two, decided
/// once per page load and never revisited.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleOutcome {
    /// Marker found; one reload timer is armed.
    ReloadPending,
    /// No marker; nothing is scheduled.
    MarkerAbsent,
}

impl ScheduleOutcome {
    /// Console line for this branch.
    pub fn diagnostic(&self) -> &'static str {
        match self {
            Self::ReloadPending => RELOAD_PENDING_NOTICE,
            Self::MarkerAbsent => MARKER_ABSENT_NOTICE,
        }
    }

    pub fn is_scheduled(&self) -> bool {
        matches!(self, Self::ReloadPending)
    }
}

/// Map the marker presence check onto the outcome.
pub fn decide(marker_present: bool) -> ScheduleOutcome {
    if marker_present {
        ScheduleOutcome::ReloadPending
    } else {
        ScheduleOutcome::MarkerAbsent
    }
}

// ===== STATUS SNAPSHOT =====

/// Read-only record of the single decision, surfaced for end-to-end
/// harnesses. `delay_ms` is present exactly when a reload was scheduled.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RefreshStatus {
    pub scheduled: bool,
    pub delay_ms: Option<u32>,
    pub marker_id: String,
}

impl RefreshStatus {
    pub fn new(outcome: ScheduleOutcome, options: &RefreshOptions) -> Self {
        Self {
            scheduled: outcome.is_scheduled(),
            delay_ms: outcome.is_scheduled().then_some(options.delay_ms),
            marker_id: options.marker_id.clone(),
        }
    }
}

//! The auto-refresh trigger: one presence check, one decision, per page load.

use crate::page::Page;
use shared::{decide, RefreshOptions, RefreshStatus};

/// Inspect `page` for the marker element and, when it is present, arm the
/// single reload timer.
///
/// Scheduling strictly precedes the diagnostic, preserving the original
/// statement order. The function touches no global state, so invocations
/// against independent `Page` instances cannot interfere.
pub fn run(page: &impl Page, options: &RefreshOptions) -> RefreshStatus {
    let outcome = decide(page.marker_present(&options.marker_id));

    if outcome.is_scheduled() {
        page.schedule_reload(options.delay_ms);
    }
    page.notify(outcome.diagnostic());

    RefreshStatus::new(outcome, options)
}

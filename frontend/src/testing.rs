//! Test doubles for the `Page` seam.
//!
//! `RecordingPage` captures every host call in order so tests can inspect a
//! timer registration without letting it fire. `VirtualPage` adds a manual
//! clock, turning the two end-to-end scenarios into deterministic native
//! tests.

use crate::page::Page;
use std::cell::{Cell, RefCell};

/// One host call, in the order the trigger performed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    ReloadScheduled { delay_ms: u32 },
    Notified(String),
}

/// Records calls; performs nothing.
pub struct RecordingPage {
    marker_id: Option<String>,
    events: RefCell<Vec<PageEvent>>,
}

impl RecordingPage {
    /// A document whose only identified element carries `marker_id`.
    pub fn with_marker(marker_id: &str) -> Self {
        Self {
            marker_id: Some(marker_id.to_string()),
            events: RefCell::new(Vec::new()),
        }
    }

    /// A document with no identified elements at all.
    pub fn empty() -> Self {
        Self {
            marker_id: None,
            events: RefCell::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<PageEvent> {
        self.events.borrow().clone()
    }

    pub fn scheduled_delays(&self) -> Vec<u32> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                PageEvent::ReloadScheduled { delay_ms } => Some(delay_ms),
                PageEvent::Notified(_) => None,
            })
            .collect()
    }

    pub fn notices(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                PageEvent::Notified(message) => Some(message),
                PageEvent::ReloadScheduled { .. } => None,
            })
            .collect()
    }
}

impl Page for RecordingPage {
    fn marker_present(&self, element_id: &str) -> bool {
        self.marker_id.as_deref() == Some(element_id)
    }

    fn schedule_reload(&self, delay_ms: u32) {
        self.events
            .borrow_mut()
            .push(PageEvent::ReloadScheduled { delay_ms });
    }

    fn notify(&self, message: &str) {
        self.events
            .borrow_mut()
            .push(PageEvent::Notified(message.to_string()));
    }
}

/// A page with a manually advanced clock. Armed timers fire when the clock
/// reaches their deadline, each at most once; every fired reload is recorded
/// with its firing time.
pub struct VirtualPage {
    marker_id: Option<String>,
    now_ms: Cell<u32>,
    armed_deadlines: RefCell<Vec<u32>>,
    reload_times: RefCell<Vec<u32>>,
}

impl VirtualPage {
    pub fn with_marker(marker_id: &str) -> Self {
        Self {
            marker_id: Some(marker_id.to_string()),
            now_ms: Cell::new(0),
            armed_deadlines: RefCell::new(Vec::new()),
            reload_times: RefCell::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self {
            marker_id: None,
            now_ms: Cell::new(0),
            armed_deadlines: RefCell::new(Vec::new()),
            reload_times: RefCell::new(Vec::new()),
        }
    }

    /// Move the clock forward to `now_ms`, firing every due timer once.
    pub fn advance_to(&self, now_ms: u32) {
        assert!(now_ms >= self.now_ms.get(), "the clock only moves forward");
        self.now_ms.set(now_ms);

        let due: Vec<u32> = {
            let mut armed = self.armed_deadlines.borrow_mut();
            let (due, pending) = armed.drain(..).partition(|deadline| *deadline <= now_ms);
            *armed = pending;
            due
        };
        self.reload_times.borrow_mut().extend(due);
    }

    /// Times at which a forced reload was observed, in firing order.
    pub fn reload_times(&self) -> Vec<u32> {
        self.reload_times.borrow().clone()
    }
}

impl Page for VirtualPage {
    fn marker_present(&self, element_id: &str) -> bool {
        self.marker_id.as_deref() == Some(element_id)
    }

    fn schedule_reload(&self, delay_ms: u32) {
        self.armed_deadlines
            .borrow_mut()
            .push(self.now_ms.get() + delay_ms);
    }

    fn notify(&self, _message: &str) {}
}

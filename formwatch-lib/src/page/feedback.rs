//! Feedback lines for keyboard, click and mouse events.

use std::time::Duration;

use crate::deferred::DeferredQueue;
use crate::host::Host;

pub const KEY_FEEDBACK_ID: &str = "keyFeedback";
pub const CLICK_FEEDBACK_ID: &str = "clickFeedback";
pub const MOUSE_FEEDBACK_ID: &str = "mouseFeedback";

const CLICKED: &str = "Button was clicked!";
const NOT_CLICKED: &str = "Button not clicked yet";

/// Echoes the last key event.
#[derive(Debug)]
pub struct KeyFeedback<H> {
    host: H,
}

impl<H: Host> KeyFeedback<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn key_down(&self, key: &str) {
        self.host.set_text(KEY_FEEDBACK_ID, &format!("Key down: {key}"));
    }

    pub fn key_up(&self, key: &str) {
        self.host.set_text(KEY_FEEDBACK_ID, &format!("Key up: {key}"));
    }
}

/// Marks a click, then reverts after a fixed delay.
///
/// Every click queues its own revert; an earlier revert can wipe the
/// message of a later click.
#[derive(Debug)]
pub struct ClickFeedback<H> {
    host: H,
    revert_delay: Duration,
    reverts: DeferredQueue<()>,
}

impl<H: Host> ClickFeedback<H> {
    pub fn new(host: H, revert_delay: Duration) -> Self {
        host.set_text(CLICK_FEEDBACK_ID, NOT_CLICKED);
        Self {
            host,
            revert_delay,
            reverts: DeferredQueue::new(),
        }
    }

    pub fn click(&mut self) {
        self.host.set_text(CLICK_FEEDBACK_ID, CLICKED);
        self.reverts.schedule(self.revert_delay, ());
    }

    /// Advances the clock; returns the number of reverts that fired.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let fired = self.reverts.advance(elapsed).len();
        if fired > 0 {
            self.host.set_text(CLICK_FEEDBACK_ID, NOT_CLICKED);
        }
        fired
    }

    pub fn pending_reverts(&self) -> usize {
        self.reverts.len()
    }
}

/// Mouse position and double-click feedback.
#[derive(Debug)]
pub struct MouseFeedback<H> {
    host: H,
}

impl<H: Host> MouseFeedback<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn over(&self) {
        self.host.set_text(MOUSE_FEEDBACK_ID, "Mouse is over the area");
    }

    pub fn out(&self) {
        self.host.set_text(MOUSE_FEEDBACK_ID, "Mouse left the area");
    }

    pub fn double_click(&self) {
        self.host.set_text(MOUSE_FEEDBACK_ID, "Double click detected!");
    }
}

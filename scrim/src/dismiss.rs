//! Dismiss triggers.
//!
//! Escape and outside click both funnel into the same `close()` entry
//! point — no special-cased state. The outside-click region is defined by
//! the host, so only the key half lives here.

use crossterm::event::{Event, KeyCode, KeyEventKind};

use crate::mount::MountHost;
use crate::session::OverlaySession;

/// Close the active overlay when `event` is an escape key press.
///
/// Returns true when the event was consumed (an overlay was open and the
/// key matched). Safe to call with no overlay open.
pub fn dismiss_on_escape<H: MountHost>(session: &OverlaySession<H>, event: &Event) -> bool {
    if let Event::Key(key) = event {
        if key.kind == KeyEventKind::Press && key.code == KeyCode::Esc && session.is_open() {
            session.close();
            return true;
        }
    }
    false
}

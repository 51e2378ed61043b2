//! Leave-animation parsing and the teardown wait policy.
//!
//! The parsed duration is a heuristic used only to decide which completion
//! signals to await; actual removal always waits for the real
//! animation-finished signal when one is expected, never a timer.

use std::cmp::Ordering;
use std::time::Duration;

/// Tokens that may appear in an animation shorthand besides the name and
/// the duration.
const SHORTHAND_KEYWORDS: &[&str] = &[
    "linear",
    "ease",
    "ease-in",
    "ease-out",
    "ease-in-out",
    "step-start",
    "step-end",
    "none",
    "forwards",
    "backwards",
    "both",
    "infinite",
    "normal",
    "reverse",
    "alternate",
    "alternate-reverse",
    "running",
    "paused",
];

/// Parsed exit-animation state for one layer, computed once per open.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationSpec {
    declaration: String,
    duration: Duration,
    name: Option<String>,
}

impl AnimationSpec {
    /// Parse a shorthand declaration into its declaration, duration and
    /// name components.
    pub fn parse(declaration: &str) -> Self {
        Self {
            declaration: declaration.to_string(),
            duration: leave_duration(declaration),
            name: animation_name(declaration),
        }
    }

    /// The "no animation" spec: empty declaration, zero duration.
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether this layer has an exit animation at all.
    pub fn is_animated(&self) -> bool {
        !self.declaration.is_empty()
    }

    /// The raw shorthand declaration (possibly empty).
    pub fn declaration(&self) -> &str {
        &self.declaration
    }

    /// Parsed duration; zero when no numeric token was found.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The animation name token, used to filter completion signals.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Extract the duration from a shorthand declaration.
///
/// Scans whitespace-separated tokens left to right and takes the first one
/// that parses as a plain or `s`-suffixed finite non-negative number, in
/// seconds. Returns zero when no such token exists or the value does not
/// fit in a `Duration`.
pub fn leave_duration(declaration: &str) -> Duration {
    declaration
        .split_whitespace()
        .find_map(parse_seconds)
        .and_then(|secs| Duration::try_from_secs_f32(secs).ok())
        .unwrap_or(Duration::ZERO)
}

/// Extract the animation name from a shorthand declaration: the first
/// token that is neither numeric nor a known shorthand keyword.
pub fn animation_name(declaration: &str) -> Option<String> {
    declaration
        .split_whitespace()
        .find(|token| !SHORTHAND_KEYWORDS.contains(token) && parse_seconds(token).is_none())
        .map(str::to_string)
}

fn parse_seconds(token: &str) -> Option<f32> {
    let numeric = token.strip_suffix('s').unwrap_or(token);
    numeric
        .parse::<f32>()
        .ok()
        .filter(|secs| secs.is_finite() && *secs >= 0.0)
}

/// Which completion signal(s) teardown must await before removing the
/// overlay subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitPolicy {
    /// Neither layer is animated; remove synchronously.
    Immediate,
    /// Await the dialog layer's signal only.
    Dialog,
    /// Await the backdrop layer's signal only.
    Backdrop,
    /// Await both signals (barrier over the pair).
    Both,
}

/// Compute the wait policy from both layers' parsed leave specs.
///
/// When both layers are animated with unequal durations, only the longer
/// one is awaited — the shorter is assumed finished by duration arithmetic.
/// Equal durations (including both zero but both declared) require both
/// signals.
pub fn wait_policy(dialog: &AnimationSpec, backdrop: &AnimationSpec) -> WaitPolicy {
    match (dialog.is_animated(), backdrop.is_animated()) {
        (false, false) => WaitPolicy::Immediate,
        (true, false) => WaitPolicy::Dialog,
        (false, true) => WaitPolicy::Backdrop,
        (true, true) => match dialog.duration().cmp(&backdrop.duration()) {
            Ordering::Greater => WaitPolicy::Dialog,
            Ordering::Less => WaitPolicy::Backdrop,
            Ordering::Equal => WaitPolicy::Both,
        },
    }
}

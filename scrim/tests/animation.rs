use std::time::Duration;

use scrim::animation::{animation_name, leave_duration, wait_policy, AnimationSpec, WaitPolicy};

// ============================================================================
// Duration Parser Tests
// ============================================================================

#[test]
fn test_duration_suffixed_seconds() {
    assert_eq!(
        leave_duration("fade-out 0.3s forwards"),
        Duration::from_secs_f32(0.3)
    );
}

#[test]
fn test_duration_name_first() {
    assert_eq!(
        leave_duration("enter-slide-down 0.8s"),
        Duration::from_secs_f32(0.8)
    );
}

#[test]
fn test_duration_empty_declaration() {
    assert_eq!(leave_duration(""), Duration::ZERO);
}

#[test]
fn test_duration_no_numeric_token() {
    assert_eq!(leave_duration("fade-out ease-in forwards"), Duration::ZERO);
}

#[test]
fn test_duration_plain_number() {
    // An unsuffixed numeric token still counts as the duration.
    assert_eq!(leave_duration("blink 2 linear"), Duration::from_secs(2));
}

#[test]
fn test_duration_first_numeric_token_wins() {
    // "3" here is an iteration count, but the scan takes the first numeric.
    assert_eq!(leave_duration("pulse 0.5s 3"), Duration::from_secs_f32(0.5));
}

#[test]
fn test_duration_token_order_irrelevant() {
    assert_eq!(
        leave_duration("0.8s enter-slide-down"),
        Duration::from_secs_f32(0.8)
    );
}

#[test]
fn test_duration_negative_token_skipped() {
    assert_eq!(leave_duration("slide -1s 0.4s"), Duration::from_secs_f32(0.4));
}

#[test]
fn test_duration_non_finite_tokens_skipped() {
    // "inf" and "NaN" parse as f32 but are not usable durations.
    assert_eq!(leave_duration("fade inf"), Duration::ZERO);
    assert_eq!(leave_duration("fade NaN 0.3s"), Duration::from_secs_f32(0.3));
}

#[test]
fn test_duration_overflowing_token_is_zero() {
    // Finite but too large for a Duration: falls back to zero, no panic.
    assert_eq!(leave_duration("fade 1e20s"), Duration::ZERO);
}

// ============================================================================
// Animation Name Tests
// ============================================================================

#[test]
fn test_name_is_non_keyword_token() {
    assert_eq!(
        animation_name("fade-out 0.3s forwards"),
        Some("fade-out".to_string())
    );
    assert_eq!(
        animation_name("enter-scaling 0.3s ease-out"),
        Some("enter-scaling".to_string())
    );
}

#[test]
fn test_name_absent() {
    assert_eq!(animation_name(""), None);
    assert_eq!(animation_name("0.3s"), None);
    assert_eq!(animation_name("0.3s ease-in forwards"), None);
}

// ============================================================================
// AnimationSpec Tests
// ============================================================================

#[test]
fn test_spec_parse() {
    let spec = AnimationSpec::parse("fade-out 0.3s forwards");
    assert!(spec.is_animated());
    assert_eq!(spec.declaration(), "fade-out 0.3s forwards");
    assert_eq!(spec.duration(), Duration::from_secs_f32(0.3));
    assert_eq!(spec.name(), Some("fade-out"));
}

#[test]
fn test_spec_none() {
    let spec = AnimationSpec::none();
    assert!(!spec.is_animated());
    assert_eq!(spec.duration(), Duration::ZERO);
    assert_eq!(spec.name(), None);
}

#[test]
fn test_spec_zero_duration_still_animated() {
    // Declared but zero-length: the layer still fires a completion signal.
    let spec = AnimationSpec::parse("fade-out 0s");
    assert!(spec.is_animated());
    assert_eq!(spec.duration(), Duration::ZERO);
}

// ============================================================================
// Wait Policy Tests
// ============================================================================

#[test]
fn test_policy_no_animations() {
    assert_eq!(
        wait_policy(&AnimationSpec::none(), &AnimationSpec::none()),
        WaitPolicy::Immediate
    );
}

#[test]
fn test_policy_only_dialog_animated() {
    assert_eq!(
        wait_policy(&AnimationSpec::parse("fade-out 0.3s"), &AnimationSpec::none()),
        WaitPolicy::Dialog
    );
}

#[test]
fn test_policy_only_backdrop_animated() {
    assert_eq!(
        wait_policy(&AnimationSpec::none(), &AnimationSpec::parse("fade-out 0.3s")),
        WaitPolicy::Backdrop
    );
}

#[test]
fn test_policy_longer_dialog_wins() {
    assert_eq!(
        wait_policy(
            &AnimationSpec::parse("fade-out 0.5s"),
            &AnimationSpec::parse("fade-out 0.2s")
        ),
        WaitPolicy::Dialog
    );
}

#[test]
fn test_policy_longer_backdrop_wins() {
    assert_eq!(
        wait_policy(
            &AnimationSpec::parse("fade-out 0.2s"),
            &AnimationSpec::parse("fade-out 0.5s")
        ),
        WaitPolicy::Backdrop
    );
}

#[test]
fn test_policy_equal_durations_need_both() {
    assert_eq!(
        wait_policy(
            &AnimationSpec::parse("fade-out 0.3s forwards"),
            &AnimationSpec::parse("fade-out 0.3s forwards")
        ),
        WaitPolicy::Both
    );
}

#[test]
fn test_policy_equal_zero_but_declared_need_both() {
    assert_eq!(
        wait_policy(
            &AnimationSpec::parse("fade-out 0s"),
            &AnimationSpec::parse("dim 0s")
        ),
        WaitPolicy::Both
    );
}

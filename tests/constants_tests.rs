// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod fx_constants {
    include!("../src/core/constants.rs");
}
mod dom_constants {
    include!("../src/constants.rs");
}

use dom_constants::*;
use fx_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_is_a_proper_fraction() {
    assert!(TRAIL_SMOOTHING > 0.0 && TRAIL_SMOOTHING < 1.0);
    assert!(TRAIL_MARKER_SIZE_PX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn random_ranges_are_ordered() {
    assert!(PARTICLE_SIZE_PX.0 < PARTICLE_SIZE_PX.1);
    assert!(PARTICLE_OPACITY.0 < PARTICLE_OPACITY.1);
    assert!(PARTICLE_OPACITY.1 <= 1.0);
    assert!(PARTICLE_FLOAT_SECS.0 < PARTICLE_FLOAT_SECS.1);
    assert!(PARTICLE_COUNT > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reveal_threshold_is_a_ratio() {
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    assert_eq!(REVEAL_ROOT_MARGIN.split_whitespace().count(), 4);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn status_outlives_the_round_trip() {
    assert!(STATUS_RESET_MS > SIMULATED_ROUND_TRIP_MS);
    assert!(TYPING_START_DELAY_MS > TYPING_CHAR_INTERVAL_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scroll_spy_fires_before_header_compacts_past_it() {
    assert!(SCROLL_SPY_OFFSET_PX > HEADER_COMPACT_THRESHOLD_PX);
    assert!(PARALLAX_RATE < 0.0);
}

#[test]
fn selectors_match_the_page_contract() {
    assert_eq!(CONTACT_FORM, ".contact-form");
    assert_eq!(FORM_STATUS_ID, "form-status");
    assert_eq!(PROJECT_CARD, ".project-card");
    assert!(REVEAL_TARGETS.contains(PROJECT_CARD));
    assert!(REVEAL_TARGETS.contains(CONTACT_FORM));
    assert!(TRAIL_MARKER_CSS.contains("opacity:0"));
}

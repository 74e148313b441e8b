// Host-side tests for particle, stylesheet and typing effect parameters.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod epoch {
        include!("../src/core/epoch.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
    pub mod stylesheet {
        include!("../src/core/stylesheet.rs");
    }
    pub mod typing {
        include!("../src/core/typing.rs");
    }
}

use crate::core::epoch::Epoch;
use crate::core::particles::*;
use crate::core::stylesheet::*;
use crate::core::typing::Typewriter;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn particle_field_respects_ranges() {
    let mut rng = StdRng::seed_from_u64(7);
    let field = particle_field(&mut rng, 20);
    assert_eq!(field.len(), 20);
    for p in &field {
        assert!((2.0..6.0).contains(&p.width_px), "width {}", p.width_px);
        assert!((2.0..6.0).contains(&p.height_px), "height {}", p.height_px);
        assert!((0.1..0.4).contains(&p.opacity), "opacity {}", p.opacity);
        assert!((0.0..100.0).contains(&p.left_pct));
        assert!((0.0..100.0).contains(&p.top_pct));
        assert!((10.0..20.0).contains(&p.float_secs), "secs {}", p.float_secs);
    }
}

#[test]
fn particle_field_is_randomised_but_seedable() {
    let a = particle_field(&mut StdRng::seed_from_u64(1), 5);
    let b = particle_field(&mut StdRng::seed_from_u64(1), 5);
    let c = particle_field(&mut StdRng::seed_from_u64(2), 5);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a.windows(2).any(|w| w[0] != w[1]));
}

#[test]
fn particle_width_and_height_are_drawn_independently() {
    let field = particle_field(&mut StdRng::seed_from_u64(3), 20);
    assert!(field.iter().any(|p| p.width_px != p.height_px));
}

#[test]
fn particle_css_uses_float_animation() {
    let p = ParticleSpec {
        width_px: 4.0,
        height_px: 3.0,
        opacity: 0.25,
        left_pct: 10.0,
        top_pct: 90.0,
        float_secs: 12.5,
    };
    let css = p.css();
    assert!(css.contains("width:4.00px;height:3.00px"));
    assert!(css.contains("rgba(59, 130, 246, 0.250)"));
    assert!(css.contains("left:10.00%;top:90.00%"));
    assert!(css.contains("animation:floatParticle 12.50s ease-in-out infinite"));
    assert!(css.contains("pointer-events:none"));
}

#[test]
fn stylesheet_defines_the_animation_names_in_use() {
    assert!(declares_keyframes(STYLESHEET, FLOAT_KEYFRAMES));
    assert!(declares_keyframes(STYLESHEET, RIPPLE_KEYFRAMES));
    assert!(!declares_keyframes(STYLESHEET, "pulse"));
    assert!(STYLESHEET.contains(&format!(".{} {{", REVEALED_CLASS)));
    assert!(STYLESHEET.contains(&format!(".{} {{", RIPPLE_CLASS)));
    assert!(STYLESHEET.contains(&format!(".{} {{", PARTICLE_CLASS)));
    assert!(STYLESHEET.contains("animation: ripple 0.6s linear"));
}

#[test]
fn keyframe_detection_matches_whole_names() {
    let css = "@keyframes rippleOut { to { opacity: 0; } }";
    assert!(declares_keyframes(css, "rippleOut"));
    assert!(!declares_keyframes(css, "ripple"));
}

#[test]
fn typewriter_reveals_one_char_per_step() {
    let mut w = Typewriter::new("Hi!");
    assert_eq!(w.advance().as_deref(), Some("H"));
    assert_eq!(w.advance().as_deref(), Some("Hi"));
    assert_eq!(w.advance().as_deref(), Some("Hi!"));
    assert!(w.is_done());
    assert_eq!(w.advance(), None);
}

#[test]
fn typewriter_timing() {
    let w = Typewriter::new("Hi!");
    assert_eq!(w.start_delay_ms, 1000);
    assert_eq!(w.interval_ms, 50);
    assert_eq!(w.total_duration_ms(), 1100);
    assert_eq!(Typewriter::new("").total_duration_ms(), 0);
}

#[test]
fn typewriter_counts_chars_not_bytes() {
    let mut w = Typewriter::new("héllo");
    assert_eq!(w.advance().as_deref(), Some("h"));
    assert_eq!(w.advance().as_deref(), Some("hé"));
    let mut last = None;
    while let Some(s) = w.advance() {
        last = Some(s);
    }
    assert_eq!(last.as_deref(), Some("héllo"));
}

#[test]
fn empty_tagline_has_nothing_to_type() {
    let mut w = Typewriter::new("");
    assert!(w.is_empty());
    assert!(w.is_done());
    assert_eq!(w.advance(), None);
}

#[test]
fn stale_ticket_stops_typing_and_keeps_the_full_text() {
    let run = Epoch::new();
    let mut w = Typewriter::new("Hello").bound_to(run.advance());
    assert_eq!(w.advance().as_deref(), Some("H"));
    assert_eq!(w.advance().as_deref(), Some("He"));
    assert_eq!(w.advance().as_deref(), Some("Hel"));

    // Tearing down mid-run.
    run.advance();
    assert!(w.is_cancelled());
    assert!(!w.is_done());
    assert_eq!(w.advance(), None);
    assert_eq!(w.text(), "Hello");

    // A fresh run starts from the restored text, not the partial prefix.
    let mut again = Typewriter::new(&w.text()).bound_to(run.advance());
    let mut last = None;
    while let Some(s) = again.advance() {
        last = Some(s);
    }
    assert_eq!(last.as_deref(), Some("Hello"));
    assert!(!again.is_cancelled());
}

#[test]
fn unbound_typewriter_is_never_cancelled() {
    let w = Typewriter::new("Hi");
    assert!(!w.is_cancelled());
}

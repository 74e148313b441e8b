// Keyframes and transition rules injected once at attach time. Elements may be
// created before this lands; animation names resolve when an animation starts.

pub const FLOAT_KEYFRAMES: &str = "floatParticle";
#[cfg(test)]
pub const RIPPLE_KEYFRAMES: &str = "ripple";
pub const REVEALED_CLASS: &str = "animate-in";
pub const RIPPLE_CLASS: &str = "ripple";
pub const PARTICLE_CLASS: &str = "floating-particle";

pub const STYLESHEET: &str = r#"
@keyframes floatParticle {
    0%, 100% { transform: translateY(0px) rotate(0deg); }
    50% { transform: translateY(-20px) rotate(180deg); }
}

.animate-in {
    opacity: 1 !important;
    transform: translateY(0) !important;
}

.ripple {
    position: absolute;
    border-radius: 50%;
    background: rgba(59, 130, 246, 0.3);
    transform: scale(0);
    animation: ripple 0.6s linear;
    pointer-events: none;
}

@keyframes ripple {
    to {
        transform: scale(4);
        opacity: 0;
    }
}

.floating-particle {
    animation: floatParticle 15s ease-in-out infinite;
}

.hero h1, .hero .tagline, .hero .hero-buttons {
    transition: all 0.8s cubic-bezier(0.4, 0, 0.2, 1);
}

.project-card {
    transition: all 0.6s cubic-bezier(0.4, 0, 0.2, 1);
}

.contact-form {
    transition: all 0.8s cubic-bezier(0.4, 0, 0.2, 1);
}

.nav-item {
    transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
}

.preview-content > *:not(.preview-nav) {
    transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
}

.chart-bar {
    transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
}
"#;

/// Marker attribute on the injected `<style>` so a second attach reuses it.
pub const STYLESHEET_MARKER: &str = "data-portfolio-fx";

/// True if `css` declares `@keyframes <name>`.
#[cfg(test)]
pub fn declares_keyframes(css: &str, name: &str) -> bool {
    css.lines().any(|line| {
        line.trim()
            .strip_prefix("@keyframes")
            .map(|rest| rest.trim_start().split_whitespace().next() == Some(name))
            .unwrap_or(false)
    })
}

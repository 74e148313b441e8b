// DOM contract: selectors and ids the presentation layer expects on the page.

// Navigation and scroll spy
pub const SAME_PAGE_LINKS: &str = "a[href^=\"#\"]";
pub const SPY_SECTIONS: &str = "section[id]";
pub const NAV_LINKS: &str = ".nav-links a";
pub const HEADER: &str = "header";
pub const ACTIVE_CLASS: &str = "active";
pub const HEADER_COMPACT_CLASS: &str = "scrolled";

// Hero
pub const HERO: &str = ".hero";
pub const HERO_CONTENT: &str = ".container";
pub const TAGLINE: &str = ".tagline";
pub const TYPING_CARET: &str = "2px solid var(--accent)";

// Project cards
pub const PROJECT_CARD: &str = ".project-card";
pub const PREVIEW_NAV_ITEMS: &str = ".nav-item";
pub const PREVIEW_CONTENT_ITEMS: &str = ".preview-content > *:not(.preview-nav)";
pub const PREVIEW_CHART_BARS: &str = ".chart-bar";
pub const CARD_TRANSITION: &str = "all 0.6s cubic-bezier(0.4, 0, 0.2, 1)";

// Generic scroll reveal targets
pub const REVEAL_TARGETS: &str =
    ".hero h1, .hero .tagline, .hero .hero-buttons, h2, .project-card, .contact-form";

// Contact form
pub const CONTACT_FORM: &str = ".contact-form";
pub const FORM_STATUS_ID: &str = "form-status";
pub const SUBMIT_BUTTON: &str = "button[type=\"submit\"]";
pub const ENDPOINT_ATTR: &str = "data-endpoint";

// Cursor trail marker
pub const TRAIL_CLASS: &str = "mouse-trail";
pub const TRAIL_MARKER_CSS: &str = "position:fixed;width:20px;height:20px;\
    background:radial-gradient(circle, rgba(59, 130, 246, 0.3) 0%, transparent 70%);\
    border-radius:50%;pointer-events:none;z-index:9999;transition:all 0.1s ease;opacity:0";

// Timing and geometry tuning shared by the pure presentation logic.

// Easing loop
pub const TRAIL_SMOOTHING: f32 = 0.1; // fraction of the remaining gap closed per frame
pub const TRAIL_MARKER_SIZE_PX: f32 = 20.0;

// Scroll tracking
pub const SCROLL_SPY_OFFSET_PX: f64 = 200.0; // a section counts as current this far before its top
pub const HEADER_COMPACT_THRESHOLD_PX: f64 = 100.0;
pub const PARALLAX_RATE: f64 = -0.5;

// Viewport observer
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_SUPPRESSED_OFFSET_PX: f64 = 30.0;
pub const CARD_REVEAL_STAGGER_MS: u32 = 200;

// Card hover preview staggers
pub const NAV_ITEM_STAGGER_MS: u32 = 100;
pub const PREVIEW_CONTENT_STAGGER_MS: u32 = 150;
pub const CHART_BAR_STAGGER_MS: u32 = 200;

// Ripple
pub const RIPPLE_LIFETIME_MS: u32 = 600;

// Particle field
pub const PARTICLE_COUNT: usize = 20;
pub const PARTICLE_SIZE_PX: (f32, f32) = (2.0, 6.0);
pub const PARTICLE_OPACITY: (f32, f32) = (0.1, 0.4);
pub const PARTICLE_FLOAT_SECS: (f32, f32) = (10.0, 20.0);

// Contact form
pub const SIMULATED_ROUND_TRIP_MS: u32 = 2000;
pub const STATUS_RESET_MS: u32 = 5000;

// Typing effect
pub const TYPING_START_DELAY_MS: u32 = 1000;
pub const TYPING_CHAR_INTERVAL_MS: u32 = 50;

use super::constants::*;

/// Runtime knobs for the presentation controller.
///
/// Defaults reproduce the stock page behaviour; bootstrap only overrides
/// `endpoint` (from the contact form's `data-endpoint`).
#[derive(Clone, Debug, PartialEq)]
pub struct FxConfig {
    pub trail_smoothing: f32,
    pub scroll_spy_offset: f64,
    pub header_compact_threshold: f64,
    pub parallax_rate: f64,
    pub particle_count: usize,
    pub card_reveal_stagger_ms: u32,
    pub simulated_round_trip_ms: u32,
    pub status_reset_ms: u32,
    pub typing: bool,
    /// Real submission endpoint; `None` keeps the simulated round trip.
    pub endpoint: Option<String>,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            trail_smoothing: TRAIL_SMOOTHING,
            scroll_spy_offset: SCROLL_SPY_OFFSET_PX,
            header_compact_threshold: HEADER_COMPACT_THRESHOLD_PX,
            parallax_rate: PARALLAX_RATE,
            particle_count: PARTICLE_COUNT,
            card_reveal_stagger_ms: CARD_REVEAL_STAGGER_MS,
            simulated_round_trip_ms: SIMULATED_ROUND_TRIP_MS,
            status_reset_ms: STATUS_RESET_MS,
            typing: true,
            endpoint: None,
        }
    }
}

impl FxConfig {
    /// Adopt `raw` as the submission endpoint if it looks like an http(s) URL.
    /// Blank values and in-page targets (`#...`, `javascript:`) are ignored.
    pub fn with_endpoint(mut self, raw: Option<&str>) -> Self {
        if let Some(url) = raw.map(str::trim).filter(|u| is_http_url(u)) {
            self.endpoint = Some(url.to_owned());
        }
        self
    }
}

fn is_http_url(raw: &str) -> bool {
    let lower = raw.to_ascii_lowercase();
    ["https://", "http://"]
        .iter()
        .find_map(|scheme| lower.strip_prefix(scheme))
        .is_some_and(|rest| !rest.is_empty())
}

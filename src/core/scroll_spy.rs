use super::constants::{HEADER_COMPACT_THRESHOLD_PX, PARALLAX_RATE, SCROLL_SPY_OFFSET_PX};

/// A page section as seen by the scroll tracker: its id and document top.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionAnchor {
    pub id: String,
    pub top: f64,
}

impl SectionAnchor {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Result of one scroll evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollFrame {
    pub current: Option<String>,
    pub active_links: Vec<bool>,
    pub header_compact: bool,
}

/// Last section (in document order) whose top is within `offset` of the
/// scroll position. `None` while above the first section's adjusted top.
pub fn current_section(sections: &[SectionAnchor], scroll_y: f64, offset: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| scroll_y >= s.top - offset)
        .last()
        .map(|s| s.id.as_str())
}

/// Section id referenced by a same-page link, or `None` for a bare `#` or an
/// off-page href.
#[inline]
pub fn fragment_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

/// One flag per navigation href; at most one is set.
pub fn active_links<S: AsRef<str>>(hrefs: &[S], current: Option<&str>) -> Vec<bool> {
    let mut seen = false;
    hrefs
        .iter()
        .map(|href| {
            let hit = !seen && current.is_some() && fragment_target(href.as_ref()) == current;
            seen |= hit;
            hit
        })
        .collect()
}

#[inline]
pub fn header_compact(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[inline]
pub fn parallax_offset(scroll_y: f64, rate: f64) -> f64 {
    scroll_y * rate
}

/// Scroll-spy tuning bundled so the scroll listener holds a single value.
#[derive(Clone, Copy, Debug)]
pub struct ScrollTracker {
    pub spy_offset: f64,
    pub compact_threshold: f64,
    pub parallax_rate: f64,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self {
            spy_offset: SCROLL_SPY_OFFSET_PX,
            compact_threshold: HEADER_COMPACT_THRESHOLD_PX,
            parallax_rate: PARALLAX_RATE,
        }
    }
}

impl ScrollTracker {
    pub fn evaluate<S: AsRef<str>>(
        &self,
        sections: &[SectionAnchor],
        nav_hrefs: &[S],
        scroll_y: f64,
    ) -> ScrollFrame {
        let current = current_section(sections, scroll_y, self.spy_offset);
        ScrollFrame {
            active_links: active_links(nav_hrefs, current),
            current: current.map(str::to_owned),
            header_compact: header_compact(scroll_y, self.compact_threshold),
        }
    }

    #[inline]
    pub fn parallax(&self, scroll_y: f64) -> f64 {
        parallax_offset(scroll_y, self.parallax_rate)
    }
}

use super::constants::{CHART_BAR_STAGGER_MS, NAV_ITEM_STAGGER_MS, PREVIEW_CONTENT_STAGGER_MS};

/// Element groups inside a project card preview.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PreviewGroup {
    NavItem,
    Content,
    ChartBar,
}

impl PreviewGroup {
    pub const ALL: [PreviewGroup; 3] = [
        PreviewGroup::NavItem,
        PreviewGroup::Content,
        PreviewGroup::ChartBar,
    ];

    pub fn stagger_ms(self) -> u32 {
        match self {
            PreviewGroup::NavItem => NAV_ITEM_STAGGER_MS,
            PreviewGroup::Content => PREVIEW_CONTENT_STAGGER_MS,
            PreviewGroup::ChartBar => CHART_BAR_STAGGER_MS,
        }
    }

    /// Inline style written when the pointer enters the card.
    pub fn shown_style(self) -> &'static [(&'static str, &'static str)] {
        match self {
            PreviewGroup::NavItem | PreviewGroup::Content => {
                &[("transform", "translateY(0)"), ("opacity", "1")]
            }
            PreviewGroup::ChartBar => &[("animation", "pulse 2s ease-in-out infinite")],
        }
    }

    /// Inline style written when the pointer leaves the card.
    pub fn resting_style(self) -> &'static [(&'static str, &'static str)] {
        match self {
            PreviewGroup::NavItem => &[("transform", "translateY(10px)"), ("opacity", "0.7")],
            PreviewGroup::Content => &[("transform", "translateY(10px)"), ("opacity", "0.8")],
            PreviewGroup::ChartBar => &[("animation", "none")],
        }
    }
}

/// A single inline-style write against `group[index]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreviewStep {
    pub group: PreviewGroup,
    pub index: usize,
    pub delay_ms: u32,
    pub style: &'static [(&'static str, &'static str)],
}

/// Number of elements per group found inside one card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PreviewCounts {
    pub nav_items: usize,
    pub content: usize,
    pub chart_bars: usize,
}

impl PreviewCounts {
    pub fn of(&self, group: PreviewGroup) -> usize {
        match group {
            PreviewGroup::NavItem => self.nav_items,
            PreviewGroup::Content => self.content,
            PreviewGroup::ChartBar => self.chart_bars,
        }
    }
}

/// Staggered reveal schedule for a pointer entering a card.
pub fn enter_plan(counts: PreviewCounts) -> Vec<PreviewStep> {
    PreviewGroup::ALL
        .iter()
        .flat_map(|&group| {
            (0..counts.of(group)).map(move |index| PreviewStep {
                group,
                index,
                delay_ms: group.stagger_ms().saturating_mul(index as u32),
                style: group.shown_style(),
            })
        })
        .collect()
}

/// Immediate reset for a pointer leaving a card; no stagger on exit.
pub fn leave_plan(counts: PreviewCounts) -> Vec<PreviewStep> {
    PreviewGroup::ALL
        .iter()
        .flat_map(|&group| {
            (0..counts.of(group)).map(move |index| PreviewStep {
                group,
                index,
                delay_ms: 0,
                style: group.resting_style(),
            })
        })
        .collect()
}

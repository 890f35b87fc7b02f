/// Distance from the viewport top, in pixels, at which a section counts as reached.
pub const ACTIVE_SECTION_THRESHOLD: f64 = 150.0;

/// Space left between the viewport top and a section after navigating to it.
pub const NAVIGATION_OFFSET: f64 = 100.0;

/// Minimum distance kept between a tooltip and every viewport edge.
pub const TOOLTIP_PADDING: f64 = 16.0;

/// Distance between a tooltip and its trigger.
pub const TOOLTIP_GAP: f64 = 12.0;

/// Placeholder shown for terms without a glossary entry.
pub const MISSING_DEFINITION: &str = "Определение недоступно";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackerConfig {
    pub threshold: f64,
    pub navigation_offset: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            threshold: ACTIVE_SECTION_THRESHOLD,
            navigation_offset: NAVIGATION_OFFSET,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipConfig {
    pub padding: f64,
    pub gap: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            padding: TOOLTIP_PADDING,
            gap: TOOLTIP_GAP,
        }
    }
}

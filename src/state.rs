use crate::{
    config::TrackerConfig,
    geometry::ScrollMetrics,
    sections::Section,
    tooltip::TooltipPosition,
    tracker::{self, Anchor},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    pub progress: f64,
    pub active: Option<Section>,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            progress: 0.0,
            active: Some(Section::Intro),
        }
    }
}

impl ScrollState {
    /// State after a scroll event, given fresh measurements of the page.
    pub fn on_scroll(
        self,
        metrics: &ScrollMetrics,
        anchors: &[Anchor],
        config: &TrackerConfig,
    ) -> Self {
        Self {
            progress: tracker::progress_percent(metrics),
            active: tracker::active_section(anchors, self.active, config.threshold),
        }
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == Some(section)
    }

    pub fn progress_style(&self) -> String {
        format!("width: {}%;", self.progress)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TooltipEvent {
    /// Pointer or focus entered the term. `None` when the tooltip couldn't be
    /// measured and placement has to wait.
    Enter(Option<TooltipPosition>),
    Leave,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TooltipState {
    pub visibility: Visibility,
    pub position: TooltipPosition,
}

impl TooltipState {
    pub fn apply(self, event: TooltipEvent) -> Self {
        match event {
            TooltipEvent::Enter(placement) => Self {
                visibility: Visibility::Visible,
                position: placement.unwrap_or(self.position),
            },
            TooltipEvent::Leave => Self {
                visibility: Visibility::Hidden,
                ..self
            },
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }
}

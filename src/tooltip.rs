use crate::{
    config::TooltipConfig,
    geometry::{Rect, Size},
};

/// Everything measured from the page that placing a tooltip depends on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipGeometry {
    pub trigger: Rect,
    pub tooltip: Size,
    pub viewport: Size,
}

/// Top-left corner of a tooltip in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TooltipPosition {
    pub top: f64,
    pub left: f64,
}

impl TooltipPosition {
    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }

    pub fn rect(&self, size: Size) -> Rect {
        Rect::new(self.left, self.top, size.width, size.height)
    }

    /// Inline style for a `position: fixed` element.
    pub fn style(&self) -> String {
        format!("top: {}px; left: {}px;", self.top, self.left)
    }
}

/// Places a tooltip centered above its trigger, keeping it `padding` away
/// from the viewport edges.
///
/// Horizontally the tooltip is clamped to the left edge first, then to the
/// right edge. Vertically it flips below the trigger when there is no room
/// above, and is finally pulled up if it would overflow the bottom edge.
pub fn place(geometry: &TooltipGeometry, config: &TooltipConfig) -> TooltipPosition {
    let TooltipGeometry {
        trigger,
        tooltip,
        viewport,
    } = *geometry;
    let padding = config.padding;

    let mut left = trigger.center_x() - tooltip.width / 2.0;
    if left < padding {
        left = padding;
    } else if left + tooltip.width > viewport.width - padding {
        left = viewport.width - tooltip.width - padding;
    }

    let mut top = trigger.top - tooltip.height - config.gap;
    if top < padding {
        // a trigger cut off by the top edge can't push the tooltip past it
        top = (trigger.bottom() + config.gap).max(padding);
    }
    if top + tooltip.height > viewport.height - padding {
        top = viewport.height - tooltip.height - padding;
    }

    TooltipPosition { top, left }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn geometry(trigger: Rect, tooltip: Size) -> TooltipGeometry {
        TooltipGeometry {
            trigger,
            tooltip,
            viewport: Size::new(800.0, 600.0),
        }
    }

    #[test]
    fn sits_centered_above_the_trigger() {
        let geometry = geometry(Rect::new(300.0, 300.0, 50.0, 20.0), Size::new(200.0, 60.0));
        let position = place(&geometry, &TooltipConfig::default());
        assert_eq!(position, TooltipPosition::new(228.0, 225.0));
    }

    #[test]
    fn flips_below_without_room_above() {
        let geometry = geometry(Rect::new(100.0, 40.0, 50.0, 20.0), Size::new(200.0, 60.0));
        let position = place(&geometry, &TooltipConfig::default());
        assert_eq!(position, TooltipPosition::new(72.0, 25.0));
    }

    #[test]
    fn clamps_to_the_left_edge() {
        let geometry = geometry(Rect::new(0.0, 300.0, 30.0, 20.0), Size::new(200.0, 60.0));
        let position = place(&geometry, &TooltipConfig::default());
        assert_eq!(position.left, 16.0);
    }

    #[test]
    fn clamps_to_the_right_edge() {
        let geometry = geometry(Rect::new(760.0, 300.0, 30.0, 20.0), Size::new(200.0, 60.0));
        let position = place(&geometry, &TooltipConfig::default());
        assert_eq!(position.left, 800.0 - 200.0 - 16.0);
    }

    #[test]
    fn pulled_up_when_flipping_overflows_the_bottom() {
        // tall tooltip: no room above, and below runs past the bottom edge
        let geometry = geometry(Rect::new(300.0, 100.0, 50.0, 20.0), Size::new(200.0, 500.0));
        let position = place(&geometry, &TooltipConfig::default());
        assert_eq!(position.top, 600.0 - 500.0 - 16.0);
    }

    #[test]
    fn stays_below_padding_for_trigger_cut_off_at_the_top() {
        let geometry = geometry(Rect::new(300.0, -18.0, 50.0, 20.0), Size::new(200.0, 60.0));
        let position = place(&geometry, &TooltipConfig::default());
        assert_eq!(position.top, 16.0);
    }

    #[test]
    fn style_uses_pixels() {
        assert_eq!(
            TooltipPosition::new(72.0, 25.5).style(),
            "top: 72px; left: 25.5px;"
        );
    }

    fn fitting_geometry() -> impl Strategy<Value = TooltipGeometry> {
        (100u32..2000, 100u32..2000).prop_flat_map(|(vw, vh)| {
            (
                Just(vw),
                Just(vh),
                1..=vw - 32,
                1..=vh - 32,
                -200i32..2200,
                -200i32..2200,
                1u32..300,
                1u32..100,
            )
                .prop_map(|(vw, vh, tw, th, x, y, w, h)| TooltipGeometry {
                    trigger: Rect::new(f64::from(x), f64::from(y), f64::from(w), f64::from(h)),
                    tooltip: Size::new(f64::from(tw), f64::from(th)),
                    viewport: Size::new(f64::from(vw), f64::from(vh)),
                })
        })
    }

    proptest! {
        #[test]
        fn always_inside_the_padded_viewport(geometry in fitting_geometry()) {
            let config = TooltipConfig::default();
            let position = place(&geometry, &config);
            let rect = position.rect(geometry.tooltip);
            prop_assert!(
                rect.fits_within(geometry.viewport, config.padding),
                "{:?} escapes {:?}",
                rect,
                geometry.viewport
            );
        }
    }
}

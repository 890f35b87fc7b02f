/// Width and height in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A bounding rectangle in viewport coordinates, as reported by
/// `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Whether `self` lies within `outer` shrunk by `inset` on every side.
    pub fn fits_within(&self, outer: Size, inset: f64) -> bool {
        self.left >= inset
            && self.top >= inset
            && self.right() <= outer.width - inset
            && self.bottom() <= outer.height - inset
    }
}

/// Document scroll measurements taken from the root element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,          // scrollTop
    pub total_height: f64,    // scrollHeight
    pub viewport_height: f64, // clientHeight
}

impl ScrollMetrics {
    pub fn new(offset: f64, total_height: f64, viewport_height: f64) -> Self {
        Self {
            offset,
            total_height,
            viewport_height,
        }
    }

    pub fn max_scroll(&self) -> f64 {
        self.total_height - self.viewport_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let rect = Rect::new(100.0, 40.0, 50.0, 20.0);
        assert_eq!(rect.right(), 150.0);
        assert_eq!(rect.bottom(), 60.0);
        assert_eq!(rect.center_x(), 125.0);
        assert_eq!(rect.size(), Size::new(50.0, 20.0));
    }

    #[test]
    fn fits_within_respects_inset() {
        let viewport = Size::new(800.0, 600.0);
        assert!(Rect::new(16.0, 16.0, 768.0, 568.0).fits_within(viewport, 16.0));
        assert!(!Rect::new(15.0, 16.0, 100.0, 100.0).fits_within(viewport, 16.0));
        assert!(!Rect::new(16.0, 16.0, 100.0, 569.0).fits_within(viewport, 16.0));
    }
}

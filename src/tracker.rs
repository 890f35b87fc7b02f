use crate::{config::TrackerConfig, geometry::ScrollMetrics, sections::Section};

/// Top edge of a mounted section anchor, relative to the viewport top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub section: Section,
    pub top: f64,
}

impl Anchor {
    pub fn new(section: Section, top: f64) -> Self {
        Self { section, top }
    }
}

/// How far the document has been scrolled, in percent.
///
/// Documents that fit into the viewport have nothing to scroll and report 0.
pub fn progress_percent(metrics: &ScrollMetrics) -> f64 {
    let max_scroll = metrics.max_scroll();
    if !max_scroll.is_finite() || max_scroll <= 0.0 {
        return 0.0;
    }

    let percent = metrics.offset / max_scroll * 100.0;
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}

/// Picks the active section from anchors given in document order.
///
/// Scans from the last anchor backward and takes the first one whose top edge
/// has crossed `threshold`. When none has, `previous` stays active.
pub fn active_section(
    anchors: &[Anchor],
    previous: Option<Section>,
    threshold: f64,
) -> Option<Section> {
    anchors
        .iter()
        .rev()
        .find(|anchor| anchor.top <= threshold)
        .map(|anchor| anchor.section)
        .or(previous)
}

/// Window scroll offset that brings the section `id` into view, or `None` if
/// the id is unknown or `offset_of` can't find its anchor.
pub fn scroll_target<F>(id: &str, offset_of: F, config: &TrackerConfig) -> Option<f64>
where
    F: FnOnce(Section) -> Option<f64>,
{
    let section = match id.parse::<Section>() {
        Ok(section) => section,
        Err(err) => {
            log::debug!("not navigating: {}", err);
            return None;
        }
    };

    let Some(offset_top) = offset_of(section) else {
        log::debug!("not navigating: no anchor for {}", section);
        return None;
    };

    Some(offset_top - config.navigation_offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn anchors(tops: [f64; 5]) -> Vec<Anchor> {
        Section::ALL
            .into_iter()
            .zip(tops)
            .map(|(section, top)| Anchor::new(section, top))
            .collect()
    }

    #[test]
    fn progress_is_zero_without_scrollable_height() {
        assert_eq!(progress_percent(&ScrollMetrics::new(0.0, 600.0, 600.0)), 0.0);
        assert_eq!(progress_percent(&ScrollMetrics::new(0.0, 400.0, 600.0)), 0.0);
        assert_eq!(progress_percent(&ScrollMetrics::new(10.0, 600.0, 600.0)), 0.0);
    }

    #[test]
    fn progress_at_bounds() {
        let top = ScrollMetrics::new(0.0, 3000.0, 1000.0);
        let middle = ScrollMetrics::new(1000.0, 3000.0, 1000.0);
        let bottom = ScrollMetrics::new(2000.0, 3000.0, 1000.0);
        assert_eq!(progress_percent(&top), 0.0);
        assert_eq!(progress_percent(&middle), 50.0);
        assert_eq!(progress_percent(&bottom), 100.0);
    }

    #[test]
    fn progress_is_clamped_on_overscroll() {
        // rubber-band scrolling reports offsets outside [0, max]
        assert_eq!(progress_percent(&ScrollMetrics::new(-40.0, 3000.0, 1000.0)), 0.0);
        assert_eq!(progress_percent(&ScrollMetrics::new(2100.0, 3000.0, 1000.0)), 100.0);
    }

    #[test]
    fn progress_ignores_non_finite_metrics() {
        assert_eq!(progress_percent(&ScrollMetrics::new(f64::NAN, 3000.0, 1000.0)), 0.0);
        assert_eq!(progress_percent(&ScrollMetrics::new(10.0, f64::INFINITY, 1000.0)), 0.0);
    }

    #[test]
    fn topmost_crossed_section_wins() {
        let anchors = anchors([-600.0, -100.0, 50.0, 900.0, 1700.0]);
        assert_eq!(
            active_section(&anchors, Some(Section::Intro), 150.0),
            Some(Section::Players)
        );
    }

    #[test]
    fn threshold_is_inclusive() {
        let anchors = anchors([-600.0, 150.0, 151.0, 900.0, 1700.0]);
        assert_eq!(active_section(&anchors, None, 150.0), Some(Section::Principles));
    }

    #[test]
    fn previous_section_is_carried_over() {
        let anchors = anchors([200.0, 700.0, 1400.0, 2200.0, 3000.0]);
        assert_eq!(
            active_section(&anchors, Some(Section::Moderators), 150.0),
            Some(Section::Moderators)
        );
        assert_eq!(active_section(&anchors, None, 150.0), None);
    }

    #[test]
    fn missing_anchors_are_skipped() {
        let anchors = vec![
            Anchor::new(Section::Intro, -900.0),
            Anchor::new(Section::Players, -200.0),
            Anchor::new(Section::Faq, 400.0),
        ];
        assert_eq!(
            active_section(&anchors, Some(Section::Intro), 150.0),
            Some(Section::Players)
        );
    }

    #[test]
    fn last_section_wins_when_everything_is_crossed() {
        let anchors = anchors([-4000.0, -3000.0, -2000.0, -1000.0, -10.0]);
        assert_eq!(active_section(&anchors, None, 150.0), Some(Section::Faq));
    }

    #[test]
    fn scroll_target_leaves_room_above_the_section() {
        let offsets: HashMap<Section, f64> = [(Section::Players, 1200.0)].into();
        let target = scroll_target(
            "players",
            |section| offsets.get(&section).copied(),
            &TrackerConfig::default(),
        );
        assert_eq!(target, Some(1100.0));
    }

    #[test]
    fn scroll_target_for_unknown_or_unmounted_sections() {
        let config = TrackerConfig::default();
        assert_eq!(scroll_target("rules", |_| Some(0.0), &config), None);
        assert_eq!(scroll_target("faq", |_| None, &config), None);
    }

    proptest! {
        #[test]
        fn progress_stays_in_range_and_grows(
            viewport in 1u32..2000,
            extra in 0u32..20_000,
            a in 0u32..=20_000,
            b in 0u32..=20_000,
        ) {
            let total = f64::from(viewport + extra);
            let max_scroll = f64::from(extra);
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let low = f64::from(low).min(max_scroll);
            let high = f64::from(high).min(max_scroll);

            let p_low = progress_percent(&ScrollMetrics::new(low, total, f64::from(viewport)));
            let p_high = progress_percent(&ScrollMetrics::new(high, total, f64::from(viewport)));

            prop_assert!((0.0..=100.0).contains(&p_low));
            prop_assert!((0.0..=100.0).contains(&p_high));
            prop_assert!(p_low <= p_high);
        }

        #[test]
        fn some_section_stays_active_once_measured(
            tops in proptest::array::uniform5(-5000.0f64..5000.0),
            previous in proptest::sample::select(Section::ALL.to_vec()),
        ) {
            let active = active_section(&anchors(tops), Some(previous), 150.0);
            prop_assert!(active.is_some());
        }
    }
}

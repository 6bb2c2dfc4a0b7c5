//! Scroll-driven active section tracking.
//!
//! The viewport reports a [`ViewportSnapshot`] on every scroll event and the
//! [`ScrollTracker`] picks the section under the probe line
//! (`scroll_y + probe_offset`). Rendering layers implement
//! [`ViewportObserver`] to feed snapshots in.

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::section::SectionId;

/// Vertical extent of a rendered section, in page pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub id: SectionId,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: SectionId, top: f64, height: f64) -> Self {
        Self { id, top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open: the bottom edge belongs to the next section.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }
}

/// Layout reported by the viewport on a scroll event.
///
/// Sections that are not rendered are simply absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportSnapshot {
    pub scroll_y: f64,
    pub sections: Vec<SectionBounds>,
}

impl ViewportSnapshot {
    pub fn bounds_of(&self, id: SectionId) -> Option<&SectionBounds> {
        self.sections.iter().find(|b| b.id == id)
    }
}

/// Source of scroll snapshots, owned by the shell for its lifetime.
#[allow(async_fn_in_trait)]
pub trait ViewportObserver {
    /// Wait for the next scroll event. `None` once the viewport is gone.
    async fn next_snapshot(&mut self) -> Option<ViewportSnapshot>;

    /// Detach from the viewport. Later calls to `next_snapshot` return `None`.
    fn disconnect(&mut self);
}

pub const DEFAULT_PROBE_OFFSET: f64 = 100.0;

/// Maps scroll positions to the active section.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTracker {
    order: Vec<SectionId>,
    probe_offset: f64,
}

impl ScrollTracker {
    pub fn new(order: Vec<SectionId>, probe_offset: f64) -> Self {
        Self {
            order,
            probe_offset,
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.section_order(), config.timings.scroll_probe_offset)
    }

    pub fn order(&self) -> &[SectionId] {
        &self.order
    }

    /// First section, in tracking order, whose bounds contain the probe line.
    pub fn locate(&self, snapshot: &ViewportSnapshot) -> Option<SectionId> {
        let probe = snapshot.scroll_y + self.probe_offset;
        self.order
            .iter()
            .copied()
            .find(|id| snapshot.bounds_of(*id).is_some_and(|b| b.contains(probe)))
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(SectionId::all().to_vec(), DEFAULT_PROBE_OFFSET)
    }
}

/// Pull snapshots until the observer closes, reporting section changes.
///
/// `on_change` only fires when the located section differs from the last
/// one reported, so bursts of scroll events inside one section cost nothing.
pub async fn track_scroll<O, F>(observer: &mut O, tracker: &ScrollTracker, mut on_change: F)
where
    O: ViewportObserver,
    F: FnMut(SectionId),
{
    let mut last = None;
    while let Some(snapshot) = observer.next_snapshot().await {
        let Some(section) = tracker.locate(&snapshot) else {
            continue;
        };
        if last != Some(section) {
            tracing::debug!(%section, scroll_y = snapshot.scroll_y, "active section changed");
            last = Some(section);
            on_change(section);
        }
    }
    tracing::debug!("viewport observer closed");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new(SectionId::Home, 0.0, 400.0),
            SectionBounds::new(SectionId::About, 400.0, 500.0),
            SectionBounds::new(SectionId::Experience, 900.0, 600.0),
            SectionBounds::new(SectionId::Companies, 1500.0, 700.0),
            SectionBounds::new(SectionId::Contact, 2200.0, 800.0),
        ]
    }

    fn at(scroll_y: f64) -> ViewportSnapshot {
        ViewportSnapshot {
            scroll_y,
            sections: page(),
        }
    }

    #[test]
    fn scroll_500_lands_in_about() {
        let tracker = ScrollTracker::default();
        assert_eq!(tracker.locate(&at(500.0)), Some(SectionId::About));
    }

    #[test]
    fn probe_offset_shifts_boundary() {
        let tracker = ScrollTracker::default();
        // 299 + 100 = 399, still home; 300 + 100 = 400, about starts.
        assert_eq!(tracker.locate(&at(299.0)), Some(SectionId::Home));
        assert_eq!(tracker.locate(&at(300.0)), Some(SectionId::About));
    }

    #[test]
    fn past_the_last_section_is_none() {
        let tracker = ScrollTracker::default();
        assert_eq!(tracker.locate(&at(2900.0)), None);
    }

    #[test]
    fn missing_sections_are_skipped() {
        let tracker = ScrollTracker::default();
        let snapshot = ViewportSnapshot {
            scroll_y: 500.0,
            sections: vec![SectionBounds::new(SectionId::Contact, 0.0, 1000.0)],
        };
        assert_eq!(tracker.locate(&snapshot), Some(SectionId::Contact));
    }

    #[test]
    fn overlapping_bounds_prefer_tracking_order() {
        let snapshot = ViewportSnapshot {
            scroll_y: 0.0,
            sections: vec![
                SectionBounds::new(SectionId::About, 0.0, 500.0),
                SectionBounds::new(SectionId::Home, 0.0, 500.0),
            ],
        };
        assert_eq!(
            ScrollTracker::default().locate(&snapshot),
            Some(SectionId::Home)
        );

        let reversed = ScrollTracker::new(vec![SectionId::About, SectionId::Home], 100.0);
        assert_eq!(reversed.locate(&snapshot), Some(SectionId::About));
    }

    #[test]
    fn untracked_sections_never_match() {
        let tracker = ScrollTracker::new(vec![SectionId::Home], 100.0);
        assert_eq!(tracker.locate(&at(500.0)), None);
    }

    #[test]
    fn snapshot_deserializes_from_webview_payload() {
        let snapshot: ViewportSnapshot = serde_json::from_str(
            r#"{"scroll_y":500,"sections":[{"id":"home","top":0,"height":400}]}"#,
        )
        .unwrap();
        assert_eq!(snapshot.scroll_y, 500.0);
        assert_eq!(
            snapshot.bounds_of(SectionId::Home),
            Some(&SectionBounds::new(SectionId::Home, 0.0, 400.0))
        );
    }
}

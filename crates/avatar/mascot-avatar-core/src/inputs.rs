//! Input contracts for the avatar core.
//!
//! Hosts translate whatever raw events they receive (pointer, touch, device
//! orientation, viewport resize) into [`InputEvent`]s and pass them to
//! `Avatar::update()` each frame. The aggregator folds them into a single
//! normalized sample with last-writer-wins semantics: if events arrive faster
//! than frames render, intermediate values are simply overwritten.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::config::OrientationTuning;

/// Normalized driving input: both components always lie in [-1, 1], with
/// positive y meaning "up".
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    /// Sample at the viewport center; the rig faces forward.
    pub const CENTER: PointerSample = PointerSample { x: 0.0, y: 0.0 };

    /// Build a sample, clamping both components into [-1, 1].
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(-1.0, 1.0),
            y: y.clamp(-1.0, 1.0),
        }
    }
}

/// Viewport the avatar renders into; pointer/touch coordinates are relative
/// to its top-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Viewport {
    /// Map viewport-relative pixel coordinates to a normalized sample.
    /// Fractions are bounded by construction inside the viewport; coordinates
    /// outside it clamp.
    pub fn normalize(&self, px: f32, py: f32) -> PointerSample {
        if self.width <= 0.0 || self.height <= 0.0 {
            return PointerSample::CENTER;
        }
        let x = (px / self.width) * 2.0 - 1.0;
        let y = -((py / self.height) * 2.0 - 1.0);
        PointerSample::new(x, y)
    }
}

/// Binary layout classification from viewport width.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    Compact,
    Full,
}

/// A raw host event, in host units (pixels / degrees).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Pointer moved to viewport-relative pixel coordinates.
    PointerMoved { x: f32, y: f32 },
    /// Primary touch moved to viewport-relative pixel coordinates.
    TouchMoved { x: f32, y: f32 },
    /// Device orientation changed. Angles are in degrees; either may be
    /// absent on devices that never report them.
    OrientationChanged {
        /// Front-back tilt.
        beta: Option<f32>,
        /// Left-right tilt.
        gamma: Option<f32>,
    },
    /// The hosting viewport was resized.
    ViewportResized { width: f32, height: f32 },
}

/// Events to fold in before stepping, oldest first.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Inputs {
    #[serde(default)]
    pub events: Vec<InputEvent>,
}

impl Inputs {
    pub fn single(event: InputEvent) -> Self {
        Self {
            events: vec![event],
        }
    }
}

/// Folds raw events into the latest normalized sample and layout mode.
#[derive(Clone, Debug)]
pub struct Aggregator {
    viewport: Viewport,
    layout: LayoutMode,
    compact_max_width: f32,
    latest: PointerSample,
}

impl Aggregator {
    pub fn new(viewport: Viewport, compact_max_width: f32) -> Self {
        Self {
            layout: classify(viewport.width, compact_max_width),
            viewport,
            compact_max_width,
            latest: PointerSample::CENTER,
        }
    }

    /// Fold one event in. Orientation events missing either angle are
    /// ignored entirely; the previous sample stays in effect.
    pub fn ingest(&mut self, event: &InputEvent, orientation: &OrientationTuning) {
        match *event {
            InputEvent::PointerMoved { x, y } | InputEvent::TouchMoved { x, y } => {
                self.latest = self.viewport.normalize(x, y);
            }
            InputEvent::OrientationChanged { beta, gamma } => {
                let (beta, gamma) = match (beta, gamma) {
                    (Some(b), Some(g)) => (b, g),
                    _ => return,
                };
                let x = (gamma / orientation.tilt_sensitivity).clamp(-1.0, 1.0);
                let y = (-(beta - orientation.neutral_beta) / orientation.tilt_sensitivity)
                    .clamp(-1.0, 1.0);
                self.latest = PointerSample { x, y };
            }
            InputEvent::ViewportResized { width, height } => {
                self.viewport = Viewport { width, height };
                self.layout = classify(width, self.compact_max_width);
            }
        }
    }

    /// Overwrite the latest sample with one normalized elsewhere (mailbox
    /// deliveries from a threaded input source).
    pub fn overwrite(&mut self, sample: PointerSample) {
        self.latest = sample;
    }

    /// Latest normalized sample (center until the first qualifying event).
    pub fn latest(&self) -> PointerSample {
        self.latest
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

fn classify(width: f32, compact_max_width: f32) -> LayoutMode {
    if width <= compact_max_width {
        LayoutMode::Compact
    } else {
        LayoutMode::Full
    }
}

/// Single-slot latest-value cell for hosts whose input sources run on a
/// different thread than the frame loop. Posting overwrites any undelivered
/// sample; the frame tick drains at most one value.
#[derive(Clone, Debug, Default)]
pub struct SampleMailbox {
    slot: Arc<Mutex<Option<PointerSample>>>,
}

impl SampleMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a sample, replacing any undelivered one.
    pub fn post(&self, sample: PointerSample) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(sample);
        }
    }

    /// Take the latest sample, leaving the slot empty.
    pub fn drain(&self) -> Option<PointerSample> {
        self.slot.lock().ok().and_then(|mut slot| slot.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuning() -> OrientationTuning {
        OrientationTuning::default()
    }

    #[test]
    fn normalize_maps_corners_and_center() {
        let vp = Viewport {
            width: 200.0,
            height: 100.0,
        };
        assert_eq!(vp.normalize(100.0, 50.0), PointerSample::CENTER);
        assert_eq!(vp.normalize(0.0, 0.0), PointerSample { x: -1.0, y: 1.0 });
        assert_eq!(
            vp.normalize(200.0, 100.0),
            PointerSample { x: 1.0, y: -1.0 }
        );
    }

    #[test]
    fn normalize_clamps_outside_coordinates() {
        let vp = Viewport {
            width: 200.0,
            height: 100.0,
        };
        let s = vp.normalize(-50.0, 400.0);
        assert_eq!(s, PointerSample { x: -1.0, y: -1.0 });
    }

    #[test]
    fn orientation_missing_angle_is_ignored() {
        let mut agg = Aggregator::new(Viewport::default(), 768.0);
        agg.ingest(&InputEvent::PointerMoved { x: 960.0, y: 180.0 }, &tuning());
        let before = agg.latest();
        agg.ingest(
            &InputEvent::OrientationChanged {
                beta: None,
                gamma: Some(10.0),
            },
            &tuning(),
        );
        agg.ingest(
            &InputEvent::OrientationChanged {
                beta: Some(10.0),
                gamma: None,
            },
            &tuning(),
        );
        assert_eq!(agg.latest(), before);
    }

    #[test]
    fn orientation_scales_and_clamps() {
        let mut agg = Aggregator::new(Viewport::default(), 768.0);
        agg.ingest(
            &InputEvent::OrientationChanged {
                beta: Some(40.0),
                gamma: Some(15.0),
            },
            &tuning(),
        );
        let s = agg.latest();
        assert!((s.x - 0.5).abs() < 1e-6);
        assert!(s.y.abs() < 1e-6);

        agg.ingest(
            &InputEvent::OrientationChanged {
                beta: Some(-500.0),
                gamma: Some(500.0),
            },
            &tuning(),
        );
        let s = agg.latest();
        assert_eq!(s.x, 1.0);
        assert_eq!(s.y, 1.0);
    }

    #[test]
    fn resize_reclassifies_layout_without_touching_sample() {
        let mut agg = Aggregator::new(Viewport::default(), 768.0);
        assert_eq!(agg.layout(), LayoutMode::Full);
        agg.ingest(&InputEvent::PointerMoved { x: 320.0, y: 180.0 }, &tuning());
        let before = agg.latest();
        agg.ingest(
            &InputEvent::ViewportResized {
                width: 375.0,
                height: 667.0,
            },
            &tuning(),
        );
        assert_eq!(agg.layout(), LayoutMode::Compact);
        assert_eq!(agg.latest(), before);
    }

    #[test]
    fn mailbox_overwrites_and_drains_once() {
        let mailbox = SampleMailbox::new();
        assert!(mailbox.drain().is_none());
        mailbox.post(PointerSample::new(0.2, 0.2));
        mailbox.post(PointerSample::new(-0.4, 0.9));
        assert_eq!(mailbox.drain(), Some(PointerSample::new(-0.4, 0.9)));
        assert!(mailbox.drain().is_none());
    }
}

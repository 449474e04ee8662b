//! Timed reveal of a row list.
//!
//! Expanding or collapsing a branch flips its state immediately and hands
//! back a [`Transition`]. Awaiting [`Transition::run`] steps the list's clip
//! height frame by frame until the reveal is complete.

use std::time::Duration;

use crate::sink::{ElementId, UiSink};

/// Easing function for transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Cosine curve used by jQuery's `slideDown`/`slideUp`.
    Swing,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::Swing => {
                // Snap the endpoints; cos(π) is not exactly -1 in f32.
                if t >= 1.0 {
                    1.0
                } else {
                    0.5 - (t * std::f32::consts::PI).cos() / 2.0
                }
            }
        }
    }
}

/// Duration and easing of one reveal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionConfig {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// The generator's "fast" slide: 200ms swing.
    pub fn fast() -> Self {
        Self::new(Duration::from_millis(200), Easing::Swing)
    }

    /// Completes on the first frame.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, Easing::Linear)
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self::fast()
    }
}

/// Whether a list is being revealed or hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealDirection {
    Show,
    Hide,
}

#[derive(Debug, Clone)]
struct Reveal {
    element: ElementId,
    direction: RevealDirection,
    config: TransitionConfig,
    frame_interval: Duration,
    frames: u32,
}

/// Visual side of an expand or collapse.
///
/// A settled transition has nothing left to do. A pending one must be either
/// awaited with [`run`](Self::run) or jumped to its end with
/// [`finish`](Self::finish); dropping it leaves the list mid-reveal.
#[derive(Debug, Clone)]
#[must_use = "a pending transition leaves the list mid-reveal until run or finished"]
pub struct Transition {
    reveal: Option<Reveal>,
}

impl Transition {
    /// A transition with nothing left to do.
    pub fn settled() -> Self {
        Self { reveal: None }
    }

    /// Starts revealing or hiding `element`.
    ///
    /// When the config yields no frames the end state is applied right away
    /// and a settled transition is returned. Otherwise a show starts with
    /// the element visible but clipped to zero rows.
    pub fn begin<S: UiSink + ?Sized>(
        sink: &mut S,
        element: ElementId,
        direction: RevealDirection,
        config: TransitionConfig,
        frame_interval: Duration,
    ) -> Self {
        let frames = frame_count(config.duration, frame_interval);
        if frames == 0 {
            apply_end(sink, element, direction);
            return Self::settled();
        }

        if direction == RevealDirection::Show {
            sink.set_visible(element, true);
            sink.set_clip_height(element, Some(0));
        }

        Self {
            reveal: Some(Reveal {
                element,
                direction,
                config,
                frame_interval,
                frames,
            }),
        }
    }

    pub fn is_settled(&self) -> bool {
        self.reveal.is_none()
    }

    /// Direction of a pending reveal.
    pub fn direction(&self) -> Option<RevealDirection> {
        self.reveal.as_ref().map(|r| r.direction)
    }

    /// Element being revealed.
    pub fn element(&self) -> Option<ElementId> {
        self.reveal.as_ref().map(|r| r.element)
    }

    /// Number of frames a pending reveal will step through.
    pub fn frames(&self) -> u32 {
        self.reveal.as_ref().map_or(0, |r| r.frames)
    }

    /// Jumps straight to the end state.
    pub fn finish<S: UiSink + ?Sized>(self, sink: &mut S) {
        if let Some(reveal) = self.reveal {
            apply_end(sink, reveal.element, reveal.direction);
        }
    }

    /// Steps the reveal to completion, one frame per `frame_interval`.
    pub async fn run<S: UiSink + ?Sized>(self, sink: &mut S) {
        let Some(reveal) = self.reveal else { return };

        let full = sink.measure_height(reveal.element);
        for frame in 1..=reveal.frames {
            tokio::time::sleep(reveal.frame_interval).await;

            let progress = reveal.config.easing.apply(frame as f32 / reveal.frames as f32);
            let shown = match reveal.direction {
                RevealDirection::Show => progress,
                RevealDirection::Hide => 1.0 - progress,
            };
            let height = (full as f32 * shown).round() as u16;
            log::trace!(
                "Reveal {} {:?} frame {}/{}: {} of {} rows",
                reveal.element,
                reveal.direction,
                frame,
                reveal.frames,
                height,
                full
            );
            sink.set_clip_height(reveal.element, Some(height));
        }

        apply_end(sink, reveal.element, reveal.direction);
    }
}

fn apply_end<S: UiSink + ?Sized>(sink: &mut S, element: ElementId, direction: RevealDirection) {
    sink.set_clip_height(element, None);
    sink.set_visible(element, direction == RevealDirection::Show);
}

fn frame_count(duration: Duration, frame_interval: Duration) -> u32 {
    if duration.is_zero() || frame_interval.is_zero() {
        return 0;
    }
    let frames = duration.as_nanos().div_ceil(frame_interval.as_nanos());
    u32::try_from(frames).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_count_rounds_up() {
        assert_eq!(frame_count(Duration::from_millis(200), Duration::from_millis(16)), 13);
        assert_eq!(frame_count(Duration::from_millis(32), Duration::from_millis(16)), 2);
    }

    #[test]
    fn test_frame_count_zero() {
        assert_eq!(frame_count(Duration::ZERO, Duration::from_millis(16)), 0);
        assert_eq!(frame_count(Duration::from_millis(200), Duration::ZERO), 0);
    }
}

use std::time::Duration;

use navtree::{
    ElementId, ElementKind, Easing, Glyph, RevealDirection, Transition, TransitionConfig, UiSink,
};

// =============================================================================
// Easing Function Tests
// =============================================================================

const ALL: [Easing; 5] = [
    Easing::Linear,
    Easing::EaseIn,
    Easing::EaseOut,
    Easing::EaseInOut,
    Easing::Swing,
];

#[test]
fn test_easing_boundaries() {
    for easing in ALL {
        assert_eq!(easing.apply(0.0), 0.0, "{:?} at 0", easing);
        assert_eq!(easing.apply(1.0), 1.0, "{:?} at 1", easing);
    }
}

#[test]
fn test_easing_monotonic() {
    for easing in ALL {
        let mut prev = 0.0;
        for i in 1..=20 {
            let t = i as f32 / 20.0;
            let val = easing.apply(t);
            assert!(val >= prev, "{:?} not monotonic at t={}", easing, t);
            prev = val;
        }
    }
}

#[test]
fn test_easing_clamps_progress() {
    for easing in ALL {
        assert_eq!(easing.apply(-0.5), 0.0, "{:?} below 0", easing);
        assert_eq!(easing.apply(1.5), 1.0, "{:?} above 1", easing);
    }
}

#[test]
fn test_swing_is_symmetric() {
    assert!((Easing::Swing.apply(0.5) - 0.5).abs() < 0.0001);
    assert!(Easing::Swing.apply(0.25) < 0.25);
    assert!(Easing::Swing.apply(0.75) > 0.75);
}

#[test]
fn test_default_reveal_is_fast_swing() {
    let config = TransitionConfig::default();
    assert_eq!(config.duration, Duration::from_millis(200));
    assert_eq!(config.easing, Easing::Swing);
}

// =============================================================================
// Reveal Tests
// =============================================================================

/// Sink holding a single list of fixed height, recording every clip change.
#[derive(Debug)]
struct Recorder {
    height: u16,
    visible: bool,
    clips: Vec<Option<u16>>,
}

impl Recorder {
    fn new(height: u16, visible: bool) -> Self {
        Self {
            height,
            visible,
            clips: Vec::new(),
        }
    }

    fn heights(&self) -> Vec<u16> {
        self.clips.iter().filter_map(|c| *c).collect()
    }
}

impl UiSink for Recorder {
    fn append_child(&mut self, _parent: ElementId, _kind: ElementKind) -> ElementId {
        ElementId::new(1)
    }

    fn set_visible(&mut self, _element: ElementId, visible: bool) {
        self.visible = visible;
    }

    fn measure_height(&self, _element: ElementId) -> u16 {
        self.height
    }

    fn set_clip_height(&mut self, _element: ElementId, height: Option<u16>) {
        self.clips.push(height);
    }

    fn set_glyph(&mut self, _element: ElementId, _glyph: Glyph) {}

    fn set_selected(&mut self, _element: ElementId, _selected: bool) {}

    fn viewport_height(&self) -> u16 {
        0
    }

    fn scroll_to(&mut self, _element: ElementId, _offset: i32) {}
}

fn list() -> ElementId {
    ElementId::new(1)
}

#[tokio::test(start_paused = true)]
async fn test_show_steps_up_to_full_height() {
    let mut sink = Recorder::new(10, false);
    let transition = Transition::begin(
        &mut sink,
        list(),
        RevealDirection::Show,
        TransitionConfig::fast(),
        Duration::from_millis(16),
    );

    assert_eq!(transition.frames(), 13);
    assert!(sink.visible);
    assert_eq!(sink.clips, vec![Some(0)]);

    let start = tokio::time::Instant::now();
    transition.run(&mut sink).await;

    assert!(start.elapsed() >= Duration::from_millis(13 * 16));
    assert!(sink.visible);
    assert_eq!(sink.clips.len(), 15);
    assert_eq!(sink.clips.last(), Some(&None));

    let heights = sink.heights();
    assert_eq!(heights.last(), Some(&10));
    assert!(heights.windows(2).all(|w| w[0] <= w[1]), "{heights:?}");
}

#[tokio::test(start_paused = true)]
async fn test_hide_steps_down_then_hides() {
    let mut sink = Recorder::new(6, true);
    let transition = Transition::begin(
        &mut sink,
        list(),
        RevealDirection::Hide,
        TransitionConfig::new(Duration::from_millis(64), Easing::Linear),
        Duration::from_millis(16),
    );

    // Hiding starts from the current height.
    assert!(sink.clips.is_empty());
    assert!(sink.visible);

    transition.run(&mut sink).await;

    assert_eq!(sink.clips, vec![Some(5), Some(3), Some(2), Some(0), None]);
    assert!(!sink.visible);
}

#[tokio::test(start_paused = true)]
async fn test_instant_config_settles_on_begin() {
    let mut sink = Recorder::new(4, false);
    let transition = Transition::begin(
        &mut sink,
        list(),
        RevealDirection::Show,
        TransitionConfig::instant(),
        Duration::from_millis(16),
    );

    assert!(transition.is_settled());
    assert_eq!(transition.direction(), None);
    assert!(sink.visible);
    assert_eq!(sink.clips, vec![None]);

    // Running a settled transition is a no-op.
    transition.run(&mut sink).await;
    assert_eq!(sink.clips, vec![None]);
}

#[test]
fn test_finish_jumps_to_end() {
    let mut sink = Recorder::new(4, true);
    let transition = Transition::begin(
        &mut sink,
        list(),
        RevealDirection::Hide,
        TransitionConfig::fast(),
        Duration::from_millis(16),
    );
    assert_eq!(transition.element(), Some(list()));

    transition.finish(&mut sink);

    assert!(!sink.visible);
    assert_eq!(sink.clips, vec![None]);
}

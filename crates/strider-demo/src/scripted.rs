//! Deterministic input script for headless demo runs.

use glam::Vec2;
use strider_input::InputSnapshot;

/// One stretch of held input.
#[derive(Clone, Copy, Debug)]
pub struct Segment {
    /// How many ticks this segment lasts.
    pub ticks: u32,
    /// Stick deflection held for the whole segment.
    pub stick: Vec2,
    /// Whether a jump press fires on the segment's first tick.
    pub jump: bool,
}

impl Segment {
    fn hold(ticks: u32, x: f32, y: f32) -> Self {
        Self {
            ticks,
            stick: Vec2::new(x, y),
            jump: false,
        }
    }

    fn jump(ticks: u32, x: f32, y: f32) -> Self {
        Self {
            ticks,
            stick: Vec2::new(x, y),
            jump: true,
        }
    }
}

/// Plays back a list of [`Segment`]s, emitting one snapshot per tick.
///
/// Past the end of the script the stick is centered and jump released, so a
/// run longer than the script settles into Idle.
pub struct ScriptedInput {
    segments: Vec<Segment>,
    segment: usize,
    tick_in_segment: u32,
}

impl ScriptedInput {
    /// Script from explicit segments.
    pub fn new(segments: Vec<Segment>) -> Self {
        Self {
            segments,
            segment: 0,
            tick_in_segment: 0,
        }
    }

    /// The default showcase: settle, walk forward, reverse 180°, walk at
    /// half deflection (turning without walking), jump while running, then
    /// release everything and come to rest.
    pub fn showcase() -> Self {
        Self::new(vec![
            Segment::hold(30, 0.0, 0.0),
            Segment::hold(120, 0.0, 1.0),
            Segment::hold(120, 0.0, -1.0),
            Segment::hold(60, 0.55, 0.0),
            Segment::jump(90, 0.0, 1.0),
            Segment::hold(180, 0.0, 0.0),
        ])
    }

    /// Produces the next tick's snapshot.
    pub fn poll(&mut self) -> InputSnapshot {
        let Some(segment) = self.segments.get(self.segment) else {
            return InputSnapshot::default();
        };

        let snapshot = InputSnapshot {
            stick: segment.stick,
            jump_pressed: segment.jump && self.tick_in_segment == 0,
        };

        self.tick_in_segment += 1;
        if self.tick_in_segment >= segment.ticks {
            self.segment += 1;
            self.tick_in_segment = 0;
        }
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_fires_only_on_the_segment_start() {
        let mut script = ScriptedInput::new(vec![Segment::jump(3, 0.0, 1.0)]);
        assert!(script.poll().jump_pressed);
        assert!(!script.poll().jump_pressed);
        assert!(!script.poll().jump_pressed);
    }

    #[test]
    fn test_exhausted_script_centers_the_stick() {
        let mut script = ScriptedInput::new(vec![Segment::hold(1, 0.0, 1.0)]);
        assert_eq!(script.poll().stick, Vec2::new(0.0, 1.0));
        assert_eq!(script.poll(), InputSnapshot::default());
        assert_eq!(script.poll(), InputSnapshot::default());
    }

    #[test]
    fn test_segments_advance_in_order() {
        let mut script =
            ScriptedInput::new(vec![Segment::hold(2, 1.0, 0.0), Segment::hold(1, 0.0, 1.0)]);
        assert_eq!(script.poll().stick, Vec2::new(1.0, 0.0));
        assert_eq!(script.poll().stick, Vec2::new(1.0, 0.0));
        assert_eq!(script.poll().stick, Vec2::new(0.0, 1.0));
    }
}

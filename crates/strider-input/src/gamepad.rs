//! Gamepad snapshot source wrapping [`gilrs`].
//!
//! Polls gilrs events once per tick, tracks the left stick, and turns the
//! south button into a per-tick jump edge. Hot-plug is handled
//! transparently: events from any connected pad feed the same snapshot.

use gilrs::{Axis, Button, EventType, Gilrs};
use glam::Vec2;
use tracing::info;

use crate::InputSnapshot;

/// Polls a gamepad into [`InputSnapshot`] values, one per tick.
pub struct GamepadSource {
    gilrs: Gilrs,
    stick: Vec2,
    jump_held: bool,
    hardware_dead_zone: f32,
}

impl GamepadSource {
    /// Create a source, initialising gilrs.
    ///
    /// # Panics
    /// Panics if gilrs cannot initialise (missing platform backend).
    pub fn new() -> Self {
        let gilrs = Gilrs::new().expect("Failed to initialise gilrs");
        for (_, pad) in gilrs.gamepads() {
            info!("gamepad connected: {}", pad.name());
        }
        Self {
            gilrs,
            stick: Vec2::ZERO,
            jump_held: false,
            hardware_dead_zone: 0.0,
        }
    }

    /// Set a hardware deadzone applied per axis with rescaling.
    ///
    /// Defaults to 0.0: the locomotion machine applies its own movement and
    /// turn deadzones downstream, so raw values normally pass through.
    pub fn set_hardware_dead_zone(&mut self, value: f32) {
        self.hardware_dead_zone = value.clamp(0.0, 0.99);
    }

    /// Drain pending events and produce this tick's snapshot.
    ///
    /// The jump flag is an edge: it is true only on the tick a south-button
    /// press event arrived.
    pub fn poll(&mut self) -> InputSnapshot {
        let mut jump_edge = false;

        while let Some(event) = self.gilrs.next_event() {
            match event.event {
                EventType::Connected => {
                    info!("gamepad connected: {}", self.gilrs.gamepad(event.id).name());
                }
                EventType::Disconnected => {
                    info!("gamepad disconnected");
                    self.stick = Vec2::ZERO;
                    self.jump_held = false;
                }
                EventType::AxisChanged(axis, raw, _) => {
                    let value = apply_dead_zone(raw, self.hardware_dead_zone);
                    match axis {
                        Axis::LeftStickX => self.stick.x = value,
                        Axis::LeftStickY => self.stick.y = value,
                        _ => {}
                    }
                }
                EventType::ButtonPressed(Button::South, _) => {
                    if !self.jump_held {
                        jump_edge = true;
                    }
                    self.jump_held = true;
                }
                EventType::ButtonReleased(Button::South, _) => {
                    self.jump_held = false;
                }
                _ => {}
            }
        }

        InputSnapshot {
            stick: self.stick,
            jump_pressed: jump_edge,
        }
    }
}

impl Default for GamepadSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply deadzone filtering with rescaling.
///
/// If `|raw| < dead_zone`, returns `0.0`. Otherwise rescales from
/// `[dead_zone, 1.0]` to `[0.0, 1.0]`, preserving sign.
fn apply_dead_zone(raw: f32, dead_zone: f32) -> f32 {
    let abs = raw.abs();
    if abs < dead_zone {
        return 0.0;
    }
    if dead_zone <= 0.0 {
        return raw.clamp(-1.0, 1.0);
    }
    let scale = 1.0 / (1.0 - dead_zone);
    let rescaled = (abs - dead_zone) * scale;
    rescaled.min(1.0).copysign(raw)
}

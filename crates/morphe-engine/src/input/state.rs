use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    PointerMoveEvent,
};

/// Logical pixels treated as one wheel line for high-precision devices.
const PIXELS_PER_LINE: f32 = 40.0;

/// Current input state for a single window.
///
/// Holds held keys, modifiers, focus and the current pointer position.
/// Per-frame transitions are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in logical pixels.
    pub pointer_pos: Option<(f32, f32)>,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Drop held keys on focus loss so nothing stays stuck.
                    self.keys_down.clear();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key {
                key,
                state,
                modifiers,
                repeat,
            } => {
                self.modifiers = *modifiers;

                match state {
                    KeyState::Pressed => {
                        if self.keys_down.insert(*key) && !*repeat {
                            frame.keys_pressed.insert(*key);
                        }
                    }
                    KeyState::Released => {
                        if self.keys_down.remove(key) {
                            frame.keys_released.insert(*key);
                        }
                    }
                }
            }

            InputEvent::MouseWheel { delta, modifiers } => {
                self.modifiers = *modifiers;
                frame.scroll_lines += delta.lines_y(PIXELS_PER_LINE);
            }
        }

        frame.push_event(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseWheelDelta;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key { key, state, modifiers: Modifiers::default(), repeat }
    }

    #[test]
    fn key_press_and_release_transitions() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::Space, KeyState::Pressed, false));
        assert!(state.key_down(Key::Space));
        assert!(frame.key_pressed(Key::Space));

        frame.clear();
        state.apply_event(&mut frame, key(Key::Space, KeyState::Released, false));
        assert!(!state.key_down(Key::Space));
        assert!(frame.keys_released.contains(&Key::Space));
        assert_eq!(frame.events.len(), 1);
    }

    #[test]
    fn focus_loss_clears_held_input() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, key(Key::ArrowUp, KeyState::Pressed, false));
        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(!state.key_down(Key::ArrowUp));
        assert!(!state.focused);
    }

    #[test]
    fn pointer_tracking() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, InputEvent::PointerMoved(PointerMoveEvent { x: 3.0, y: 4.0 }));
        assert_eq!(state.pointer_pos, Some((3.0, 4.0)));
        state.apply_event(&mut frame, InputEvent::PointerLeft);
        assert_eq!(state.pointer_pos, None);
    }

    #[test]
    fn wheel_accumulates_lines() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        let m = Modifiers::default();
        state.apply_event(&mut frame, InputEvent::MouseWheel { delta: MouseWheelDelta::Line { x: 0.0, y: 1.0 }, modifiers: m });
        state.apply_event(&mut frame, InputEvent::MouseWheel { delta: MouseWheelDelta::Pixel { x: 0.0, y: 80.0 }, modifiers: m });
        assert_eq!(frame.scroll_lines, 3.0);
        frame.clear();
        assert_eq!(frame.scroll_lines, 0.0);
    }
}

use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState, Modifiers};

/// Current keyboard state for a single window.
///
/// Holds "is down" information; per-frame transitions are recorded into an
/// `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Whether the window is focused.
    pub focused: bool,

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
                    // Avoids stuck keys when focus changes mid-press.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key { key, state, modifiers, .. } => {
                self.modifiers = *modifiers;

                match state {
                    KeyState::Pressed => {
                        if self.keys_down.insert(*key) {
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

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key { key, state, modifiers: Modifiers::default(), repeat }
    }

    #[test]
    fn press_is_reported_once_across_repeats() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();

        st.apply_event(&mut fr, key(Key::ArrowUp, KeyState::Pressed, false));
        assert!(fr.pressed(Key::ArrowUp));
        fr.clear();

        st.apply_event(&mut fr, key(Key::ArrowUp, KeyState::Pressed, true));
        assert!(!fr.pressed(Key::ArrowUp));
        assert!(st.key_down(Key::ArrowUp));
        assert_eq!(fr.events.len(), 1);
    }

    #[test]
    fn release_clears_down_state() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(&mut fr, key(Key::Tab, KeyState::Pressed, false));
        st.apply_event(&mut fr, key(Key::Tab, KeyState::Released, false));
        assert!(!st.key_down(Key::Tab));
        assert!(fr.keys_released.contains(&Key::Tab));
    }

    #[test]
    fn focus_loss_drops_held_keys() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(&mut fr, key(Key::ArrowDown, KeyState::Pressed, false));
        st.apply_event(&mut fr, InputEvent::Focused(false));
        assert!(st.keys_down.is_empty());
        assert!(!st.focused);
    }

    #[test]
    fn key_event_updates_modifiers() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        let shift = Modifiers { shift: true, ..Default::default() };
        st.apply_event(
            &mut fr,
            InputEvent::Key { key: Key::Tab, state: KeyState::Pressed, modifiers: shift, repeat: false },
        );
        assert!(st.modifiers.shift);
        assert!(st.modifiers.any());
    }
}

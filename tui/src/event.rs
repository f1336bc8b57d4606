use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};

use crate::app::InputEvent;

pub fn map_crossterm_event_to_input_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => {
            if key.kind != KeyEventKind::Press {
                return None;
            }
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(InputEvent::Quit)
                }
                KeyCode::Char('q') | KeyCode::Esc => Some(InputEvent::Quit),
                KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('n') | KeyCode::PageDown => {
                    Some(InputEvent::NextSlide)
                }
                KeyCode::Left | KeyCode::Char('p') | KeyCode::PageUp | KeyCode::Backspace => {
                    Some(InputEvent::PrevSlide)
                }
                KeyCode::Home => Some(InputEvent::FirstSlide),
                KeyCode::End => Some(InputEvent::LastSlide),
                KeyCode::Char(c @ '1'..='9') => {
                    // Progress dots are 1-based on screen.
                    Some(InputEvent::JumpTo(c as usize - '1' as usize))
                }
                _ => None,
            }
        }
        Event::Mouse(me) => match me.kind {
            MouseEventKind::Down(crossterm::event::MouseButton::Left) => {
                Some(InputEvent::MouseClick(me.column, me.row))
            }
            _ => None,
        },
        Event::Resize(w, h) => Some(InputEvent::Resized(w, h)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState, MouseButton, MouseEvent};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn forward_keys_advance() {
        for code in [
            KeyCode::Right,
            KeyCode::Char(' '),
            KeyCode::Char('n'),
            KeyCode::PageDown,
        ] {
            assert_eq!(
                map_crossterm_event_to_input_event(press(code)),
                Some(InputEvent::NextSlide)
            );
        }
    }

    #[test]
    fn backward_keys_retreat() {
        for code in [
            KeyCode::Left,
            KeyCode::Char('p'),
            KeyCode::PageUp,
            KeyCode::Backspace,
        ] {
            assert_eq!(
                map_crossterm_event_to_input_event(press(code)),
                Some(InputEvent::PrevSlide)
            );
        }
    }

    #[test]
    fn digits_jump_to_zero_based_indices() {
        assert_eq!(
            map_crossterm_event_to_input_event(press(KeyCode::Char('1'))),
            Some(InputEvent::JumpTo(0))
        );
        assert_eq!(
            map_crossterm_event_to_input_event(press(KeyCode::Char('9'))),
            Some(InputEvent::JumpTo(8))
        );
        assert_eq!(
            map_crossterm_event_to_input_event(press(KeyCode::Char('0'))),
            None
        );
    }

    #[test]
    fn quit_keys_quit() {
        assert_eq!(
            map_crossterm_event_to_input_event(press(KeyCode::Char('q'))),
            Some(InputEvent::Quit)
        );
        assert_eq!(
            map_crossterm_event_to_input_event(press(KeyCode::Esc)),
            Some(InputEvent::Quit)
        );
        assert_eq!(
            map_crossterm_event_to_input_event(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            ))),
            Some(InputEvent::Quit)
        );
    }

    #[test]
    fn home_and_end_jump_to_the_edges() {
        assert_eq!(
            map_crossterm_event_to_input_event(press(KeyCode::Home)),
            Some(InputEvent::FirstSlide)
        );
        assert_eq!(
            map_crossterm_event_to_input_event(press(KeyCode::End)),
            Some(InputEvent::LastSlide)
        );
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut release = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        release.state = KeyEventState::NONE;
        assert_eq!(map_crossterm_event_to_input_event(Event::Key(release)), None);
    }

    #[test]
    fn left_clicks_carry_their_position() {
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 34,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            map_crossterm_event_to_input_event(click),
            Some(InputEvent::MouseClick(12, 34))
        );
    }

    #[test]
    fn other_mouse_events_are_ignored() {
        let drag = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Drag(MouseButton::Left),
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_crossterm_event_to_input_event(drag), None);
    }

    #[test]
    fn resizes_pass_through() {
        assert_eq!(
            map_crossterm_event_to_input_event(Event::Resize(80, 24)),
            Some(InputEvent::Resized(80, 24))
        );
    }

    #[test]
    fn unbound_keys_map_to_nothing() {
        assert_eq!(map_crossterm_event_to_input_event(press(KeyCode::Tab)), None);
        assert_eq!(
            map_crossterm_event_to_input_event(press(KeyCode::Char('x'))),
            None
        );
    }
}

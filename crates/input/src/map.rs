//! Mapping from terminal events to controls and clicks.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::types::{ClickMode, ControlAction};

/// Map keyboard input to simulation controls.
pub fn handle_key_event(key: KeyEvent) -> Option<ControlAction> {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
            Some(ControlAction::TogglePlay)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('.') | KeyCode::Enter => {
            Some(ControlAction::Step)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(ControlAction::Randomize),
        KeyCode::Char('c') | KeyCode::Char('C')
            if !key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(ControlAction::Clear)
        }

        // Speed slider
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => Some(ControlAction::Faster),
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Down => Some(ControlAction::Slower),

        _ => None,
    }
}

/// Check if key should quit.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Select click behavior from held modifiers.
///
/// Alt stamps a glider. Shift stamps a pulsar; Control does too, since many
/// terminals keep shift-click for text selection.
pub fn click_mode(modifiers: KeyModifiers) -> ClickMode {
    if modifiers.contains(KeyModifiers::ALT) {
        ClickMode::Glider
    } else if modifiers.intersects(KeyModifiers::SHIFT | KeyModifiers::CONTROL) {
        ClickMode::Pulsar
    } else {
        ClickMode::Toggle
    }
}

/// A left-button press in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerClick {
    pub column: u16,
    pub row: u16,
    pub mode: ClickMode,
}

impl PointerClick {
    /// Centre of the clicked terminal cell in display pixels.
    ///
    /// A terminal cell is one display pixel wide and two tall.
    pub fn display_point(&self) -> (f64, f64) {
        (self.column as f64 + 0.5, (self.row as f64 + 0.5) * 2.0)
    }
}

/// Map mouse input to a click; everything but a left press is ignored.
pub fn pointer_click(event: MouseEvent) -> Option<PointerClick> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerClick {
            column: event.column,
            row: event.row,
            mode: click_mode(event.modifiers),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(kind: MouseEventKind, modifiers: KeyModifiers) -> MouseEvent {
        MouseEvent {
            kind,
            column: 7,
            row: 3,
            modifiers,
        }
    }

    #[test]
    fn test_playback_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(ControlAction::TogglePlay)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('n'))),
            Some(ControlAction::Step)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(ControlAction::Randomize)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('c'))),
            Some(ControlAction::Clear)
        );
    }

    #[test]
    fn test_speed_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('+'))),
            Some(ControlAction::Faster)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(ControlAction::Slower)
        );
    }

    #[test]
    fn test_ctrl_c_is_quit_not_clear() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(key), None);
        assert!(should_quit(key));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_click_modes() {
        assert_eq!(click_mode(KeyModifiers::NONE), ClickMode::Toggle);
        assert_eq!(click_mode(KeyModifiers::ALT), ClickMode::Glider);
        assert_eq!(click_mode(KeyModifiers::SHIFT), ClickMode::Pulsar);
        assert_eq!(click_mode(KeyModifiers::CONTROL), ClickMode::Pulsar);
        assert_eq!(
            click_mode(KeyModifiers::ALT | KeyModifiers::SHIFT),
            ClickMode::Glider
        );
    }

    #[test]
    fn test_only_left_press_is_a_click() {
        let down = mouse(MouseEventKind::Down(MouseButton::Left), KeyModifiers::NONE);
        assert_eq!(
            pointer_click(down),
            Some(PointerClick {
                column: 7,
                row: 3,
                mode: ClickMode::Toggle
            })
        );
        assert_eq!(
            pointer_click(mouse(MouseEventKind::Up(MouseButton::Left), KeyModifiers::NONE)),
            None
        );
        assert_eq!(
            pointer_click(mouse(MouseEventKind::Down(MouseButton::Right), KeyModifiers::NONE)),
            None
        );
        assert_eq!(
            pointer_click(mouse(MouseEventKind::Moved, KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_display_point_is_cell_centre() {
        let click = PointerClick {
            column: 4,
            row: 2,
            mode: ClickMode::Toggle,
        };
        assert_eq!(click.display_point(), (4.5, 5.0));
    }
}

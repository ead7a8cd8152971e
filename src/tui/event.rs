use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Global shortcuts (translated into core actions)
    Quit,
    ShowStatistics,
    ShowAbout,
    Export,
    Clear,
    ToggleTab,

    // Navigation (handled by the focused component)
    InputChar(char),
    Backspace,
    Submit,
    Escape,
    FocusNext,
    FocusPrev,
    CursorUp,
    CursorDown,
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).unwrap_or(false) {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event)
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Translate a key press into a `TuiEvent`. Release and repeat reports from
/// the keyboard enhancement protocol are ignored.
pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c' | 'q')) => Some(TuiEvent::Quit),
        (KeyModifiers::CONTROL, KeyCode::Char('s')) => Some(TuiEvent::ShowStatistics),
        (KeyModifiers::CONTROL, KeyCode::Char('a')) => Some(TuiEvent::ShowAbout),
        (KeyModifiers::CONTROL, KeyCode::Char('e')) => Some(TuiEvent::Export),
        (KeyModifiers::CONTROL, KeyCode::Char('l')) => Some(TuiEvent::Clear),
        (KeyModifiers::CONTROL, KeyCode::Char('t')) => Some(TuiEvent::ToggleTab),
        (KeyModifiers::CONTROL, _) => None,
        (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        (_, KeyCode::Tab) => Some(TuiEvent::FocusNext),
        (_, KeyCode::BackTab) => Some(TuiEvent::FocusPrev),
        (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
        (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
        (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(modifiers: KeyModifiers, code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_control_shortcuts() {
        assert_eq!(map_key(key(KeyModifiers::CONTROL, KeyCode::Char('c'))), Some(TuiEvent::Quit));
        assert_eq!(map_key(key(KeyModifiers::CONTROL, KeyCode::Char('q'))), Some(TuiEvent::Quit));
        assert_eq!(
            map_key(key(KeyModifiers::CONTROL, KeyCode::Char('s'))),
            Some(TuiEvent::ShowStatistics)
        );
        assert_eq!(map_key(key(KeyModifiers::CONTROL, KeyCode::Char('a'))), Some(TuiEvent::ShowAbout));
        assert_eq!(map_key(key(KeyModifiers::CONTROL, KeyCode::Char('e'))), Some(TuiEvent::Export));
        assert_eq!(map_key(key(KeyModifiers::CONTROL, KeyCode::Char('l'))), Some(TuiEvent::Clear));
        assert_eq!(
            map_key(key(KeyModifiers::CONTROL, KeyCode::Char('t'))),
            Some(TuiEvent::ToggleTab)
        );
        assert_eq!(map_key(key(KeyModifiers::CONTROL, KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_plain_keys() {
        assert_eq!(map_key(key(KeyModifiers::NONE, KeyCode::Char('q'))), Some(TuiEvent::InputChar('q')));
        assert_eq!(map_key(key(KeyModifiers::SHIFT, KeyCode::Char('P'))), Some(TuiEvent::InputChar('P')));
        assert_eq!(map_key(key(KeyModifiers::NONE, KeyCode::Tab)), Some(TuiEvent::FocusNext));
        assert_eq!(map_key(key(KeyModifiers::SHIFT, KeyCode::BackTab)), Some(TuiEvent::FocusPrev));
        assert_eq!(map_key(key(KeyModifiers::NONE, KeyCode::Enter)), Some(TuiEvent::Submit));
        assert_eq!(map_key(key(KeyModifiers::NONE, KeyCode::Esc)), Some(TuiEvent::Escape));
        assert_eq!(map_key(key(KeyModifiers::NONE, KeyCode::PageDown)), Some(TuiEvent::ScrollPageDown));
        assert_eq!(map_key(key(KeyModifiers::NONE, KeyCode::F(1))), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut release = key(KeyModifiers::NONE, KeyCode::Char('a'));
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(release), None);
    }
}

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use crate::app::Result;
use crate::domain::REACTION_SYMBOLS;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
}

pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    pub fn next(&self) -> Result<AppEvent> {
        if event::poll(self.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                return Ok(AppEvent::Key(key));
            }
        }
        Ok(AppEvent::Tick)
    }
}

/// Browse-mode keyboard actions. Search and delete-confirm modes read
/// keys directly in the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    SwitchView,
    StartSearch,
    ClearSearch,
    CycleSort,
    Delete,
    /// Apply the reaction symbol at this index of [`REACTION_SYMBOLS`].
    React(usize),
    None,
}

impl From<KeyEvent> for Action {
    fn from(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
            KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
            KeyCode::Tab => Action::SwitchView,
            KeyCode::Char('/') => Action::StartSearch,
            KeyCode::Char('x') => Action::ClearSearch,
            KeyCode::Char('s') => Action::CycleSort,
            KeyCode::Char('d') | KeyCode::Delete => Action::Delete,
            // 1..9 then 0 pick the ten reaction symbols in display order.
            KeyCode::Char(c @ '1'..='9') => Action::React(c as usize - '1' as usize),
            KeyCode::Char('0') => Action::React(REACTION_SYMBOLS.len() - 1),
            _ => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digit_keys_cover_all_reaction_symbols() {
        assert_eq!(Action::from(key(KeyCode::Char('1'))), Action::React(0));
        assert_eq!(Action::from(key(KeyCode::Char('9'))), Action::React(8));
        assert_eq!(Action::from(key(KeyCode::Char('0'))), Action::React(9));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(Action::from(key), Action::Quit);
    }

    #[test]
    fn test_unbound_key_is_none() {
        assert_eq!(Action::from(key(KeyCode::Char('z'))), Action::None);
    }
}

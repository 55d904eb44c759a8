use crossterm::event::{KeyCode, KeyEvent};

use crate::input::is_ctrl_c;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MenuChoice {
    StartOrResume,
    ToggleSize,
    ShowControls,
    Quit,
}

/// Maps one key press to a menu choice. Anything unrecognized returns None
/// and the caller just redraws the menu and keeps waiting.
pub fn map_choice(ev: &KeyEvent) -> Option<MenuChoice> {
    if is_ctrl_c(ev) {
        return Some(MenuChoice::Quit);
    }

    match ev.code {
        KeyCode::Char('1') => Some(MenuChoice::StartOrResume),
        KeyCode::Char('2') => Some(MenuChoice::ToggleSize),
        KeyCode::Char('3') => Some(MenuChoice::ShowControls),
        KeyCode::Char('4') => Some(MenuChoice::Quit),
        // The same keys that open the menu during play also leave it.
        KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Esc => Some(MenuChoice::StartOrResume),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn numbered_choices() {
        assert_eq!(map_choice(&key(KeyCode::Char('1'))), Some(MenuChoice::StartOrResume));
        assert_eq!(map_choice(&key(KeyCode::Char('2'))), Some(MenuChoice::ToggleSize));
        assert_eq!(map_choice(&key(KeyCode::Char('3'))), Some(MenuChoice::ShowControls));
        assert_eq!(map_choice(&key(KeyCode::Char('4'))), Some(MenuChoice::Quit));
    }

    #[test]
    fn menu_keys_resume_play() {
        assert_eq!(map_choice(&key(KeyCode::Char('m'))), Some(MenuChoice::StartOrResume));
        assert_eq!(map_choice(&key(KeyCode::Esc)), Some(MenuChoice::StartOrResume));
    }

    #[test]
    fn invalid_choices_map_to_nothing() {
        assert_eq!(map_choice(&key(KeyCode::Char('5'))), None);
        assert_eq!(map_choice(&key(KeyCode::Char('w'))), None);
        assert_eq!(map_choice(&key(KeyCode::Enter)), None);
    }

    #[test]
    fn ctrl_c_quits_from_the_menu() {
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_choice(&ev), Some(MenuChoice::Quit));
    }
}

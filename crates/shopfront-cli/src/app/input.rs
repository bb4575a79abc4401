//! Key bindings.
//!
//! Keys are translated to `Action`s first so the bindings can be tested
//! without a terminal; `App::perform` then applies them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use shopfront_engine::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleTheme,
    Navigate(Route),
    Back,
    // Home
    HomeNext,
    HomePrevious,
    HomeActivate,
    CloseModal,
    // Listing
    FocusSearch,
    BlurSearch,
    QueryPush(char),
    QueryPop,
    SelectNext,
    SelectPrevious,
    OpenSelected,
    NextCategory,
    PreviousCategory,
    // Listing and detail
    Retry,
    // Detail
    ToggleFavorite,
}

/// Which bindings are active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Home { modal_open: bool },
    Listing { search_focused: bool },
    Detail,
}

pub fn action_for(key: KeyEvent, mode: InputMode) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    // Text entry and the modal capture everything else
    match mode {
        InputMode::Listing {
            search_focused: true,
        } => return search_action(key),
        InputMode::Home { modal_open: true } => {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter => Some(Action::CloseModal),
                KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            };
        }
        _ => {}
    }

    let global = match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        KeyCode::Char('1') => Some(Action::Navigate(Route::Home)),
        KeyCode::Char('2') => Some(Action::Navigate(Route::Products)),
        KeyCode::Char('3') => Some(Action::Navigate(Route::List)),
        KeyCode::Backspace | KeyCode::Char('b') => Some(Action::Back),
        _ => None,
    };
    if global.is_some() {
        return global;
    }

    match mode {
        InputMode::Home { .. } => match key.code {
            KeyCode::Right | KeyCode::Down | KeyCode::Tab | KeyCode::Char('l') | KeyCode::Char('j') => {
                Some(Action::HomeNext)
            }
            KeyCode::Left | KeyCode::Up | KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Char('k') => {
                Some(Action::HomePrevious)
            }
            KeyCode::Enter => Some(Action::HomeActivate),
            _ => None,
        },
        InputMode::Listing { .. } => match key.code {
            KeyCode::Char('/') => Some(Action::FocusSearch),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrevious),
            KeyCode::Enter => Some(Action::OpenSelected),
            KeyCode::Right | KeyCode::Char('c') => Some(Action::NextCategory),
            KeyCode::Left | KeyCode::Char('C') => Some(Action::PreviousCategory),
            KeyCode::Char('r') => Some(Action::Retry),
            KeyCode::Esc => Some(Action::Back),
            _ => None,
        },
        InputMode::Detail => match key.code {
            KeyCode::Char('f') => Some(Action::ToggleFavorite),
            KeyCode::Char('r') => Some(Action::Retry),
            KeyCode::Esc | KeyCode::Left => Some(Action::Back),
            _ => None,
        },
    }
}

fn search_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Down | KeyCode::Tab => Some(Action::BlurSearch),
        KeyCode::Backspace => Some(Action::QueryPop),
        KeyCode::Char(c) => Some(Action::QueryPush(c)),
        _ => None,
    }
}

/// Key hints shown in the status bar for each mode
pub fn hints(mode: InputMode) -> &'static [(&'static str, &'static str)] {
    match mode {
        InputMode::Home { modal_open: true } => &[("Esc", "close")],
        InputMode::Home { modal_open: false } => &[
            ("←/→", "select"),
            ("Enter", "open"),
            ("t", "theme"),
            ("q", "quit"),
        ],
        InputMode::Listing {
            search_focused: true,
        } => &[("Enter", "done"), ("Esc", "done")],
        InputMode::Listing {
            search_focused: false,
        } => &[
            ("/", "search"),
            ("←/→", "category"),
            ("↑/↓", "select"),
            ("Enter", "details"),
            ("r", "retry"),
            ("b", "back"),
            ("q", "quit"),
        ],
        InputMode::Detail => &[
            ("f", "favorite"),
            ("r", "retry"),
            ("b", "back"),
            ("t", "theme"),
            ("q", "quit"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    const LISTING: InputMode = InputMode::Listing {
        search_focused: false,
    };
    const SEARCHING: InputMode = InputMode::Listing {
        search_focused: true,
    };

    #[test]
    fn test_ctrl_c_always_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(ctrl_c, SEARCHING), Some(Action::Quit));
        assert_eq!(action_for(ctrl_c, InputMode::Detail), Some(Action::Quit));
    }

    #[test]
    fn test_search_captures_letters() {
        assert_eq!(
            action_for(key(KeyCode::Char('q')), SEARCHING),
            Some(Action::QueryPush('q'))
        );
        assert_eq!(
            action_for(key(KeyCode::Char('t')), SEARCHING),
            Some(Action::QueryPush('t'))
        );
        assert_eq!(action_for(key(KeyCode::Backspace), SEARCHING), Some(Action::QueryPop));
        assert_eq!(action_for(key(KeyCode::Esc), SEARCHING), Some(Action::BlurSearch));
    }

    #[test]
    fn test_listing_bindings() {
        assert_eq!(action_for(key(KeyCode::Char('/')), LISTING), Some(Action::FocusSearch));
        assert_eq!(action_for(key(KeyCode::Char('c')), LISTING), Some(Action::NextCategory));
        assert_eq!(action_for(key(KeyCode::Left), LISTING), Some(Action::PreviousCategory));
        assert_eq!(action_for(key(KeyCode::Enter), LISTING), Some(Action::OpenSelected));
        assert_eq!(
            action_for(key(KeyCode::Char('3')), LISTING),
            Some(Action::Navigate(Route::List))
        );
    }

    #[test]
    fn test_modal_swallows_navigation() {
        let modal = InputMode::Home { modal_open: true };
        assert_eq!(action_for(key(KeyCode::Char('2')), modal), None);
        assert_eq!(action_for(key(KeyCode::Enter), modal), Some(Action::CloseModal));
    }

    #[test]
    fn test_detail_bindings() {
        assert_eq!(
            action_for(key(KeyCode::Char('f')), InputMode::Detail),
            Some(Action::ToggleFavorite)
        );
        assert_eq!(action_for(key(KeyCode::Char('b')), InputMode::Detail), Some(Action::Back));
    }
}

use crate::application::navigation::ScreenKind;
use crate::domain::keybinding::{Action, Keybind};
use crate::presentation::i18n::{StringKey, Strings};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

pub struct CommandRegistry {
    display_bindings: HashMap<Action, KeyEvent>,
    input_bindings: Vec<(KeyEvent, Action)>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut display_bindings = HashMap::new();
        let mut input_bindings = Vec::new();

        let mut register = |action: Action, code: KeyCode, modifiers: KeyModifiers, is_primary| {
            let key = KeyEvent::new(code, modifiers);
            if is_primary {
                display_bindings.insert(action, key);
            }
            input_bindings.push((key, action));
        };

        register(Action::Quit, KeyCode::Char('q'), KeyModifiers::NONE, true);
        register(Action::Quit, KeyCode::Char('c'), KeyModifiers::CONTROL, false);
        register(Action::OpenAbout, KeyCode::Char('a'), KeyModifiers::NONE, true);

        register(Action::NavigateUp, KeyCode::Up, KeyModifiers::NONE, true);
        register(Action::NavigateUp, KeyCode::Char('k'), KeyModifiers::NONE, false);
        register(Action::NavigateDown, KeyCode::Down, KeyModifiers::NONE, true);
        register(Action::NavigateDown, KeyCode::Char('j'), KeyModifiers::NONE, false);
        register(Action::SelectFirst, KeyCode::Home, KeyModifiers::NONE, true);
        register(Action::SelectFirst, KeyCode::Char('g'), KeyModifiers::NONE, false);
        register(Action::SelectLast, KeyCode::End, KeyModifiers::NONE, true);
        register(Action::SelectLast, KeyCode::Char('G'), KeyModifiers::SHIFT, false);
        register(Action::SelectLast, KeyCode::Char('G'), KeyModifiers::NONE, false);

        register(Action::Select, KeyCode::Enter, KeyModifiers::NONE, true);
        register(Action::Select, KeyCode::Right, KeyModifiers::NONE, false);
        register(Action::Select, KeyCode::Char('l'), KeyModifiers::NONE, false);

        register(Action::Back, KeyCode::Esc, KeyModifiers::NONE, true);
        register(Action::Back, KeyCode::Backspace, KeyModifiers::NONE, false);
        register(Action::Back, KeyCode::Left, KeyModifiers::NONE, false);
        register(Action::Back, KeyCode::Char('h'), KeyModifiers::NONE, false);

        Self {
            display_bindings,
            input_bindings,
        }
    }
}

impl CommandRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, action: Action) -> Option<KeyEvent> {
        self.display_bindings.get(&action).copied()
    }

    #[must_use]
    pub fn find_action(&self, key: KeyEvent) -> Option<Action> {
        self.input_bindings
            .iter()
            .find(|(k, _)| k.code == key.code && k.modifiers == key.modifiers)
            .map(|(_, a)| *a)
    }

    /// Key hints shown in the footer for a screen.
    #[must_use]
    pub fn hints_for(&self, screen: ScreenKind, strings: &Strings) -> Vec<Keybind> {
        let hint = |action: Action, key: StringKey| {
            self.get(action)
                .map(|k| Keybind::new(k, action, strings.get(key)))
        };

        let hints = match screen {
            ScreenKind::CategoryList => vec![
                hint(Action::NavigateDown, StringKey::HintMove),
                hint(Action::Select, StringKey::HintOpen),
                hint(Action::OpenAbout, StringKey::HintAbout),
                hint(Action::Quit, StringKey::HintQuit),
            ],
            ScreenKind::PlaceList => vec![
                hint(Action::NavigateDown, StringKey::HintMove),
                hint(Action::Select, StringKey::HintOpen),
                hint(Action::Back, StringKey::HintBack),
                hint(Action::Quit, StringKey::HintQuit),
            ],
            ScreenKind::PlaceDetail => vec![
                hint(Action::NavigateDown, StringKey::HintScroll),
                hint(Action::Back, StringKey::HintBack),
                hint(Action::Quit, StringKey::HintQuit),
            ],
            ScreenKind::About => vec![
                hint(Action::Back, StringKey::HintBack),
                hint(Action::Quit, StringKey::HintQuit),
            ],
        };

        hints.into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(KeyCode::Char('j'), KeyModifiers::NONE, Action::NavigateDown ; "vim_down")]
    #[test_case(KeyCode::Up, KeyModifiers::NONE, Action::NavigateUp ; "arrow_up")]
    #[test_case(KeyCode::Enter, KeyModifiers::NONE, Action::Select ; "enter_selects")]
    #[test_case(KeyCode::Esc, KeyModifiers::NONE, Action::Back ; "esc_goes_back")]
    #[test_case(KeyCode::Backspace, KeyModifiers::NONE, Action::Back ; "backspace_goes_back")]
    #[test_case(KeyCode::Char('c'), KeyModifiers::CONTROL, Action::Quit ; "ctrl_c_quits")]
    #[test_case(KeyCode::Char('G'), KeyModifiers::SHIFT, Action::SelectLast ; "shift_g_last")]
    #[test_case(KeyCode::Char('a'), KeyModifiers::NONE, Action::OpenAbout ; "about")]
    fn test_find_action(code: KeyCode, modifiers: KeyModifiers, expected: Action) {
        let registry = CommandRegistry::new();

        assert_eq!(
            registry.find_action(KeyEvent::new(code, modifiers)),
            Some(expected)
        );
    }

    #[test]
    fn test_unbound_key() {
        let registry = CommandRegistry::new();

        assert_eq!(
            registry.find_action(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_root_hints_have_no_back() {
        let registry = CommandRegistry::new();
        let hints = registry.hints_for(ScreenKind::CategoryList, &Strings::default());

        assert!(hints.iter().all(|k| k.action != Action::Back));
        assert!(hints.iter().any(|k| k.action == Action::OpenAbout));
    }

    #[test]
    fn test_about_hints() {
        let registry = CommandRegistry::new();
        let hints = registry.hints_for(ScreenKind::About, &Strings::default());
        let actions: Vec<_> = hints.iter().map(|k| k.action).collect();

        assert_eq!(actions, vec![Action::Back, Action::Quit]);
        assert_eq!(hints[0].label, "Back");
        assert_eq!(hints[0].key.code, KeyCode::Esc);
    }
}

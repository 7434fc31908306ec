use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Msg;

#[derive(Debug)]
pub(crate) enum Action {
    None,
    Quit,
    /// Feed this message to the reducer.
    Forward(Msg),
}

pub(crate) fn handle_key_event(key: KeyEvent) -> Action {
    use KeyCode::{Backspace, Char, Enter, Esc, F, Tab};

    // Global quit shortcuts. `q` is not one: it has to stay typable in the
    // search field.
    if key.code == Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match key.code {
        Esc => Action::Quit,
        Enter => Action::Forward(Msg::Submit),
        Tab => Action::Forward(Msg::ToggleView),
        F(1) => Action::Forward(Msg::QuickFill("Doncaster")),
        F(2) => Action::Forward(Msg::QuickFill("Donvale")),
        Backspace => Action::Forward(Msg::Backspace),
        Char(character) => {
            if key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(KeyModifiers::ALT)
            {
                Action::None
            } else {
                Action::Forward(Msg::Input(character))
            }
        }
        _ => Action::None,
    }
}

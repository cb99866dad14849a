use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press means before context is applied. `Save`, `Back` and
/// `Activate` are interpreted per screen by the runtime.
#[derive(Debug, Clone, Copy)]
pub enum KeyCommand {
    Save,
    Quit,
    Back,
    Activate,
    Download,
    NextField,
    PrevField,
    Edit(KeyEvent),
    None,
}

pub fn classify(key: &KeyEvent) -> KeyCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') | KeyCode::Char('S') => KeyCommand::Save,
            KeyCode::Char('q') | KeyCode::Char('Q') => KeyCommand::Quit,
            KeyCode::Char('c') | KeyCode::Char('C') => KeyCommand::Quit,
            KeyCode::Char('d') | KeyCode::Char('D') => KeyCommand::Download,
            _ => KeyCommand::None,
        };
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => KeyCommand::NextField,
        KeyCode::BackTab | KeyCode::Up => KeyCommand::PrevField,
        KeyCode::Esc => KeyCommand::Back,
        KeyCode::Enter => KeyCommand::Activate,
        _ => KeyCommand::Edit(*key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_chords_map_to_commands() {
        let save = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(matches!(classify(&save), KeyCommand::Save));
        let quit = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(classify(&quit), KeyCommand::Quit));
    }

    #[test]
    fn plain_characters_fall_through_to_edit() {
        let key = KeyEvent::from(KeyCode::Char('ب'));
        assert!(matches!(classify(&key), KeyCommand::Edit(_)));
    }
}

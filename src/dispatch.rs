use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// App-level commands. Everything else belongs to the active widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    NewFile,
    List,
    Save,
    Delete,
    Cancel,
    Confirm,
}

pub struct KeyBinding {
    pub command: Command,
    pub key: &'static str,
    pub description: &'static str,
    /// Shown in the global footer rather than only in the list view.
    pub footer: bool,
}

pub static KEYMAP: &[KeyBinding] = &[
    KeyBinding {
        command: Command::NewFile,
        key: "Ctrl+n",
        description: "new file",
        footer: true,
    },
    KeyBinding {
        command: Command::List,
        key: "Ctrl+l",
        description: "list",
        footer: true,
    },
    KeyBinding {
        command: Command::Save,
        key: "Ctrl+s",
        description: "save",
        footer: true,
    },
    KeyBinding {
        command: Command::Cancel,
        key: "Esc",
        description: "back",
        footer: true,
    },
    KeyBinding {
        command: Command::Quit,
        key: "Ctrl+q",
        description: "quit",
        footer: true,
    },
    KeyBinding {
        command: Command::Delete,
        key: "Ctrl+d",
        description: "delete file",
        footer: false,
    },
    KeyBinding {
        command: Command::Confirm,
        key: "Enter",
        description: "open",
        footer: false,
    },
];

impl Command {
    #[must_use]
    pub fn from_event(event: &KeyEvent) -> Option<Self> {
        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        match event.code {
            KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
                'q' => Some(Self::Quit),
                'n' => Some(Self::NewFile),
                'l' => Some(Self::List),
                's' => Some(Self::Save),
                'd' => Some(Self::Delete),
                _ => None,
            },
            KeyCode::Esc => Some(Self::Cancel),
            KeyCode::Enter => Some(Self::Confirm),
            _ => None,
        }
    }

    #[must_use]
    pub fn binding(self) -> Option<&'static KeyBinding> {
        KEYMAP.iter().find(|b| b.command == self)
    }
}

/// Bindings listed in the footer, in display order.
pub fn footer_bindings() -> impl Iterator<Item = &'static KeyBinding> {
    KEYMAP.iter().filter(|b| b.footer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn control_chords_map_to_commands() {
        assert_eq!(Command::from_event(&ctrl('q')), Some(Command::Quit));
        assert_eq!(Command::from_event(&ctrl('n')), Some(Command::NewFile));
        assert_eq!(Command::from_event(&ctrl('l')), Some(Command::List));
        assert_eq!(Command::from_event(&ctrl('s')), Some(Command::Save));
        assert_eq!(Command::from_event(&ctrl('d')), Some(Command::Delete));
    }

    #[test]
    fn plain_chars_fall_through() {
        let event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(Command::from_event(&event), None);
        assert_eq!(Command::from_event(&ctrl('x')), None);
    }

    #[test]
    fn every_command_has_a_binding() {
        for command in [
            Command::Quit,
            Command::NewFile,
            Command::List,
            Command::Save,
            Command::Delete,
            Command::Cancel,
            Command::Confirm,
        ] {
            assert!(command.binding().is_some(), "{command:?} has no binding");
        }
    }
}

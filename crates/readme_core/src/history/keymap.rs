//! Keyboard chords for history navigation.
//!
//! The editor shell owns the actual key listener; this table keeps the chord
//! mapping in one place so every call site agrees on it.

/// History navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryCommand {
    Undo,
    Redo,
}

/// A key press with its modifier state.
///
/// `primary` is Ctrl on Linux/Windows and Cmd on macOS; the caller decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub key: char,
    pub primary: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyChord {
    /// Chord of `key` with only the primary modifier held.
    pub fn primary(key: char) -> Self {
        Self {
            key,
            primary: true,
            shift: false,
            alt: false,
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }
}

/// Maps `primary+Z` to undo, `primary+Shift+Z` and `primary+Y` to redo.
///
/// Key matching ignores case, since Shift reports an upper-case key on most
/// platforms. Chords with Alt held are left to other bindings.
pub fn command_for_chord(chord: KeyChord) -> Option<HistoryCommand> {
    if !chord.primary || chord.alt {
        return None;
    }

    match (chord.key.to_ascii_lowercase(), chord.shift) {
        ('z', false) => Some(HistoryCommand::Undo),
        ('z', true) | ('y', false) => Some(HistoryCommand::Redo),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{command_for_chord, HistoryCommand, KeyChord};

    #[test]
    fn primary_z_undoes_and_shift_or_y_redoes() {
        assert_eq!(
            command_for_chord(KeyChord::primary('z')),
            Some(HistoryCommand::Undo)
        );
        assert_eq!(
            command_for_chord(KeyChord::primary('Z').with_shift()),
            Some(HistoryCommand::Redo)
        );
        assert_eq!(
            command_for_chord(KeyChord::primary('y')),
            Some(HistoryCommand::Redo)
        );
    }

    #[test]
    fn chords_without_primary_or_with_alt_are_ignored() {
        let bare = KeyChord {
            primary: false,
            ..KeyChord::primary('z')
        };
        assert_eq!(command_for_chord(bare), None);
        assert_eq!(command_for_chord(KeyChord::primary('z').with_alt()), None);
        assert_eq!(command_for_chord(KeyChord::primary('y').with_shift()), None);
        assert_eq!(command_for_chord(KeyChord::primary('x')), None);
    }
}

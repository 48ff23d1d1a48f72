// LogTally - ui/theme.rs
//
// Level-to-tone mapping and terminal colours.
// No dependencies on app state or business logic.

use crate::core::model::Level;
use owo_colors::{AnsiColors, OwoColorize};

/// Presentation tone attached to a level's rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Ok,
    Info,
    Alert,
    Caution,
}

/// Tone for a given level.
pub fn level_tone(level: Level) -> Tone {
    match level {
        Level::Info => Tone::Ok,
        Level::Debug => Tone::Info,
        Level::Error => Tone::Alert,
        Level::Warning => Tone::Caution,
    }
}

/// Terminal colour for a tone.
pub fn tone_colour(tone: Tone) -> AnsiColors {
    match tone {
        Tone::Ok => AnsiColors::BrightGreen,
        Tone::Info => AnsiColors::BrightBlue,
        Tone::Alert => AnsiColors::BrightRed,
        Tone::Caution => AnsiColors::BrightYellow,
    }
}

/// Wrap `text` in the tone's colour, or return it unchanged when colour is off.
pub fn paint(text: &str, tone: Tone, colour: bool) -> String {
    if colour {
        text.color(tone_colour(tone)).to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_level_has_a_distinct_tone() {
        let tones: Vec<Tone> = Level::ALL.iter().map(|l| level_tone(*l)).collect();
        assert_eq!(tones, vec![Tone::Ok, Tone::Info, Tone::Alert, Tone::Caution]);
    }

    #[test]
    fn test_paint_without_colour_is_plain() {
        assert_eq!(paint("INFO | 1", Tone::Ok, false), "INFO | 1");
    }

    #[test]
    fn test_paint_with_colour_adds_escape_codes() {
        let painted = paint("ERROR | 2", Tone::Alert, true);
        assert!(painted.contains("ERROR | 2"));
        assert!(painted.starts_with("\u{1b}["), "{painted:?}");
        assert!(painted.len() > "ERROR | 2".len());
    }
}

//! The color-transition command decoder.
//!
//! A successful move between two differently-colored codels selects an
//! operation from the hue/lightness delta between them. Transitions
//! touching white dispatch nothing (pure motion).

use piet_types::Codel;

/// The 18 primitive operations, in the order of the `(lightΔ, hueΔ)` grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Push,
    Pop,
    Add,
    Subtract,
    Multiply,
    Divide,
    Mod,
    Not,
    Greater,
    Pointer,
    Switch,
    Duplicate,
    Roll,
    InNumber,
    InChar,
    OutNumber,
    OutChar,
}

impl Command {
    /// Decode the operation for a transition from `departed` to `entered`.
    ///
    /// Returns `None` for transitions involving white or black (never
    /// dispatched) and for a zero delta.
    ///
    /// | lightΔ \ hueΔ | 0    | 1        | 2      | 3       | 4         | 5          |
    /// |---------------|------|----------|--------|---------|-----------|------------|
    /// | 0             | —    | add      | divide | greater | duplicate | in(char)   |
    /// | 1             | push | subtract | mod    | pointer | roll      | out(number)|
    /// | 2             | pop  | multiply | not    | switch  | in(number)| out(char)  |
    pub fn decode(departed: Codel, entered: Codel) -> Option<Command> {
        let (Codel::Colored { hue: h0, lightness: l0 }, Codel::Colored { hue: h1, lightness: l1 }) =
            (departed, entered)
        else {
            return None;
        };
        match (l0.steps_to(l1), h0.steps_to(h1)) {
            (0, 1) => Some(Self::Add),
            (0, 2) => Some(Self::Divide),
            (0, 3) => Some(Self::Greater),
            (0, 4) => Some(Self::Duplicate),
            (0, 5) => Some(Self::InChar),
            (1, 0) => Some(Self::Push),
            (1, 1) => Some(Self::Subtract),
            (1, 2) => Some(Self::Mod),
            (1, 3) => Some(Self::Pointer),
            (1, 4) => Some(Self::Roll),
            (1, 5) => Some(Self::OutNumber),
            (2, 0) => Some(Self::Pop),
            (2, 1) => Some(Self::Multiply),
            (2, 2) => Some(Self::Not),
            (2, 3) => Some(Self::Switch),
            (2, 4) => Some(Self::InNumber),
            (2, 5) => Some(Self::OutChar),
            _ => None,
        }
    }

    /// Stable name used in trace events.
    pub fn name(self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::Pop => "pop",
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Mod => "mod",
            Self::Not => "not",
            Self::Greater => "greater",
            Self::Pointer => "pointer",
            Self::Switch => "switch",
            Self::Duplicate => "duplicate",
            Self::Roll => "roll",
            Self::InNumber => "in(number)",
            Self::InChar => "in(char)",
            Self::OutNumber => "out(number)",
            Self::OutChar => "out(char)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use piet_types::{Hue, Lightness};

    fn colored(hue: Hue, lightness: Lightness) -> Codel {
        Codel::Colored { hue, lightness }
    }

    #[test]
    fn decodes_the_full_table() {
        // From normal red, every (lightΔ, hueΔ) lands on its table entry.
        let hues = [
            Hue::Red,
            Hue::Yellow,
            Hue::Green,
            Hue::Cyan,
            Hue::Blue,
            Hue::Magenta,
        ];
        let lights = [Lightness::Normal, Lightness::Dark, Lightness::Light];
        let expected = [
            [
                None,
                Some(Command::Add),
                Some(Command::Divide),
                Some(Command::Greater),
                Some(Command::Duplicate),
                Some(Command::InChar),
            ],
            [
                Some(Command::Push),
                Some(Command::Subtract),
                Some(Command::Mod),
                Some(Command::Pointer),
                Some(Command::Roll),
                Some(Command::OutNumber),
            ],
            [
                Some(Command::Pop),
                Some(Command::Multiply),
                Some(Command::Not),
                Some(Command::Switch),
                Some(Command::InNumber),
                Some(Command::OutChar),
            ],
        ];
        let from = colored(Hue::Red, Lightness::Normal);
        for (dl, row) in expected.iter().enumerate() {
            for (dh, want) in row.iter().enumerate() {
                let to = colored(hues[dh], lights[dl]);
                assert_eq!(Command::decode(from, to), *want, "dl={dl} dh={dh}");
            }
        }
    }

    #[test]
    fn white_transitions_dispatch_nothing() {
        let red = colored(Hue::Red, Lightness::Normal);
        assert_eq!(Command::decode(Codel::White, red), None);
        assert_eq!(Command::decode(red, Codel::White), None);
    }

    #[test]
    fn deltas_wrap_around_the_cycle() {
        // magenta→red is hueΔ=1; dark→light is lightΔ=1.
        let from = colored(Hue::Magenta, Lightness::Dark);
        let to = colored(Hue::Red, Lightness::Light);
        assert_eq!(Command::decode(from, to), Some(Command::Subtract));
    }
}

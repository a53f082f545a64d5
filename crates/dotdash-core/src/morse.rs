//! International Morse table.
//!
//! Read-only mapping from a pattern of `.` and `-` to the character it
//! encodes. Lookups are exact: no prefix matching and no timing.
//!
//! The five-signal pattern `-.-.-` is the "starting signal" prosign and has no
//! character, so it never decodes.

use crate::DecodeError;

/// Short signal.
pub const DOT: char = '.';

/// Long signal.
pub const HYPHEN: char = '-';

const TABLE: &[(&str, char)] = &[
    (".-", 'A'),
    ("-...", 'B'),
    ("-.-.", 'C'),
    ("-..", 'D'),
    (".", 'E'),
    ("..-.", 'F'),
    ("--.", 'G'),
    ("....", 'H'),
    ("..", 'I'),
    (".---", 'J'),
    ("-.-", 'K'),
    (".-..", 'L'),
    ("--", 'M'),
    ("-.", 'N'),
    ("---", 'O'),
    (".--.", 'P'),
    ("--.-", 'Q'),
    (".-.", 'R'),
    ("...", 'S'),
    ("-", 'T'),
    ("..-", 'U'),
    ("...-", 'V'),
    (".--", 'W'),
    ("-..-", 'X'),
    ("-.--", 'Y'),
    ("--..", 'Z'),
    ("-----", '0'),
    (".----", '1'),
    ("..---", '2'),
    ("...--", '3'),
    ("....-", '4'),
    (".....", '5'),
    ("-....", '6'),
    ("--...", '7'),
    ("---..", '8'),
    ("----.", '9'),
    (".-.-.-", '.'),
    ("--..--", ','),
    ("..--..", '?'),
    (".----.", '\''),
    ("-.-.--", '!'),
    ("-..-.", '/'),
    ("-.--.", '('),
    ("-.--.-", ')'),
    (".-...", '&'),
    ("---...", ':'),
    ("-.-.-.", ';'),
    ("-...-", '='),
    (".-.-.", '+'),
    ("-....-", '-'),
    ("..--.-", '_'),
    (".-..-.", '"'),
    ("...-..-", '$'),
    (".--.-.", '@'),
];

/// Decode a completed pattern.
pub fn decode(pattern: &str) -> Result<char, DecodeError> {
    TABLE
        .iter()
        .find(|(p, _)| *p == pattern)
        .map(|&(_, c)| c)
        .ok_or_else(|| DecodeError::UnknownPattern { pattern: pattern.to_string() })
}

/// Pattern for a character. Letters match case-insensitively.
pub fn encode(c: char) -> Option<&'static str> {
    let c = c.to_ascii_uppercase();
    TABLE.iter().find(|&&(_, ch)| ch == c).map(|&(p, _)| p)
}

/// Every `(pattern, character)` pair in table order.
pub fn entries() -> impl Iterator<Item = (&'static str, char)> {
    TABLE.iter().copied()
}

/// Whether `c` is a valid signal (`.` or `-`).
pub const fn is_signal(c: char) -> bool {
    matches!(c, DOT | HYPHEN)
}

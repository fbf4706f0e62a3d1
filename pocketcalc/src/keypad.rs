//! Keypad layout and keyboard mapping

use crate::engine::{CLEAR, EQUALS};

/// The 4×4 grid, top row first. "Clear" sits outside the grid.
pub const ROWS: [[&str; 4]; 4] = [
    ["7", "8", "9", "÷"],
    ["4", "5", "6", "×"],
    ["1", "2", "3", "-"],
    ["0", ".", "=", "+"],
];

const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Width of a key in grid units. Only "0" is double width.
pub fn key_span(label: &str) -> f32 {
    if label == "0" {
        2.0
    } else {
        1.0
    }
}

/// Widest row in grid units, used to size keys to the window.
pub fn max_row_span() -> f32 {
    ROWS.iter()
        .map(|row| row.iter().map(|label| key_span(label)).sum::<f32>())
        .fold(0.0, f32::max)
}

/// Map a typed character to the key it stands for.
pub fn label_for_char(c: char) -> Option<&'static str> {
    match c {
        '0'..='9' => c.to_digit(10).map(|d| DIGITS[d as usize]),
        '.' | ',' => Some("."),
        '+' => Some("+"),
        '-' | '\u{2212}' => Some("-"),
        '*' | 'x' | 'X' | '×' => Some("×"),
        '/' | '÷' => Some("÷"),
        '=' => Some(EQUALS),
        'c' | 'C' => Some(CLEAR),
        _ => None,
    }
}

/// Map a whole word to a key. Accepts exact labels plus a few spellings
/// of clear.
pub fn label_for_word(word: &str) -> Option<&'static str> {
    if word.eq_ignore_ascii_case(CLEAR) || word.eq_ignore_ascii_case("ac") {
        return Some(CLEAR);
    }
    if word == EQUALS {
        return Some(EQUALS);
    }
    ROWS.iter().flatten().copied().find(|label| *label == word)
}

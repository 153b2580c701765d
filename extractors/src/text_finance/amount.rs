//! Amount tokenizer for Indonesian-style numerals.
//!
//! Grammar, applied to the first digit in the text:
//!
//! ```text
//! numeral   := digits group* fraction? suffix?
//! group     := '.' DIGIT DIGIT DIGIT        (not followed by another digit)
//! fraction  := ',' digits
//!            | '.' digits                   (only when no group was read)
//! suffix    := ws* ("ribu" | "rb" | "juta" | "jt")   (not followed by a letter)
//! ```

/// Multiplier carried by a magnitude suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Magnitude {
    Unit,
    Thousand,
    Million,
}

impl Magnitude {
    pub fn multiplier(self) -> f64 {
        match self {
            Magnitude::Unit => 1.0,
            Magnitude::Thousand => 1_000.0,
            Magnitude::Million => 1_000_000.0,
        }
    }
}

// Longest spelling first so "ribu" is not read as "rb" + "u".
const SUFFIXES: [(&str, Magnitude); 4] = [
    ("ribu", Magnitude::Thousand),
    ("rb", Magnitude::Thousand),
    ("juta", Magnitude::Million),
    ("jt", Magnitude::Million),
];

/// A numeral as read from text, normalized to `123.45` form
#[derive(Debug, Clone, PartialEq)]
pub struct Numeral {
    pub normalized: String,
    pub magnitude: Magnitude,
}

impl Numeral {
    pub fn value(&self) -> Option<f64> {
        let base: f64 = self.normalized.parse().ok()?;
        Some(base * self.magnitude.multiplier())
    }
}

/// Read the first numeral in `text`
pub fn scan_numeral(text: &str) -> Option<Numeral> {
    let bytes = text.as_bytes();
    let start = bytes.iter().position(u8::is_ascii_digit)?;

    let mut pos = digit_run_end(bytes, start);
    let mut normalized = text[start..pos].to_string();

    let mut grouped = false;
    while bytes.get(pos) == Some(&b'.') && is_group(bytes, pos + 1) {
        normalized.push_str(&text[pos + 1..pos + 4]);
        pos += 4;
        grouped = true;
    }

    let fraction_sep = match bytes.get(pos) {
        Some(b',') => true,
        Some(b'.') => !grouped,
        _ => false,
    };
    if fraction_sep && bytes.get(pos + 1).is_some_and(u8::is_ascii_digit) {
        let end = digit_run_end(bytes, pos + 1);
        normalized.push('.');
        normalized.push_str(&text[pos + 1..end]);
        pos = end;
    }

    Some(Numeral {
        normalized,
        magnitude: read_suffix(&text[pos..]),
    })
}

/// Amount of the first numeral in `text`, if any
pub fn scan_amount(text: &str) -> Option<f64> {
    scan_numeral(text)?.value()
}

fn digit_run_end(bytes: &[u8], from: usize) -> usize {
    bytes[from..]
        .iter()
        .position(|b| !b.is_ascii_digit())
        .map_or(bytes.len(), |offset| from + offset)
}

fn is_group(bytes: &[u8], from: usize) -> bool {
    bytes.len() >= from + 3
        && bytes[from..from + 3].iter().all(u8::is_ascii_digit)
        && !bytes.get(from + 3).is_some_and(u8::is_ascii_digit)
}

fn read_suffix(rest: &str) -> Magnitude {
    let rest = rest.trim_start_matches([' ', '\t']);

    for (spelling, magnitude) in SUFFIXES {
        let Some(head) = rest.as_bytes().get(..spelling.len()) else {
            continue;
        };
        if !head.eq_ignore_ascii_case(spelling.as_bytes()) {
            continue;
        }
        let followed_by_letter = rest[spelling.len()..]
            .chars()
            .next()
            .is_some_and(char::is_alphabetic);
        if !followed_by_letter {
            return magnitude;
        }
    }

    Magnitude::Unit
}

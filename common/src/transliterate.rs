//! Latin to Ukrainian Cyrillic transliteration
//!
//! Character-by-character substitution. Characters without a mapping
//! (digits, punctuation, Cyrillic) are copied unchanged.

/// Cyrillic replacement for a Latin letter, if any.
fn map_char(c: char) -> Option<&'static str> {
    let mapped = match c {
        'A' => "А", 'B' => "Б", 'C' => "К", 'D' => "Д", 'E' => "Е", 'F' => "Ф", 'G' => "Г",
        'H' => "Х", 'I' => "І", 'J' => "Й", 'K' => "К", 'L' => "Л", 'M' => "М", 'N' => "Н",
        'O' => "О", 'P' => "П", 'Q' => "Ку", 'R' => "Р", 'S' => "С", 'T' => "Т", 'U' => "У",
        'V' => "В", 'W' => "В", 'X' => "Кс", 'Y' => "И", 'Z' => "З",
        'a' => "а", 'b' => "б", 'c' => "к", 'd' => "д", 'e' => "е", 'f' => "ф", 'g' => "г",
        'h' => "х", 'i' => "і", 'j' => "й", 'k' => "к", 'l' => "л", 'm' => "м", 'n' => "н",
        'o' => "о", 'p' => "п", 'q' => "ку", 'r' => "р", 's' => "с", 't' => "т", 'u' => "у",
        'v' => "в", 'w' => "в", 'x' => "кс", 'y' => "и", 'z' => "з",
        _ => return None,
    };
    Some(mapped)
}

pub fn transliterate(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        match map_char(c) {
            Some(mapped) => out.push_str(mapped),
            None => out.push(c),
        }
    }
    out
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Normalized form of a matched drone label.
pub fn drone_label(raw: &str) -> String {
    capitalize(&transliterate(raw))
}

//! Title normalization, Latin-script detection and transliteration.
//!
//! Indexers index release titles with wildly inconsistent casing, separators
//! and scripts. Everything downstream (keyword matching, episode heuristics)
//! works on the normalized token form produced here.

/// Punctuation that still counts as Latin text for [`is_latin`].
const LATIN_PUNCTUATION: &[char] = &[
    '\'', '\u{2019}', '-', ':', '!', '?', ',', '.', '&', '(', ')', '/',
];

/// Cyrillic alphabet, kept in lockstep with [`LATIN_EQUIVALENTS`].
const CYRILLIC: &[char] = &[
    'а', 'б', 'в', 'г', 'д', 'ђ', 'е', 'ж', 'з', 'и', 'ј', 'к', 'л', 'љ', 'м',
    'н', 'њ', 'о', 'п', 'р', 'с', 'т', 'ћ', 'у', 'ф', 'х', 'ц', 'ч', 'џ', 'ш',
    'А', 'Б', 'В', 'Г', 'Д', 'Ђ', 'Е', 'Ж', 'З', 'И', 'Ј', 'К', 'Л', 'Љ', 'М',
    'Н', 'Њ', 'О', 'П', 'Р', 'С', 'Т', 'Ћ', 'У', 'Ф', 'Х', 'Ц', 'Ч', 'Џ', 'Ш',
];

/// Latin equivalents, position-matched to [`CYRILLIC`].
const LATIN_EQUIVALENTS: &[&str] = &[
    "a", "b", "v", "g", "d", "dj", "e", "z", "z", "i", "j", "k", "l", "lj", "m",
    "n", "nj", "o", "p", "r", "s", "t", "c", "u", "f", "h", "c", "c", "dz", "s",
    "A", "B", "V", "G", "D", "Dj", "E", "Z", "Z", "I", "J", "K", "L", "Lj", "M",
    "N", "Nj", "O", "P", "R", "S", "T", "C", "U", "F", "H", "C", "C", "Dz", "S",
];

/// Fold a lowercase accented Latin character to its base form.
fn fold_diacritic(c: char) -> Option<&'static str> {
    Some(match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => "a",
        'è' | 'é' | 'ê' | 'ë' => "e",
        'ì' | 'í' | 'î' | 'ï' => "i",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => "o",
        'ù' | 'ú' | 'û' | 'ü' => "u",
        'ý' | 'ÿ' => "y",
        'ç' | 'ć' | 'č' => "c",
        'ñ' => "n",
        'š' => "s",
        'ž' => "z",
        'đ' => "dj",
        'æ' => "ae",
        'œ' => "oe",
        'ß' => "ss",
        _ => return None,
    })
}

/// Normalize a release or content title for matching.
///
/// Lowercases, folds diacritics, maps punctuation to spaces and splits on
/// whitespace. Returns the joined normalized title together with its tokens.
/// Deterministic and pure.
pub fn normalize(title: &str) -> (String, Vec<String>) {
    let mut cleaned = String::with_capacity(title.len());
    for c in title.to_lowercase().chars() {
        if c.is_alphanumeric() {
            cleaned.push(c);
        } else if let Some(folded) = fold_diacritic(c) {
            cleaned.push_str(folded);
        } else {
            cleaned.push(' ');
        }
    }

    let tokens: Vec<String> = cleaned.split_whitespace().map(String::from).collect();
    (tokens.join(" "), tokens)
}

/// Whether every character of `text` is Latin script, a digit, whitespace or
/// allow-listed punctuation.
pub fn is_latin(text: &str) -> bool {
    text.chars().all(|c| {
        c.is_ascii_alphanumeric()
            || c.is_whitespace()
            || LATIN_PUNCTUATION.contains(&c)
            || c.to_lowercase().all(|lc| fold_diacritic(lc).is_some())
    })
}

/// Map Cyrillic characters to their Latin equivalents; anything not in the
/// table passes through unchanged.
pub fn transliterate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match CYRILLIC.iter().position(|&m| m == c) {
            Some(i) => out.push_str(LATIN_EQUIVALENTS[i]),
            None => out.push(c),
        }
    }
    out
}

//! Sedra to CAL transliteration.
//!
//! Sedra writes Syriac with upper case ASCII consonants and lower case vowels
//! placed after the consonant they belong to. The Comprehensive Aramaic
//! Lexicon (CAL) code uses a different consonant alphabet and writes the
//! vowel after a mater lectionis (yod or waw) that carries it.
//!
//! Example: "LaAB,uOH" → "la)b,wuh"

use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    /// Sedra consonant → CAL consonant. Anything not listed passes through.
    static ref SEDRA_TO_CAL: HashMap<char, char> = {
        let mut map = HashMap::new();
        map.insert('A', ')');
        map.insert('B', 'b');
        map.insert('G', 'g');
        map.insert('D', 'd');
        map.insert('H', 'h');
        map.insert('O', 'w');
        map.insert('Z', 'z');
        map.insert('K', 'x');
        map.insert('Y', 'T');
        map.insert(';', 'y');
        map.insert('C', 'k');
        map.insert('L', 'l');
        map.insert('M', 'm');
        map.insert('N', 'n');
        map.insert('S', 's');
        map.insert('E', '(');
        map.insert('I', 'p');
        map.insert('/', 'c');
        map.insert('X', 'q');
        map.insert('R', 'r');
        map.insert('W', '$');
        map.insert('T', 't');
        map
    };
}

pub fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'o' | 'e' | 'i' | 'u')
}

/// Yod (`;`) and waw (`O`) can carry a vowel.
pub fn is_mater(c: char) -> bool {
    matches!(c, ';' | 'O')
}

fn map_char(c: char) -> char {
    SEDRA_TO_CAL.get(&c).copied().unwrap_or(c)
}

/// Transliterate a Sedra string (without surrounding quotes) to CAL.
pub fn to_cal(sedra: &str) -> String {
    let chars: Vec<char> = sedra.chars().collect();
    let mut out = String::with_capacity(sedra.len());

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];

        // A mater followed by its own vowel is a consonant, leave the order alone.
        if is_vowel(c) {
            if let Some(&mater) = chars.get(i + 1) {
                let consonantal = chars.get(i + 2).is_some_and(|n| is_vowel(*n));
                if is_mater(mater) && !consonantal {
                    out.push(map_char(mater));
                    out.push(if c == 'o' && mater == 'O' { 'O' } else { c });
                    i += 2;
                    continue;
                }
            }
        }

        out.push(map_char(c));
        i += 1;
    }

    out
}

/// Same as `to_cal()`, wrapped in double quotes for literal output.
pub fn to_cal_quoted(sedra: &str) -> String {
    format!("\"{}\"", to_cal(sedra))
}

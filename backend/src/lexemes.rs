//! Lexeme records, e.g. `1:2,0:2,"ABA",41960448,16`

use lazy_static::lazy_static;
use regex::Regex;

use crate::js_literal::freeze_slots;
use crate::logger;
use crate::transliterate::to_cal;
use crate::types::Lexeme;

lazy_static! {
    static ref RE_LEXEME: Regex = Regex::new(
        r#"^1:\d+,(?:0:(\d+)|NULL),"([A-Z;/ -]+)",(-?\d+),(-?\d+)$"#
    ).unwrap();
}

/// Some compound entries are exported with a space before the closing quote.
pub fn fold_quote_space(field: &str) -> &str {
    field.strip_suffix(' ').unwrap_or(field)
}

pub fn parse_lexeme_line(line: &str) -> Option<Lexeme> {
    let caps = RE_LEXEME.captures(line)?;
    let root_ref = match caps.get(1) {
        Some(m) => Some(m.as_str().parse().ok()?),
        None => None,
    };
    Some(Lexeme {
        root_ref,
        lexeme: to_cal(fold_quote_space(&caps[2])),
        features: caps[3].parse().ok()?,
        category: caps[4].parse().ok()?,
    })
}

pub fn parse_lexemes(content: &str) -> Vec<Lexeme> {
    let mut lexemes = Vec::new();
    for (n, line) in content.lines().enumerate() {
        match parse_lexeme_line(line) {
            Some(lexeme) => lexemes.push(lexeme),
            None => logger::debug(&format!("Skipping lexeme line {}: {:?}", n + 1, line)),
        }
    }
    lexemes
}

/// Build lexemes JavaScript from lexeme records.
pub fn get_lexemes(content: &str) -> String {
    let lexemes = parse_lexemes(content);
    freeze_slots(lexemes.iter().map(Some))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lexeme_with_root() {
        let l = parse_lexeme_line(r#"1:129,0:97,"AL;A",339741696,16"#).unwrap();
        assert_eq!(l.root_ref, Some(97));
        assert_eq!(l.lexeme, ")ly)");
        assert_eq!(l.features, 339741696);
        assert_eq!(l.category, 16);
    }

    #[test]
    fn test_parse_lexeme_without_root() {
        let l = parse_lexeme_line(r#"1:849,NULL,"ZDXA",339740672,32"#).unwrap();
        assert_eq!(l.root_ref, None);
        assert_eq!(l.lexeme, "zdq)");
    }

    #[test]
    fn test_quote_space_is_folded() {
        let l = parse_lexeme_line(r#"1:900,0:12,"BR NSA ",0,16"#).unwrap();
        assert_eq!(l.lexeme, "br ns)");
        assert_eq!(fold_quote_space("AB  "), "AB ");
    }
}

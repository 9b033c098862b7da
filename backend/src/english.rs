//! English gloss records, e.g. `3:165,1:97,"cause","without","","",0,0`
//!
//! Several glosses of one lexeme follow each other in the export and only the
//! first one carries the lexeme reference, the rest have `NULL`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::js_literal::{freeze_object, freeze_slots};
use crate::logger;
use crate::types::{English, EnglishJs, EnglishTable};

lazy_static! {
    /// The comment is the last quoted field and may itself contain quotes.
    static ref RE_ENGLISH: Regex = Regex::new(
        r#"^3:(\d+),(?:1:(\d+)|NULL),"([^"]*)","([^"]*)","([^"]*)","(.*)",(-?\d+),(-?\d+)$"#
    ).unwrap();
}

/// Comments whose embedded Syriac was left in Sedra encoding in the export,
/// with the CAL text they should read.
pub static COMMENT_CORRECTIONS: &[(&str, &str)] = &[
    ("w/ &NuORoA& ", "w/ &nwuro)&"),
    ("w/ &EaL&", "w/ &(al&"),
    ("w/ &EaL& ", "w/ &(al&"),
    ("w/ &T'LoT,&", "w/ &t'lot,&"),
    ("(*CL-KD___KD*) ", "(*kl-xd___xd*)"),
];

/// Look up a comment in the correction table. Comments not in the table are
/// returned unchanged.
pub fn correct_comment(comment: &str, corrections: &[(&str, &str)]) -> String {
    if comment.is_empty() {
        return String::new();
    }
    corrections.iter()
        .find(|(wrong, _)| *wrong == comment)
        .map(|(_, right)| right.to_string())
        .unwrap_or_else(|| comment.to_string())
}

/// An English line before its lexeme reference is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnglishRecord {
    pub id: u32,
    /// The reference as written in the line, None for `NULL`
    pub lexeme_ref: Option<u32>,
    pub word: String,
    pub before: String,
    pub after: String,
    pub comment: String,
    pub attributes: i64,
    pub flag: bool,
}

pub fn parse_english_line(line: &str, corrections: &[(&str, &str)]) -> Option<EnglishRecord> {
    let caps = RE_ENGLISH.captures(line)?;
    let lexeme_ref = match caps.get(2) {
        Some(m) => Some(m.as_str().parse().ok()?),
        None => None,
    };
    let flag: i64 = caps[8].parse().ok()?;

    Some(EnglishRecord {
        id: caps[1].parse().ok()?,
        lexeme_ref,
        word: caps[3].to_string(),
        before: caps[4].to_string(),
        after: caps[5].to_string(),
        comment: correct_comment(&caps[6], corrections),
        attributes: caps[7].parse().ok()?,
        flag: flag != 0,
    })
}

/// Resolves sticky lexeme references and collects the lexeme index.
#[derive(Debug, Default)]
pub struct EnglishAccumulator {
    /// Last explicit lexeme reference seen in this pass
    sticky_ref: Option<u32>,
    table: EnglishTable,
}

impl EnglishAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: EnglishRecord) {
        if record.lexeme_ref.is_some() {
            self.sticky_ref = record.lexeme_ref;
        }
        let lexeme_ref = self.sticky_ref;

        if let Some(lid) = lexeme_ref {
            self.table.lexeme_index.entry(lid).or_default().push(record.id);
        }

        self.table.english.push(English {
            lexeme_ref,
            word: record.word,
            before: record.before,
            after: record.after,
            comment: record.comment,
            attributes: record.attributes,
            flag: record.flag,
        });
    }

    pub fn finish(self) -> EnglishTable {
        self.table
    }
}

/// Parse English records with a custom comment correction table.
pub fn parse_english_with(content: &str, corrections: &[(&str, &str)]) -> EnglishTable {
    let mut acc = EnglishAccumulator::new();
    for (n, line) in content.lines().enumerate() {
        match parse_english_line(line, corrections) {
            Some(record) => acc.push(record),
            None => logger::debug(&format!("Skipping english line {}: {:?}", n + 1, line)),
        }
    }
    acc.finish()
}

pub fn parse_english(content: &str) -> EnglishTable {
    parse_english_with(content, COMMENT_CORRECTIONS)
}

/// Build English JavaScript and the lexeme id → English ids index.
pub fn get_english(content: &str) -> EnglishJs {
    let table = parse_english(content);
    EnglishJs {
        english: freeze_slots(table.english.iter().map(Some)),
        lids: freeze_object(&table.lexeme_index),
    }
}

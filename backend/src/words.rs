//! Word records, e.g. `2:31070,1:2055,"DMSBRNOTA","D'aMSaB'RoNuOT,oA",6915072,128`
//!
//! Word ids are increasing but not contiguous (432 gaps in the Sedra 3
//! export, the widest being 45). Every missing id is kept as an empty slot so
//! that slot `id - 1` always holds word `id`.
//! A jump wider than `MAX_ID_GAP` is taken as a corrupt id and the record is
//! skipped.

use lazy_static::lazy_static;
use regex::Regex;

use crate::js_literal::{freeze_list, freeze_slots};
use crate::lexemes::fold_quote_space;
use crate::logger;
use crate::transliterate::to_cal;
use crate::types::{Word, WordTable, WordsJs};

lazy_static! {
    static ref RE_WORD: Regex = Regex::new(
        r#"^2:(\d+),(?:1:(\d+)|NULL),"([A-Z;/a' -]+)","(.+)",(-?\d+),(-?\d+)$"#
    ).unwrap();

    /// An `i` vowel not carried by a yod, unless the yod has its own vowel.
    static ref RE_NO_Y: Regex = Regex::new(r"[^;]i+[^;]|[^;]i+;+[aoeiu]").unwrap();

    /// An `u` vowel not carried by a waw, unless the waw has its own vowel.
    static ref RE_NO_W: Regex = Regex::new(r"[^O]u+[^O]|[^O]u+O+[aoeiu]").unwrap();
}

pub const MAX_ID_GAP: u32 = 10_000;

/// Outcome of placing one word record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Placed,
    /// The id does not advance past the previous one
    OutOfOrder,
    /// The id skips more than `MAX_ID_GAP` ids
    GapTooWide(u32),
}

/// A word line before it is placed in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    pub id: u32,
    pub word: Word,
    /// Vocalised field in Sedra encoding, used for the ambiguity checks
    pub sedra_vocalised: String,
}

/// Does the vocalised Sedra word contain an `i` without a supporting yod?
///
/// The check runs on the quoted field, so a vowel at either end of the
/// word still has a neighbour.
pub fn is_no_y(sedra_vocalised: &str) -> bool {
    RE_NO_Y.is_match(&format!("\"{}\"", sedra_vocalised))
}

/// Does the vocalised Sedra word contain an `u` without a supporting waw?
pub fn is_no_w(sedra_vocalised: &str) -> bool {
    RE_NO_W.is_match(&format!("\"{}\"", sedra_vocalised))
}

pub fn parse_word_line(line: &str) -> Option<WordRecord> {
    let caps = RE_WORD.captures(line)?;
    let lexeme_ref = match caps.get(2) {
        Some(m) => Some(m.as_str().parse().ok()?),
        None => None,
    };
    let sedra_vocalised = caps[4].to_string();

    Some(WordRecord {
        id: caps[1].parse().ok()?,
        word: Word {
            lexeme_ref,
            consonantal: to_cal(fold_quote_space(&caps[3])),
            vocalised: to_cal(&sedra_vocalised),
            features: caps[5].parse().ok()?,
            category: caps[6].parse().ok()?,
        },
        sedra_vocalised,
    })
}

/// Accumulates word records in id order.
#[derive(Debug, Default)]
pub struct WordAccumulator {
    /// Id of the last placed word
    cursor: u32,
    table: WordTable,
}

impl WordAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a record, filling one empty slot per missing id before it.
    pub fn push(&mut self, record: WordRecord) -> Placement {
        if record.id <= self.cursor {
            return Placement::OutOfOrder;
        }

        let gap = record.id - self.cursor - 1;
        if gap > MAX_ID_GAP {
            return Placement::GapTooWide(gap);
        }
        self.table.words.extend(std::iter::repeat_n(None, gap as usize));
        self.cursor = record.id;

        if is_no_y(&record.sedra_vocalised) {
            self.table.no_y.push(record.id);
        }
        if is_no_w(&record.sedra_vocalised) {
            self.table.no_w.push(record.id);
        }

        self.table.words.push(Some(record.word));
        Placement::Placed
    }

    pub fn finish(self) -> WordTable {
        self.table
    }
}

pub fn parse_words(content: &str) -> WordTable {
    let mut acc = WordAccumulator::new();

    for (n, line) in content.lines().enumerate() {
        let Some(record) = parse_word_line(line) else {
            logger::debug(&format!("Skipping word line {}: {:?}", n + 1, line));
            continue;
        };
        let id = record.id;
        match acc.push(record) {
            Placement::Placed => {}
            Placement::OutOfOrder => {
                logger::warn(&format!("Word id {} on line {} is out of order, skipped", id, n + 1));
            }
            Placement::GapTooWide(gap) => {
                logger::warn(&format!("Word id {} on line {} skips {} ids, skipped", id, n + 1, gap));
            }
        }
    }

    acc.finish()
}

/// Build word JavaScript from word records, with the noY and noW id lists.
pub fn get_words(content: &str) -> WordsJs {
    let table = parse_words(content);
    WordsJs {
        words: freeze_slots(table.words.iter().map(Option::as_ref)),
        no_y: freeze_list(&table.no_y),
        no_w: freeze_list(&table.no_w),
    }
}

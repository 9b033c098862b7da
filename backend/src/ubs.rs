//! BFBS/UBS locator records, e.g. `0:8,520100108,33554599,36`
//!
//! The packed locator is read as:
//! - book: 2 digits (52 = Matthew, 53 = Mark, 54 = Luke, ...)
//! - chapter: 2 digits
//! - verse: 3 digits
//! - index: 2 digits, the 1-based word position in the verse
//!
//! The word id carries the database file number (always 2) in its top byte.
//! The leading record id overflows and goes negative in the export, so it is
//! not used.
//!
//! Every node of the book → chapter → verse rollup records the running totals
//! at the moment it was created, so `rollupWords + words` is the number of
//! words up to and including that node. To get a verse-only index →
//! reference list, filter out the entries with verse 0.

use std::collections::btree_map::Entry;

use lazy_static::lazy_static;
use regex::Regex;

use crate::js_literal::statement;
use crate::logger;
use crate::types::{Locator, ParseError, UbsBook, UbsChapter, UbsJs, UbsMap, UbsTable};

lazy_static! {
    static ref RE_LOCATOR: Regex = Regex::new(
        r"^0:-?[0-9]+,([0-9]{2})([0-9]{2})([0-9]{3})([0-9]{2}),([0-9]+),.+$"
    ).unwrap();
}

const WORD_ID_MASK: u64 = 0x00FF_FFFF;

/// Parse one locator line. `line_no` is 1-based and only used for errors.
pub fn parse_locator_line(line: &str, line_no: usize) -> Result<Locator, ParseError> {
    let caps = RE_LOCATOR.captures(line).ok_or_else(|| ParseError::Locator {
        line: line_no,
        content: line.to_string(),
    })?;

    let invalid = |i: usize, field: &'static str| ParseError::InvalidNumber {
        line: line_no,
        field,
        value: caps[i].to_string(),
    };
    let num = |i: usize, field: &'static str| caps[i].parse::<u32>().map_err(|_| invalid(i, field));

    let word_id: u64 = caps[5].parse().map_err(|_| invalid(5, "word id"))?;

    Ok(Locator {
        book: num(1, "book")?,
        chapter: num(2, "chapter")?,
        verse: num(3, "verse")?,
        index: num(4, "index")?,
        word_id: (word_id & WORD_ID_MASK) as u32,
    })
}

/// Folds locators into the rollup and the reference list, in document order.
#[derive(Debug, Default)]
pub struct UbsBuilder {
    table: UbsTable,
}

impl UbsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, loc: Locator) {
        let UbsMap { book_map, books, chapters, verses, words } = &mut self.table.ubs;
        let reference = &mut self.table.reference;

        let book = match book_map.entry(loc.book) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => {
                let book = e.insert(UbsBook {
                    rollup_books: *books,
                    rollup_chapters: *chapters,
                    rollup_verses: *verses,
                    rollup_words: *words,
                    ..Default::default()
                });
                *books += 1;
                book
            }
        };

        let chapter = match book.chapter_map.entry(loc.chapter) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => {
                let chapter = e.insert(UbsChapter {
                    rollup_chapters: *chapters,
                    rollup_verses: *verses,
                    rollup_words: *words,
                    ..Default::default()
                });
                book.chapters += 1;
                *chapters += 1;
                reference.push([loc.book, loc.chapter, 0]);
                chapter
            }
        };

        let verse = match chapter.verse_words.entry(loc.verse) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => {
                chapter.verses += 1;
                book.verses += 1;
                *verses += 1;
                reference.push([loc.book, loc.chapter, loc.verse]);
                e.insert(Vec::new())
            }
        };

        *words += 1;
        book.words += 1;
        chapter.words += 1;

        if loc.index == 0 {
            logger::warn(&format!(
                "Word {} in {}:{}:{} has index 0, counted but not placed",
                loc.word_id, loc.book, loc.chapter, loc.verse
            ));
            return;
        }

        let slot = (loc.index - 1) as usize;
        if verse.len() <= slot {
            verse.resize(slot + 1, None);
        }
        verse[slot] = Some(loc.word_id);
    }

    pub fn finish(self) -> UbsTable {
        self.table
    }
}

/// Build the rollup and reference list. Every terminated line must be a
/// locator record, otherwise the whole file is rejected.
pub fn parse_ubs(content: &str) -> Result<UbsTable, ParseError> {
    let mut lines: Vec<&str> = content.split('\n').collect();

    // Text after the final line break is not a record.
    if let Some(rest) = lines.pop() {
        if !rest.trim().is_empty() {
            logger::warn(&format!("Ignoring unterminated last locator line: {:?}", rest));
        }
    }

    let mut builder = UbsBuilder::new();
    for (n, line) in lines.into_iter().enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        builder.push(parse_locator_line(line, n + 1)?);
    }

    let table = builder.finish();
    logger::debug(&format!(
        "Parsed {} books, {} chapters, {} verses, {} words",
        table.ubs.books, table.ubs.chapters, table.ubs.verses, table.ubs.words
    ));
    Ok(table)
}

/// Build the Ubs JavaScript object and the index → reference list.
pub fn get_ubs(content: &str) -> Result<UbsJs, ParseError> {
    let table = parse_ubs(content)?;
    Ok(UbsJs {
        ubs: statement(&table.ubs),
        reference: statement(&table.reference),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locator_line() {
        let loc = parse_locator_line("0:-32628,541601508,33567919,0", 1).unwrap();
        assert_eq!(loc, Locator { book: 54, chapter: 16, verse: 15, index: 8, word_id: 13487 });
    }

    #[test]
    fn test_parse_locator_line_rejects_bad_line() {
        let err = parse_locator_line("0:1,5201001,33565194,64", 7).unwrap_err();
        assert_eq!(err, ParseError::Locator { line: 7, content: "0:1,5201001,33565194,64".to_string() });
    }

    #[test]
    fn test_word_id_too_large() {
        let err = parse_locator_line("0:1,520100101,99999999999999999999999,0", 3).unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { line: 3, field: "word id", .. }));
    }

    #[test]
    fn test_non_ascii_digits_are_rejected() {
        let err = parse_ubs("0:1,\u{665}\u{662}0100101,33554433,0\r\n").unwrap_err();
        assert!(matches!(err, ParseError::Locator { line: 1, .. }));

        let err = parse_locator_line("0:1,52010010\u{661},33554433,0", 4).unwrap_err();
        assert!(matches!(err, ParseError::Locator { line: 4, .. }));
    }

    #[test]
    fn test_bad_line_fails_whole_file() {
        let content = "0:1,520100101,33565194,64\r\nnot a locator\r\n0:3,520100103,33564000,0\r\n";
        let err = parse_ubs(content).unwrap_err();
        assert!(matches!(err, ParseError::Locator { line: 2, .. }));
    }

    #[test]
    fn test_non_contiguous_index_leaves_nulls() {
        let table = parse_ubs("0:1,520100103,33554433,0\r\n").unwrap();
        let verse = &table.ubs.book_map[&52].chapter_map[&1].verse_words[&1];
        assert_eq!(verse, &vec![None, None, Some(1)]);
    }

    #[test]
    fn test_lf_only_input() {
        let table = parse_ubs("0:1,520100101,33565194,64\n0:2,520100102,33563576,0\n").unwrap();
        assert_eq!(table.ubs.words, 2);
        assert_eq!(table.reference, vec![[52, 1, 0], [52, 1, 1]]);
    }
}

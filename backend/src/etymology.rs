//! Etymology records, e.g. `4:10,1:75,"eu\310",5`
//!
//! The origin text keeps the octal byte escapes of the export. The file has
//! three gaps of a single id each, and a gap of any width is kept as exactly
//! one empty slot.

use lazy_static::lazy_static;
use regex::Regex;

use crate::js_literal::{freeze_object, freeze_slots};
use crate::logger;
use crate::types::{Etymology, EtymologyJs, EtymologyTable};

lazy_static! {
    static ref RE_ETYMOLOGY: Regex = Regex::new(
        r#"^4:(\d+),(?:1:(\d+)|NULL),"(.*)",(-?\d+)$"#
    ).unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EtymologyRecord {
    pub id: u32,
    pub etymology: Etymology,
}

pub fn parse_etymology_line(line: &str) -> Option<EtymologyRecord> {
    let caps = RE_ETYMOLOGY.captures(line)?;
    let lexeme_ref = match caps.get(2) {
        Some(m) => Some(m.as_str().parse().ok()?),
        None => None,
    };

    Some(EtymologyRecord {
        id: caps[1].parse().ok()?,
        etymology: Etymology {
            lexeme_ref,
            origin: caps[3].to_string(),
            category: caps[4].parse().ok()?,
        },
    })
}

#[derive(Debug, Default)]
pub struct EtymologyAccumulator {
    prev_id: u32,
    table: EtymologyTable,
}

impl EtymologyAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: EtymologyRecord) {
        if self.prev_id.checked_add(1) != Some(record.id) {
            self.table.etymology.push(None);
        }
        self.prev_id = record.id;

        if let Some(lid) = record.etymology.lexeme_ref {
            self.table.lexeme_index.insert(lid, record.id);
        }
        self.table.etymology.push(Some(record.etymology));
    }

    pub fn finish(self) -> EtymologyTable {
        self.table
    }
}

pub fn parse_etymology(content: &str) -> EtymologyTable {
    let mut acc = EtymologyAccumulator::new();
    for (n, line) in content.lines().enumerate() {
        match parse_etymology_line(line) {
            Some(record) => acc.push(record),
            None => logger::debug(&format!("Skipping etymology line {}: {:?}", n + 1, line)),
        }
    }
    acc.finish()
}

/// Build etymology JavaScript and the lexeme id → etymology id index.
pub fn get_etymology(content: &str) -> EtymologyJs {
    let table = parse_etymology(content);
    EtymologyJs {
        etymology: freeze_slots(table.etymology.iter().map(Option::as_ref)),
        lids: freeze_object(&table.lexeme_index),
    }
}

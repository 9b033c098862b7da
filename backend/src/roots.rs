//! Root records, e.g. `0:2,"AB","ab           |A",0`

use lazy_static::lazy_static;
use regex::Regex;

use crate::js_literal::freeze_slots;
use crate::logger;
use crate::transliterate::to_cal;
use crate::types::Root;

lazy_static! {
    /// The record id is dropped, position in the list is the id.
    static ref RE_ROOT: Regex = Regex::new(r#"^0:\d+,"([A-Z;/*-]+)","(.*)",(-?\d+)$"#).unwrap();
}

/// Parse one root line. Returns None when the line is not a root record.
pub fn parse_root_line(line: &str) -> Option<Root> {
    let caps = RE_ROOT.captures(line)?;
    Some(Root {
        root: to_cal(&caps[1]),
        meaning: caps[2].to_string(),
        flags: caps[3].parse().ok()?,
    })
}

pub fn parse_roots(content: &str) -> Vec<Root> {
    let mut roots = Vec::new();
    for (n, line) in content.lines().enumerate() {
        match parse_root_line(line) {
            Some(root) => roots.push(root),
            None => logger::debug(&format!("Skipping root line {}: {:?}", n + 1, line)),
        }
    }
    roots
}

/// Build roots JavaScript from root records.
pub fn get_roots(content: &str) -> String {
    let roots = parse_roots(content);
    freeze_slots(roots.iter().map(Some))
}

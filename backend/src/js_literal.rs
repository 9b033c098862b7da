//! JavaScript literal output.
//!
//! Parsed records are written as calls to one-letter constructors
//! (`r`, `l`, `w`, `e`, `t`) inside frozen array literals. Array slot `n`
//! holds record `n`, so every list starts with a hole and missing records
//! are written as further holes. Only `Vec` and `BTreeMap` are rendered,
//! which keeps the output identical between runs.

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::types::{English, Etymology, Lexeme, Root, UbsBook, UbsChapter, UbsMap, Word};

pub trait JsLiteral {
    fn write_js(&self, out: &mut String);

    fn to_js(&self) -> String {
        let mut out = String::new();
        self.write_js(&mut out);
        out
    }
}

/// Double quote a field. Backslashes are left alone, embedded quotes are
/// escaped.
pub fn js_string(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\\\""))
}

fn js_ref(r: Option<u32>) -> String {
    match r {
        Some(n) => n.to_string(),
        None => "null".to_string(),
    }
}

/// `Object.freeze([,a,b,,c]);` where `None` slots become holes.
pub fn freeze_slots<'a, T, I>(slots: I) -> String
where
    T: JsLiteral + 'a,
    I: IntoIterator<Item = Option<&'a T>>,
{
    let mut out = String::from("Object.freeze([");
    for slot in slots {
        out.push(',');
        if let Some(item) = slot {
            item.write_js(&mut out);
        }
    }
    out.push_str("]);");
    out
}

/// `Object.freeze([23,24]);`
pub fn freeze_list(ids: &[u32]) -> String {
    let items: Vec<String> = ids.iter().map(|n| n.to_string()).collect();
    format!("Object.freeze([{}]);", items.join(","))
}

/// `Object.freeze({7:[14,15],8:[16]});`, keys in ascending order.
pub fn freeze_object<K: Display, V: JsLiteral>(map: &BTreeMap<K, V>) -> String {
    let items: Vec<String> = map.iter()
        .map(|(k, v)| format!("{}:{}", k, v.to_js()))
        .collect();
    format!("Object.freeze({{{}}});", items.join(","))
}

/// Terminate a bare literal as a statement.
pub fn statement<T: JsLiteral + ?Sized>(value: &T) -> String {
    let mut out = String::new();
    value.write_js(&mut out);
    out.push(';');
    out
}

impl JsLiteral for u32 {
    fn write_js(&self, out: &mut String) {
        out.push_str(&self.to_string());
    }
}

impl<T: JsLiteral> JsLiteral for Option<T> {
    fn write_js(&self, out: &mut String) {
        match self {
            Some(v) => v.write_js(out),
            None => out.push_str("null"),
        }
    }
}

impl<T: JsLiteral> JsLiteral for [T] {
    fn write_js(&self, out: &mut String) {
        out.push('[');
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            item.write_js(out);
        }
        out.push(']');
    }
}

impl<T: JsLiteral> JsLiteral for Vec<T> {
    fn write_js(&self, out: &mut String) {
        self.as_slice().write_js(out);
    }
}

impl<T: JsLiteral, const N: usize> JsLiteral for [T; N] {
    fn write_js(&self, out: &mut String) {
        self.as_slice().write_js(out);
    }
}

impl JsLiteral for Root {
    fn write_js(&self, out: &mut String) {
        out.push_str(&format!(
            "r({},{},{})",
            js_string(&self.root),
            js_string(&self.meaning),
            self.flags,
        ));
    }
}

impl JsLiteral for Lexeme {
    fn write_js(&self, out: &mut String) {
        out.push_str(&format!(
            "l({},{},{},{})",
            js_ref(self.root_ref),
            js_string(&self.lexeme),
            self.features,
            self.category,
        ));
    }
}

impl JsLiteral for Word {
    fn write_js(&self, out: &mut String) {
        out.push_str(&format!(
            "w({},{},{},{},{})",
            js_ref(self.lexeme_ref),
            js_string(&self.consonantal),
            js_string(&self.vocalised),
            self.features,
            self.category,
        ));
    }
}

impl JsLiteral for English {
    fn write_js(&self, out: &mut String) {
        out.push_str(&format!(
            "e({},{},{},{},{},{},{})",
            js_ref(self.lexeme_ref),
            js_string(&self.word),
            js_string(&self.before),
            js_string(&self.after),
            js_string(&self.comment),
            self.attributes,
            self.flag,
        ));
    }
}

impl JsLiteral for Etymology {
    fn write_js(&self, out: &mut String) {
        // The origin keeps Sedra's octal escapes (`\255`), which must survive
        // a JavaScript string literal.
        out.push_str(&format!(
            "t({},{},{})",
            js_ref(self.lexeme_ref),
            js_string(&self.origin.replace('\\', "\\\\")),
            self.category,
        ));
    }
}

fn write_object(out: &mut String, parts: Vec<String>) {
    out.push('{');
    out.push_str(&parts.join(","));
    out.push('}');
}

impl JsLiteral for UbsChapter {
    fn write_js(&self, out: &mut String) {
        let mut parts: Vec<String> = self.verse_words.iter()
            .map(|(verse, words)| format!("{}:{}", verse, words.to_js()))
            .collect();
        parts.push(format!("verses:{}", self.verses));
        parts.push(format!("words:{}", self.words));
        parts.push(format!("rollupChapters:{}", self.rollup_chapters));
        parts.push(format!("rollupVerses:{}", self.rollup_verses));
        parts.push(format!("rollupWords:{}", self.rollup_words));
        write_object(out, parts);
    }
}

impl JsLiteral for UbsBook {
    fn write_js(&self, out: &mut String) {
        let mut parts: Vec<String> = self.chapter_map.iter()
            .map(|(chapter, c)| format!("{}:{}", chapter, c.to_js()))
            .collect();
        parts.push(format!("chapters:{}", self.chapters));
        parts.push(format!("verses:{}", self.verses));
        parts.push(format!("words:{}", self.words));
        parts.push(format!("rollupBooks:{}", self.rollup_books));
        parts.push(format!("rollupChapters:{}", self.rollup_chapters));
        parts.push(format!("rollupVerses:{}", self.rollup_verses));
        parts.push(format!("rollupWords:{}", self.rollup_words));
        write_object(out, parts);
    }
}

impl JsLiteral for UbsMap {
    fn write_js(&self, out: &mut String) {
        let mut parts: Vec<String> = self.book_map.iter()
            .map(|(book, b)| format!("{}:{}", book, b.to_js()))
            .collect();
        parts.push(format!("books:{}", self.books));
        parts.push(format!("chapters:{}", self.chapters));
        parts.push(format!("verses:{}", self.verses));
        parts.push(format!("words:{}", self.words));
        write_object(out, parts);
    }
}

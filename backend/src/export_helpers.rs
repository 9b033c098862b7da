//! Output modules for one record file, as JavaScript or JSON.
//!
//! JavaScript modules hold the literal behind `export default`. JSON arrays
//! have no leading hole, so slot `i` holds record `i + 1`.

use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::types::{ParseError, RecordType};
use crate::{english, etymology, lexemes, roots, ubs, words};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Js,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Js => "js",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid OutputFormat value: {0}")]
pub struct ParseOutputFormatError(String);

impl FromStr for OutputFormat {
    type Err = ParseOutputFormatError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "js" | "javascript" => Ok(OutputFormat::Js),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ParseOutputFormatError(s.to_string())),
        }
    }
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Failed to serialize {name} to JSON: {source}")]
    Json {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// One output file: `<name>.<ext>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputModule {
    pub name: &'static str,
    pub content: String,
}

impl OutputModule {
    pub fn file_name(&self, format: OutputFormat) -> String {
        format!("{}.{}", self.name, format.extension())
    }
}

fn js_module(name: &'static str, literal: String) -> OutputModule {
    OutputModule {
        name,
        content: format!("export default {}\n", literal),
    }
}

fn json_module<T: Serialize>(name: &'static str, value: &T, minify: bool) -> Result<OutputModule, ExportError> {
    let json = if minify {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    let content = json.map_err(|source| ExportError::Json { name, source })?;
    Ok(OutputModule { name, content })
}

/// Convert the text of one Sedra record file to its output modules.
pub fn convert_records(
    record_type: RecordType,
    content: &str,
    format: OutputFormat,
    minify: bool,
) -> Result<Vec<OutputModule>, ExportError> {
    let modules = match (record_type, format) {
        (RecordType::Roots, OutputFormat::Js) => {
            vec![js_module("roots", roots::get_roots(content))]
        }
        (RecordType::Roots, OutputFormat::Json) => {
            vec![json_module("roots", &roots::parse_roots(content), minify)?]
        }

        (RecordType::Lexemes, OutputFormat::Js) => {
            vec![js_module("lexemes", lexemes::get_lexemes(content))]
        }
        (RecordType::Lexemes, OutputFormat::Json) => {
            vec![json_module("lexemes", &lexemes::parse_lexemes(content), minify)?]
        }

        (RecordType::Words, OutputFormat::Js) => {
            let js = words::get_words(content);
            vec![
                js_module("words", js.words),
                js_module("noY", js.no_y),
                js_module("noW", js.no_w),
            ]
        }
        (RecordType::Words, OutputFormat::Json) => {
            let table = words::parse_words(content);
            vec![
                json_module("words", &table.words, minify)?,
                json_module("noY", &table.no_y, minify)?,
                json_module("noW", &table.no_w, minify)?,
            ]
        }

        (RecordType::English, OutputFormat::Js) => {
            let js = english::get_english(content);
            vec![
                js_module("english", js.english),
                js_module("englishLids", js.lids),
            ]
        }
        (RecordType::English, OutputFormat::Json) => {
            let table = english::parse_english(content);
            vec![
                json_module("english", &table.english, minify)?,
                json_module("englishLids", &table.lexeme_index, minify)?,
            ]
        }

        (RecordType::Etymology, OutputFormat::Js) => {
            let js = etymology::get_etymology(content);
            vec![
                js_module("etymology", js.etymology),
                js_module("etymologyLids", js.lids),
            ]
        }
        (RecordType::Etymology, OutputFormat::Json) => {
            let table = etymology::parse_etymology(content);
            vec![
                json_module("etymology", &table.etymology, minify)?,
                json_module("etymologyLids", &table.lexeme_index, minify)?,
            ]
        }

        (RecordType::Ubs, OutputFormat::Js) => {
            let js = ubs::get_ubs(content)?;
            vec![
                js_module("ubs", js.ubs),
                js_module("reference", js.reference),
            ]
        }
        (RecordType::Ubs, OutputFormat::Json) => {
            let table = ubs::parse_ubs(content)?;
            vec![
                json_module("ubs", &table.ubs, minify)?,
                json_module("reference", &table.reference, minify)?,
            ]
        }
    };

    Ok(modules)
}

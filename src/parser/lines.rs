use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ExtractError, Result};

/// Integer literal as accepted for the instance token: optional sign, ASCII
/// digits, single underscores between digit groups. No width limit.
static INTEGER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+(?:_[0-9]+)*$").unwrap());

const INSTANCE_TOKEN: &str = "instance ";
const K_TOKEN: &str = "with k=";
const EXPANDED_PREFIX: &str = "Expanded until last jump: ";
const EXPANDED_SUFFIX: &str = " state(s).";
const SEARCH_PREFIX: &str = "Search time: ";
const TOTAL_PREFIX: &str = "Total time: ";

/// How data lines missing their literal decorations are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Missing prefix/suffix is a `MalformedDataLine` error.
    #[default]
    Strict,
    /// Decorations are removed where present; anything else passes through.
    Lenient,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub label: String,
    /// The instance token, validated as an integer literal.
    pub number: String,
    pub k: String,
}

/// `instance <ins> with k=<k>` → label, integer instance, k.
///
/// Both literals are removed wherever they occur and the rest must split into
/// exactly two whitespace-separated tokens. Applies in every [`Mode`].
pub fn header(line: &str, line_no: usize, label_prefix: &str) -> Result<Header> {
    let malformed = |reason: String| ExtractError::MalformedHeaderLine {
        line_no,
        line: line.to_string(),
        reason,
    };

    let stripped = line.replace(INSTANCE_TOKEN, "").replace(K_TOKEN, "");
    let tokens: Vec<&str> = stripped.split_whitespace().collect();
    let (ins, k) = match tokens.as_slice() {
        [ins, k] => (*ins, *k),
        _ => return Err(malformed(format!("expected 2 tokens, found {}", tokens.len()))),
    };

    if !INTEGER_RE.is_match(ins) {
        return Err(malformed(format!("instance {ins:?} is not an integer")));
    }

    Ok(Header {
        label: format!("{label_prefix}{ins}"),
        number: ins.to_string(),
        k: k.to_string(),
    })
}

/// `Expanded until last jump: <N> state(s).` → `<N>`
pub fn expanded(line: &str, line_no: usize, mode: Mode) -> Result<String> {
    strip(line, line_no, EXPANDED_PREFIX, Some(EXPANDED_SUFFIX), mode)
}

/// `Search time: <T>` → `<T>`
pub fn search_time(line: &str, line_no: usize, mode: Mode) -> Result<String> {
    strip(line, line_no, SEARCH_PREFIX, None, mode)
}

/// `Total time: <T>` → `<T>`
pub fn total_time(line: &str, line_no: usize, mode: Mode) -> Result<String> {
    strip(line, line_no, TOTAL_PREFIX, None, mode)
}

fn strip(
    line: &str,
    line_no: usize,
    prefix: &'static str,
    suffix: Option<&'static str>,
    mode: Mode,
) -> Result<String> {
    match mode {
        Mode::Strict => {
            let missing = |expected| ExtractError::MalformedDataLine {
                line_no,
                line: line.to_string(),
                expected,
            };
            let rest = line.strip_prefix(prefix).ok_or_else(|| missing(prefix))?;
            let value = match suffix {
                Some(s) => rest.strip_suffix(s).ok_or_else(|| missing(s))?,
                None => rest,
            };
            Ok(value.to_string())
        }
        Mode::Lenient => {
            let mut value = line.replace(prefix, "");
            if let Some(s) = suffix {
                value = value.replace(s, "");
            }
            Ok(value)
        }
    }
}

//! Strings that match, or fail to match, a declared format.
//!
//! A format is a regular expression the whole value must match. Matching
//! strings are produced by walking the expression's high-level IR and making
//! a random choice at every class, alternation and repetition. Non-matching
//! strings are found by trying candidates against the anchored expression.

use crate::{DataGenError, DataGenResult, RandomString};
use rand::seq::SliceRandom;
use rand::Rng;
use regex_lite::Regex;
use regex_syntax::hir::{Class, ClassUnicodeRange, Hir, HirKind};

/// Extra repetitions allowed beyond the minimum of `*`, `+` and `{n,}`.
const UNBOUNDED_EXTRA: u32 = 8;
const PRINTABLE_ASCII: (u32, u32) = (0x20, 0x7e);
const SYMBOLS: &[char] = &['!', '@', '#', '$', '%', '&', '*', '?', ' '];

/// Generator of strings for a format.
#[derive(Debug, Clone)]
pub struct FormatGenerator {
    pattern: String,
    hir: Hir,
    matcher: Regex,
}

impl FormatGenerator {
    pub fn new(pattern: &str) -> DataGenResult<Self> {
        let error = |reason: String| DataGenError::InvalidFormat {
            pattern: pattern.to_string(),
            reason,
        };
        let hir = regex_syntax::Parser::new()
            .parse(pattern)
            .map_err(|e| error(e.to_string()))?;
        let matcher = Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| error(e.to_string()))?;
        Ok(Self {
            pattern: pattern.to_string(),
            hir,
            matcher,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether the whole text matches the format.
    pub fn is_match(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }

    /// A string matching the format.
    pub fn valid<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let mut out = String::new();
        emit(&self.hir, rng, &mut out);
        out
    }

    /// A string that does not match the format, within `tries` attempts.
    ///
    /// Candidates alternate between a matching string spoiled by a symbol and
    /// a random alphanumeric string of `min_size..=max_size` characters, after
    /// trying the empty string first.
    pub fn invalid<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        tries: usize,
        min_size: usize,
        max_size: usize,
    ) -> Option<String> {
        (0..tries)
            .map(|attempt| match attempt {
                0 => String::new(),
                n if n % 2 == 1 => {
                    let mut spoiled = self.valid(rng);
                    let position = RandomString::length(rng, 0, spoiled.chars().count());
                    let offset = spoiled
                        .char_indices()
                        .nth(position)
                        .map(|(i, _)| i)
                        .unwrap_or(spoiled.len());
                    spoiled.insert(offset, *SYMBOLS.choose(rng).unwrap_or(&'!'));
                    spoiled
                }
                _ => RandomString::between(rng, min_size.max(1), max_size.max(1)),
            })
            .find(|candidate| !self.is_match(candidate))
    }
}

fn emit<R: Rng + ?Sized>(hir: &Hir, rng: &mut R, out: &mut String) {
    match hir.kind() {
        HirKind::Empty | HirKind::Look(_) => {}
        HirKind::Literal(literal) => out.push_str(&String::from_utf8_lossy(&literal.0)),
        HirKind::Class(Class::Unicode(class)) => {
            if let Some(c) = pick_char(class.ranges(), rng) {
                out.push(c);
            }
        }
        HirKind::Class(Class::Bytes(class)) => {
            let ranges: Vec<(u32, u32)> = class
                .ranges()
                .iter()
                .map(|r| (r.start() as u32, r.end() as u32))
                .filter(|(start, _)| *start < 0x80)
                .map(|(start, end)| (start, end.min(0x7f)))
                .collect();
            if let Some(c) = pick_in(&ranges, rng) {
                out.push(c);
            }
        }
        HirKind::Repetition(rep) => {
            let max = rep.max.unwrap_or(rep.min + UNBOUNDED_EXTRA).max(rep.min);
            for _ in 0..rng.gen_range(rep.min..=max) {
                emit(&rep.sub, rng, out);
            }
        }
        HirKind::Capture(capture) => emit(&capture.sub, rng, out),
        HirKind::Concat(items) => {
            for item in items {
                emit(item, rng, out);
            }
        }
        HirKind::Alternation(items) => {
            if let Some(item) = items.choose(rng) {
                emit(item, rng, out);
            }
        }
    }
}

/// Picks a character of the class, preferring printable ASCII.
fn pick_char<R: Rng + ?Sized>(ranges: &[ClassUnicodeRange], rng: &mut R) -> Option<char> {
    let all: Vec<(u32, u32)> = ranges
        .iter()
        .map(|r| (r.start() as u32, r.end() as u32))
        .collect();
    let (lo, hi) = PRINTABLE_ASCII;
    let printable: Vec<(u32, u32)> = all
        .iter()
        .filter(|(start, end)| *start <= hi && *end >= lo)
        .map(|(start, end)| ((*start).max(lo), (*end).min(hi)))
        .collect();
    if printable.is_empty() {
        pick_in(&all, rng)
    } else {
        pick_in(&printable, rng)
    }
}

fn pick_in<R: Rng + ?Sized>(ranges: &[(u32, u32)], rng: &mut R) -> Option<char> {
    let total: u32 = ranges.iter().map(|(start, end)| end - start + 1).sum();
    if total == 0 {
        return None;
    }
    let mut index = rng.gen_range(0..total);
    for (start, end) in ranges {
        let size = end - start + 1;
        if index < size {
            return char::from_u32(start + index).or_else(|| char::from_u32(*start));
        }
        index -= size;
    }
    None
}

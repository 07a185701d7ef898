//! Pattern-match reference encoder.
//!
//! Implements the same contract as [`super::fast`] with regex replacement
//! passes instead of a hand-rolled scanner. It exists as the readable
//! reference the fast scanner is checked against; the conformance tests
//! assert the two agree on every input.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::push_hex_run;
use crate::code::{self, ALT_MARKER, SECTION_MARKER};

/// Matches an authoring hex token: `&#` followed by exactly six hex digits.
static HEX_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"&#([0-9a-fA-F]{6})").unwrap());

/// Matches an already-exploded authoring-form run: `&x` (either case)
/// followed by six `&`-marked hex digits.
static EXPLODED_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"&[xX](?:&[0-9a-fA-F]){6}").unwrap());

/// Encodes authoring markup into the internal form.
///
/// Behaviorally identical to [`super::fast::encode`]: hex tokens and
/// exploded authoring runs are replaced first, then the remaining simple
/// pairs are translated.
pub fn encode(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let hexed = HEX_TOKEN.replace_all(text, |caps: &Captures<'_>| {
        let mut digits = ['0'; 6];
        for (slot, c) in digits.iter_mut().zip(caps[1].chars()) {
            *slot = c;
        }
        let mut run = String::with_capacity(21);
        push_hex_run(&mut run, digits);
        run
    });

    let normalized = EXPLODED_RUN.replace_all(&hexed, |caps: &Captures<'_>| {
        // The match is `& x (& d){6}`; the digits sit at char positions
        // 3, 5, 7, 9, 11, 13.
        let mut digits = ['0'; 6];
        for (slot, c) in digits.iter_mut().zip(caps[0].chars().skip(3).step_by(2)) {
            *slot = c;
        }
        let mut run = String::with_capacity(21);
        push_hex_run(&mut run, digits);
        run
    });

    translate_pairs(&normalized)
}

/// Translates the remaining simple `&` + code pairs, leaving `&x`/`&X`
/// untouched: a leftover exploded prefix did not form a full run and must
/// stay verbatim, exactly as the single-pass scanner leaves it.
fn translate_pairs(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    let len = chars.len();

    let mut i = 0;
    while i + 1 < len {
        if chars[i] == ALT_MARKER {
            let next = chars[i + 1];
            if next == 'x' || next == 'X' {
                i += 2;
                continue;
            }
            if code::is_color_code(next) {
                chars[i] = SECTION_MARKER;
                chars[i + 1] = next.to_ascii_lowercase();
                i += 2;
                continue;
            }
        }
        i += 1;
    }

    chars.into_iter().collect()
}

//! Transcoder selection.
//!
//! A [`Transcoder`] pairs one encoder with its matching decoder under a
//! named [`Mode`]. Selection is configuration-time work; the resulting value
//! is `Copy`, stateless and safe to share across threads for any number of
//! encode/decode calls.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::code::{ALT_MARKER, SECTION_MARKER};
use crate::{decode, encode, legacy};

/// Error returned when a mode name does not match any known mode.
///
/// Only the [`FromStr`] surface reports this; [`Transcoder::select`]
/// deliberately swallows it and degrades to [`Mode::Basic`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown transcoder mode: {0:?}")]
pub struct UnknownModeError(pub String);

/// A named encode/decode strategy pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Simple pair translation in both directions; no hex awareness.
    #[default]
    Basic,
    /// Single-pass hex encoder (the fast scanner) with the hex decoder.
    Legacy,
    /// The regex reference encoder with the hex decoder. Behaviorally
    /// identical to [`Mode::Legacy`]; kept selectable for comparison.
    LegacyPattern,
    /// The extended state-machine encoder (3- and 6-digit hex) with the hex
    /// decoder.
    LegacyAdvanced,
}

impl Mode {
    /// Case-insensitive lookup over the known mode names and their aliases.
    pub fn lookup(name: &str) -> Option<Mode> {
        match name.to_ascii_lowercase().as_str() {
            "basic" | "vanilla" => Some(Mode::Basic),
            "legacy" | "hex" => Some(Mode::Legacy),
            "legacy-pattern" | "pattern-hex" => Some(Mode::LegacyPattern),
            "legacy-advanced" | "advanced" | "extended" => Some(Mode::LegacyAdvanced),
            _ => None,
        }
    }

    /// The canonical name of this mode.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Basic => "basic",
            Mode::Legacy => "legacy",
            Mode::LegacyPattern => "legacy-pattern",
            Mode::LegacyAdvanced => "legacy-advanced",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = UnknownModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::lookup(s).ok_or_else(|| UnknownModeError(s.to_string()))
    }
}

/// A paired encoder and decoder for one [`Mode`].
///
/// # Examples
///
/// ```
/// use sigil::Transcoder;
///
/// let transcoder = Transcoder::select("legacy");
/// let internal = transcoder.encode("&aGreen &#ff0000Red");
/// assert_eq!(internal, "§aGreen §x§f§f§0§0§0§0Red");
/// assert_eq!(transcoder.decode(&internal), "&aGreen &#ff0000Red");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Transcoder {
    mode: Mode,
}

impl Transcoder {
    /// Creates a transcoder for an explicit mode.
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// Selects a transcoder by configuration name.
    ///
    /// Lookup is case-insensitive. An unknown or empty name never fails:
    /// it logs a warning and degrades to [`Mode::Basic`].
    pub fn select(name: &str) -> Self {
        let mode = match Mode::lookup(name) {
            Some(mode) => {
                log::debug!("selected transcoder mode {mode}");
                mode
            }
            None => {
                log::warn!("unknown transcoder mode {name:?}, falling back to basic");
                Mode::Basic
            }
        };
        Self { mode }
    }

    /// The mode this transcoder was built with.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Encodes authoring markup into the internal form.
    ///
    /// Never fails; empty input returns an empty string and malformed
    /// tokens pass through verbatim.
    pub fn encode(&self, text: &str) -> String {
        match self.mode {
            Mode::Basic => legacy::translate(text, ALT_MARKER, SECTION_MARKER),
            Mode::Legacy => encode::fast::encode(text),
            Mode::LegacyPattern => encode::pattern::encode(text),
            Mode::LegacyAdvanced => encode::extended::encode(text),
        }
    }

    /// Decodes internal text back into authoring markup.
    ///
    /// Never fails; idempotent from the second application onward.
    pub fn decode(&self, text: &str) -> String {
        match self.mode {
            Mode::Basic => legacy::translate(text, SECTION_MARKER, ALT_MARKER),
            Mode::Legacy | Mode::LegacyPattern | Mode::LegacyAdvanced => decode::decode(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Mode::lookup("LEGACY"), Some(Mode::Legacy));
        assert_eq!(Mode::lookup("Legacy-Advanced"), Some(Mode::LegacyAdvanced));
        assert_eq!(Mode::lookup("BASIC"), Some(Mode::Basic));
    }

    #[test]
    fn lookup_accepts_aliases() {
        assert_eq!(Mode::lookup("hex"), Some(Mode::Legacy));
        assert_eq!(Mode::lookup("pattern-hex"), Some(Mode::LegacyPattern));
        assert_eq!(Mode::lookup("advanced"), Some(Mode::LegacyAdvanced));
        assert_eq!(Mode::lookup("extended"), Some(Mode::LegacyAdvanced));
        assert_eq!(Mode::lookup("vanilla"), Some(Mode::Basic));
    }

    #[test]
    fn unknown_mode_degrades_to_basic() {
        assert_eq!(Transcoder::select("minimessage").mode(), Mode::Basic);
        assert_eq!(Transcoder::select("").mode(), Mode::Basic);
    }

    #[test]
    fn from_str_reports_unknown_modes() {
        assert_eq!("legacy".parse::<Mode>(), Ok(Mode::Legacy));
        assert_eq!(
            "nope".parse::<Mode>(),
            Err(UnknownModeError("nope".to_string())),
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for mode in [Mode::Basic, Mode::Legacy, Mode::LegacyPattern, Mode::LegacyAdvanced] {
            assert_eq!(mode.name().parse::<Mode>(), Ok(mode));
        }
    }

    #[test]
    fn default_is_basic() {
        assert_eq!(Transcoder::default().mode(), Mode::Basic);
    }

    #[test]
    fn basic_mode_ignores_hex() {
        let t = Transcoder::new(Mode::Basic);
        assert_eq!(t.encode("&aGreen &#ff0000Red"), "§aGreen &#ff0000Red");
        assert_eq!(t.decode("§aGreen &#ff0000Red"), "&aGreen &#ff0000Red");
    }

    #[test]
    fn advanced_mode_accepts_short_hex() {
        let t = Transcoder::new(Mode::LegacyAdvanced);
        assert_eq!(t.encode("&##f5a"), "§x§f§f§5§5§a§a");
        // Lossy by design: the short form decodes to its 6-digit equivalent.
        assert_eq!(t.decode(&t.encode("&##f5a")), "&#ff55aa");
    }
}

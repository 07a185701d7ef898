//! Bidirectional color-markup transcoding.
//!
//! This crate converts human-authored inline color/format markup — an `&`
//! marker followed by a short code — into the compact section-sign form a
//! text renderer consumes, and back again.
//!
//! # Code forms
//!
//! - `&a`, `&l`, `&r`, … — single-character color/format codes
//! - `&#rrggbb` — a 6-digit hex color, expanded into the exploded internal
//!   run `§x§r§r§g§g§b§b`
//! - `&##rgb` — a 3-digit short hex color (each digit doubled); accepted by
//!   the extended mode only, and normalized to the 6-digit form on decode
//!
//! Malformed or incomplete tokens are never an error: they pass through
//! byte-for-byte untouched.
//!
//! # Usage
//!
//! ```
//! use sigil::{Mode, Transcoder};
//!
//! // Select a transcoder by configuration name; unknown names degrade to
//! // the basic (no-hex) mode instead of failing.
//! let transcoder = Transcoder::select("legacy");
//! assert_eq!(transcoder.mode(), Mode::Legacy);
//!
//! let internal = transcoder.encode("&aGreen &#ff0000Red &bBlue");
//! assert_eq!(internal, "§aGreen §x§f§f§0§0§0§0Red §bBlue");
//!
//! assert_eq!(transcoder.decode(&internal), "&aGreen &#ff0000Red &bBlue");
//! ```
//!
//! Transcoders are stateless `Copy` values: one selected pair can be shared
//! freely across threads and reused for any number of calls.

pub mod code;
pub mod decode;
pub mod encode;
pub mod legacy;
pub mod transcoder;

// Re-export the main types at the crate root.
pub use code::{ALT_MARKER, SECTION_MARKER};
pub use transcoder::{Mode, Transcoder, UnknownModeError};

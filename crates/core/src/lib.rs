//! Core library for the qr-labels project.
//!
//! Turns an ordered list of [`LabelDescriptor`]s into a single ZPL II
//! document, one QR-code block per descriptor. The main entry points are
//! [`emit_batch`] for generation and the [`input`] module for loading
//! descriptor lists from JSON or plain text.

#![warn(missing_docs)]

/// The label descriptor record.
pub mod descriptor;
/// ZPL batch emission.
pub mod emit;
/// Descriptor list loading from JSON or newline-delimited text.
pub mod input;

// ── Convenience re-exports ──────────────────────────────────────────────────

pub use descriptor::LabelDescriptor;
pub use emit::{BATCH_FOOTER, BATCH_HEADER, emit_batch};
pub use input::{InputError, from_json_str, from_lines};

//! ZPL batch emitter — converts label descriptors into printer-ready ZPL.
//!
//! Output is byte-deterministic: the document is a fixed header, one
//! self-contained block per descriptor in input order, and a fixed footer,
//! with no whitespace between commands. Block geometry is a function of
//! the descriptor's index only, never of its content.

use std::fmt::Write;

use crate::descriptor::LabelDescriptor;

// ── Fixed document framing ──────────────────────────────────────────────

/// Document header: start format, inverted print orientation, 800-dot
/// print width, continuous media tracking, zero label length.
pub const BATCH_HEADER: &str = "^XA^POI^PW800^MNN^LL0000^XZ";

/// Document footer: end format.
pub const BATCH_FOOTER: &str = "^XZ";

// ── Block geometry and QR parameters ────────────────────────────────────

/// Horizontal field origin, identical for every block.
pub const ORIGIN_X: usize = 50;

/// Vertical field origin of the first block.
pub const ORIGIN_Y_BASE: usize = 50;

/// Vertical distance between consecutive blocks.
pub const ORIGIN_Y_STEP: usize = 300;

/// QR code model passed to `^BQ` (model 2, the recommended variant).
pub const QR_MODEL: u8 = 2;

/// QR magnification factor passed to `^BQ`.
pub const QR_MAGNIFICATION: u8 = 10;

/// `^FD` switches prefix: error-correction level L, automatic input mode.
pub const FIELD_DATA_PREFIX: &str = "LA,";

// ── Public API ──────────────────────────────────────────────────────────

/// Emit a ZPL document printing one QR-code label per descriptor.
///
/// Pure and stateless: the same input always yields byte-identical output,
/// and the descriptors are neither retained nor mutated. An empty slice
/// produces a valid document of header immediately followed by footer.
///
/// Serial numbers are embedded verbatim. Nothing is rejected, escaped, or
/// normalized, so a serial containing ZPL control characters will alter
/// the printed result exactly as it would have in the reference behavior.
pub fn emit_batch(descriptors: &[LabelDescriptor]) -> String {
    let mut out = String::with_capacity(
        BATCH_HEADER.len() + BATCH_FOOTER.len() + 48 * descriptors.len(),
    );
    out.push_str(BATCH_HEADER);
    for (index, descriptor) in descriptors.iter().enumerate() {
        emit_block(&mut out, index, descriptor);
    }
    out.push_str(BATCH_FOOTER);
    out
}

/// Vertical field origin for the block at `index`.
pub fn block_origin_y(index: usize) -> usize {
    ORIGIN_Y_BASE + ORIGIN_Y_STEP * index
}

// ── Block emission ──────────────────────────────────────────────────────

/// Emit one self-contained `^XA`..`^XZ` block for a single label.
///
/// Each block carries its own format open/close pair in addition to the
/// document header and footer. Redundant for most printers, but kept for
/// byte compatibility with existing label stock produced this way.
fn emit_block(out: &mut String, index: usize, descriptor: &LabelDescriptor) {
    // Writing to a String cannot fail.
    let _ = write!(
        out,
        "^XA^FO{ORIGIN_X},{y}^BQN,{QR_MODEL},{QR_MAGNIFICATION}^FD{FIELD_DATA_PREFIX}{serial}^FS^XZ",
        y = block_origin_y(index),
        serial = descriptor.serial_number,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_origins_step_by_300() {
        assert_eq!(block_origin_y(0), 50);
        assert_eq!(block_origin_y(1), 350);
        assert_eq!(block_origin_y(7), 2150);
    }

    #[test]
    fn single_block_layout() {
        let out = emit_batch(&[LabelDescriptor::new("SN-001")]);
        assert_eq!(
            out,
            "^XA^POI^PW800^MNN^LL0000^XZ^XA^FO50,50^BQN,2,10^FDLA,SN-001^FS^XZ^XZ"
        );
    }
}

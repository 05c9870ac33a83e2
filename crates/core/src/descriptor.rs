use serde::{Deserialize, Serialize};

/// One physical label to print.
///
/// Constructed by the caller before emission and never retained or mutated
/// by the emitter. The serial number is copied verbatim into the output:
/// no validation, trimming, or escaping is applied, so empty strings and
/// arbitrary text pass through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LabelDescriptor {
    /// Serial number encoded in the label's QR code.
    pub serial_number: String,
}

impl LabelDescriptor {
    /// Create a descriptor for the given serial number.
    pub fn new(serial_number: impl Into<String>) -> Self {
        Self {
            serial_number: serial_number.into(),
        }
    }
}

impl From<&str> for LabelDescriptor {
    fn from(serial_number: &str) -> Self {
        Self::new(serial_number)
    }
}

impl From<String> for LabelDescriptor {
    fn from(serial_number: String) -> Self {
        Self { serial_number }
    }
}

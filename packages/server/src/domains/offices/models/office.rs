use serde::{Deserialize, Serialize};

/// A static descriptor of a physical agency location.
///
/// Records are defined once at process start and never mutated. Field values
/// are externally observable data the client renders verbatim, including the
/// multi-line addresses and the mixed international phone formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficeRecord {
    /// Unique slug, e.g. "los-angeles"
    pub id: String,
    pub name: String,
    /// Multi-line, `\n` separated
    pub address: String,
    /// Display-formatted, not normalized
    pub phone: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

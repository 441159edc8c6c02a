use crate::domains::offices::models::{Coordinates, OfficeRecord};

/// The in-memory office directory.
///
/// Constructed once at startup, read-only afterwards: every call to
/// [`OfficeDirectory::list`] returns the same eight records in the same
/// order, so repeated reads serialize byte-identically within a process
/// lifetime.
#[derive(Debug, Clone)]
pub struct OfficeDirectory {
    records: Vec<OfficeRecord>,
}

impl OfficeDirectory {
    pub fn new() -> Self {
        Self {
            records: vec![
                office(
                    "los-angeles",
                    "Los Angeles",
                    "9601 Wilshire Blvd\nBeverly Hills, CA 90210",
                    "310-285-9000",
                    34.0678186,
                    -118.403733,
                ),
                office(
                    "new-york",
                    "New York",
                    "11 Madison Avenue\nNew York, NY 10010",
                    "212-586-5100",
                    40.7416326,
                    -73.9870711,
                ),
                office(
                    "nashville",
                    "Nashville",
                    "1201 Demonbreun\nNashville, TN 37203",
                    "615-963-3000",
                    36.1539262,
                    -86.7869553,
                ),
                office(
                    "london",
                    "London",
                    "100 New Oxford St\nLondon WC1A 1HB",
                    "+44 20 8929 8400",
                    51.5168556,
                    -0.1283434,
                ),
                office(
                    "chicago",
                    "Chicago",
                    "121 West Wacker Drive\nChicago, IL 60601",
                    "312-275-8201",
                    41.886652,
                    -87.6318694,
                ),
                office(
                    "washington-dc",
                    "Washington D.C.",
                    "1666 Connecticut Ave NW #550\nWashington, DC 20009",
                    "(202) 328-3282",
                    38.912322,
                    -77.045446,
                ),
                office(
                    "miami",
                    "Miami",
                    "150 Alhambra Plaza Suite 950\nCoral Gables, FL 33134",
                    "+1 (305) 447-6382",
                    25.7519569,
                    -80.2578024,
                ),
                office(
                    "sydney",
                    "Sydney",
                    "Level 45, 25 Martin Place\nSydney NSW 2000 Australia",
                    "+61 2 8046 0300",
                    -33.867846,
                    151.209641,
                ),
            ],
        }
    }

    /// All offices, in fixed display order.
    pub fn list(&self) -> &[OfficeRecord] {
        &self.records
    }
}

impl Default for OfficeDirectory {
    fn default() -> Self {
        Self::new()
    }
}

fn office(id: &str, name: &str, address: &str, phone: &str, lat: f64, lng: f64) -> OfficeRecord {
    OfficeRecord {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        phone: phone.to_string(),
        coordinates: Coordinates { lat, lng },
    }
}

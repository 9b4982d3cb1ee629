use serde::{Deserialize, Serialize};

/// A country that holidays can be listed for.
///
/// `iso_code` is the ISO 3166-1 alpha-2 code (e.g. `"US"`); it is non-empty
/// and unique within any list handed out by the fetch layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Country {
    pub iso_code: String,
    pub name: String,
}

impl Country {
    pub fn new(iso_code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            iso_code: iso_code.into(),
            name: name.into(),
        }
    }
}

/// Look up the display name for `iso_code` in `countries`.
pub fn name_for<'a>(countries: &'a [Country], iso_code: &str) -> Option<&'a str> {
    countries
        .iter()
        .find(|c| c.iso_code == iso_code)
        .map(|c| c.name.as_str())
}

/// Whether `iso_code` is present in `countries`.
pub fn contains(countries: &[Country], iso_code: &str) -> bool {
    countries.iter().any(|c| c.iso_code == iso_code)
}

use serde::Deserialize;

/// A card supplied by the caller.
///
/// The number is passed through as-is; no Luhn or brand check is performed.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct CreditCard {
    pub number: String,
    pub month: u8,
    pub year: u16,
    #[serde(default)]
    pub verification_value: Option<String>,
}

impl CreditCard {
    pub fn new(number: impl Into<String>, month: u8, year: u16) -> Self {
        Self {
            number: number.into(),
            month,
            year,
            verification_value: None,
        }
    }

    pub fn with_verification_value(mut self, value: impl Into<String>) -> Self {
        self.verification_value = Some(value.into());
        self
    }

    /// The verification value, if one was given and is not blank.
    pub fn verification_value(&self) -> Option<&str> {
        self.verification_value
            .as_deref()
            .filter(|value| !value.trim().is_empty())
    }

    /// Expiry as `MM/YY`.
    ///
    /// The year is padded to four digits and its last two are kept, so `25`
    /// stays `25` and `10025` becomes `25`.
    pub fn expiry(&self) -> String {
        let month = format!("{:02}", self.month);
        let year = format!("{:04}", self.year);
        format!("{}/{}", month, &year[year.len() - 2..])
    }
}

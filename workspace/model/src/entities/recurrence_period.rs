use std::fmt;
use std::str::FromStr;

/// Cadence at which a recurring account repeats.
///
/// Stored values come from legacy data, so parsing never fails: anything that
/// is not a known cadence is kept verbatim in `Unrecognized` and the expander
/// decides what to do with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecurrencePeriod {
    Monthly,
    Quarterly,
    Yearly,
    Unrecognized(String),
}

impl RecurrencePeriod {
    /// Number of calendar months between two occurrences, if the period is known.
    pub fn months(&self) -> Option<u32> {
        match self {
            RecurrencePeriod::Monthly => Some(1),
            RecurrencePeriod::Quarterly => Some(3),
            RecurrencePeriod::Yearly => Some(12),
            RecurrencePeriod::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RecurrencePeriod::Monthly => "monthly",
            RecurrencePeriod::Quarterly => "quarterly",
            RecurrencePeriod::Yearly => "yearly",
            RecurrencePeriod::Unrecognized(raw) => raw,
        }
    }
}

impl From<&str> for RecurrencePeriod {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "monthly" | "month" => RecurrencePeriod::Monthly,
            "quarterly" | "quarter" => RecurrencePeriod::Quarterly,
            "yearly" | "year" | "annual" | "annually" => RecurrencePeriod::Yearly,
            _ => RecurrencePeriod::Unrecognized(value.to_string()),
        }
    }
}

impl From<String> for RecurrencePeriod {
    fn from(value: String) -> Self {
        RecurrencePeriod::from(value.as_str())
    }
}

impl FromStr for RecurrencePeriod {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(RecurrencePeriod::from(s))
    }
}

impl fmt::Display for RecurrencePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

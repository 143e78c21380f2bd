//! Lookup errors.

/// Why a best-option search found nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    /// No slice for this period id.
    PeriodNotFound(u8),
    /// The period exists but has no slice for this star id.
    RatingNotFound { period: u8, star: u8 },
    /// The slice exists but holds no locations.
    NoLocations { period: u8, star: u8 },
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupError::PeriodNotFound(period) => {
                write!(f, "No data for period {}", period)
            }
            LookupError::RatingNotFound { period, star } => {
                write!(f, "No data for rating {} in period {}", star, period)
            }
            LookupError::NoLocations { period, star } => {
                write!(f, "No locations for period {}, rating {}", period, star)
            }
        }
    }
}

impl std::error::Error for LookupError {}

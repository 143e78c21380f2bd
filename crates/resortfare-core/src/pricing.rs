//! Pricing formulas and generator configuration.
//!
//! A price is `base(star) × period × location × jitter`; a load is
//! `(load_base + period × step) × location_factor × jitter`. All coefficients
//! come from [`PricingConfig`], which can be loaded from JSON. The clamp
//! bounds are fixed constants so the table invariants hold no matter what
//! configuration is supplied.
//!
//! ```
//! use resortfare_core::pricing::{validate_config, PricingConfig};
//!
//! let config = PricingConfig::default();
//! assert!(validate_config(&config).is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::is_week_period;

pub const MIN_PRICE: u32 = 1000;
pub const MAX_PRICE: u32 = 20000;
pub const MIN_LOAD: u8 = 10;
pub const MAX_LOAD: u8 = 100;

/// Half-open uniform band `[low, high)` for random multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JitterBand {
    pub low: f64,
    pub high: f64,
}

impl JitterBand {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Draw a multiplier from the band.
    pub fn sample(&self, rng: &mut impl rand::Rng) -> f64 {
        self.low + rng.gen::<f64>() * (self.high - self.low)
    }
}

/// Generator coefficients. Defaults are the demo values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Base nightly price per star id (0..=4).
    pub base_prices: [u32; 5],
    /// Multiplier for the whole-season bucket (period 0).
    pub season_multiplier: f64,
    /// Multiplier for month buckets (periods 1..=3).
    pub month_multiplier: f64,
    /// Week buckets use `week_base + (id % 4) * week_step`.
    pub week_base: f64,
    pub week_step: f64,
    /// Location multiplier is `location_base + id * location_step`.
    pub location_base: f64,
    pub location_step: f64,
    pub price_jitter: JitterBand,
    /// Load baseline is `load_base + period_id * load_period_step`.
    pub load_base: f64,
    pub load_period_step: f64,
    /// Load location factor is `load_location_base + id * load_location_step`.
    pub load_location_base: f64,
    pub load_location_step: f64,
    pub load_jitter: JitterBand,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_prices: [1500, 3000, 4500, 7000, 12000],
            season_multiplier: 1.2,
            month_multiplier: 1.1,
            week_base: 1.3,
            week_step: 0.1,
            location_base: 0.8,
            location_step: 0.05,
            price_jitter: JitterBand::new(0.9, 1.3),
            load_base: 30.0,
            load_period_step: 2.0,
            load_location_base: 0.7,
            load_location_step: 0.02,
            load_jitter: JitterBand::new(0.8, 1.2),
        }
    }
}

impl PricingConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Base price for a star id. Ids past the table reuse the top tier.
    pub fn base_price(&self, star_id: u8) -> f64 {
        let idx = (star_id as usize).min(self.base_prices.len() - 1);
        self.base_prices[idx] as f64
    }

    /// Seasonal step function over period ids.
    pub fn period_multiplier(&self, period_id: u8) -> f64 {
        match period_id {
            0 => self.season_multiplier,
            p if is_week_period(p) => self.week_base + (p % 4) as f64 * self.week_step,
            _ => self.month_multiplier,
        }
    }

    /// Popularity proxy; strictly increasing with location id.
    pub fn location_multiplier(&self, location_id: u32) -> f64 {
        self.location_base + location_id as f64 * self.location_step
    }

    /// Occupancy before jitter for a (period, location) pair.
    pub fn base_load(&self, period_id: u8, location_id: u32) -> f64 {
        let by_period = self.load_base + period_id as f64 * self.load_period_step;
        let by_location = self.load_location_base + location_id as f64 * self.load_location_step;
        by_period * by_location
    }
}

/// Round and clamp a raw price into `[MIN_PRICE, MAX_PRICE]`.
pub fn clamp_price(raw: f64) -> u32 {
    if raw.is_nan() {
        return MIN_PRICE;
    }
    raw.round().clamp(MIN_PRICE as f64, MAX_PRICE as f64) as u32
}

/// Round and clamp a raw load into `[MIN_LOAD, MAX_LOAD]`.
pub fn clamp_load(raw: f64) -> u8 {
    if raw.is_nan() {
        return MIN_LOAD;
    }
    raw.round().clamp(MIN_LOAD as f64, MAX_LOAD as f64) as u8
}

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Base price for a star tier is zero.
    ZeroBasePrice { star_id: u8 },
    /// A price multiplier is zero, negative, or not finite.
    NonPositiveMultiplier(&'static str),
    /// A period multiplier would price a period below its base.
    MultiplierBelowOne(&'static str),
    /// A jitter band has `high <= low` or a non-positive bound.
    InvalidJitterBand {
        name: &'static str,
        low: f64,
        high: f64,
    },
    /// Location multipliers must grow with id.
    NonIncreasingLocationStep(f64),
    /// A load coefficient is zero, negative, or not finite.
    NonPositiveLoadFactor(&'static str),
    /// Load must grow with period and location id.
    NonIncreasingLoadStep(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ZeroBasePrice { star_id } => {
                write!(f, "base price for star {} must be positive", star_id)
            }
            ConfigError::NonPositiveMultiplier(name) => {
                write!(f, "multiplier `{}` must be positive", name)
            }
            ConfigError::MultiplierBelowOne(name) => {
                write!(f, "period multiplier `{}` must be at least 1.0", name)
            }
            ConfigError::InvalidJitterBand { name, low, high } => {
                write!(f, "jitter band `{}` is invalid: [{}, {})", name, low, high)
            }
            ConfigError::NonIncreasingLocationStep(step) => {
                write!(f, "location_step must be positive, got {}", step)
            }
            ConfigError::NonPositiveLoadFactor(name) => {
                write!(f, "load factor `{}` must be positive", name)
            }
            ConfigError::NonIncreasingLoadStep(name) => {
                write!(f, "load step `{}` must be positive", name)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

fn positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Validate a pricing configuration, returning all errors found.
pub fn validate_config(config: &PricingConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    for (star_id, &price) in config.base_prices.iter().enumerate() {
        if price == 0 {
            errors.push(ConfigError::ZeroBasePrice {
                star_id: star_id as u8,
            });
        }
    }

    // Period multipliers never drop below 1.0x
    let period_multipliers = [
        ("season_multiplier", config.season_multiplier),
        ("month_multiplier", config.month_multiplier),
        ("week_base", config.week_base),
    ];
    for (name, value) in period_multipliers {
        if !value.is_finite() || value < 1.0 {
            errors.push(ConfigError::MultiplierBelowOne(name));
        }
    }
    if !config.week_step.is_finite() || config.week_step < 0.0 {
        errors.push(ConfigError::NonPositiveMultiplier("week_step"));
    }
    if !positive(config.location_base) {
        errors.push(ConfigError::NonPositiveMultiplier("location_base"));
    }
    if !positive(config.location_step) {
        errors.push(ConfigError::NonIncreasingLocationStep(config.location_step));
    }

    let bands = [
        ("price_jitter", config.price_jitter),
        ("load_jitter", config.load_jitter),
    ];
    for (name, band) in bands {
        if !positive(band.low) || !band.high.is_finite() || band.high <= band.low {
            errors.push(ConfigError::InvalidJitterBand {
                name,
                low: band.low,
                high: band.high,
            });
        }
    }

    let load_factors = [
        ("load_base", config.load_base),
        ("load_location_base", config.load_location_base),
    ];
    for (name, value) in load_factors {
        if !positive(value) {
            errors.push(ConfigError::NonPositiveLoadFactor(name));
        }
    }
    let load_steps = [
        ("load_period_step", config.load_period_step),
        ("load_location_step", config.load_location_step),
    ];
    for (name, value) in load_steps {
        if !positive(value) {
            errors.push(ConfigError::NonIncreasingLoadStep(name));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn default_config_is_valid() {
        let config = PricingConfig::default();
        let errors = validate_config(&config);
        assert!(errors.is_empty(), "default config should be valid: {errors:?}");
    }

    #[test]
    fn base_prices_increase_with_stars() {
        let config = PricingConfig::default();
        for star in 1..5u8 {
            assert!(config.base_price(star) > config.base_price(star - 1));
        }
    }

    #[test]
    fn period_multiplier_never_below_one() {
        let config = PricingConfig::default();
        for p in 0..17u8 {
            assert!(
                config.period_multiplier(p) >= 1.0,
                "period {p} multiplier {}",
                config.period_multiplier(p)
            );
        }
        // Weeks trend above the whole-season bucket
        assert!(config.period_multiplier(4) > config.period_multiplier(0));
    }

    #[test]
    fn location_multiplier_strictly_increasing() {
        let config = PricingConfig::default();
        for id in 1..17u32 {
            assert!(config.location_multiplier(id) > config.location_multiplier(id - 1));
        }
    }

    #[test]
    fn load_increases_with_period_and_location() {
        let config = PricingConfig::default();
        for period in 0..17u8 {
            for location in 1..17u32 {
                assert!(
                    config.base_load(period, location) > config.base_load(period, location - 1),
                    "load flat at period {period}, location {location}"
                );
            }
        }
        for location in 0..17u32 {
            for period in 1..17u8 {
                let previous = config.base_load(period - 1, location);
                assert!(config.base_load(period, location) > previous);
            }
        }
        // (30 + 2 * 3) * (0.7 + 0.02 * 5)
        assert!((config.base_load(3, 5) - 28.8).abs() < 1e-9);
    }

    #[test]
    fn jitter_stays_in_band() {
        let band = JitterBand::new(0.9, 1.3);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = band.sample(&mut rng);
            assert!((0.9..1.3).contains(&v), "{v} out of band");
        }
        let mut high = StepRng::new(u64::MAX, 0);
        assert!(band.sample(&mut high) <= 1.3);
        let mut low = StepRng::new(0, 0);
        assert_eq!(band.sample(&mut low), 0.9);
    }

    #[test]
    fn clamps_hold_bounds() {
        assert_eq!(clamp_price(12.0), MIN_PRICE);
        assert_eq!(clamp_price(1e9), MAX_PRICE);
        assert_eq!(clamp_price(4321.4), 4321);
        assert_eq!(clamp_price(f64::NAN), MIN_PRICE);
        assert_eq!(clamp_load(-3.0), MIN_LOAD);
        assert_eq!(clamp_load(250.0), MAX_LOAD);
        assert_eq!(clamp_load(55.5), 56);
    }

    #[test]
    fn zero_base_price_rejected() {
        let config = PricingConfig {
            base_prices: [1500, 3000, 0, 7000, 12000],
            ..PricingConfig::default()
        };
        let errors = validate_config(&config);
        assert!(errors.contains(&ConfigError::ZeroBasePrice { star_id: 2 }));
    }

    #[test]
    fn period_multipliers_below_one_rejected() {
        let config = PricingConfig {
            season_multiplier: 0.5,
            month_multiplier: 0.6,
            week_base: 0.4,
            ..PricingConfig::default()
        };
        assert_eq!(
            validate_config(&config),
            vec![
                ConfigError::MultiplierBelowOne("season_multiplier"),
                ConfigError::MultiplierBelowOne("month_multiplier"),
                ConfigError::MultiplierBelowOne("week_base"),
            ]
        );

        let exactly_one = PricingConfig {
            season_multiplier: 1.0,
            month_multiplier: 1.0,
            week_base: 1.0,
            ..PricingConfig::default()
        };
        assert!(validate_config(&exactly_one).is_empty());
    }

    #[test]
    fn flat_load_steps_rejected() {
        let config = PricingConfig {
            load_period_step: 0.0,
            load_location_step: 0.0,
            ..PricingConfig::default()
        };
        assert_eq!(
            validate_config(&config),
            vec![
                ConfigError::NonIncreasingLoadStep("load_period_step"),
                ConfigError::NonIncreasingLoadStep("load_location_step"),
            ]
        );
    }

    #[test]
    fn inverted_jitter_rejected() {
        let config = PricingConfig {
            price_jitter: JitterBand::new(1.3, 0.9),
            ..PricingConfig::default()
        };
        assert!(validate_config(&config).iter().any(|e| matches!(
            e,
            ConfigError::InvalidJitterBand {
                name: "price_jitter",
                ..
            }
        )));
    }

    #[test]
    fn flat_location_step_rejected() {
        let config = PricingConfig {
            location_step: 0.0,
            ..PricingConfig::default()
        };
        let errors = validate_config(&config);
        assert_eq!(errors, vec![ConfigError::NonIncreasingLocationStep(0.0)]);
    }

    #[test]
    fn multiple_errors_reported() {
        let config = PricingConfig {
            season_multiplier: -1.0,
            load_base: 0.0,
            load_jitter: JitterBand::new(0.0, 0.0),
            ..PricingConfig::default()
        };
        let errors = validate_config(&config);
        assert_eq!(errors.len(), 3, "{errors:?}");
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config = PricingConfig::from_json(r#"{"season_multiplier": 1.5}"#).unwrap();
        assert_eq!(config.season_multiplier, 1.5);
        assert_eq!(config.base_prices, PricingConfig::default().base_prices);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(PricingConfig::from_json("{ not json").is_err());
    }
}

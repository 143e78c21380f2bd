//! Lookup service: owns the generated table and answers best-price queries.
//!
//! The table is built once when the service is constructed and never
//! changes afterwards, so a shared `&PriceService` can be read from any
//! number of places. [`PriceService::global`] gives the process-wide
//! instance the UI reads from.

use std::sync::OnceLock;

use rand::Rng;
use serde::Serialize;

use crate::catalog::{self, Location, StarRating, TimePeriod};
use crate::error::LookupError;
use crate::generation::{generate_price_table, PriceEntry, PriceTable};
use crate::pricing::PricingConfig;

/// Cheapest location for a (period, star) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestOption {
    pub location: String,
    pub price: u32,
    pub load: u8,
}

/// Read-only view over one generated price table.
#[derive(Debug, Clone)]
pub struct PriceService {
    table: PriceTable,
}

static GLOBAL: OnceLock<PriceService> = OnceLock::new();

impl PriceService {
    /// Build a table with default coefficients and the thread RNG.
    pub fn new() -> Self {
        Self::with_rng(&mut rand::thread_rng())
    }

    pub fn with_rng(rng: &mut impl Rng) -> Self {
        Self::with_config(&PricingConfig::default(), rng)
    }

    pub fn with_config(config: &PricingConfig, rng: &mut impl Rng) -> Self {
        Self::from_table(generate_price_table(config, rng))
    }

    /// Wrap an already generated (or hand-built) table.
    pub fn from_table(table: PriceTable) -> Self {
        Self { table }
    }

    /// Process-wide service, generated on first access.
    pub fn global() -> &'static PriceService {
        GLOBAL.get_or_init(|| {
            log::info!("Building process-wide price table");
            PriceService::new()
        })
    }

    pub fn time_periods(&self) -> &'static [TimePeriod] {
        catalog::time_periods()
    }

    pub fn stars(&self) -> &'static [StarRating] {
        catalog::stars()
    }

    pub fn locations(&self) -> &'static [Location] {
        catalog::locations()
    }

    pub fn prices(&self) -> &PriceTable {
        &self.table
    }

    pub fn entry(&self, period_id: u8, star_id: u8, location_id: u32) -> Option<&PriceEntry> {
        self.table.entry(period_id, star_id, location_id)
    }

    pub fn period_by_id(&self, id: u8) -> Option<&'static TimePeriod> {
        catalog::period_by_id(id)
    }

    pub fn star_by_id(&self, id: u8) -> Option<&'static StarRating> {
        catalog::star_by_id(id)
    }

    pub fn location_by_id(&self, id: u32) -> Option<&'static Location> {
        catalog::location_by_id(id)
    }

    /// Cheapest location for a (period, star) pair, or `None` with a
    /// logged warning when the pair is unknown or the slice is empty.
    pub fn find_best_option(&self, period_id: u8, star_id: u8) -> Option<BestOption> {
        match self.try_find_best_option(period_id, star_id) {
            Ok(best) => Some(best),
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        }
    }

    /// Linear scan over the slice. Strictly lower prices win; on a tie the
    /// location met first keeps the spot.
    pub fn try_find_best_option(
        &self,
        period_id: u8,
        star_id: u8,
    ) -> Result<BestOption, LookupError> {
        let stars = self
            .table
            .period(period_id)
            .ok_or(LookupError::PeriodNotFound(period_id))?;
        let slice = stars.get(&star_id).ok_or(LookupError::RatingNotFound {
            period: period_id,
            star: star_id,
        })?;

        log::info!(
            "Searching best option for period {}, rating {}",
            period_id,
            star_id
        );

        let mut best: Option<(&Location, &PriceEntry)> = None;
        for (location_id, entry) in slice {
            // Cells without a catalog location are not offered
            let Some(location) = catalog::location_by_id(*location_id) else {
                continue;
            };
            log::debug!(
                "Location: {}, price: {}, load: {}%",
                location.name,
                entry.price,
                entry.load
            );
            if best.is_none_or(|(_, b)| entry.price < b.price) {
                best = Some((location, entry));
            }
        }

        let (location, entry) = best.ok_or(LookupError::NoLocations {
            period: period_id,
            star: star_id,
        })?;
        log::info!("Best option: {}, price: {}", location.name, entry.price);

        Ok(BestOption {
            location: location.name.to_string(),
            price: entry.price,
            load: entry.load,
        })
    }
}

impl Default for PriceService {
    fn default() -> Self {
        Self::new()
    }
}

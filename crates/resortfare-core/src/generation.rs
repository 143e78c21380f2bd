//! Price table generation.
//!
//! Builds the dense `period → star → location` table from the catalogs.
//! Values are random; the shape is fixed: every triple gets an entry.

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::pricing::{clamp_load, clamp_price, PricingConfig};

/// Nightly price and occupancy for one (period, star, location) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub price: u32,
    /// Occupancy percentage.
    pub load: u8,
}

/// All locations of one (period, star) slice, keyed by location id.
pub type LocationPrices = BTreeMap<u32, PriceEntry>;
/// All star slices of one period, keyed by star id.
pub type StarPrices = BTreeMap<u8, LocationPrices>;

/// Three-level price table. Serializes as nested objects keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable {
    periods: BTreeMap<u8, StarPrices>,
}

impl PriceTable {
    pub fn period(&self, period_id: u8) -> Option<&StarPrices> {
        self.periods.get(&period_id)
    }

    /// The location slice for a (period, star) pair.
    pub fn slice(&self, period_id: u8, star_id: u8) -> Option<&LocationPrices> {
        self.period(period_id)?.get(&star_id)
    }

    pub fn entry(&self, period_id: u8, star_id: u8, location_id: u32) -> Option<&PriceEntry> {
        self.slice(period_id, star_id)?.get(&location_id)
    }

    pub fn insert(&mut self, period_id: u8, star_id: u8, location_id: u32, entry: PriceEntry) {
        self.periods
            .entry(period_id)
            .or_default()
            .entry(star_id)
            .or_default()
            .insert(location_id, entry);
    }

    /// Replace a whole slice, including with an empty one.
    pub fn insert_slice(&mut self, period_id: u8, star_id: u8, slice: LocationPrices) {
        self.periods
            .entry(period_id)
            .or_default()
            .insert(star_id, slice);
    }

    /// Every cell as `(period, star, location, entry)`, in id order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8, u32, &PriceEntry)> + '_ {
        self.periods.iter().flat_map(|(&p, stars)| {
            stars.iter().flat_map(move |(&s, locs)| {
                locs.iter().map(move |(&l, entry)| (p, s, l, entry))
            })
        })
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.periods
            .values()
            .flat_map(|stars| stars.values())
            .map(|locs| locs.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compute one cell.
pub fn generate_entry(
    config: &PricingConfig,
    period_id: u8,
    star_id: u8,
    location_id: u32,
    rng: &mut impl Rng,
) -> PriceEntry {
    let raw_price = config.base_price(star_id)
        * config.period_multiplier(period_id)
        * config.location_multiplier(location_id)
        * config.price_jitter.sample(rng);
    let raw_load = config.base_load(period_id, location_id) * config.load_jitter.sample(rng);

    PriceEntry {
        price: clamp_price(raw_price),
        load: clamp_load(raw_load),
    }
}

/// Generate the full table for every catalog period, star, and location.
pub fn generate_price_table(config: &PricingConfig, rng: &mut impl Rng) -> PriceTable {
    let mut table = PriceTable::default();

    for period in catalog::time_periods() {
        for star in catalog::stars() {
            let mut slice = LocationPrices::new();
            for location in catalog::locations() {
                let entry = generate_entry(config, period.id, star.id, location.id, rng);
                slice.insert(location.id, entry);
            }
            table.insert_slice(period.id, star.id, slice);
        }
    }

    log::debug!(
        "Generated price table: {} periods x {} ratings x {} locations = {} entries",
        catalog::time_periods().len(),
        catalog::stars().len(),
        catalog::locations().len(),
        table.len()
    );

    table
}

/// Generate with the default coefficients.
pub fn generate(rng: &mut impl Rng) -> PriceTable {
    generate_price_table(&PricingConfig::default(), rng)
}

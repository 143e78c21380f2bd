//! Fixed catalogs for the price table axes.
//!
//! Periods, star ratings and locations are static
//! literals; the UI builds its selection menus from them, so order and ids
//! must stay exactly as declared. Each entry also keeps the Russian
//! menu text in `native`.

use serde::Serialize;

/// A named calendar interval: the whole season, a month, or a week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimePeriod {
    #[serde(rename = "period")]
    pub label: &'static str,
    #[serde(skip)]
    pub native: &'static str,
    #[serde(rename = "id_time")]
    pub id: u8,
}

/// Hotel quality tier, 0 (no stars) through 4 (five stars).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarRating {
    #[serde(rename = "star")]
    pub label: &'static str,
    #[serde(skip)]
    pub native: &'static str,
    #[serde(rename = "id_star")]
    pub id: u8,
}

/// A resort town.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    #[serde(rename = "place")]
    pub name: &'static str,
    #[serde(skip)]
    pub native: &'static str,
    pub id: u32,
}

/// Number of periods; ids run `0..PERIOD_COUNT`.
pub const PERIOD_COUNT: u8 = 17;
/// Number of star ratings; ids run `0..STAR_COUNT`.
pub const STAR_COUNT: u8 = 5;

/// Whole-season and month buckets come first; everything after is a week.
pub const FIRST_WEEK_PERIOD: u8 = 4;

const fn period(label: &'static str, native: &'static str, id: u8) -> TimePeriod {
    TimePeriod { label, native, id }
}

const fn star(label: &'static str, native: &'static str, id: u8) -> StarRating {
    StarRating { label, native, id }
}

const fn place(name: &'static str, native: &'static str, id: u32) -> Location {
    Location { name, native, id }
}

static TIME_PERIODS: [TimePeriod; PERIOD_COUNT as usize] = [
    period("Summer", "Лето", 0),
    period("June", "Июнь", 1),
    period("July", "Июль", 2),
    period("August", "Август", 3),
    period("June 1-7", "1-7 июня", 4),
    period("June 8-14", "8-14 июня", 5),
    period("June 15-21", "15-21 июня", 6),
    period("June 22-28", "22-28 июня", 7),
    period("June 29 - July 5", "29 июня - 5 июля", 8),
    period("July 6-12", "6-12 июля", 9),
    period("July 13-19", "13-19 июля", 10),
    period("July 20-26", "20-26 июля", 11),
    period("July 27 - August 2", "27 июля - 2 августа", 12),
    period("August 3-9", "3-9 августа", 13),
    period("August 10-16", "10-16 августа", 14),
    period("August 17-23", "17-23 августа", 15),
    period("August 24-30", "24-30 августа", 16),
];

static STARS: [StarRating; STAR_COUNT as usize] = [
    star("No stars", "Без звезд", 0),
    star("Two stars", "Две звезды", 1),
    star("Three stars", "Три звезды", 2),
    star("Four stars", "Четыре звезды", 3),
    star("Five stars", "Пять звезд", 4),
];

static LOCATIONS: [Location; 17] = [
    place("Adler", "Адлер", 0),
    place("Alupka", "Алупка", 1),
    place("Alushta", "Алушта", 2),
    place("Anapa", "Анапа", 3),
    place("Berdyansk", "Бердянск", 4),
    place("Gelendzhik", "Геленджик", 5),
    place("Dagomys", "Дагомыс", 6),
    place("Yevpatoria", "Евпатория", 7),
    place("Kerch", "Керчь", 8),
    place("Lazarevskoye", "Лазоревское", 9),
    place("Mariupol", "Мприуполь", 10),
    place("Mineralnye Vody", "Минеральные воды", 11),
    place("Novorossiysk", "Новороссийск", 12),
    place("Sevastopol", "Севастополь", 13),
    place("Sochi", "Сочи", 14),
    place("Tuapse", "Туапсе", 15),
    place("Yalta", "Ялта", 16),
];

pub fn time_periods() -> &'static [TimePeriod] {
    &TIME_PERIODS
}

pub fn stars() -> &'static [StarRating] {
    &STARS
}

/// Locations in declared order, which is also ascending id order.
pub fn locations() -> &'static [Location] {
    &LOCATIONS
}

pub fn period_by_id(id: u8) -> Option<&'static TimePeriod> {
    TIME_PERIODS.iter().find(|p| p.id == id)
}

pub fn star_by_id(id: u8) -> Option<&'static StarRating> {
    STARS.iter().find(|s| s.id == id)
}

pub fn location_by_id(id: u32) -> Option<&'static Location> {
    LOCATIONS.iter().find(|l| l.id == id)
}

/// True for the per-week buckets (as opposed to the season or a month).
pub fn is_week_period(id: u8) -> bool {
    id >= FIRST_WEEK_PERIOD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn periods_match_declared_order() {
        let periods = time_periods();
        assert_eq!(periods.len(), 17);
        assert_eq!(periods[0].label, "Summer");
        assert_eq!(periods[0].id, 0);
        assert_eq!(periods[16].label, "August 24-30");
        for (i, p) in periods.iter().enumerate() {
            assert_eq!(p.id as usize, i);
        }
    }

    #[test]
    fn stars_cover_zero_to_four() {
        let ids: Vec<u8> = stars().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
        assert_eq!(stars()[4].label, "Five stars");
    }

    #[test]
    fn location_ids_unique_and_ascending() {
        let locs = locations();
        assert_eq!(locs.len(), 17);
        for (i, l) in locs.iter().enumerate() {
            assert_eq!(l.id as usize, i);
        }
        assert_eq!(locs[0].name, "Adler");
        assert_eq!(locs[14].name, "Sochi");
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(period_by_id(2).map(|p| p.label), Some("July"));
        assert_eq!(star_by_id(0).map(|s| s.native), Some("Без звезд"));
        assert_eq!(location_by_id(16).map(|l| l.name), Some("Yalta"));
        assert!(period_by_id(17).is_none());
        assert!(star_by_id(5).is_none());
        assert!(location_by_id(99).is_none());
    }

    #[test]
    fn week_buckets_start_at_four() {
        assert!(!is_week_period(0));
        assert!(!is_week_period(3));
        assert!(is_week_period(4));
        assert!(is_week_period(16));
    }

    #[test]
    fn serializes_in_ui_shape() {
        let json = serde_json::to_value(period_by_id(0).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({"period": "Summer", "id_time": 0}));
        let json = serde_json::to_value(location_by_id(3).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({"place": "Anapa", "id": 3}));
    }
}

//! Resortfare Headless Harness
//!
//! Builds a price table, validates its invariants and prints the cheapest
//! location for every (period, star) pair. Runs entirely in-process.
//!
//! Usage:
//!   cargo run -p resortfare-simtest
//!   cargo run -p resortfare-simtest -- --verbose --seed 42
//!   cargo run -p resortfare-simtest -- --config pricing.json
//!   cargo run -p resortfare-simtest -- --json > prices.json
//!
//! Set `RUST_LOG=debug` to see every candidate the lookup considers.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use resortfare_core::catalog::{self, Location, StarRating, TimePeriod};
use resortfare_core::generation::PriceTable;
use resortfare_core::pricing::{
    validate_config, PricingConfig, MAX_LOAD, MAX_PRICE, MIN_LOAD, MIN_PRICE,
};
use resortfare_core::service::PriceService;

// ── Command line ────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct Options {
    verbose: bool,
    json: bool,
    seed: Option<u64>,
    config_path: Option<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut opts = Options::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--verbose" => opts.verbose = true,
            "--json" => opts.json = true,
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|e| format!("invalid seed '{}': {}", value, e))?;
                opts.seed = Some(seed);
            }
            "--config" => {
                let path = args.next().ok_or("--config needs a path")?;
                opts.config_path = Some(path);
            }
            other => return Err(format!("unknown argument '{}'", other)),
        }
    }
    Ok(opts)
}

fn load_config(path: Option<&str>) -> Result<PricingConfig, String> {
    let Some(path) = path else {
        return Ok(PricingConfig::default());
    };
    let text = std::fs::read_to_string(path).map_err(|e| format!("cannot read {}: {}", path, e))?;
    let config = PricingConfig::from_json(&text).map_err(|e| format!("JSON parse error: {}", e))?;

    let errors = validate_config(&config);
    if !errors.is_empty() {
        let joined = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(format!("invalid pricing config: {}", joined));
    }
    Ok(config)
}

// ── JSON dump (same shape the UI consumes) ──────────────────────────────

#[derive(Serialize)]
struct UiData<'a> {
    periods: &'static [TimePeriod],
    stars: &'static [StarRating],
    locations: &'static [Location],
    prices: &'a PriceTable,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    env_logger::init();

    let opts = match parse_args(std::env::args().skip(1)) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    };
    let config = match load_config(opts.config_path.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let service = match opts.seed {
        Some(seed) => PriceService::with_config(&config, &mut StdRng::seed_from_u64(seed)),
        None => PriceService::with_config(&config, &mut rand::thread_rng()),
    };
    log::info!(
        "Price table ready: {} entries (seed: {:?})",
        service.prices().len(),
        opts.seed
    );

    if opts.json {
        let data = UiData {
            periods: service.time_periods(),
            stars: service.stars(),
            locations: service.locations(),
            prices: service.prices(),
        };
        match serde_json::to_string_pretty(&data) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("=== Resortfare Price Harness ===\n");

    let mut results = Vec::new();

    // 1. Catalog shape
    results.extend(validate_catalogs(opts.verbose));

    // 2. Table density and bounds
    results.extend(validate_table(&service, opts.verbose));

    // 3. Best-option sweep
    results.extend(validate_best_options(&service, opts.verbose));

    // 4. Unknown keys
    results.extend(validate_unknown_keys(&service));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || opts.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Catalogs ─────────────────────────────────────────────────────────

fn validate_catalogs(verbose: bool) -> Vec<TestResult> {
    println!("--- Catalogs ---");
    let mut results = Vec::new();

    let periods = catalog::time_periods();
    results.push(TestResult {
        name: "periods_count".into(),
        passed: periods.len() == 17 && periods[0].label == "Summer",
        detail: format!("{} periods, first '{}'", periods.len(), periods[0].label),
    });

    let stars = catalog::stars();
    let star_ids_ok = stars.iter().enumerate().all(|(i, s)| s.id as usize == i);
    results.push(TestResult {
        name: "stars_sequential".into(),
        passed: stars.len() == 5 && star_ids_ok,
        detail: format!("{} star ratings", stars.len()),
    });

    let locations = catalog::locations();
    let location_ids_ok = locations
        .iter()
        .enumerate()
        .all(|(i, l)| l.id as usize == i);
    results.push(TestResult {
        name: "locations_sequential".into(),
        passed: locations.len() == 17 && location_ids_ok,
        detail: format!("{} locations", locations.len()),
    });

    if verbose {
        for p in periods {
            println!("  period {:>2}: {} ({})", p.id, p.label, p.native);
        }
    }

    results
}

// ── 2. Table ────────────────────────────────────────────────────────────

fn validate_table(service: &PriceService, verbose: bool) -> Vec<TestResult> {
    println!("--- Price Table ---");
    let mut results = Vec::new();
    let table = service.prices();

    let mut missing = Vec::new();
    for p in catalog::time_periods() {
        for s in catalog::stars() {
            for l in catalog::locations() {
                if table.entry(p.id, s.id, l.id).is_none() {
                    missing.push((p.id, s.id, l.id));
                }
            }
        }
    }
    results.push(TestResult {
        name: "table_dense".into(),
        passed: missing.is_empty(),
        detail: if missing.is_empty() {
            format!("{} entries, no gaps", table.len())
        } else {
            format!("{} missing cells, first {:?}", missing.len(), missing[0])
        },
    });

    let bad_price = table
        .iter()
        .filter(|(_, _, _, e)| e.price < MIN_PRICE || e.price > MAX_PRICE)
        .count();
    results.push(TestResult {
        name: "price_bounds".into(),
        passed: bad_price == 0,
        detail: format!(
            "{} prices outside [{}, {}]",
            bad_price, MIN_PRICE, MAX_PRICE
        ),
    });

    let bad_load = table
        .iter()
        .filter(|(_, _, _, e)| e.load < MIN_LOAD || e.load > MAX_LOAD)
        .count();
    results.push(TestResult {
        name: "load_bounds".into(),
        passed: bad_load == 0,
        detail: format!("{} loads outside [{}, {}]", bad_load, MIN_LOAD, MAX_LOAD),
    });

    if verbose {
        let (lo, hi) = table
            .iter()
            .fold((u32::MAX, 0u32), |(lo, hi), (_, _, _, e)| {
                (lo.min(e.price), hi.max(e.price))
            });
        println!("  price range: {}..={}", lo, hi);
    }

    results
}

// ── 3. Best options ─────────────────────────────────────────────────────

fn validate_best_options(service: &PriceService, verbose: bool) -> Vec<TestResult> {
    println!("--- Best Options ---");
    let mut results = Vec::new();

    let mut not_minimal = Vec::new();
    let mut not_found = 0;
    for p in service.time_periods() {
        for s in service.stars() {
            let Some(best) = service.find_best_option(p.id, s.id) else {
                not_found += 1;
                continue;
            };
            let min = service
                .prices()
                .slice(p.id, s.id)
                .and_then(|slice| slice.values().map(|e| e.price).min());
            if min != Some(best.price) {
                not_minimal.push((p.id, s.id));
            }
            if verbose {
                println!(
                    "  {:<20} {:<12} -> {:<16} {:>6} ({}%)",
                    p.label, s.label, best.location, best.price, best.load
                );
            }
        }
    }

    results.push(TestResult {
        name: "best_option_found".into(),
        passed: not_found == 0,
        detail: format!("{} (period, star) pairs without a result", not_found),
    });
    results.push(TestResult {
        name: "best_option_minimal".into(),
        passed: not_minimal.is_empty(),
        detail: if not_minimal.is_empty() {
            "every winner is its slice minimum".into()
        } else {
            format!("{} pairs not minimal: {:?}", not_minimal.len(), not_minimal)
        },
    });

    results
}

// ── 4. Unknown keys ─────────────────────────────────────────────────────

fn validate_unknown_keys(service: &PriceService) -> Vec<TestResult> {
    println!("--- Unknown Keys ---");
    let cases = [(17u8, 0u8), (0, 5), (255, 255)];
    let hits: Vec<_> = cases
        .iter()
        .filter(|(p, s)| service.find_best_option(*p, *s).is_some())
        .collect();

    vec![TestResult {
        name: "unknown_keys_none".into(),
        passed: hits.is_empty(),
        detail: format!(
            "{} of {} unknown pairs returned a result",
            hits.len(),
            cases.len()
        ),
    }]
}

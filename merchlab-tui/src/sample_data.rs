//! Sample data generator for the TUI.
//!
//! Produces a deterministic, realistic-looking transaction table when no
//! CSV path is given:
//! - Merchants with distinct monthly growth trajectories (growing, flat,
//!   shrinking, volatile)
//! - A couple of merchants with gap months, to exercise bucket-index lag
//! - One merchant present in a single month (undefined growth metrics)

use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use merchlab_core::{FilterConfig, Transaction};

const SEED: u64 = 2024;

const CATEGORIES: [&str; 4] = ["grocery", "fuel", "dining", "retail"];
const CITIES: [&str; 4] = ["Austin", "Dallas", "Houston", "El Paso"];

/// Default filter window covering the generated data.
pub fn sample_filter() -> FilterConfig {
    FilterConfig::new(
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
    )
}

/// Deterministic sample table: ~12 merchants over 24 months.
pub fn sample_transactions() -> Vec<Transaction> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut out = Vec::new();

    // (merchant, starting monthly volume, monthly growth rate, gap months)
    let profiles: [(&str, f64, f64, &[u32]); 12] = [
        ("M001", 20.0, 0.08, &[]),
        ("M002", 40.0, 0.03, &[]),
        ("M003", 35.0, 0.00, &[]),
        ("M004", 60.0, -0.04, &[]),
        ("M005", 25.0, -0.08, &[]),
        ("M006", 15.0, 0.12, &[]),
        ("M007", 30.0, 0.05, &[7, 8]), // closed two months mid-2023
        ("M008", 45.0, 0.01, &[14]),
        ("M009", 10.0, 0.15, &[]),
        ("M010", 50.0, -0.02, &[]),
        ("M011", 22.0, 0.06, &[]),
        ("M012", 18.0, 0.00, &[23]), // only absent in the final month
    ];

    for (merchant, base_volume, growth, gaps) in profiles {
        for month_index in 0u32..24 {
            if gaps.contains(&month_index) {
                continue;
            }
            let expected = base_volume * (1.0 + growth).powi(month_index as i32);
            let jitter = rng.gen_range(0.85..1.15);
            let count = (expected * jitter).round().max(1.0) as u32;

            for n in 0..count {
                out.push(transaction(&mut rng, merchant, month_index, n));
            }
        }
    }

    // Single-month merchant: all growth averages undefined.
    for n in 0..8 {
        out.push(transaction(&mut rng, "M013", 11, n));
    }

    out
}

fn transaction(rng: &mut StdRng, merchant: &str, month_index: u32, n: u32) -> Transaction {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let month_start = start + chrono::Months::new(month_index);
    let day = rng.gen_range(0..28);
    let date = month_start + chrono::Duration::days(day);

    let hour = rng.gen_range(8..22);
    let amount = (rng.gen_range(4.0..180.0f64) * 100.0).round() / 100.0;

    Transaction {
        merchant_id: merchant.into(),
        transaction_id: format!("{merchant}-{}{:02}-{n:04}", date.year(), date.month()),
        amount,
        timestamp: date.and_hms_opt(hour, 0, 0).unwrap(),
        category: Some(CATEGORIES[rng.gen_range(0..CATEGORIES.len())].into()),
        city: Some(CITIES[rng.gen_range(0..CITIES.len())].into()),
        account_status: Some("active".into()),
    }
}

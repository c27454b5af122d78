//! Criterion benchmarks for the summary pipeline hot path.
//!
//! Benchmarks:
//! 1. Full pipeline (filter → bucket → aggregate → rank)
//! 2. Bucketing alone
//! 3. Selection styling over a full result set

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::HashSet;

use chrono::NaiveDate;
use merchlab_core::{
    apply_selection, bucket_by_month, compute_summary, FilterConfig, RankingConfig, Transaction,
};

// ── Helpers ──────────────────────────────────────────────────────────

/// Deterministic synthetic table: `merchants` merchants over `months`
/// months, transaction volume drifting per merchant.
fn make_transactions(merchants: usize, months: usize) -> Vec<Transaction> {
    let base = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
    let mut out = Vec::new();
    for m in 0..merchants {
        for month in 0..months {
            let count = 5 + (m + month) % 17;
            for day in 0..count {
                let date = base
                    + chrono::Months::new(month as u32)
                    + chrono::Duration::days(day as i64);
                out.push(Transaction {
                    merchant_id: format!("M{m:04}"),
                    transaction_id: format!("T-{m}-{month}-{day}"),
                    amount: 10.0 + ((m * 31 + day) % 90) as f64,
                    timestamp: date.and_hms_opt(12, 0, 0).unwrap(),
                    category: Some(format!("cat{}", m % 6)),
                    city: Some(format!("city{}", m % 12)),
                    account_status: Some("active".into()),
                });
            }
        }
    }
    out
}

fn bench_compute_summary(c: &mut Criterion) {
    let transactions = make_transactions(100, 24);
    let filter = FilterConfig::new(
        NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
    );
    let ranking = RankingConfig::default();

    c.bench_function("compute_summary_100x24", |b| {
        b.iter(|| compute_summary(black_box(&transactions), &filter, &ranking))
    });
}

fn bench_bucketing(c: &mut Criterion) {
    let transactions = make_transactions(100, 24);
    let refs: Vec<&Transaction> = transactions.iter().collect();

    c.bench_function("bucket_by_month_100x24", |b| {
        b.iter(|| bucket_by_month(black_box(&refs)))
    });
}

fn bench_apply_selection(c: &mut Criterion) {
    let transactions = make_transactions(100, 24);
    let filter = FilterConfig::new(
        NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
    );
    let ranking = RankingConfig {
        count: 100,
        ..RankingConfig::default()
    };
    let rows = compute_summary(&transactions, &filter, &ranking);
    let selection: HashSet<String> = (0..10).map(|m| format!("M{m:04}")).collect();

    c.bench_function("apply_selection_100_rows", |b| {
        b.iter(|| apply_selection(black_box(&rows), &selection))
    });
}

criterion_group!(
    benches,
    bench_compute_summary,
    bench_bucketing,
    bench_apply_selection
);
criterion_main!(benches);

//! Property tests for pipeline invariants.
//!
//! 1. Styling totality — `value_style` never panics, on any string
//! 2. Filter subset — filtering never invents rows and respects the range
//! 3. Ranking bound — ranked output never exceeds the configured count
//! 4. Growth series shape — defined entries appear only past the lag

use std::collections::HashSet;

use chrono::NaiveDate;
use proptest::prelude::*;

use merchlab_core::{
    filter_transactions, pct_change_by_bucket, rank_summaries, value_style, CellStyle,
    FilterConfig, MerchantSummary, RankDirection, RankingConfig, Transaction,
};

// ── Strategies ───────────────────────────────────────────────────────

fn arb_transaction() -> impl Strategy<Value = Transaction> {
    (
        0..20u32,
        0..730i64,
        -1000.0..1000.0f64,
        proptest::option::of(0..5u32),
    )
        .prop_map(|(merchant, day_offset, amount, category)| {
            let base = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
            let date = base + chrono::Duration::days(day_offset);
            Transaction {
                merchant_id: format!("M{merchant:02}"),
                transaction_id: format!("T-{merchant}-{day_offset}-{amount}"),
                amount,
                timestamp: date.and_hms_opt(9, 0, 0).unwrap(),
                category: category.map(|c| format!("cat{c}")),
                city: None,
                account_status: None,
            }
        })
}

fn arb_summary() -> impl Strategy<Value = MerchantSummary> {
    (0..50u32, proptest::option::of(-100.0..100.0f64)).prop_map(|(id, avg_qoq)| {
        MerchantSummary {
            merchant_id: format!("M{id:02}"),
            avg_mom: None,
            avg_qoq,
            avg_yoy: None,
            start_amount: 0.0,
            end_amount: 0.0,
            cagr: None,
        }
    })
}

// ── 1. Styling totality ──────────────────────────────────────────────

proptest! {
    /// `value_style` is total: any string maps to a non-highlight style.
    #[test]
    fn value_style_never_panics(s in ".*") {
        let style = value_style(&s);
        prop_assert!(matches!(
            style,
            CellStyle::None | CellStyle::Positive | CellStyle::Negative
        ));
    }

    /// Formatted positive and negative values classify by sign.
    #[test]
    fn value_style_matches_sign(v in -1e6..1e6f64) {
        let formatted = format!("{v:.2}%");
        let style = value_style(&formatted);
        // Sign classification happens on the rounded display value.
        let rounded: f64 = formatted.trim_end_matches('%').parse().unwrap();
        let expected = if rounded > 0.0 {
            CellStyle::Positive
        } else if rounded < 0.0 {
            CellStyle::Negative
        } else {
            CellStyle::None
        };
        prop_assert_eq!(style, expected);
    }
}

// ── 2. Filter subset ─────────────────────────────────────────────────

proptest! {
    /// Filtering returns a subset and every kept row is inside the range.
    #[test]
    fn filter_returns_in_range_subset(
        transactions in proptest::collection::vec(arb_transaction(), 0..100),
        start_offset in 0..730i64,
        span in 0..365i64,
    ) {
        let base = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let start = base + chrono::Duration::days(start_offset);
        let end = start + chrono::Duration::days(span);
        let config = FilterConfig::new(start, end);

        let subset = filter_transactions(&transactions, &config);
        prop_assert!(subset.len() <= transactions.len());
        for tx in subset {
            let date = tx.timestamp.date();
            prop_assert!(date >= start && date <= end);
        }
    }

    /// A categorical filter only ever narrows the date-filtered subset.
    #[test]
    fn categorical_filter_narrows(
        transactions in proptest::collection::vec(arb_transaction(), 0..100),
        category in 0..5u32,
    ) {
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let unfiltered = FilterConfig::new(start, end);

        let mut narrowed = unfiltered.clone();
        narrowed.categories = vec![format!("cat{category}")];

        let all = filter_transactions(&transactions, &unfiltered);
        let few = filter_transactions(&transactions, &narrowed);
        prop_assert!(few.len() <= all.len());
    }
}

// ── 3. Ranking bound ─────────────────────────────────────────────────

proptest! {
    /// Ranked output length is min(input length, count), in either direction.
    #[test]
    fn ranking_respects_count(
        summaries in proptest::collection::vec(arb_summary(), 0..40),
        count in 1..20usize,
        top in proptest::bool::ANY,
    ) {
        let direction = if top { RankDirection::Top } else { RankDirection::Bottom };
        let config = RankingConfig { direction, count };
        let input_len = summaries.len();
        let input_ids: HashSet<String> =
            summaries.iter().map(|s| s.merchant_id.clone()).collect();

        let ranked = rank_summaries(summaries, &config);
        prop_assert_eq!(ranked.len(), input_len.min(count));
        for row in &ranked {
            prop_assert!(input_ids.contains(&row.merchant_id));
        }
    }
}

// ── 4. Growth series shape ───────────────────────────────────────────

proptest! {
    /// The first `lag` entries are always undefined, and any defined entry
    /// has a non-zero lagged denominator.
    #[test]
    fn pct_change_shape(
        values in proptest::collection::vec(0..1000u64, 0..30),
        lag in 1..15usize,
    ) {
        let series = pct_change_by_bucket(&values, lag);
        prop_assert_eq!(series.len(), values.len());
        for (i, entry) in series.iter().enumerate() {
            if i < lag {
                prop_assert_eq!(*entry, None);
            } else if entry.is_some() {
                prop_assert!(values[i - lag] > 0);
            } else {
                prop_assert_eq!(values[i - lag], 0);
            }
        }
    }
}

//! Growth-metric engine — monthly bucketing, lagged percent change,
//! per-merchant aggregation, CAGR, and the summary pipeline.
//!
//! Every step is a pure function of its inputs. Undefined arithmetic (zero
//! denominators, fractional powers of negative ratios) yields `None`, never
//! a panic, and one merchant's undefined metrics do not affect any other
//! merchant's row.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Transaction, YearMonth};
use crate::filter::{filter_transactions, FilterConfig};
use crate::ranking::{rank_summaries, RankingConfig};

/// Bucket-index lags for the three growth series.
///
/// The lag counts buckets actually present, not elapsed calendar months; a
/// merchant with gap months compares against its previous present bucket.
pub const MOM_LAG: usize = 1;
pub const QOQ_LAG: usize = 3;
pub const YOY_LAG: usize = 12;

/// Aggregates for one merchant in one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBucket {
    pub merchant_id: String,
    pub month: YearMonth,
    pub txn_count: u64,
    pub total_amount: f64,
}

/// One summary row per merchant, derived entirely from its monthly buckets.
///
/// `None` marks an undefined metric; it renders as an empty display cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantSummary {
    pub merchant_id: String,
    pub avg_mom: Option<f64>,
    pub avg_qoq: Option<f64>,
    pub avg_yoy: Option<f64>,
    pub start_amount: f64,
    pub end_amount: f64,
    pub cagr: Option<f64>,
}

/// Group filtered transactions into per-merchant monthly bucket sequences.
///
/// The BTreeMap keys keep merchants in id order and each merchant's buckets
/// chronological, so the whole pipeline is deterministic. Months with no
/// transactions produce no bucket.
pub fn bucket_by_month(transactions: &[&Transaction]) -> BTreeMap<String, Vec<MonthlyBucket>> {
    let mut grouped: BTreeMap<(String, YearMonth), (u64, f64)> = BTreeMap::new();
    for tx in transactions {
        let slot = grouped
            .entry((tx.merchant_id.clone(), tx.month()))
            .or_insert((0, 0.0));
        slot.0 += 1;
        slot.1 += tx.amount;
    }

    let mut buckets: BTreeMap<String, Vec<MonthlyBucket>> = BTreeMap::new();
    for ((merchant_id, month), (txn_count, total_amount)) in grouped {
        buckets
            .entry(merchant_id.clone())
            .or_default()
            .push(MonthlyBucket {
                merchant_id,
                month,
                txn_count,
                total_amount,
            });
    }
    buckets
}

/// Percent change over `lag` bucket positions:
/// `(v[i] / v[i-lag] - 1) * 100`.
///
/// `None` for the first `lag` positions and wherever the lagged value is
/// zero.
pub fn pct_change_by_bucket(values: &[u64], lag: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    for i in lag..values.len() {
        let prev = values[i - lag];
        if prev == 0 {
            continue;
        }
        out[i] = Some((values[i] as f64 / prev as f64 - 1.0) * 100.0);
    }
    out
}

/// Mean over the defined values of a growth series; `None` when none are.
fn mean_defined(series: &[Option<f64>]) -> Option<f64> {
    let mut sum = 0.0;
    let mut n = 0usize;
    for v in series.iter().flatten() {
        sum += v;
        n += 1;
    }
    (n > 0).then(|| sum / n as f64)
}

/// Compound annual growth rate over `span_years`, as a percentage.
///
/// `None` when the span is non-positive, the start amount is zero, or the
/// growth ratio raised to `1/span_years` is not finite (negative ratios
/// included).
pub fn cagr(start_amount: f64, end_amount: f64, span_years: f64) -> Option<f64> {
    if span_years <= 0.0 || start_amount == 0.0 {
        return None;
    }
    let rate = ((end_amount / start_amount).powf(1.0 / span_years) - 1.0) * 100.0;
    rate.is_finite().then_some(rate)
}

/// Summarize one merchant's chronologically ordered bucket sequence.
///
/// A merchant with a single bucket yields `None` for all three growth
/// averages and `start_amount == end_amount`.
pub fn summarize_merchant(
    merchant_id: &str,
    buckets: &[MonthlyBucket],
    span_years: f64,
) -> MerchantSummary {
    let counts: Vec<u64> = buckets.iter().map(|b| b.txn_count).collect();
    let start_amount = buckets.first().map(|b| b.total_amount).unwrap_or(0.0);
    let end_amount = buckets.last().map(|b| b.total_amount).unwrap_or(0.0);

    MerchantSummary {
        merchant_id: merchant_id.to_string(),
        avg_mom: mean_defined(&pct_change_by_bucket(&counts, MOM_LAG)),
        avg_qoq: mean_defined(&pct_change_by_bucket(&counts, QOQ_LAG)),
        avg_yoy: mean_defined(&pct_change_by_bucket(&counts, YOY_LAG)),
        start_amount,
        end_amount,
        cagr: cagr(start_amount, end_amount, span_years),
    }
}

/// Full pipeline: filter → bucket → aggregate → rank.
///
/// The presentation layer calls this on every filter change; nothing is
/// retained between calls. An empty working subset yields an empty vec.
pub fn compute_summary(
    transactions: &[Transaction],
    filter: &FilterConfig,
    ranking: &RankingConfig,
) -> Vec<MerchantSummary> {
    let subset = filter_transactions(transactions, filter);
    let buckets = bucket_by_month(&subset);
    let span_years = filter.span_years();

    let summaries: Vec<MerchantSummary> = buckets
        .iter()
        .map(|(merchant_id, seq)| summarize_merchant(merchant_id, seq, span_years))
        .collect();

    rank_summaries(summaries, ranking)
}

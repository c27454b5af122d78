//! Top/bottom ranking of merchant summaries by average QoQ growth.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::metrics::MerchantSummary;

/// Ranking direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankDirection {
    /// Highest average QoQ growth first.
    Top,
    /// Lowest average QoQ growth first.
    Bottom,
}

impl RankDirection {
    pub fn toggle(self) -> Self {
        match self {
            RankDirection::Top => RankDirection::Bottom,
            RankDirection::Bottom => RankDirection::Top,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RankDirection::Top => "Top",
            RankDirection::Bottom => "Bottom",
        }
    }
}

/// Ranking parameters. Default: top 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingConfig {
    pub direction: RankDirection,
    pub count: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            direction: RankDirection::Top,
            count: 10,
        }
    }
}

/// Sort summaries by average QoQ growth and truncate to the configured count.
///
/// The sort is stable, so ties keep the aggregation order (merchant id
/// order). Rows with an undefined average rank after all defined rows in
/// either direction. Fewer rows than `count` yields all of them.
pub fn rank_summaries(
    mut summaries: Vec<MerchantSummary>,
    config: &RankingConfig,
) -> Vec<MerchantSummary> {
    summaries.sort_by(|a, b| compare_avg_qoq(a.avg_qoq, b.avg_qoq, config.direction));
    summaries.truncate(config.count);
    summaries
}

fn compare_avg_qoq(a: Option<f64>, b: Option<f64>, direction: RankDirection) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => {
            let ord = x.partial_cmp(&y).unwrap_or(Ordering::Equal);
            match direction {
                RankDirection::Top => ord.reverse(),
                RankDirection::Bottom => ord,
            }
        }
    }
}

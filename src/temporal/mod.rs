//! Temporal rollup: per-period quality counts for a product set
//!
//! Takes an arbitrary product-id set (usually the result of
//! [`Aggregator::resolve_selection`](crate::aggregate::Aggregator::resolve_selection))
//! and groups the matching quality-history records into chronologically
//! ordered buckets, plus the derived series the delta/waterfall and trend
//! views need. An empty selection or a selection with no history yields an
//! empty series, which callers must treat as "no data" rather than an error.

use crate::aggregate::QualityCounts;
use crate::catalog::{Catalog, ProductId, Quality};
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::collections::BTreeMap;

/// Quality tallies for one observation period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodBucket {
    pub period_id: String,
    pub period_index: u32,
    pub period_name: String,
    pub counts: QualityCounts,
}

/// Signed per-label change of one period against its predecessor.
///
/// The first period's deltas equal its raw counts (the baseline).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodDeltas {
    pub period_id: String,
    pub period_index: u32,
    pub period_name: String,
    pub good: i64,
    pub neutral: i64,
    pub poor: i64,
}

impl PeriodDeltas {
    pub fn get(&self, quality: Quality) -> i64 {
        match quality {
            Quality::Good => self.good,
            Quality::Neutral => self.neutral,
            Quality::Poor => self.poor,
        }
    }
}

/// One period cited by a trend summary, with its count for the label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodRef {
    pub period_id: String,
    pub period_index: u32,
    pub period_name: String,
    pub count: u64,
}

/// First-vs-last movement of one quality label across a series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSummary {
    pub label: Quality,
    pub first_count: u64,
    pub last_count: u64,
    /// last minus first.
    pub net_change: i64,
    /// Period with the maximum count for the label (earliest on ties).
    pub peak: PeriodRef,
    /// Period with the minimum count for the label (earliest on ties).
    pub trough: PeriodRef,
}

/// Group the quality history of `products` into per-period label counts,
/// ordered ascending by `period_index` with no duplicate periods.
pub fn quality_by_period(catalog: &Catalog, products: &FxHashSet<ProductId>) -> Vec<PeriodBucket> {
    // BTreeMap keyed by period_index gives the chronological order for free
    // and collapses records sharing a period.
    let mut buckets: BTreeMap<u32, PeriodBucket> = BTreeMap::new();
    for record in catalog.temporal_records() {
        if !products.contains(&record.product_id) {
            continue;
        }
        buckets
            .entry(record.period_index)
            .or_insert_with(|| PeriodBucket {
                period_id: record.period_id.clone(),
                period_index: record.period_index,
                period_name: record.period_name.clone(),
                counts: QualityCounts::default(),
            })
            .counts
            .record(record.quality);
    }
    buckets.into_values().collect()
}

/// Per-period signed deltas suitable for a waterfall chart.
///
/// Summing a label's deltas across the whole series reconstructs the final
/// period's raw count.
pub fn waterfall_deltas(series: &[PeriodBucket]) -> Vec<PeriodDeltas> {
    let mut deltas = Vec::with_capacity(series.len());
    let mut previous: Option<&QualityCounts> = None;
    for bucket in series {
        let base = |quality: Quality| -> i64 {
            let current = bucket.counts.get(quality) as i64;
            match previous {
                Some(prev) => current - prev.get(quality) as i64,
                None => current,
            }
        };
        deltas.push(PeriodDeltas {
            period_id: bucket.period_id.clone(),
            period_index: bucket.period_index,
            period_name: bucket.period_name.clone(),
            good: base(Quality::Good),
            neutral: base(Quality::Neutral),
            poor: base(Quality::Poor),
        });
        previous = Some(&bucket.counts);
    }
    deltas
}

/// Summarise one label's movement across the series: first-vs-last delta and
/// the peak/trough periods (ties resolve to the earliest period).
///
/// Returns `None` for an empty series.
pub fn trend_summary(series: &[PeriodBucket], label: Quality) -> Option<TrendSummary> {
    let first = series.first()?;
    let last = series.last()?;

    let period_ref = |bucket: &PeriodBucket| PeriodRef {
        period_id: bucket.period_id.clone(),
        period_index: bucket.period_index,
        period_name: bucket.period_name.clone(),
        count: bucket.counts.get(label),
    };

    let mut peak = first;
    let mut trough = first;
    for bucket in &series[1..] {
        if bucket.counts.get(label) > peak.counts.get(label) {
            peak = bucket;
        }
        if bucket.counts.get(label) < trough.counts.get(label) {
            trough = bucket;
        }
    }

    Some(TrendSummary {
        label,
        first_count: first.counts.get(label),
        last_count: last.counts.get(label),
        net_change: last.counts.get(label) as i64 - first.counts.get(label) as i64,
        peak: period_ref(peak),
        trough: period_ref(trough),
    })
}

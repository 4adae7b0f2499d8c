//! Time-series chart payloads over a temporal rollup
//!
//! Column-oriented wrappers around [`PeriodBucket`] series: one label vector
//! plus one value vector per quality label, which is the shape stacked-bar
//! and waterfall charting front-ends consume directly.

use crate::temporal::{waterfall_deltas, PeriodBucket};
use serde::Serialize;

/// Stacked-distribution series: raw per-period counts per label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackedSeries {
    pub periods: Vec<String>,
    pub good: Vec<u64>,
    pub neutral: Vec<u64>,
    pub poor: Vec<u64>,
}

/// Waterfall series: signed per-period deltas per label; the first entry is
/// the baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterfallSeries {
    pub periods: Vec<String>,
    pub good: Vec<i64>,
    pub neutral: Vec<i64>,
    pub poor: Vec<i64>,
}

pub fn stacked(series: &[PeriodBucket]) -> StackedSeries {
    StackedSeries {
        periods: series.iter().map(|b| b.period_name.clone()).collect(),
        good: series.iter().map(|b| b.counts.good).collect(),
        neutral: series.iter().map(|b| b.counts.neutral).collect(),
        poor: series.iter().map(|b| b.counts.poor).collect(),
    }
}

pub fn waterfall(series: &[PeriodBucket]) -> WaterfallSeries {
    let deltas = waterfall_deltas(series);
    WaterfallSeries {
        periods: deltas.iter().map(|d| d.period_name.clone()).collect(),
        good: deltas.iter().map(|d| d.good).collect(),
        neutral: deltas.iter().map(|d| d.neutral).collect(),
        poor: deltas.iter().map(|d| d.poor).collect(),
    }
}

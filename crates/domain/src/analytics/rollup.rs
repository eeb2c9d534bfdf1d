use std::collections::HashMap;

use exposure_rollup_shared_kernel::SENTINEL_LABEL;

use crate::analytics::aggregate::{GrainAggregates, GrainKey, Measures};
use crate::config::{Dimension, GroupingSpec};

/// A grouping key projected onto one specification. `None` marks a
/// dimension the specification excludes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RollupKey {
    pub legal_entity: Option<String>,
    pub counter_party: Option<String>,
    pub tier: Option<i64>,
}

impl RollupKey {
    pub fn legal_entity_cell(&self) -> String {
        Self::cell(self.legal_entity.as_deref())
    }

    pub fn counter_party_cell(&self) -> String {
        Self::cell(self.counter_party.as_deref())
    }

    pub fn tier_cell(&self) -> String {
        self.tier.map_or_else(|| SENTINEL_LABEL.to_string(), |t| t.to_string())
    }

    fn cell(value: Option<&str>) -> String {
        value.map_or_else(|| SENTINEL_LABEL.to_string(), str::to_string)
    }
}

/// One output record: projected key plus merged measures. Excluded
/// dimensions render as the sentinel label via the `*_cell` accessors, so
/// every grain shares a single output shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollupRow {
    pub key: RollupKey,
    pub measures: Measures,
}

/// Derives coarser-grain aggregates from the finest grain.
///
/// Because max and sum are distributive, merging pre-aggregated values over
/// a coarsening of the key equals aggregating the underlying records
/// directly, so no raw record is ever re-read here and specifications are
/// mutually independent.
pub struct RollupEngine;

impl RollupEngine {
    /// Re-aggregate the finest-grain values at the grain of `spec`.
    ///
    /// Rows come back sorted by projected key so repeated runs emit
    /// identical output. A spec with no grouping columns merges everything
    /// into a single grand-total row.
    pub fn rollup(grain: &GrainAggregates, spec: &GroupingSpec) -> Vec<RollupRow> {
        let mut groups: HashMap<RollupKey, Measures> = HashMap::new();

        for (key, measures) in grain {
            let projected = Self::project(spec, key);
            groups
                .entry(projected)
                .and_modify(|merged| merged.merge(measures))
                .or_insert(*measures);
        }

        let mut rows: Vec<RollupRow> = groups
            .into_iter()
            .map(|(key, measures)| RollupRow { key, measures })
            .collect();
        rows.sort_by(|a, b| a.key.cmp(&b.key));
        rows
    }

    fn project(spec: &GroupingSpec, key: &GrainKey) -> RollupKey {
        RollupKey {
            legal_entity: spec
                .includes(Dimension::LegalEntity)
                .then(|| key.legal_entity.clone()),
            counter_party: spec
                .includes(Dimension::CounterParty)
                .then(|| key.counter_party.clone()),
            tier: spec.includes(Dimension::Tier).then_some(key.tier),
        }
    }
}

use std::collections::HashMap;

use exposure_rollup_shared_kernel::{Amount, Rating};

use crate::model::{JoinedRecord, Status};

/// Full grouping key: one entry per unique combination of all dimensions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GrainKey {
    pub legal_entity: String,
    pub counter_party: String,
    pub tier: i64,
}

impl GrainKey {
    pub fn of(record: &JoinedRecord) -> Self {
        Self {
            legal_entity: record.legal_entity.clone(),
            counter_party: record.counter_party.clone(),
            tier: record.tier,
        }
    }
}

/// The three distributive measures computed per grouping key.
///
/// `merge` is associative and commutative, so partial values computed over
/// disjoint row subsets can be combined in any order and any partitioning
/// granularity without changing the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measures {
    pub max_rating: Rating,
    pub sum_arap: Amount,
    pub sum_accr: Amount,
}

impl Measures {
    pub fn from_record(record: &JoinedRecord) -> Self {
        let mut measures = Self {
            max_rating: record.rating,
            sum_arap: Amount::zero(),
            sum_accr: Amount::zero(),
        };
        measures.add_value(record);
        measures
    }

    /// Fold one more raw record into this partial value.
    pub fn fold(&mut self, record: &JoinedRecord) {
        self.max_rating = self.max_rating.combine(record.rating);
        self.add_value(record);
    }

    /// Combine with another partial value over a disjoint row subset.
    pub fn merge(&mut self, other: &Measures) {
        self.max_rating = self.max_rating.combine(other.max_rating);
        self.sum_arap += other.sum_arap;
        self.sum_accr += other.sum_accr;
    }

    fn add_value(&mut self, record: &JoinedRecord) {
        match record.status {
            Status::Arap => self.sum_arap += record.value,
            Status::Accr => self.sum_accr += record.value,
            Status::Other(_) => {}
        }
    }
}

/// Finest-grain aggregates, one entry per full key. A key exists only if at
/// least one joined record produced it.
pub type GrainAggregates = HashMap<GrainKey, Measures>;

/// Groups joined records by the full key and computes the measures.
pub struct GrainAggregator;

impl GrainAggregator {
    pub fn aggregate<'a, I>(records: I) -> GrainAggregates
    where
        I: IntoIterator<Item = &'a JoinedRecord>,
    {
        let mut grain = GrainAggregates::new();
        for record in records {
            Self::accumulate(&mut grain, record);
        }
        grain
    }

    /// Fold a single record into a partial aggregation map.
    pub fn accumulate(grain: &mut GrainAggregates, record: &JoinedRecord) {
        grain
            .entry(GrainKey::of(record))
            .and_modify(|measures| measures.fold(record))
            .or_insert_with(|| Measures::from_record(record));
    }

    /// Merge two partial maps computed over disjoint record subsets.
    /// This is the combiner a parallel substrate relies on.
    pub fn merge(mut left: GrainAggregates, right: GrainAggregates) -> GrainAggregates {
        if left.len() < right.len() {
            return Self::merge(right, left);
        }
        for (key, measures) in right {
            left.entry(key)
                .and_modify(|existing| existing.merge(&measures))
                .or_insert(measures);
        }
        left
    }
}

use std::collections::{BTreeSet, HashMap};

use crate::model::{FactRow, JoinedRecord, TierRecord};

/// Result of joining the fact stream against the tier dataset.
///
/// `join_misses` counts fact rows silently dropped for lack of a matching
/// tier record; `ambiguous_keys` lists counterparties that carried more than
/// one tier record. Both are diagnostics, not errors.
#[derive(Debug, Clone, Default)]
pub struct JoinOutcome {
    pub records: Vec<JoinedRecord>,
    pub join_misses: usize,
    pub ambiguous_keys: Vec<String>,
}

/// Inner join of fact rows with tier records on `counter_party`.
pub struct Joiner;

impl Joiner {
    /// For each fact row, look up the matching tier record and emit one
    /// joined record. A counterparty with no tier record drops all of its
    /// fact rows. When several tier records share a key, the first one in
    /// source order wins; the key is reported so callers can surface the
    /// ambiguity instead of hiding it.
    pub fn join(facts: &[FactRow], tiers: &[TierRecord]) -> JoinOutcome {
        let mut index: HashMap<&str, &TierRecord> = HashMap::new();
        let mut ambiguous = BTreeSet::new();

        for tier in tiers {
            if index.contains_key(tier.counter_party.as_str()) {
                ambiguous.insert(tier.counter_party.clone());
            } else {
                index.insert(tier.counter_party.as_str(), tier);
            }
        }

        let mut records = Vec::with_capacity(facts.len());
        let mut join_misses = 0;

        for fact in facts {
            match index.get(fact.counter_party.as_str()) {
                Some(tier) => records.push(JoinedRecord {
                    legal_entity: fact.legal_entity.clone(),
                    counter_party: fact.counter_party.clone(),
                    rating: tier.rating,
                    status: fact.status.clone(),
                    value: fact.value,
                    tier: tier.tier,
                }),
                None => join_misses += 1,
            }
        }

        JoinOutcome {
            records,
            join_misses,
            ambiguous_keys: ambiguous.into_iter().collect(),
        }
    }
}

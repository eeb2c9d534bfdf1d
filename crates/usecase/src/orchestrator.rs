use exposure_rollup_domain::analytics::{
    GrainAggregates, GrainAggregator, ResultAssembler, RollupEngine, RollupRow,
};
use exposure_rollup_domain::config::{GroupingSpec, RollupPlan};
use exposure_rollup_domain::join::Joiner;
use exposure_rollup_domain::model::{FactRow, JoinedRecord, Status, TierRecord};
use exposure_rollup_ports::sink::ResultSetDto;
use exposure_rollup_ports::sources::{ExposureSource, FactRowDto, TierRecordDto, TierSource};
use exposure_rollup_shared_kernel::{ApplicationError, InfrastructureError, Result};
use rayon::prelude::*;

/// Result-set names of the shipped output surface: the finest grain stands
/// alone, every coarser grain is concatenated into the totals set.
pub const FINEST_SET: &str = "by_entity_counterparty_tier";
pub const TOTALS_SET: &str = "rollup_totals";

pub struct RunRollup<'a> {
    facts: &'a dyn ExposureSource,
    tiers: &'a dyn TierSource,
}

impl<'a> RunRollup<'a> {
    pub fn new(facts: &'a dyn ExposureSource, tiers: &'a dyn TierSource) -> Self {
        Self { facts, tiers }
    }

    /// Execute the full pipeline: load both datasets, join, aggregate at
    /// the finest grain, roll up per specification and assemble result
    /// sets. `jobs` bounds the dedicated thread pool used for the
    /// data-parallel stages.
    pub fn run(&self, plan: &RollupPlan, jobs: usize) -> Result<crate::dto::RollupRunOutput> {
        let facts = self.load_facts()?;
        let tiers = self.load_tiers()?;

        let mut diagnostics = crate::dto::RunDiagnostics {
            facts_read: facts.len(),
            tiers_read: tiers.len(),
            ..Default::default()
        };

        let outcome = Joiner::join(&facts, &tiers);
        diagnostics.records_joined = outcome.records.len();
        diagnostics.join_misses = outcome.join_misses;
        diagnostics.ambiguous_keys = outcome.ambiguous_keys;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .map_err(|e| InfrastructureError::ThreadPoolCreation { details: e.to_string() })?;

        let rollups: Vec<(&GroupingSpec, Vec<RollupRow>)> = pool.install(|| {
            let grain = parallel_grain_aggregation(&outcome.records);
            plan.specs()
                .par_iter()
                .map(|spec| (spec, RollupEngine::rollup(&grain, spec)))
                .collect()
        });

        let sets = assemble_sets(rollups);

        Ok(crate::dto::RollupRunOutput { sets, diagnostics })
    }

    fn load_facts(&self) -> Result<Vec<FactRow>> {
        let dtos = self.facts.load().map_err(|e| ApplicationError::SourceLoadFailed {
            dataset: "exposure".to_string(),
            reason: e.to_string(),
            source: Some(Box::new(e)),
        })?;
        Ok(dtos.into_iter().map(fact_from_dto).collect())
    }

    fn load_tiers(&self) -> Result<Vec<TierRecord>> {
        let dtos = self.tiers.load().map_err(|e| ApplicationError::SourceLoadFailed {
            dataset: "tier".to_string(),
            reason: e.to_string(),
            source: Some(Box::new(e)),
        })?;
        Ok(dtos.into_iter().map(tier_from_dto).collect())
    }
}

/// Finest-grain aggregation as a combinable reduction: each worker folds a
/// partition into its own map, partial maps merge pairwise. Partitioning
/// granularity and arrival order never affect the result because the merge
/// is associative and commutative.
fn parallel_grain_aggregation(records: &[JoinedRecord]) -> GrainAggregates {
    records
        .par_iter()
        .fold(GrainAggregates::new, |mut acc, record| {
            GrainAggregator::accumulate(&mut acc, record);
            acc
        })
        .reduce(GrainAggregates::new, GrainAggregator::merge)
}

fn assemble_sets(rollups: Vec<(&GroupingSpec, Vec<RollupRow>)>) -> Vec<ResultSetDto> {
    let mut finest_batches = Vec::new();
    let mut total_batches = Vec::new();
    for (spec, rows) in rollups {
        if spec.is_finest() {
            finest_batches.push(rows);
        } else {
            total_batches.push(rows);
        }
    }

    let mut sets = Vec::new();
    if !finest_batches.is_empty() {
        sets.push(crate::dto::result_set_to_dto(ResultAssembler::concat(
            FINEST_SET,
            finest_batches,
        )));
    }
    if !total_batches.is_empty() {
        sets.push(crate::dto::result_set_to_dto(ResultAssembler::concat(
            TOTALS_SET,
            total_batches,
        )));
    }
    sets
}

fn fact_from_dto(dto: FactRowDto) -> FactRow {
    FactRow {
        legal_entity: dto.legal_entity,
        counter_party: dto.counter_party,
        status: Status::parse(&dto.status),
        value: dto.value.into(),
    }
}

fn tier_from_dto(dto: TierRecordDto) -> TierRecord {
    TierRecord {
        counter_party: dto.counter_party,
        rating: dto.rating.into(),
        tier: dto.tier,
    }
}

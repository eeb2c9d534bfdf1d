use exposure_rollup_shared_kernel::{DomainError, DomainResult};

/// The three grouping dimensions of the joined dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    LegalEntity,
    CounterParty,
    Tier,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Self::LegalEntity, Self::CounterParty, Self::Tier];
}

/// Value object declaring one grouping grain: which dimensions the key is
/// built from. Dimensions left out are rendered with the sentinel label in
/// the output. An empty dimension list is the grand total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupingSpec {
    name: String,
    dimensions: Vec<Dimension>,
}

impl GroupingSpec {
    pub fn new(name: impl Into<String>, dimensions: Vec<Dimension>) -> DomainResult<Self> {
        let name = name.into();
        for (i, dim) in dimensions.iter().enumerate() {
            if dimensions[..i].contains(dim) {
                return Err(DomainError::InvalidGroupingSpec {
                    name,
                    reason: format!("duplicate grouping column {dim:?}"),
                });
            }
        }
        Ok(Self { name, dimensions })
    }

    pub fn grand_total(name: impl Into<String>) -> Self {
        Self { name: name.into(), dimensions: Vec::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    pub fn includes(&self, dimension: Dimension) -> bool {
        self.dimensions.contains(&dimension)
    }

    /// True when the spec groups by every dimension, i.e. the finest grain.
    pub fn is_finest(&self) -> bool {
        Dimension::ALL.iter().all(|dim| self.includes(*dim))
    }
}

/// Ordered list of grouping specifications processed by one generic rollup
/// routine. Validated as a whole before any aggregation runs.
#[derive(Debug, Clone)]
pub struct RollupPlan {
    specs: Vec<GroupingSpec>,
}

impl RollupPlan {
    pub fn new(specs: Vec<GroupingSpec>) -> DomainResult<Self> {
        for (i, spec) in specs.iter().enumerate() {
            if specs[..i].iter().any(|other| other.name() == spec.name()) {
                return Err(DomainError::InvalidPlan {
                    reason: format!("duplicate specification name '{}'", spec.name()),
                });
            }
        }
        Ok(Self { specs })
    }

    /// The plan this system ships with: the finest grain plus the four
    /// coarser totals. Built directly; the entries are unique by
    /// construction.
    pub fn standard() -> Self {
        use Dimension::{CounterParty, LegalEntity, Tier};
        let spec = |name: &str, dimensions: Vec<Dimension>| GroupingSpec {
            name: name.to_string(),
            dimensions,
        };
        Self {
            specs: vec![
                spec("by_entity_counterparty_tier", vec![LegalEntity, CounterParty, Tier]),
                spec("by_entity", vec![LegalEntity]),
                spec("by_entity_counterparty", vec![LegalEntity, CounterParty]),
                spec("by_counterparty", vec![CounterParty]),
                spec("by_tier", vec![Tier]),
            ],
        }
    }

    pub fn specs(&self) -> &[GroupingSpec] {
        &self.specs
    }
}

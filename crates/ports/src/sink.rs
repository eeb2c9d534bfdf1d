// crates/ports/src/sink.rs
use exposure_rollup_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// One flat output record in the canonical column order. The serde renames
/// carry the exact header names of the output contract, for both CSV and
/// JSON surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRowDto {
    pub legal_entity: String,
    pub counterparty: String,
    pub tier: String,
    #[serde(rename = "max(rating by counterparty)")]
    pub max_rating: i64,
    #[serde(rename = "sum(value where status=ARAP)")]
    pub sum_arap: i64,
    #[serde(rename = "sum(value where status=ACCR)")]
    pub sum_accr: i64,
}

impl ResultRowDto {
    /// Canonical column order of the output contract. Must stay in sync
    /// with the serde renames above.
    pub const HEADER: [&'static str; 6] = [
        "legal_entity",
        "counterparty",
        "tier",
        "max(rating by counterparty)",
        "sum(value where status=ARAP)",
        "sum(value where status=ACCR)",
    ];
}

/// A named result set ready to be persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultSetDto {
    pub name: String,
    pub rows: Vec<ResultRowDto>,
}

/// Port for persisting assembled result sets.
pub trait ResultSink: Send + Sync {
    fn write(&self, set: &ResultSetDto) -> Result<()>;
}

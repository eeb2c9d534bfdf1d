// crates/ports/src/sources.rs
use exposure_rollup_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// DTO for one record of the primary (exposure) dataset.
/// Field names match the source header columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactRowDto {
    pub legal_entity: String,
    pub counter_party: String,
    pub status: String,
    pub value: i64,
}

/// DTO for one record of the secondary (tier) dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierRecordDto {
    pub counter_party: String,
    pub rating: i64,
    pub tier: i64,
}

/// Port for loading the exposure dataset. No ordering guarantee.
pub trait ExposureSource: Send + Sync {
    fn load(&self) -> Result<Vec<FactRowDto>>;
}

/// Port for loading the counterparty tier dataset. No ordering guarantee.
pub trait TierSource: Send + Sync {
    fn load(&self) -> Result<Vec<TierRecordDto>>;
}

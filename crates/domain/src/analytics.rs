pub mod aggregate;
pub mod assemble;
pub mod rollup;

pub use aggregate::{GrainAggregates, GrainAggregator, GrainKey, Measures};
pub use assemble::{ResultAssembler, ResultSet};
pub use rollup::{RollupEngine, RollupKey, RollupRow};

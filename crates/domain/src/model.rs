pub mod records;

pub use records::{FactRow, JoinedRecord, Status, TierRecord};

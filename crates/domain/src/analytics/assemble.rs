use crate::analytics::rollup::RollupRow;

/// A named, ordered batch of output records ready for a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet {
    pub name: String,
    pub rows: Vec<RollupRow>,
}

/// Concatenates rollup outputs into named result sets. Pure formatting:
/// no aggregation happens here, and batch order is preserved.
pub struct ResultAssembler;

impl ResultAssembler {
    pub fn concat(name: impl Into<String>, batches: Vec<Vec<RollupRow>>) -> ResultSet {
        ResultSet {
            name: name.into(),
            rows: batches.into_iter().flatten().collect(),
        }
    }
}

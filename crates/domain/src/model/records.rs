use exposure_rollup_shared_kernel::{Amount, Rating};

/// Exposure status. Only `Arap` and `Accr` contribute to the conditional
/// sums; any other source string is carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Arap,
    Accr,
    Other(String),
}

impl Status {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "ARAP" => Self::Arap,
            "ACCR" => Self::Accr,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<&str> for Status {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

/// One record from the primary (exposure) dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactRow {
    pub legal_entity: String,
    pub counter_party: String,
    pub status: Status,
    pub value: Amount,
}

/// One record from the secondary (counterparty tier) dataset.
/// `counter_party` is the join key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierRecord {
    pub counter_party: String,
    pub rating: Rating,
    pub tier: i64,
}

/// A fact row enriched with the tier data of its matching counterparty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedRecord {
    pub legal_entity: String,
    pub counter_party: String,
    pub rating: Rating,
    pub status: Status,
    pub value: Amount,
    pub tier: i64,
}

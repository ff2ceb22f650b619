use thiserror::Error;

use hs_core::DistributionId;

#[derive(Debug, Error)]
pub enum DistributionError {
    #[error("distribution {0} is not loaded")]
    UnknownDistribution(DistributionId),

    #[error("adult distribution {0} is not loaded")]
    UnknownAdultDistribution(usize),

    #[error("distribution {id}: {what} has {got} values, expected {expected}")]
    Shape {
        id:       DistributionId,
        what:     &'static str,
        expected: usize,
        got:      usize,
    },

    #[error("distribution {id}: frequency {frequency} exceeds the table maximum {max}")]
    FrequencyOutOfRange {
        id:        DistributionId,
        frequency: u32,
        max:       u32,
    },

    #[error("distribution id {id} is outside the table of {rows} rows")]
    IdOutOfRange { id: DistributionId, rows: usize },
}

pub type DistributionResult<T> = Result<T, DistributionError>;

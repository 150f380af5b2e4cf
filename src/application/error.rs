use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{LedgerError, ValidationError};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid entry: {0}")]
    Validation(#[from] ValidationError),

    #[error("Sales for {0} have already been recorded")]
    SalesAlreadyRecorded(NaiveDate),
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Validation(err) => AppError::Validation(err),
            LedgerError::SalesAlreadyRecorded(date) => AppError::SalesAlreadyRecorded(date),
        }
    }
}

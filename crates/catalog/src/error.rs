use core_types::FundId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid fund terms: {0}")]
    InvalidFund(#[from] core_types::CoreError),

    #[error("Duplicate fund id {0} in catalog seed")]
    DuplicateFund(FundId),

    #[error("The fund catalog seed is empty")]
    EmptyCatalog,
}

pub mod response;

pub use response::{
    DuplicateExample, DuplicateScan, DuplicateSummary, IncompleteScan, IncompleteSummary,
    ValidationScan, ValidationSummary,
};

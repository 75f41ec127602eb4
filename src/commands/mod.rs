//! Command implementations

pub mod check;
pub mod simple;
pub mod solutions;
pub mod survey;

pub use check::{CheckResult, check_word};
pub use simple::{SessionSummary, run_simple, run_simple_with};
pub use solutions::{SolutionsResult, find_solutions};
pub use survey::{RootSummary, SurveyStatistics, run_survey};

//! Pipeline entry points for crawler operations.
//!
//! - `run_search`: Paginate search results and collect job records
//! - `run_export`: Display collected records and export them on request

pub mod export;
pub mod search;

pub use export::run_export;
pub use search::{SearchOutcome, StopReason, run_search};

//! Aggregation over a project's maturity matrix

pub mod lock;
pub mod progress;
pub mod status;

pub use lock::{get_deployed_options, get_progress_options, SelectableOption};
pub use progress::{calculate_progress, ProgressSummary};
pub use status::{get_service_status, indicators_by_service};

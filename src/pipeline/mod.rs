pub mod orchestrator;
pub mod state;

pub use orchestrator::UpgradeCheck;
pub use state::RunSummary;

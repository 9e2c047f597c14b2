pub mod command;

pub use command::CommandScanner;

use async_trait::async_trait;
use crate::errors::GuardError;

/// Source of upgradable package tokens, in the order the tool reports them.
#[async_trait]
pub trait PackageScanner: Send + Sync {
    /// A tool that ran and failed yields an empty list. Only a tool that
    /// cannot be started at all is an error.
    async fn scan(&self) -> Result<Vec<String>, GuardError>;

    /// Scanner name for logging
    fn scanner_name(&self) -> &str;
}

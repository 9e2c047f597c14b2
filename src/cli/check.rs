use crate::config::{Config, Settings};
use crate::errors::GuardError;
use crate::pipeline::UpgradeCheck;
use crate::report::{to_pretty_json, ErrorReport, ReportRecord};
use tracing::error;

pub async fn handle_check(settings: Settings) -> Result<(), GuardError> {
    let payload = render_outcome(run_check(settings).await)?;
    println!("{}", payload);
    Ok(())
}

/// Resolve the credential first; nothing is scanned or sent without it.
pub async fn run_check(settings: Settings) -> Result<Vec<ReportRecord>, GuardError> {
    let config = Config::from_env(settings)?;
    UpgradeCheck::from_config(&config).run().await
}

/// Exactly one JSON payload: the report, or an error object in its place.
pub fn render_outcome(outcome: Result<Vec<ReportRecord>, GuardError>) -> Result<String, GuardError> {
    match outcome {
        Ok(records) => to_pretty_json(&records),
        Err(e) => {
            error!(error_type = e.classify().error_type, error = %e, "Upgrade check aborted");
            to_pretty_json(&ErrorReport { error: e.to_string() })
        }
    }
}

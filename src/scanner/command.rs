use async_trait::async_trait;
use tokio::process::Command;
use crate::errors::GuardError;
use super::PackageScanner;
use tracing::{debug, warn};

/// Runs an update-check command with no arguments and reads one package per stdout line.
pub struct CommandScanner {
    program: String,
}

impl CommandScanner {
    pub fn new(program: &str) -> Self {
        Self { program: program.to_string() }
    }
}

#[async_trait]
impl PackageScanner for CommandScanner {
    async fn scan(&self) -> Result<Vec<String>, GuardError> {
        debug!(program = %self.program, "Checking for upgradable packages");

        let output = Command::new(&self.program)
            .output()
            .await
            .map_err(|e| GuardError::Scanner(format!("Failed to run {}: {}", self.program, e)))?;

        if !output.status.success() {
            // checkupdates also exits non-zero when nothing is pending, so
            // failure and "up to date" both end up as an empty list here.
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(
                program = %self.program,
                status = %output.status,
                stderr = %stderr.trim(),
                "Error checking for updates"
            );
            return Ok(Vec::new());
        }

        Ok(split_packages(&String::from_utf8_lossy(&output.stdout)))
    }

    fn scanner_name(&self) -> &str { &self.program }
}

/// One token per line, verbatim, in order. Duplicates are kept.
pub fn split_packages(stdout: &str) -> Vec<String> {
    stdout.lines().map(|line| line.to_string()).collect()
}

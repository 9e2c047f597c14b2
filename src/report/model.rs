use serde::{Deserialize, Serialize};

pub const NO_PACKAGES_MESSAGE: &str = "No upgradable packages found.";

/// Safety verdict for upgrading one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub safe: bool,
    pub reason: String,
}

impl Assessment {
    /// Fail-closed verdict used whenever the answer can't be trusted.
    pub fn unsafe_because(reason: impl Into<String>) -> Self {
        Self { safe: false, reason: reason.into() }
    }
}

/// One entry of the printed report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportRecord {
    Package {
        package: String,
        safe: bool,
        reason: String,
    },
    Message {
        message: String,
    },
}

impl ReportRecord {
    pub fn for_package(package: &str, assessment: Assessment) -> Self {
        ReportRecord::Package {
            package: package.to_string(),
            safe: assessment.safe,
            reason: assessment.reason,
        }
    }

    pub fn no_packages() -> Self {
        ReportRecord::Message { message: NO_PACKAGES_MESSAGE.to_string() }
    }
}

/// Payload printed in place of the report when the run cannot proceed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    pub error: String,
}

use crate::assess::{RiskAssessmentService, RiskAssessor};
use crate::config::Config;
use crate::errors::GuardError;
use crate::llm::GeminiProvider;
use crate::report::{is_safe_to_upgrade, ReportRecord};
use crate::scanner::{CommandScanner, PackageScanner};
use super::state::RunSummary;
use tracing::{debug, info};

/// Scan, then assess each package in turn, then aggregate.
pub struct UpgradeCheck {
    scanner: Box<dyn PackageScanner>,
    assessor: Box<dyn RiskAssessmentService>,
}

impl UpgradeCheck {
    pub fn new(scanner: Box<dyn PackageScanner>, assessor: Box<dyn RiskAssessmentService>) -> Self {
        Self { scanner, assessor }
    }

    /// Wire the real command scanner and Gemini-backed assessor from a resolved config.
    pub fn from_config(config: &Config) -> Self {
        let provider = GeminiProvider::with_base_url(&config.api_key, &config.model, &config.base_url);
        let assessor = RiskAssessor::new(Box::new(provider)).with_secret(&config.api_key);
        Self::new(
            Box::new(CommandScanner::new(&config.scanner)),
            Box::new(assessor),
        )
    }

    pub async fn run(&self) -> Result<Vec<ReportRecord>, GuardError> {
        let packages = self.scanner.scan().await?;
        info!(
            scanner = self.scanner.scanner_name(),
            count = packages.len(),
            "Upgradable packages found"
        );

        if packages.is_empty() {
            return Ok(vec![ReportRecord::no_packages()]);
        }

        let mut records = Vec::with_capacity(packages.len());
        for (i, package) in packages.iter().enumerate() {
            debug!(package = %package, index = i + 1, total = packages.len(), "Assessing package");
            let raw = self.assessor.search_for_issues(package).await;
            let assessment = is_safe_to_upgrade(&raw);
            info!(package = %package, safe = assessment.safe, "Package assessed");
            records.push(ReportRecord::for_package(package, assessment));
        }

        let summary = RunSummary::from_records(&records);
        info!(
            total = summary.total_packages,
            safe = summary.safe,
            unsafe_count = summary.unsafe_count,
            "Upgrade check completed"
        );

        Ok(records)
    }
}

use crate::report::ReportRecord;

/// Counts over a finished report, for the closing log line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total_packages: usize,
    pub safe: usize,
    pub unsafe_count: usize,
}

impl RunSummary {
    pub fn from_records(records: &[ReportRecord]) -> Self {
        let mut summary = Self::default();
        for record in records {
            if let ReportRecord::Package { safe, .. } = record {
                summary.total_packages += 1;
                if *safe {
                    summary.safe += 1;
                } else {
                    summary.unsafe_count += 1;
                }
            }
        }
        summary
    }
}

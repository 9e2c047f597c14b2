pub mod prompt;
pub mod assessor;

pub use prompt::build_prompt;
pub use assessor::{RiskAssessmentService, RiskAssessor};

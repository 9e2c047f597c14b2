use super::model::Assessment;
use tracing::warn;

/// Turn the assessor's raw text into a verdict. Anything other than an
/// object with a boolean `safe` and a string `reason` is treated as unsafe.
pub fn is_safe_to_upgrade(raw: &str) -> Assessment {
    match serde_json::from_str::<Assessment>(raw) {
        Ok(assessment) => assessment,
        Err(e) => {
            warn!(error = %e, "Error parsing JSON");
            Assessment::unsafe_because(format!("Error parsing JSON: {}", e))
        }
    }
}

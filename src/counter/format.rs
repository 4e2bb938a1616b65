//! Human-readable census report

use super::census::LabelCount;
use super::MAX_LABELS;

/// Render a census for terminal output.
pub fn format_results(result: &LabelCount) -> String {
    if let Some(message) = &result.error_message {
        return format!("Error: {}\nURL: {}", message, result.target);
    }

    let mut out = String::new();
    out.push_str(&format!("URL: {}\n", result.target));
    out.push_str(&format!("Unique labels found: {}\n", result.count));

    if result.exceeds_limit {
        out.push_str(&format!(
            "WARNING: The number of unique labels exceeds the maximum limit of {}!\n",
            MAX_LABELS
        ));
    }

    out.push_str("Labels found:\n");
    for label in &result.labels_found {
        out.push_str(&format!("- {}\n", label));
    }

    out
}

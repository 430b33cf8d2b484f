pub mod assess;
pub mod bands;
pub mod catalog;
pub mod score;

use anxcheck_core::Catalog;

/// Parse a comma-separated answer vector, one value per catalog question.
pub fn parse_answers(catalog: &Catalog, raw: &str) -> Result<Vec<u8>, String> {
    let values: Result<Vec<u8>, _> = raw
        .split(',')
        .map(|part| part.trim().parse::<u8>())
        .collect();
    let values = values.map_err(|e| format!("invalid answer value: {e}"))?;
    if values.len() != catalog.len() {
        return Err(format!(
            "expected {} answers, got {}",
            catalog.len(),
            values.len()
        ));
    }
    if let Some(bad) = values.iter().find(|v| **v > catalog.max_option_value()) {
        return Err(format!("answer value {bad} is outside the 0-4 scale"));
    }
    Ok(values)
}

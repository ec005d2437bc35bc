use crate::domain::error::DomainError;
use crate::domain::values::frequency_vector::FrequencyVector;

/// Cosine similarity between two frequency vectors.
///
/// Vectors of different dimension come from different k values and are
/// rejected. A zero-norm vector on either side scores exactly 0.0.
pub fn cosine_similarity(a: &FrequencyVector, b: &FrequencyVector) -> Result<f64, DomainError> {
    if a.dimension() != b.dimension() {
        return Err(DomainError::InvalidInput(format!(
            "Vector dimension mismatch: {} vs {} (query and reference built with different k)",
            a.dimension(),
            b.dimension()
        )));
    }
    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }
    Ok((dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(-1.0, 1.0))
}

/// Cosine similarity between two equal-length vectors, in [-1, 1].
///
/// Mismatched lengths, empty slices, and zero-magnitude operands all yield
/// 0.0 rather than NaN; a non-informative vector simply scores below any
/// positive threshold. Callers that must reject a length mismatch outright
/// (the ranking path) check dimensions before calling.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        return 0.0;
    }
    dot / denom
}

/// Cosine similarity against a candidate when the query's L2 norm is already
/// known. The linear scan precomputes the query norm once per query.
#[inline]
pub(crate) fn cosine_with_query_norm(query: &[f32], query_norm: f32, candidate: &[f32]) -> f32 {
    if query_norm == 0.0 {
        return 0.0;
    }

    let mut dot = 0.0f32;
    let mut norm_c = 0.0f32;
    for (q, c) in query.iter().zip(candidate) {
        dot += q * c;
        norm_c += c * c;
    }

    let denom = query_norm * norm_c.sqrt();
    if denom == 0.0 {
        return 0.0;
    }
    dot / denom
}

#[inline]
pub(crate) fn l2_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

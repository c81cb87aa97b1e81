//! Vertex label normalization.

/// Trim a raw label, returning `None` when nothing is left.
///
/// Labels compare by exact (case-sensitive) string equality after trimming.
pub fn normalize_label(raw: &str) -> Option<&str> {
    let label = raw.trim();
    if label.is_empty() {
        None
    } else {
        Some(label)
    }
}

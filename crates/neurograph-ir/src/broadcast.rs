//! Shape-compatibility rules.

/// Whether `from` can be unidirectionally broadcast to `to`.
///
/// Trailing dimensions are aligned; each `from` dimension must equal the
/// aligned `to` dimension or be 1, and missing leading dimensions count
/// as 1. The target shape never shrinks, so a `from` with higher rank than
/// `to` is never compatible.
pub fn unidirectionally_broadcastable(from: &[u32], to: &[u32]) -> bool {
    if from.len() > to.len() {
        return false;
    }
    from.iter()
        .rev()
        .zip(to.iter().rev())
        .all(|(&f, &t)| f == t || f == 1)
}

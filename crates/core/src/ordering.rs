//! Full-list reorder validation.
//!
//! A reorder request carries the complete desired ordering of a slider's
//! items. The request is only applied when the supplied ids are exactly a
//! permutation of the current item set — no partial reorders, no foreign
//! ids, no duplicates.

use std::collections::HashSet;

use crate::error::CoreError;
use crate::types::DbId;

/// Validate that `requested` is exactly a permutation of `current`.
///
/// Order of `current` is irrelevant; only set equality (and the absence
/// of duplicates in `requested`) is checked.
pub fn validate_reorder(current: &[DbId], requested: &[DbId]) -> Result<(), CoreError> {
    let mut seen = HashSet::with_capacity(requested.len());
    for id in requested {
        if !seen.insert(*id) {
            return Err(CoreError::Validation(format!(
                "Duplicate item id {id} in reorder request"
            )));
        }
    }

    let current_set: HashSet<DbId> = current.iter().copied().collect();

    if let Some(foreign) = requested.iter().find(|id| !current_set.contains(*id)) {
        return Err(CoreError::Validation(format!(
            "Item id {foreign} does not belong to this slider"
        )));
    }

    if requested.len() != current.len() {
        let missing: Vec<DbId> = current
            .iter()
            .filter(|id| !seen.contains(*id))
            .copied()
            .collect();
        return Err(CoreError::Validation(format!(
            "Reorder request must include every item; missing ids: {missing:?}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn accepts_exact_permutation() {
        assert!(validate_reorder(&[1, 2, 3], &[3, 1, 2]).is_ok());
    }

    #[test]
    fn accepts_empty_sets() {
        assert!(validate_reorder(&[], &[]).is_ok());
    }

    #[test]
    fn rejects_missing_id() {
        let err = validate_reorder(&[1, 2, 3], &[3, 1]).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("missing"));
    }

    #[test]
    fn rejects_foreign_id() {
        let err = validate_reorder(&[1, 2, 3], &[3, 1, 99]).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("99"));
    }

    #[test]
    fn rejects_duplicate_id() {
        let err = validate_reorder(&[1, 2, 3], &[3, 1, 1]).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("Duplicate"));
    }

    #[test]
    fn rejects_duplicate_that_hides_a_missing_id() {
        // Same length as current, but id 2 is missing and 3 appears twice.
        let err = validate_reorder(&[1, 2, 3], &[3, 3, 1]).unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }
}

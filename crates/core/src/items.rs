//! Parsing of the `items` wire format.
//!
//! Both the creation and search endpoints receive the accepted item ids as
//! one comma-separated string (`"1,2,6"`), the standardized wire form. Creation
//! rejects malformed input outright; search treats unparsable entries as
//! matching nothing, which is how the filtering endpoint has always
//! behaved.

use crate::error::CoreError;
use crate::types::DbId;

/// Parse the `items` field of a registration into distinct item ids.
///
/// Order follows first appearance; repeated ids collapse to one. Any token
/// that is not a positive integer is a validation failure, so an `Ok`
/// result is never empty.
pub fn parse_item_ids(raw: &str) -> Result<Vec<DbId>, CoreError> {
    let mut ids: Vec<DbId> = Vec::new();

    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            return Err(CoreError::Validation(
                "items must be a non-empty comma-separated list of item ids".into(),
            ));
        }

        let id: DbId = token.parse().map_err(|_| {
            CoreError::Validation(format!("'{token}' is not a valid item id"))
        })?;
        if id <= 0 {
            return Err(CoreError::Validation(format!(
                "'{token}' is not a valid item id"
            )));
        }

        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    Ok(ids)
}

/// Parse the `items` query parameter of a point search.
///
/// Lenient counterpart of [`parse_item_ids`]: tokens that do not parse are
/// dropped rather than rejected. A dropped token can never match a point,
/// so the observable result is the same as filtering on it.
pub fn parse_item_filter(raw: &str) -> Vec<DbId> {
    let mut ids: Vec<DbId> = Vec::new();

    for token in raw.split(',') {
        if let Ok(id) = token.trim().parse::<DbId>() {
            if id > 0 && !ids.contains(&id) {
                ids.push(id);
            }
        }
    }

    ids
}

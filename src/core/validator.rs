//! Settings validation
//!
//! Required-field validation for the administrative update pipeline. The
//! check is a pure function of the normalized settings triple: fields are
//! checked in a fixed order and the first blank one fails the batch.

use crate::domain::errors::ValidationError;
use crate::domain::settings::{
    SettingsUpdate, FIELD_LABEL_GROUPS, FIELD_LABEL_LICENSE, FIELD_LABEL_PARAMS,
};

/// Validate a normalized settings update
///
/// Checks license, groups, and params in that order and fails immediately
/// with the form label of the first field that is empty after trimming.
/// Remaining fields are not checked. No side effects.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyField`] naming the first blank field.
pub fn validate(update: &SettingsUpdate) -> Result<(), ValidationError> {
    validate_not_empty(&update.license, FIELD_LABEL_LICENSE)?;
    validate_not_empty(&update.groups, FIELD_LABEL_GROUPS)?;
    validate_not_empty(&update.params, FIELD_LABEL_PARAMS)?;
    Ok(())
}

/// Check that a field is not blank after trimming
fn validate_not_empty(value: &str, field_label: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field_label.to_string()));
    }
    Ok(())
}

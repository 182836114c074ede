//! The point-registration payload and its validation.
//!
//! The HTTP layer collects multipart form fields as raw strings into a
//! [`RawRegistration`]; [`RawRegistration::parse`] turns that into a typed
//! [`PointRegistration`] or the complete list of field violations. Shape
//! checks on the typed payload (email format, non-empty strings) run
//! through the `validator` derive, and every problem is reported in one
//! pass, never just the first.

use serde::Serialize;
use validator::Validate;

use crate::error::CoreError;
use crate::items::parse_item_ids;
use crate::types::DbId;

/// A single violated field, as it appears in the `details` array of a
/// 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Registration fields exactly as collected from the multipart request,
/// before any validation.
#[derive(Debug, Default)]
pub struct RawRegistration {
    pub name: Option<String>,
    pub email: Option<String>,
    pub whatsapp: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub city: Option<String>,
    pub uf: Option<String>,
    pub items: Option<String>,
}

/// A fully validated registration payload.
#[derive(Debug, Clone, Validate)]
pub struct PointRegistration {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(
        length(min = 1, message = "email must not be empty"),
        email(message = "email must be a valid email address")
    )]
    pub email: String,
    #[validate(length(min = 1, message = "whatsapp must not be empty"))]
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    #[validate(length(min = 1, message = "city must not be empty"))]
    pub city: String,
    #[validate(length(min = 1, message = "uf must not be empty"))]
    pub uf: String,
    /// Distinct catalog item ids, in first-appearance order.
    pub items: Vec<DbId>,
}

impl RawRegistration {
    /// Validate every field and return either the typed payload or the
    /// full list of violations, sorted by field name.
    pub fn parse(self) -> Result<PointRegistration, Vec<FieldViolation>> {
        let mut violations: Vec<FieldViolation> = Vec::new();

        let name = require_string(self.name, "name", &mut violations);
        let email = require_string(self.email, "email", &mut violations);
        let whatsapp = require_string(self.whatsapp, "whatsapp", &mut violations);
        let latitude = require_number(self.latitude, "latitude", &mut violations);
        let longitude = require_number(self.longitude, "longitude", &mut violations);
        let city = require_string(self.city, "city", &mut violations);
        let uf = require_string(self.uf, "uf", &mut violations);

        let items = match self.items.as_deref() {
            Some(raw) => match parse_item_ids(raw) {
                Ok(ids) => ids,
                Err(err) => {
                    violations.push(FieldViolation::new("items", core_message(err)));
                    Vec::new()
                }
            },
            None => {
                violations.push(FieldViolation::new("items", "items is required"));
                Vec::new()
            }
        };

        let payload = PointRegistration {
            name,
            email,
            whatsapp,
            latitude: latitude.unwrap_or_default(),
            longitude: longitude.unwrap_or_default(),
            city,
            uf,
            items,
        };

        if let Err(errors) = payload.validate() {
            for (field, field_errors) in errors.field_errors() {
                let field = field.to_string();
                // A presence failure was already recorded for this field;
                // the shape check on the placeholder value is noise.
                if violations.iter().any(|v| v.field == field) {
                    continue;
                }
                // One message per field: the first declared check that
                // failed (a blank email reads "must not be empty", not
                // both messages).
                if let Some(error) = field_errors.first() {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid"));
                    violations.push(FieldViolation::new(field, message));
                }
            }
        }

        if violations.is_empty() {
            Ok(payload)
        } else {
            violations.sort_by(|a, b| a.field.cmp(&b.field));
            Err(violations)
        }
    }
}

fn core_message(err: CoreError) -> String {
    match err {
        CoreError::Validation(msg) => msg,
        other => other.to_string(),
    }
}

fn require_string(
    value: Option<String>,
    field: &str,
    violations: &mut Vec<FieldViolation>,
) -> String {
    match value {
        Some(value) => value,
        None => {
            violations.push(FieldViolation::new(field, format!("{field} is required")));
            String::new()
        }
    }
}

fn require_number(
    value: Option<String>,
    field: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<f64> {
    let Some(raw) = value else {
        violations.push(FieldViolation::new(field, format!("{field} is required")));
        return None;
    };

    match raw.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => Some(number),
        _ => {
            violations.push(FieldViolation::new(field, format!("{field} must be a number")));
            None
        }
    }
}

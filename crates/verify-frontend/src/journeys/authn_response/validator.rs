use serde::Serialize;
use serde_json::Value;

use crate::journeys::assurance::LevelOfAssurance;
use crate::journeys::validation::{ValidationErrors, ValidationRule};

pub const IDP_RESULT: &str = "idpResult";
pub const IS_REGISTRATION: &str = "isRegistration";
pub const LOA_ACHIEVED: &str = "loaAchieved";

/// Validated authentication response; only obtainable through [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdpAuthnResponse {
    idp_result: String,
    is_registration: bool,
    loa_achieved: Option<LevelOfAssurance>,
}

impl IdpAuthnResponse {
    pub fn idp_result(&self) -> &str {
        &self.idp_result
    }

    pub fn is_registration(&self) -> bool {
        self.is_registration
    }

    pub fn loa_achieved(&self) -> Option<LevelOfAssurance> {
        self.loa_achieved
    }
}

/// Check every field of a raw hub payload, reporting all violations together.
///
/// A payload that is not a JSON object is treated as one with no fields.
pub fn validate(raw: &Value) -> Result<IdpAuthnResponse, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let field = |name: &str| raw.as_object().and_then(|object| object.get(name));

    let idp_result = match field(IDP_RESULT) {
        Some(Value::String(result)) if !result.trim().is_empty() => Some(result.clone()),
        Some(Value::String(_)) | Some(Value::Null) | None => {
            errors.push(IDP_RESULT, ValidationRule::Presence, "can't be blank");
            None
        }
        Some(other) => {
            errors.push(
                IDP_RESULT,
                ValidationRule::Presence,
                format!("must be a non-empty string, got {other}"),
            );
            None
        }
    };

    let is_registration = match field(IS_REGISTRATION) {
        Some(Value::Bool(flag)) => Some(*flag),
        _ => {
            errors.push(
                IS_REGISTRATION,
                ValidationRule::Boolean,
                "is not included in the list",
            );
            None
        }
    };

    let loa_achieved = match field(LOA_ACHIEVED) {
        None | Some(Value::Null) => None,
        Some(Value::String(raw)) => match LevelOfAssurance::parse(raw) {
            Some(level) => Some(level),
            None => {
                errors.push(
                    LOA_ACHIEVED,
                    ValidationRule::Inclusion,
                    format!("'{raw}' is not included in the list"),
                );
                None
            }
        },
        Some(other) => {
            errors.push(
                LOA_ACHIEVED,
                ValidationRule::Inclusion,
                format!("{other} is not included in the list"),
            );
            None
        }
    };

    match (idp_result, is_registration) {
        (Some(idp_result), Some(is_registration)) if errors.is_empty() => Ok(IdpAuthnResponse {
            idp_result,
            is_registration,
            loa_achieved,
        }),
        _ => Err(errors),
    }
}

use serde::Serialize;
use tracing::debug;

use crate::journeys::assurance::LevelOfAssurance;
use crate::journeys::session::SelectedIdp;

/// Confirmation template variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfirmationView {
    #[serde(rename = "confirmation_LOA1")]
    Loa1,
    #[serde(rename = "confirmation_LOA2")]
    Loa2,
}

impl ConfirmationView {
    pub const fn template(self) -> &'static str {
        match self {
            ConfirmationView::Loa1 => "confirmation_LOA1",
            ConfirmationView::Loa2 => "confirmation_LOA2",
        }
    }

    pub const fn level(self) -> LevelOfAssurance {
        match self {
            ConfirmationView::Loa1 => LevelOfAssurance::Level1,
            ConfirmationView::Loa2 => LevelOfAssurance::Level2,
        }
    }
}

impl From<LevelOfAssurance> for ConfirmationView {
    fn from(level: LevelOfAssurance) -> Self {
        match level {
            LevelOfAssurance::Level1 => ConfirmationView::Loa1,
            LevelOfAssurance::Level2 => ConfirmationView::Loa2,
        }
    }
}

/// The achieved level was absent or outside the known set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported level of assurance: {}", .found.as_deref().unwrap_or("<none>"))]
pub struct UnsupportedAssuranceLevel {
    pub found: Option<String>,
}

/// Pick the confirmation template for the level achieved during authentication.
///
/// The IdP's advertised levels are display context only; the achieved level decides.
pub fn select_confirmation_view(
    idp: &SelectedIdp,
    achieved_loa: Option<&str>,
) -> Result<ConfirmationView, UnsupportedAssuranceLevel> {
    let level = achieved_loa
        .and_then(LevelOfAssurance::parse)
        .ok_or_else(|| UnsupportedAssuranceLevel {
            found: achieved_loa.map(str::to_string),
        })?;

    debug!(
        idp = %idp.simple_id,
        supported = ?idp.levels_of_assurance,
        achieved = %level,
        "selected confirmation view"
    );

    Ok(ConfirmationView::from(level))
}

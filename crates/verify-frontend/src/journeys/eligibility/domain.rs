use serde::{Deserialize, Serialize};

/// Why a user has not lived in the UK for the last 12 months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotResidentReason {
    NoAddress,
    AddressButNotResident,
    MovedRecently,
}

impl NotResidentReason {
    pub const ALL: [NotResidentReason; 3] = [
        NotResidentReason::NoAddress,
        NotResidentReason::AddressButNotResident,
        NotResidentReason::MovedRecently,
    ];

    /// Form value, as posted by the questionnaire radio buttons.
    pub const fn form_value(self) -> &'static str {
        match self {
            NotResidentReason::NoAddress => "NoAddress",
            NotResidentReason::AddressButNotResident => "AddressButNotResident",
            NotResidentReason::MovedRecently => "MovedRecently",
        }
    }

    pub fn from_form_value(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|reason| reason.form_value() == raw)
    }
}

/// One submission of the questionnaire.
///
/// `not_resident_reason` only carries meaning when `resident_last_12_months` is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireAnswers {
    pub above_age_threshold: bool,
    pub resident_last_12_months: bool,
    pub not_resident_reason: Option<NotResidentReason>,
}

impl QuestionnaireAnswers {
    pub fn resident(above_age_threshold: bool) -> Self {
        Self {
            above_age_threshold,
            resident_last_12_months: true,
            not_resident_reason: None,
        }
    }

    pub fn not_resident(above_age_threshold: bool, reason: NotResidentReason) -> Self {
        Self {
            above_age_threshold,
            resident_last_12_months: false,
            not_resident_reason: Some(reason),
        }
    }
}

/// Where the questionnaire sends the user next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityOutcome {
    MightNotWorkMovedRecently,
    MightNotWorkUnderage,
    WillNotWorkNoAddress,
    MayNotWorkOverseas,
    ProceedToDocumentSelection,
}

impl EligibilityOutcome {
    pub const fn label(self) -> &'static str {
        match self {
            EligibilityOutcome::MightNotWorkMovedRecently => "might_not_work_moved_recently",
            EligibilityOutcome::MightNotWorkUnderage => "might_not_work_underage",
            EligibilityOutcome::WillNotWorkNoAddress => "will_not_work_no_address",
            EligibilityOutcome::MayNotWorkOverseas => "may_not_work_overseas",
            EligibilityOutcome::ProceedToDocumentSelection => "proceed_to_document_selection",
        }
    }

    /// Redirect target for the outcome.
    pub const fn redirect_path(self) -> &'static str {
        match self {
            EligibilityOutcome::MightNotWorkMovedRecently => {
                "/why-might-this-not-work-for-me?reason=moved_recently"
            }
            EligibilityOutcome::MightNotWorkUnderage => {
                "/why-might-this-not-work-for-me?reason=underage"
            }
            EligibilityOutcome::WillNotWorkNoAddress => "/will-not-work-without-uk-address",
            EligibilityOutcome::MayNotWorkOverseas => "/may-not-work-if-you-live-overseas",
            EligibilityOutcome::ProceedToDocumentSelection => "/select-documents",
        }
    }
}

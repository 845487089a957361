use crate::infra::{default_identity_providers, demo_session};
use clap::Args;
use verify_frontend::error::AppError;
use verify_frontend::journeys::confirmation::select_confirmation_view;
use verify_frontend::journeys::eligibility::{classify_form, EligibilityOutcome, WillItWorkForMeForm};
use verify_frontend::journeys::SessionError;

#[derive(Args, Debug, Default)]
pub(crate) struct EligibilityArgs {
    /// Whether the user is aged 20 or over ("true" or "false")
    #[arg(long)]
    pub(crate) above_age_threshold: Option<String>,
    /// Whether the user has lived in the UK for the last 12 months ("true" or "false")
    #[arg(long)]
    pub(crate) resident_last_12_months: Option<String>,
    /// NoAddress, AddressButNotResident or MovedRecently
    #[arg(long)]
    pub(crate) not_resident_reason: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct ConfirmationArgs {
    /// Level of assurance achieved with the identity provider (LEVEL_1 or LEVEL_2)
    #[arg(long)]
    pub(crate) loa: String,
}

pub(crate) fn run_eligibility(args: EligibilityArgs) -> Result<(), AppError> {
    let form = WillItWorkForMeForm {
        above_age_threshold: args.above_age_threshold,
        resident_last_12_months: args.resident_last_12_months,
        not_resident_reason: args.not_resident_reason,
    };

    match classify_form(&form) {
        Ok(outcome) => {
            println!("{}", describe_outcome(outcome));
            Ok(())
        }
        Err(invalid) => {
            println!("Answers rejected:");
            for error in invalid.errors.iter() {
                println!("- {}: {}", error.field, error.message);
            }
            Err(invalid.into())
        }
    }
}

pub(crate) fn run_confirmation(args: ConfirmationArgs) -> Result<(), AppError> {
    let session = demo_session(&default_identity_providers());
    let idp = session.selected_idp.ok_or(SessionError::NotFound)?;

    let view = select_confirmation_view(&idp, Some(args.loa.trim()))?;
    println!(
        "{} -> {} (identity provider {})",
        view.level(),
        view.template(),
        idp.simple_id
    );
    Ok(())
}

fn describe_outcome(outcome: EligibilityOutcome) -> String {
    let summary = match outcome {
        EligibilityOutcome::MightNotWorkMovedRecently => {
            "Verification might not work: moved to the UK recently"
        }
        EligibilityOutcome::MightNotWorkUnderage => {
            "Verification might not work: below the age threshold"
        }
        EligibilityOutcome::WillNotWorkNoAddress => "Verification will not work: no UK address",
        EligibilityOutcome::MayNotWorkOverseas => {
            "Verification may not work: UK address but living overseas"
        }
        EligibilityOutcome::ProceedToDocumentSelection => "Eligible: continue to document selection",
    };
    format!("{summary}\nRedirect: {}", outcome.redirect_path())
}

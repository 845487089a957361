use super::common::*;
use crate::journeys::eligibility::{
    classify, classify_form, EligibilityOutcome, NotResidentReason, QuestionnaireAnswers,
};
use crate::journeys::validation::ValidationRule;

#[test]
fn resident_adults_proceed_to_document_selection() {
    for reason in NotResidentReason::ALL.map(Some).into_iter().chain([None]) {
        let answers = QuestionnaireAnswers {
            above_age_threshold: true,
            resident_last_12_months: true,
            not_resident_reason: reason,
        };
        assert_eq!(
            classify(&answers),
            Ok(EligibilityOutcome::ProceedToDocumentSelection)
        );
    }
}

#[test]
fn recent_move_might_not_work() {
    let answers = QuestionnaireAnswers::not_resident(true, NotResidentReason::MovedRecently);
    assert_eq!(
        classify(&answers),
        Ok(EligibilityOutcome::MightNotWorkMovedRecently)
    );
}

#[test]
fn recent_move_takes_precedence_over_age() {
    let answers = QuestionnaireAnswers::not_resident(false, NotResidentReason::MovedRecently);
    assert_eq!(
        classify(&answers),
        Ok(EligibilityOutcome::MightNotWorkMovedRecently)
    );
}

#[test]
fn underage_residents_might_not_work() {
    assert_eq!(
        classify(&QuestionnaireAnswers::resident(false)),
        Ok(EligibilityOutcome::MightNotWorkUnderage)
    );
}

#[test]
fn underage_check_precedes_address_reasons() {
    for reason in [
        NotResidentReason::NoAddress,
        NotResidentReason::AddressButNotResident,
    ] {
        let answers = QuestionnaireAnswers::not_resident(false, reason);
        assert_eq!(
            classify(&answers),
            Ok(EligibilityOutcome::MightNotWorkUnderage)
        );
    }
}

#[test]
fn no_uk_address_will_not_work() {
    let answers = QuestionnaireAnswers::not_resident(true, NotResidentReason::NoAddress);
    assert_eq!(
        classify(&answers),
        Ok(EligibilityOutcome::WillNotWorkNoAddress)
    );
}

#[test]
fn address_without_residency_may_not_work_overseas() {
    let answers =
        QuestionnaireAnswers::not_resident(true, NotResidentReason::AddressButNotResident);
    assert_eq!(classify(&answers), Ok(EligibilityOutcome::MayNotWorkOverseas));
}

#[test]
fn non_resident_without_reason_is_invalid() {
    let answers = QuestionnaireAnswers {
        above_age_threshold: true,
        resident_last_12_months: false,
        not_resident_reason: None,
    };

    let invalid = classify(&answers).expect_err("reason is required");
    let error = invalid
        .errors
        .for_field("not_resident_reason")
        .expect("reason error reported");
    assert_eq!(error.rule, ValidationRule::Presence);
}

#[test]
fn classify_form_maps_named_answer_sets() {
    let cases = [
        (
            moved_to_uk_last_year_answers(),
            EligibilityOutcome::MightNotWorkMovedRecently,
        ),
        (not_old_enough_answers(), EligibilityOutcome::MightNotWorkUnderage),
        (no_uk_address_answers(), EligibilityOutcome::WillNotWorkNoAddress),
        (non_resident_answers(), EligibilityOutcome::MayNotWorkOverseas),
        (
            proceed_to_select_document_answers(),
            EligibilityOutcome::ProceedToDocumentSelection,
        ),
    ];

    for (form, expected) in cases {
        assert_eq!(classify_form(&form), Ok(expected), "answers {form:?}");
    }
}

#[test]
fn classification_is_repeatable() {
    let form = non_resident_answers();
    let first = classify_form(&form);
    for _ in 0..5 {
        assert_eq!(classify_form(&form), first);
    }
}

#[test]
fn incomplete_form_never_yields_an_outcome() {
    let invalid = classify_form(&invalid_form_answers()).expect_err("form is incomplete");
    assert!(!invalid.errors.is_empty());
}

#[test]
fn outcomes_have_distinct_redirect_targets() {
    let outcomes = [
        EligibilityOutcome::MightNotWorkMovedRecently,
        EligibilityOutcome::MightNotWorkUnderage,
        EligibilityOutcome::WillNotWorkNoAddress,
        EligibilityOutcome::MayNotWorkOverseas,
        EligibilityOutcome::ProceedToDocumentSelection,
    ];
    let mut targets: Vec<_> = outcomes.iter().map(|o| o.redirect_path()).collect();
    targets.sort_unstable();
    targets.dedup();
    assert_eq!(targets.len(), outcomes.len());
}

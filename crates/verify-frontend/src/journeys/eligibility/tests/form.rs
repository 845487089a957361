use super::common::*;
use crate::journeys::eligibility::{NotResidentReason, WillItWorkForMeForm};
use crate::journeys::validation::ValidationRule;

#[test]
fn reason_is_ignored_for_residents() {
    let answers = proceed_to_select_document_answers()
        .answers()
        .expect("resident answers parse");

    assert!(answers.resident_last_12_months);
    assert_eq!(answers.not_resident_reason, None);
}

#[test]
fn reason_is_parsed_for_non_residents() {
    let answers = no_uk_address_answers().answers().expect("answers parse");
    assert_eq!(answers.not_resident_reason, Some(NotResidentReason::NoAddress));
}

#[test]
fn missing_residency_answer_is_reported() {
    let invalid = invalid_form_answers()
        .answers()
        .expect_err("residency answer missing");

    let error = invalid
        .errors
        .for_field("resident_last_12_months")
        .expect("residency error present");
    assert_eq!(error.rule, ValidationRule::Presence);
    assert!(invalid.errors.for_field("above_age_threshold").is_none());
}

#[test]
fn empty_form_reports_each_question() {
    let invalid = WillItWorkForMeForm::default()
        .answers()
        .expect_err("nothing answered");

    assert_eq!(invalid.errors.len(), 2);
    assert!(invalid.errors.for_field("above_age_threshold").is_some());
    assert!(invalid.errors.for_field("resident_last_12_months").is_some());
}

#[test]
fn non_boolean_answers_are_rejected() {
    let invalid = form("yes", "true", "").answers().expect_err("not a boolean");
    let error = invalid
        .errors
        .for_field("above_age_threshold")
        .expect("age error present");
    assert_eq!(error.rule, ValidationRule::Boolean);
}

#[test]
fn unknown_reason_for_non_resident_is_rejected() {
    let invalid = form("true", "false", "noAddress")
        .answers()
        .expect_err("reason value is case sensitive");
    let error = invalid
        .errors
        .for_field("not_resident_reason")
        .expect("reason error present");
    assert_eq!(error.rule, ValidationRule::Inclusion);
}

#[test]
fn blank_reason_for_non_resident_is_missing() {
    let invalid = form("true", "false", "  ")
        .answers()
        .expect_err("reason missing");
    assert_eq!(
        invalid
            .errors
            .for_field("not_resident_reason")
            .map(|error| error.rule),
        Some(ValidationRule::Presence)
    );
}

/// End-to-end checks of the signup rule sequence
///
/// Covers the accepted submission, every single-rule failure, the
/// all-rules-failing submission and the ordering of reported messages.

use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use signup_form::{
    validate_signup, FormData, SignupAction, SignupRule, Submission, Validate, ValidationResult,
};

#[fixture]
fn accepted() -> Submission {
    Submission {
        email: "ada@example.com".to_string(),
        password: "hunter22".to_string(),
        confirm_password: "hunter22".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        role: "student".to_string(),
        terms: true,
        acquisition: vec!["google".to_string()],
    }
}

fn messages(rules: &[SignupRule]) -> Vec<String> {
    rules.iter().map(|rule| rule.message().to_string()).collect()
}

#[rstest]
fn accepted_submission_has_no_errors(accepted: Submission) {
    let result = validate_signup(&accepted);
    assert_eq!(result, ValidationResult::valid());
    assert_eq!(serde_json::to_string(&result).unwrap(), r#"{"errors":null}"#);
}

#[rstest]
fn every_rule_failing_reports_all_messages_in_order() {
    let submission = Submission {
        email: "not-an-email".to_string(),
        password: "abc".to_string(),
        confirm_password: "xyz".to_string(),
        first_name: String::new(),
        last_name: "Doe".to_string(),
        role: String::new(),
        terms: false,
        acquisition: Vec::new(),
    };

    let result = validate_signup(&submission);

    assert_eq!(
        result.into_errors(),
        Some(vec![
            "Invalid email address.".to_string(),
            "You must provide a password with at least six characters.".to_string(),
            "Password do not match.".to_string(),
            "Please provide both your first and last name.".to_string(),
            "Please select a role.".to_string(),
            "You must agree to the terms and conditions.".to_string(),
            "Please select at least 1 acquisition channel.".to_string(),
        ])
    );
}

#[rstest]
fn no_acquisition_channel_is_the_only_error(mut accepted: Submission) {
    accepted.acquisition.clear();
    assert_eq!(
        validate_signup(&accepted).errors(),
        ["Please select at least 1 acquisition channel."]
    );
}

#[rstest]
#[case::email(SignupRule::Email, |s: &mut Submission| s.email = "ada.example.com".to_string())]
#[case::email_without_dot(SignupRule::Email, |s: &mut Submission| s.email = "ada@localhost".to_string())]
#[case::short_password(SignupRule::Password, |s: &mut Submission| {
    s.password = "abcde".to_string();
    s.confirm_password = "abcde".to_string();
})]
#[case::mismatch(SignupRule::PasswordConfirmation, |s: &mut Submission| s.confirm_password = "hunter23".to_string())]
#[case::first_name(SignupRule::Name, |s: &mut Submission| s.first_name.clear())]
#[case::last_name(SignupRule::Name, |s: &mut Submission| s.last_name.clear())]
#[case::role(SignupRule::Role, |s: &mut Submission| s.role.clear())]
#[case::terms(SignupRule::Terms, |s: &mut Submission| s.terms = false)]
#[case::acquisition(SignupRule::Acquisition, |s: &mut Submission| s.acquisition.clear())]
fn single_failure_reports_only_its_message(
    mut accepted: Submission,
    #[case] rule: SignupRule,
    #[case] break_field: fn(&mut Submission),
) {
    break_field(&mut accepted);
    assert_eq!(validate_signup(&accepted).errors(), messages(&[rule]).as_slice());
}

#[rstest]
fn blank_passwords_match_but_fail_length(mut accepted: Submission) {
    accepted.password.clear();
    accepted.confirm_password.clear();

    assert!(SignupRule::PasswordConfirmation.passes(&accepted));
    assert_eq!(
        validate_signup(&accepted).errors(),
        messages(&[SignupRule::Password]).as_slice()
    );
}

#[rstest]
#[case::astral_at_boundary("😀😀😀", true)]
#[case::astral_below_boundary("😀😀", false)]
#[case::mixed_at_boundary("ab😀cd", true)]
fn password_length_uses_utf16_units(
    mut accepted: Submission,
    #[case] password: &str,
    #[case] accepted_length: bool,
) {
    accepted.password = password.to_string();
    accepted.confirm_password = password.to_string();

    let expected = if accepted_length {
        ValidationResult::valid()
    } else {
        ValidationResult::from_errors(messages(&[SignupRule::Password]))
    };
    assert_eq!(validate_signup(&accepted), expected);
}

#[rstest]
fn short_mismatched_password_fails_both_rules(mut accepted: Submission) {
    accepted.password = "abc".to_string();
    accepted.confirm_password = "xyz".to_string();

    assert_eq!(
        validate_signup(&accepted).errors(),
        messages(&[SignupRule::Password, SignupRule::PasswordConfirmation]).as_slice()
    );
}

#[rstest]
fn messages_follow_rule_order_for_any_subset(accepted: Submission) {
    let mut submission = accepted;
    submission.acquisition.clear();
    submission.email.clear();
    submission.terms = false;

    assert_eq!(
        validate_signup(&submission).errors(),
        messages(&[SignupRule::Email, SignupRule::Terms, SignupRule::Acquisition]).as_slice()
    );
}

#[rstest]
fn validation_is_idempotent(accepted: Submission) {
    let mut submission = accepted;
    submission.role.clear();

    let first = submission.validate();
    let second = submission.validate();
    assert_eq!(first, second);
    assert!(!submission.is_valid());
}

#[rstest]
fn whitespace_counts_as_content(mut accepted: Submission) {
    accepted.first_name = " ".to_string();
    accepted.role = " ".to_string();
    assert!(validate_signup(&accepted).is_valid());
}

#[rstest]
fn browser_post_body_round_trip() {
    let body = "email=ada%40example.com&password=hunter22&confirm-password=hunter22\
        &first-name=Ada&last-name=Lovelace&role=student&acquisition=google&acquisition=other";

    let form = FormData::parse_urlencoded(body).unwrap();
    let submission = Submission::from(&form);
    assert_eq!(submission.acquisition, vec!["google", "other"]);

    let mut action = SignupAction::new();
    let result = action.submit(&form);
    assert_eq!(result.errors(), messages(&[SignupRule::Terms]).as_slice());
}

#[rstest]
fn json_submission_is_validated() {
    let submission: Submission = serde_json::from_str(
        r#"{"email": "ada@example.com", "password": "hunter22", "confirm-password": "hunter22",
            "first-name": "Ada", "last-name": "Lovelace", "role": "teacher",
            "terms": true, "acquisition": ["friend"]}"#,
    )
    .unwrap();

    assert!(submission.is_valid());
}

#[rstest]
#[case::checkbox_value(r#""on""#, true)]
#[case::json_true("true", true)]
#[case::json_false("false", false)]
#[case::empty_string(r#""""#, false)]
#[case::null("null", false)]
fn terms_accepts_boolean_like_values(#[case] terms: &str, #[case] expected: bool) {
    let json = format!(r#"{{"terms": {}}}"#, terms);
    let submission: Submission = serde_json::from_str(&json).unwrap();
    assert_eq!(submission.terms, expected);
}

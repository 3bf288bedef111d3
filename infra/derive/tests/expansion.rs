use portal_derive::{api_model, portal_error};
use std::borrow::Cow;

#[portal_error]
pub enum SampleError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<i64, SampleError> {
    Ok(raw.parse::<i64>()?)
}

#[api_model]
pub struct Credentials {
    pub username: String,
    pub confirm_password: String,
}

#[api_model(deny_unknown_fields = false)]
pub struct Envelope {
    pub success: bool,
}

#[test]
fn source_errors_convert_with_question_mark() {
    let err = parse("nope").expect_err("should fail");
    assert!(matches!(err, SampleError::Parse { context: None, .. }));
    assert!(err.to_string().starts_with("Parse error: "));
}

#[test]
fn context_is_attached_to_source_results() {
    let err = "x".parse::<i64>().context("reading port").expect_err("should fail");
    assert!(err.to_string().starts_with("Parse error (reading port): "));
}

#[test]
fn context_overrides_on_own_results() {
    let err = parse("x").context("first").context("second").expect_err("should fail");
    assert!(err.to_string().contains("(second)"));
}

#[test]
fn internal_variant_accepts_strings() {
    let from_static: SampleError = "boom".into();
    let from_owned: SampleError = String::from("bang").into();
    assert_eq!(from_static.to_string(), "Internal error: boom");
    assert_eq!(from_owned.to_string(), "Internal error: bang");
}

#[test]
fn api_model_uses_camel_case() -> Result<(), serde_json::Error> {
    let value = serde_json::to_value(Credentials {
        username: "ana".to_owned(),
        confirm_password: "secret".to_owned(),
    })?;
    assert_eq!(value["confirmPassword"], "secret");
    assert!(value.get("confirm_password").is_none());
    Ok(())
}

#[test]
fn api_model_denies_unknown_fields_by_default() {
    let parsed = serde_json::from_str::<Credentials>(
        r#"{"username":"a","confirmPassword":"b","extra":1}"#,
    );
    assert!(parsed.is_err());
}

#[test]
fn api_model_can_allow_unknown_fields() -> Result<(), serde_json::Error> {
    let parsed: Envelope = serde_json::from_str(r#"{"success":true,"token":"t"}"#)?;
    assert!(parsed.success);
    Ok(())
}

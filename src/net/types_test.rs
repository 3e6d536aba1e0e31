use super::*;

// =============================================================
// CheckpointPayload
// =============================================================

#[test]
fn payload_omits_empty_recovery_token() {
    let request = CheckpointRequest {
        token: "T1".to_owned(),
        code: "123456".to_owned(),
        recovery_code: String::new(),
    };
    let json = serde_json::to_value(CheckpointPayload::from(&request)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "confirmation_token": "T1", "authentication_code": "123456" })
    );
}

#[test]
fn payload_includes_recovery_token_when_present() {
    let request = CheckpointRequest {
        token: "T1".to_owned(),
        code: String::new(),
        recovery_code: "abcd-efgh".to_owned(),
    };
    let json = serde_json::to_value(CheckpointPayload::from(&request)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "confirmation_token": "T1",
            "authentication_code": "",
            "recovery_token": "abcd-efgh",
        })
    );
}

// =============================================================
// CheckpointResponse
// =============================================================

#[test]
fn response_decodes_from_data_envelope() {
    let body = r#"{"data":{"complete":true,"intended":"/server/abc","user":{"uuid":"u1"}}}"#;
    let env: DataEnvelope<CheckpointResponse> = serde_json::from_str(body).unwrap();
    assert_eq!(
        env.data,
        CheckpointResponse { complete: true, intended: Some("/server/abc".to_owned()) }
    );
}

#[test]
fn response_null_or_missing_intended_is_none() {
    let env: DataEnvelope<CheckpointResponse> =
        serde_json::from_str(r#"{"data":{"complete":false,"intended":null}}"#).unwrap();
    assert_eq!(env.data.intended, None);

    let env: DataEnvelope<CheckpointResponse> = serde_json::from_str(r#"{"data":{"complete":true}}"#).unwrap();
    assert_eq!(env.data.intended, None);
}

#[test]
fn redirect_target_prefers_intended() {
    let resp = CheckpointResponse { complete: true, intended: Some("/server/abc".to_owned()) };
    assert_eq!(resp.redirect_target("/"), "/server/abc");
}

#[test]
fn redirect_target_falls_back_when_missing_or_empty() {
    let resp = CheckpointResponse { complete: true, intended: None };
    assert_eq!(resp.redirect_target("/"), "/");
    let resp = CheckpointResponse { complete: true, intended: Some(String::new()) };
    assert_eq!(resp.redirect_target("/"), "/");
}

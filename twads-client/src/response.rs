//! Response decoding and status-to-error mapping.
//!
//! The transport hands back every completed exchange as a raw status/body
//! pair; this module turns that into the caller-facing taxonomy, enriched
//! with the account/resource scope the operation ran under.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use twads_core::{AdsError, AdsResponse, AdsResult};
use twads_transport::RawResponse;

/// Account/resource scope of an in-flight operation, used to enrich
/// failures for diagnostics.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Scope<'a> {
    account_id: &'a str,
    resource_id: Option<&'a str>,
}

impl<'a> Scope<'a> {
    pub(crate) fn account(account_id: &'a str) -> Self {
        Self {
            account_id,
            resource_id: None,
        }
    }

    pub(crate) fn resource(account_id: &'a str, resource_id: &'a str) -> Self {
        Self {
            account_id,
            resource_id: Some(resource_id),
        }
    }
}

/// Decodes a successful exchange's `{"data": ...}` envelope, or maps the
/// failure status onto the error taxonomy.
pub(crate) fn decode_data<T: DeserializeOwned>(
    response: &RawResponse,
    scope: Scope<'_>,
) -> AdsResult<T> {
    check_status(response, scope)?;

    let envelope: AdsResponse<T> =
        serde_json::from_slice(&response.body).map_err(|e| AdsError::Remote {
            status: Some(response.status),
            message: format!("malformed response body: {e}"),
        })?;
    Ok(envelope.data)
}

/// Maps the exchange's status without decoding a body, for operations
/// that return nothing.
pub(crate) fn expect_success(response: &RawResponse, scope: Scope<'_>) -> AdsResult<()> {
    check_status(response, scope)
}

fn check_status(response: &RawResponse, scope: Scope<'_>) -> AdsResult<()> {
    if response.is_success() {
        return Ok(());
    }

    let message = remote_message(&response.body);
    Err(match response.status {
        401 | 403 => AdsError::Authorization { message },
        404 => AdsError::NotFound {
            account_id: scope.account_id.to_string(),
            resource_id: scope.resource_id.map(str::to_string),
        },
        400 | 422 => AdsError::Validation { message },
        status => AdsError::Remote {
            status: Some(status),
            message,
        },
    })
}

/// Extracts human-readable detail from the remote error envelope,
/// falling back to the raw body when it does not parse.
fn remote_message(body: &[u8]) -> String {
    #[derive(Deserialize)]
    struct ErrorEnvelope {
        #[serde(default)]
        errors: Vec<ErrorDetail>,
    }

    #[derive(Deserialize)]
    struct ErrorDetail {
        #[serde(default)]
        code: Option<String>,
        #[serde(default)]
        message: Option<String>,
    }

    if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(body) {
        let detail: Vec<String> = envelope
            .errors
            .into_iter()
            .filter_map(|e| match (e.code, e.message) {
                (Some(code), Some(message)) => Some(format!("{code}: {message}")),
                (None, Some(message)) => Some(message),
                (Some(code), None) => Some(code),
                (None, None) => None,
            })
            .collect();
        if !detail.is_empty() {
            return detail.join("; ");
        }
    }

    let raw = String::from_utf8_lossy(body);
    if raw.trim().is_empty() {
        "Unknown error".to_string()
    } else {
        raw.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use twads_core::TargetingCriteria;

    const ERROR_BODY: &[u8] =
        br#"{"errors":[{"code":"NOT_FOUND","message":"Resource was not found"}],"request":{}}"#;

    fn response(status: u16, body: &[u8]) -> RawResponse {
        RawResponse::new(status, body.to_vec())
    }

    #[test]
    fn test_success_decodes_envelope() {
        let record: TargetingCriteria = decode_data(
            &response(200, br#"{"data": {"id": "tc1"}}"#),
            Scope::account("hkk5"),
        )
        .unwrap();
        assert_eq!(record.id, "tc1");
    }

    #[test]
    fn test_malformed_success_body_is_remote_error() {
        let result: AdsResult<TargetingCriteria> =
            decode_data(&response(200, b"not json"), Scope::account("hkk5"));
        assert!(matches!(
            result,
            Err(AdsError::Remote {
                status: Some(200),
                ..
            })
        ));
    }

    #[test]
    fn test_unauthorized_statuses_map_to_authorization() {
        for status in [401, 403] {
            let result = expect_success(&response(status, ERROR_BODY), Scope::account("hkk5"));
            assert!(matches!(result, Err(AdsError::Authorization { .. })));
        }
    }

    #[test]
    fn test_not_found_carries_scope() {
        let result = expect_success(
            &response(404, ERROR_BODY),
            Scope::resource("hkk5", "tc404"),
        );
        match result {
            Err(AdsError::NotFound {
                account_id,
                resource_id,
            }) => {
                assert_eq!(account_id, "hkk5");
                assert_eq!(resource_id.as_deref(), Some("tc404"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_includes_remote_detail() {
        let body =
            br#"{"errors":[{"code":"INVALID_PARAMETER","message":"bad targeting_type"}]}"#;
        let result = expect_success(&response(400, body), Scope::account("hkk5"));
        match result {
            Err(AdsError::Validation { message }) => {
                assert!(message.contains("INVALID_PARAMETER"));
                assert!(message.contains("bad targeting_type"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_error_body_falls_back_to_raw() {
        let result = expect_success(&response(500, b"gateway exploded"), Scope::account("hkk5"));
        match result {
            Err(AdsError::Remote { status, message }) => {
                assert_eq!(status, Some(500));
                assert_eq!(message, "gateway exploded");
            }
            other => panic!("expected Remote, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_error_body_has_placeholder_message() {
        let result = expect_success(&response(503, b""), Scope::account("hkk5"));
        match result {
            Err(AdsError::Remote { message, .. }) => assert_eq!(message, "Unknown error"),
            other => panic!("expected Remote, got {other:?}"),
        }
    }
}

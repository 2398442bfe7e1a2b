// src/health/checker.rs
use super::payload::HealthPayload;
use crate::probe::ProbeResponse;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum HealthOutcome {
    /// HTTP 200; the database field is judged separately.
    Up(DatabaseStatus),
    UnexpectedStatus(u16),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseStatus {
    Connected,
    /// Valid JSON, but `data.database` is missing or not `"connected"`.
    Unexpected(Value),
    Unparsable,
}

pub fn evaluate(response: &ProbeResponse) -> HealthOutcome {
    if response.status != StatusCode::OK.as_u16() {
        return HealthOutcome::UnexpectedStatus(response.status);
    }

    HealthOutcome::Up(database_status(&response.body))
}

fn database_status(body: &str) -> DatabaseStatus {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => return DatabaseStatus::Unparsable,
    };

    // `null` has no fields to look into at all
    if value.is_null() {
        return DatabaseStatus::Unparsable;
    }

    // a shape mismatch (e.g. `"data": 5`) is an unexpected payload, not a parse error
    let connected = HealthPayload::deserialize(&value)
        .map(|payload| payload.database_connected())
        .unwrap_or(false);

    if connected {
        DatabaseStatus::Connected
    } else {
        DatabaseStatus::Unexpected(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reply(status: u16, body: &str) -> ProbeResponse {
        ProbeResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_connected_database() {
        let outcome = evaluate(&reply(200, r#"{"data":{"database":"connected"}}"#));
        assert_eq!(outcome, HealthOutcome::Up(DatabaseStatus::Connected));
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let outcome = evaluate(&reply(
            200,
            r#"{"status":"UP","data":{"database":"connected","version":"1.2"}}"#,
        ));
        assert_eq!(outcome, HealthOutcome::Up(DatabaseStatus::Connected));
    }

    #[test]
    fn test_disconnected_database_keeps_payload() {
        let outcome = evaluate(&reply(200, r#"{"data":{"database":"disconnected"}}"#));
        assert_eq!(
            outcome,
            HealthOutcome::Up(DatabaseStatus::Unexpected(
                json!({"data": {"database": "disconnected"}})
            ))
        );
    }

    #[test]
    fn test_missing_data_is_unexpected() {
        let outcome = evaluate(&reply(200, r#"{"status":"UP"}"#));
        assert_eq!(
            outcome,
            HealthOutcome::Up(DatabaseStatus::Unexpected(json!({"status": "UP"})))
        );
    }

    #[test]
    fn test_wrongly_typed_data_is_unexpected() {
        let outcome = evaluate(&reply(200, r#"{"data":5}"#));
        assert_eq!(
            outcome,
            HealthOutcome::Up(DatabaseStatus::Unexpected(json!({"data": 5})))
        );

        let outcome = evaluate(&reply(200, r#"{"data":{"database":true}}"#));
        assert!(matches!(
            outcome,
            HealthOutcome::Up(DatabaseStatus::Unexpected(_))
        ));
    }

    #[test]
    fn test_non_json_body_is_unparsable() {
        let outcome = evaluate(&reply(200, "<html>OK</html>"));
        assert_eq!(outcome, HealthOutcome::Up(DatabaseStatus::Unparsable));
    }

    #[test]
    fn test_null_body_is_unparsable() {
        let outcome = evaluate(&reply(200, "null"));
        assert_eq!(outcome, HealthOutcome::Up(DatabaseStatus::Unparsable));

        // other scalars are valid documents without a `data` field
        let outcome = evaluate(&reply(200, "5"));
        assert_eq!(outcome, HealthOutcome::Up(DatabaseStatus::Unexpected(json!(5))));
    }

    #[test]
    fn test_non_200_status_skips_body() {
        let outcome = evaluate(&reply(503, r#"{"data":{"database":"connected"}}"#));
        assert_eq!(outcome, HealthOutcome::UnexpectedStatus(503));

        // other 2xx codes are not "UP" either
        let outcome = evaluate(&reply(204, ""));
        assert_eq!(outcome, HealthOutcome::UnexpectedStatus(204));
    }
}

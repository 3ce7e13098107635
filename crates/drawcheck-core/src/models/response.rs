/// Lambda invocation response
use crate::constants::{LOOKUP_ERROR_BODY, NO_RESULTS_BODY, RESULTS_FETCH_ERROR_BODY};
use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Status/body pair returned by every completed invocation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub body: String,
}

impl InvocationResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, body)
    }

    pub fn no_results() -> Self {
        Self::ok(NO_RESULTS_BODY)
    }

    pub fn fetch_failed() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, RESULTS_FETCH_ERROR_BODY)
    }

    pub fn lookup_failed() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, LOOKUP_ERROR_BODY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_serialization() {
        let response = InvocationResponse::ok("The winning number is 704.");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["body"], "The winning number is 704.");
    }

    #[test]
    fn test_error_responses() {
        let fetch = InvocationResponse::fetch_failed();
        assert_eq!(fetch.status_code, 500);

        let lookup = InvocationResponse::lookup_failed();
        assert_eq!(lookup.status_code, 500);
        assert_eq!(lookup.body, "Error accessing lookup store");

        let empty = InvocationResponse::no_results();
        assert_eq!(empty.status_code, 200);
        assert_eq!(empty.body, "No results found");
    }
}

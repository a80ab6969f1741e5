use serde::{Deserialize, Serialize};

/// `{ message, data }` wrapper around every successful response.
///
/// `data` is `None` when the API omits it or sends `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Response to calls that only confirm the action was taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Payload {
        id: String,
    }

    #[test]
    fn test_missing_data_is_none() {
        let response: ApiResponse<Payload> = serde_json::from_str(r#"{"message":"Ok"}"#).unwrap();

        assert_eq!(response.message, "Ok");
        assert_eq!(response.data, None);
    }

    #[test]
    fn test_null_data_is_none() {
        let response: ApiResponse<Payload> =
            serde_json::from_str(r#"{"message":"Ok","data":null}"#).unwrap();

        assert_eq!(response.data, None);
    }

    #[test]
    fn test_absent_data_is_not_serialized() {
        let response: ApiResponse<Payload> = ApiResponse {
            message: "Ok".to_string(),
            data: None,
        };

        assert_eq!(serde_json::to_string(&response).unwrap(), r#"{"message":"Ok"}"#);
    }

    #[test]
    fn test_empty_list_is_kept() {
        let response: ApiResponse<Vec<Payload>> =
            serde_json::from_str(r#"{"message":"Ok","data":[]}"#).unwrap();

        assert_eq!(response.data, Some(vec![]));
    }

    #[test]
    fn test_acknowledgement_ignores_extra_fields() {
        let ack: Acknowledgement =
            serde_json::from_str(r#"{"message":"Ok","data":{"message":"Ok"}}"#).unwrap();

        assert_eq!(ack.message, "Ok");
    }
}

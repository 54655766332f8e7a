// API response utility functions module

use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

/// The uniform `{success, message, data}` response shape.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

/// Build a success envelope response. `data` is always serialized, so a
/// delete can carry an explicit null.
pub fn success_response<T: Serialize>(
    status: StatusCode,
    message: &str,
    data: T,
) -> Response<Full<Bytes>> {
    let body = Envelope {
        success: true,
        message: message.to_string(),
        data,
    };
    json_response(status, &body)
}

/// Build a failure envelope response; failures carry no data field.
pub fn error_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    json_response(status, &error_body(message))
}

/// 500 response carrying a database error's message.
pub fn db_error_response(err: &sqlx::Error) -> Response<Full<Bytes>> {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
}

/// 404 for any route no handler claims.
pub fn route_not_found(path: &str) -> Response<Full<Bytes>> {
    error_response(
        StatusCode::NOT_FOUND,
        &format!("{path} is not a valid route"),
    )
}

/// 400 Bad Request response
pub fn bad_request(message: &str) -> Response<Full<Bytes>> {
    error_response(StatusCode::BAD_REQUEST, message)
}

/// 413 when the declared body size exceeds the configured limit.
pub fn payload_too_large() -> Response<Full<Bytes>> {
    error_response(StatusCode::PAYLOAD_TOO_LARGE, "request body too large")
}

fn error_body(message: &str) -> serde_json::Value {
    serde_json::json!({
        "success": false,
        "message": message,
    })
}

/// Serialize a body and build the JSON response
fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .header("Content-Type", "application/json")
                .body(Full::new(Bytes::from(
                    r#"{"success":false,"message":"Internal server error"}"#,
                )))
                .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Error"))));
        }
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            Response::new(Full::new(Bytes::from("Error")))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};

    #[test]
    fn test_success_envelope_shape() {
        let envelope = Envelope {
            success: true,
            message: "inserted successfully".to_string(),
            data: json!({"id": 1}),
        };
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["success"], json!(true));
        assert_eq!(value["message"], json!("inserted successfully"));
        assert_eq!(value["data"]["id"], json!(1));
    }

    #[test]
    fn test_delete_envelope_keeps_null_data() {
        let envelope = Envelope {
            success: true,
            message: "deleted".to_string(),
            data: Value::Null,
        };
        let value = serde_json::to_value(&envelope).unwrap();
        assert!(value.as_object().unwrap().contains_key("data"));
        assert!(value["data"].is_null());
    }

    #[test]
    fn test_error_body_has_no_data_key() {
        let value = error_body("boom");
        assert_eq!(value["success"], json!(false));
        assert_eq!(value["message"], json!("boom"));
        assert!(value.get("data").is_none());
    }

    #[tokio::test]
    async fn test_route_not_found_response() {
        let resp = route_not_found("/nope");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["success"], json!(false));
        assert_eq!(value["message"], json!("/nope is not a valid route"));
    }

    #[tokio::test]
    async fn test_success_response_status_and_body() {
        let resp = success_response(StatusCode::CREATED, "inserted successfully", json!({"id": 3}));
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["success"], json!(true));
        assert_eq!(value["data"]["id"], json!(3));
    }
}

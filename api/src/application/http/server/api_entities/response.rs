use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use serde::Serialize;

/// Success envelope: every 2xx body is `{"success": true, "data": ...}`.
#[derive(Debug, Serialize)]
pub struct SuccessBody<T> {
    pub success: bool,
    pub data: T,
}

#[derive(Debug)]
pub enum Response<T> {
    OK(T),
    Created(T),
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> AxumResponse {
        let (status, data) = match self {
            Response::OK(data) => (StatusCode::OK, data),
            Response::Created(data) => (StatusCode::CREATED, data),
        };

        (
            status,
            Json(SuccessBody {
                success: true,
                data,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_serializes_with_envelope() {
        let body = SuccessBody {
            success: true,
            data: vec![1, 2, 3],
        };
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["data"][2], 3);
    }
}

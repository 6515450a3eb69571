use actix_web::{
    error,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use prayer_times::PrayerTimesError;
use regions::RegionError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Region(#[from] RegionError),
    #[error(transparent)]
    PrayerTimes(#[from] PrayerTimesError),
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Region(_) | ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::PrayerTimes(PrayerTimesError::InvalidRequest) => StatusCode::BAD_REQUEST,
            ApiError::PrayerTimes(PrayerTimesError::PrayerTimesNotFound) => StatusCode::NOT_FOUND,
            ApiError::PrayerTimes(PrayerTimesError::UpstreamUnreachable(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let err_json = json!({ "error": self.to_string() });
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(err_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, ResponseError};
    use anyhow::anyhow;

    async fn rendered(error: ApiError) -> (StatusCode, serde_json::Value) {
        let response = error.error_response();
        let status = response.status();
        let body = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[actix_web::test]
    async fn test_every_error_kind_has_its_status_and_message() {
        let cases = vec![
            (
                ApiError::from(RegionError::InvalidCountry),
                StatusCode::BAD_REQUEST,
                "Invalid country",
            ),
            (
                ApiError::from(RegionError::InvalidCity),
                StatusCode::BAD_REQUEST,
                "Invalid city",
            ),
            (
                ApiError::from(PrayerTimesError::InvalidRequest),
                StatusCode::BAD_REQUEST,
                "Invalid city name or ID",
            ),
            (
                ApiError::from(PrayerTimesError::PrayerTimesNotFound),
                StatusCode::NOT_FOUND,
                "Prayer times not found.",
            ),
            (
                ApiError::from(PrayerTimesError::UpstreamUnreachable(anyhow!("timed out"))),
                StatusCode::INTERNAL_SERVER_ERROR,
                "Could not reach site: timed out",
            ),
            (
                ApiError::InvalidQuery("missing field `page`".to_owned()),
                StatusCode::BAD_REQUEST,
                "Invalid query: missing field `page`",
            ),
        ];

        for (error, expected_status, expected_message) in cases {
            let (status, body) = rendered(error).await;
            assert_eq!(status, expected_status);
            assert_eq!(body, json!({ "error": expected_message }));
        }
    }
}

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// 201 with a `Location` header and an empty body
#[derive(Debug)]
pub struct Created {
    pub location: String,
}

impl Created {
    pub fn at(location: impl Into<String>) -> Self {
        Self { location: location.into() }
    }
}

impl IntoResponse for Created {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, [(header::LOCATION, self.location)]).into_response()
    }
}

/// 204 with an empty body
pub fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub type ApiResult<T> = Result<T, crate::error::ApiError>;

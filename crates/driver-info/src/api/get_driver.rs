use crate::api::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

pub async fn get_driver_handler(State(state): State<Arc<AppState>>) -> Response {
    get_driver_response(state.driver.driver_name())
}

// No errors are modeled here; once the service is constructed the stored
// name is always available.
pub fn get_driver_response(driver_name: &str) -> Response {
    (StatusCode::OK, driver_name.to_owned()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::response_body;

    #[tokio::test]
    async fn get_driver_response_ok() {
        let response = get_driver_response("PostgreSQL JDBC Driver");
        assert_eq!(response.status(), StatusCode::OK);
        let body = response_body(response).await;
        assert_eq!(body, b"PostgreSQL JDBC Driver");
    }
}

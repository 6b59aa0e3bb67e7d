use crate::driver_identity::DriverIdentity;
use axum::Router;
use futures::Future;
use std::{net::SocketAddr, sync::Arc};
use tokio::sync::oneshot;
use tower_http::trace::TraceLayer;

mod get_driver;

/// Centralized application state shared across all API handlers.
#[derive(Clone)]
pub struct AppState {
    pub driver: Arc<DriverIdentity>,
}

pub fn handle_all_routes(driver: Arc<DriverIdentity>) -> Router {
    let state = Arc::new(AppState { driver });
    Router::new()
        .route("/driver", axum::routing::get(get_driver::get_driver_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub struct Api {
    pub driver: Arc<DriverIdentity>,
    pub addr: SocketAddr,
    /// If this channel is specified, the bound address will be sent to it.
    /// This allows the service to bind to 0.0.0.0:0 during testing.
    pub addr_sender: Option<oneshot::Sender<SocketAddr>>,
}

impl Api {
    pub async fn serve(
        self,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), std::io::Error> {
        let app = handle_all_routes(self.driver);

        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(port = local_addr.port(), "serving driver-info");
        if let Some(addr_sender) = self.addr_sender {
            let _ = addr_sender.send(local_addr);
        }
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
    }
}

#[cfg(test)]
pub async fn response_body(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver_identity::MockMetadataReporting;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    async fn driver(name: &'static str) -> Arc<DriverIdentity> {
        let mut source = MockMetadataReporting::new();
        source
            .expect_driver_name()
            .returning(move || Ok(name.to_string()));
        Arc::new(DriverIdentity::initialize(&source).await.unwrap())
    }

    fn get_driver_request() -> Request<Body> {
        Request::get("/driver").body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn driver_endpoint_replies_with_the_resolved_name() {
        let app = handle_all_routes(driver("H2 JDBC Driver").await);

        let response = app.oneshot(get_driver_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
        let body = response_body(response).await;
        assert_eq!(body, b"H2 JDBC Driver");
    }

    #[tokio::test]
    async fn repeated_reads_return_the_identical_name() {
        let app = handle_all_routes(driver("PostgreSQL JDBC Driver").await);

        for _ in 0..3 {
            let response = app.clone().oneshot(get_driver_request()).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let body = response_body(response).await;
            assert_eq!(body, b"PostgreSQL JDBC Driver");
        }
    }
}

pub mod api;
pub mod arguments;
pub mod database;
pub mod driver_identity;

use crate::{api::Api, database::Postgres, driver_identity::DriverIdentity};
use std::sync::Arc;

pub async fn run(args: arguments::Arguments) {
    let database = Postgres::new(args.db_url.as_str()).expect("failed to create database");

    // Resolving the driver identity is the one piece of startup work. It must
    // complete before the listener binds; on failure the process aborts
    // without ever reaching a serving state.
    let driver = DriverIdentity::initialize(&database)
        .await
        .expect("failed to resolve driver identity from the data source");
    tracing::info!(driver_name = driver.driver_name(), "resolved driver identity");

    let api = Api {
        driver: Arc::new(driver),
        addr: args.bind_address,
        addr_sender: None,
    };
    api.serve(shutdown_signal())
        .await
        .expect("API task exited");
}

#[cfg(unix)]
async fn shutdown_signal() {
    // Intercept main signals for graceful shutdown.
    // Kubernetes sends sigterm, whereas locally sigint (ctrl-c) is most common.
    let sigterm = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .unwrap()
            .recv()
            .await
    };
    let sigint = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())
            .unwrap()
            .recv()
            .await;
    };
    futures::pin_mut!(sigint);
    futures::pin_mut!(sigterm);
    futures::future::select(sigterm, sigint).await;
}

#[cfg(windows)]
async fn shutdown_signal() {
    // We don't support signal handling on windows.
    std::future::pending().await
}

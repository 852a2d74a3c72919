//! Dashboard server implementation.

use crate::error::DashboardError;
use crate::routes;
use crate::state::AppState;
use tokio::net::TcpListener;

/// The dashboard server.
pub struct DashboardServer {
    state: AppState,
}

impl DashboardServer {
    /// Create a new dashboard server with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Address the server binds to.
    pub fn listen_addr(&self) -> String {
        self.state.config().dashboard.listen_addr()
    }

    /// Start the dashboard server and serve until Ctrl-C.
    pub async fn run(&self) -> Result<(), DashboardError> {
        let addr = self.listen_addr();
        tracing::info!(
            address = %addr,
            auth_mode = ?self.state.config().auth.mode,
            "Starting UniManage dashboard"
        );
        unimanage_core::auth::warn_if_demo(&self.state.config().auth);

        let app = routes::create_router(self.state.clone());

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| DashboardError::StartupFailed(e.to_string()))?;

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| DashboardError::StartupFailed(e.to_string()))?;

        tracing::info!("Dashboard stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

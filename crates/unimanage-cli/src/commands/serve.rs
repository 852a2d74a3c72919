//! `unimanage serve`

use unimanage_core::UniManageConfig;
use unimanage_dashboard::{AppState, DashboardServer};

pub async fn run(mut config: UniManageConfig, host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    if let Some(host) = host {
        config.dashboard.host = host;
    }
    if let Some(port) = port {
        config.dashboard.port = port;
    }

    let server = DashboardServer::new(AppState::new(config));
    println!("UniManage dashboard on http://{}", server.listen_addr());
    server.run().await?;
    Ok(())
}

use log::info;
use recordbook_server::{app, config, AppState, Error, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let config = config()?;
    recordbook_core::init_logging(&config.log_level, config.log_dir.as_deref())
        .map_err(Error::Logging)?;

    let routes_all = app(AppState::new());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(
        "event=server_listen module=server status=ok addr={} version={}",
        config.bind_addr,
        recordbook_core::core_version()
    );

    axum::serve(listener, routes_all).await?;
    Ok(())
}

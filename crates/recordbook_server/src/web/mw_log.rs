use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use log::{info, warn};
use std::time::Instant;

pub async fn mw_log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started_at = Instant::now();

    let res = next.run(req).await;

    let status = res.status();
    let duration_ms = started_at.elapsed().as_millis();
    if status.is_server_error() {
        warn!(
            "event=http_request module=web status={} method={method} path={path} duration_ms={duration_ms}",
            status.as_u16()
        );
    } else {
        info!(
            "event=http_request module=web status={} method={method} path={path} duration_ms={duration_ms}",
            status.as_u16()
        );
    }
    res
}

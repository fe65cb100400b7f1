use std::path::PathBuf;

use activity_signup::database::ActivityCatalog;
use activity_signup::models::Activity;
use activity_signup::web::app::build_router;
use tokio::net::TcpListener;

pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

pub fn chess_club(max_participants: usize) -> ActivityCatalog {
    ActivityCatalog::new([Activity::new(
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        max_participants,
    )])
}

/// Serves the router on an ephemeral port and returns its base URL.
pub async fn spawn_app(catalog: ActivityCatalog) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = build_router(catalog, static_dir());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

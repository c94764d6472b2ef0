use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::info;

use crate::config::Config;
use crate::http;
use crate::state::AppState;

/// HTTP server
pub struct Server {
    listener: TcpListener,
    local_addr: SocketAddr,
    state: AppState,
    static_dir: PathBuf,
}

impl Server {
    /// Create and bind the server: load the workbook into the application
    /// state, then bind the configured address.
    pub async fn start(config: &Config) -> std::io::Result<Self> {
        let state = AppState::initialize(Path::new(&config.data_file));

        let listener = TcpListener::bind(&config.server_addr).await?;
        let local_addr = listener.local_addr()?;
        info!("HTTP server bound to {}", local_addr);

        Ok(Self {
            listener,
            local_addr,
            state,
            static_dir: PathBuf::from(&config.static_dir),
        })
    }

    /// Get local listening address
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve requests until the process is stopped
    pub async fn run(self) -> std::io::Result<()> {
        let app = build_router(self.state, &self.static_dir);
        info!("Server started, listening on {}", self.local_addr);
        axum::serve(self.listener, app).await
    }
}

/// Build the application router: the four todo routes, the static browser
/// client as the fallback (which also serves `index.html` for `GET /`),
/// and permissive CORS.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/GET_ALL_TODOS", post(http::list_todos))
        .route("/ADD_TODO", post(http::add_todo))
        .route("/UPDATE_TODO_BY_ID/{name}", post(http::update_todo))
        .route("/DELETE_TODO_BY_ID/{name}", post(http::delete_todo))
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

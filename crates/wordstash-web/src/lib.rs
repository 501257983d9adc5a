//! HTTP view of the word database.
//!
//! This crate exposes the word summary as a small web application: the full
//! table at `/`, a per-word redirect to an online dictionary, and a health
//! endpoint. Requests only ever read the store; all writes stay on the CLI
//! side. The server is built around a cancellable serve loop so callers
//! (and tests) can shut it down deterministically instead of killing the
//! process.

pub mod error;
pub mod pages;

pub use error::{Result, ServerError};

use axum::extract::{Path, Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use wordstash_core::{summary_rows, WordStore};

/// Base URL of the online dictionary a word redirects to.
pub const DICTIONARY_BASE_URL: &str =
    "https://dictionary.cambridge.org/dictionary/english-chinese-simplified/";

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
}

/// Configuration for the word web server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind address
    pub bind_addr: SocketAddr,
    /// Enable CORS
    pub enable_cors: bool,
    /// Enable request logging
    pub enable_logging: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            enable_cors: true,
            enable_logging: true,
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bind address.
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Bind to the loopback interface on the given port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.bind_addr = SocketAddr::from(([127, 0, 0, 1], port));
        self
    }

    /// Enable or disable CORS.
    pub fn with_cors(mut self, enable: bool) -> Self {
        self.enable_cors = enable;
        self
    }

    /// Enable or disable request logging.
    pub fn with_logging(mut self, enable: bool) -> Self {
        self.enable_logging = enable;
        self
    }
}

/// Shared application state holding the store handle.
#[derive(Clone)]
struct AppState {
    store: Arc<Mutex<WordStore>>,
}

/// Handler for the `/` page: the full word table.
async fn words_page_handler(State(state): State<AppState>) -> Response {
    let store = state.store.lock().await;
    match store.list_words() {
        Ok(records) => Html(pages::render_words_page(&summary_rows(&records))).into_response(),
        Err(e) => {
            log::error!("Failed to render words page: {}", e);
            ServerError::from(e).into_response()
        }
    }
}

/// Handler for `/word/{word}`: redirect to the online dictionary.
async fn word_redirect_handler(Path(word): Path<String>) -> Response {
    let word = word.trim_matches('/');
    if word.is_empty() {
        return (StatusCode::NOT_FOUND, "word not found").into_response();
    }
    let target = format!("{}{}", DICTIONARY_BASE_URL, urlencoding::encode(word));
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, target)]).into_response()
}

/// Handler for `/word/` with no word in the path.
async fn missing_word_handler() -> Response {
    (StatusCode::NOT_FOUND, "word not found").into_response()
}

/// Handler for the `/health` endpoint.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Request logging middleware tagging each request with an id.
async fn log_requests(request: Request, next: Next) -> Response {
    let request_id = uuid::Uuid::new_v4().to_string();
    let method = request.method().clone();
    let uri = request.uri().clone();
    log::info!("Request {} {} {}", request_id, method, uri);

    let start = std::time::Instant::now();
    let response = next.run(request).await;
    let duration = start.elapsed();

    log::info!(
        "Response {} {} completed in {:?}",
        request_id,
        response.status(),
        duration
    );
    response
}

/// The word web server.
pub struct WordsServer {
    store: Arc<Mutex<WordStore>>,
    config: ServerConfig,
}

impl WordsServer {
    /// Create a new server with the given store and default configuration.
    pub fn new(store: WordStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            config: ServerConfig::default(),
        }
    }

    /// Create a new server with custom configuration.
    pub fn with_config(store: WordStore, config: ServerConfig) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            config,
        }
    }

    /// Get the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the Axum router with all routes and middleware.
    pub fn build_router(&self) -> Router {
        let state = AppState {
            store: self.store.clone(),
        };

        let mut router = Router::new()
            .route("/", get(words_page_handler))
            .route("/health", get(health_handler))
            .route("/word/", get(missing_word_handler))
            .route("/word/{*word}", get(word_redirect_handler))
            .with_state(state);

        if self.config.enable_logging {
            router = router.layer(middleware::from_fn(log_requests));
        }

        router = router.layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            router = router.layer(CorsLayer::permissive());
        }

        router
    }

    /// Start the server and listen for connections.
    ///
    /// This method will block until the server is shut down.
    pub async fn serve(self) -> Result<()> {
        self.serve_with_shutdown(std::future::pending()).await
    }

    /// Start the server with graceful shutdown support.
    ///
    /// The server will shut down when the provided shutdown signal resolves.
    pub async fn serve_with_shutdown<F>(self, shutdown_signal: F) -> Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();
        let listener = TcpListener::bind(self.config.bind_addr)
            .await
            .map_err(|e| {
                ServerError::config_error(format!(
                    "Failed to bind to {}: {}",
                    self.config.bind_addr, e
                ))
            })?;

        log::info!("Word server starting at http://{}", self.config.bind_addr);
        log::info!("Words page: http://{}/", self.config.bind_addr);
        log::info!("Health check: http://{}/health", self.config.bind_addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(|e| ServerError::internal(format!("Server error: {}", e)))?;

        log::info!("Word server shut down");
        Ok(())
    }
}

/// Utility function to create a shutdown signal from Ctrl+C.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            log::info!("Received Ctrl+C, shutting down...");
        },
        _ = terminate => {
            log::info!("Received SIGTERM, shutting down...");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tempfile::TempDir;
    use tower::ServiceExt; // for `oneshot`

    fn test_router(dir: &TempDir) -> Router {
        let store = WordStore::open(&dir.path().join("words.sqlite")).unwrap();
        store.init_schema().unwrap();
        store.add_word("cat").unwrap();
        store.add_word("elephant").unwrap();
        WordsServer::new(store).build_router()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_words_page_lists_all_words() {
        let dir = TempDir::new().unwrap();
        let app = test_router(&dir);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("<a href=\"/word/cat\">cat</a>"));
        assert!(body.contains("elephant"));
    }

    #[tokio::test]
    async fn test_word_redirects_to_dictionary() {
        let dir = TempDir::new().unwrap();
        let app = test_router(&dir);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/word/cat")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        let location = response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(location.contains("cat"));
        assert!(location.starts_with(DICTIONARY_BASE_URL));
    }

    #[tokio::test]
    async fn test_trailing_slash_still_redirects() {
        let dir = TempDir::new().unwrap();
        let app = test_router(&dir);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/word/cat/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    }

    #[tokio::test]
    async fn test_empty_word_is_not_found() {
        let dir = TempDir::new().unwrap();
        let app = test_router(&dir);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/word/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let dir = TempDir::new().unwrap();
        let app = test_router(&dir);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value =
            serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_serve_stops_on_shutdown_signal() {
        let dir = TempDir::new().unwrap();
        let store = WordStore::open(&dir.path().join("words.sqlite")).unwrap();
        store.init_schema().unwrap();

        // Port 0 lets the OS pick a free port; the loop must end once the
        // shutdown future resolves.
        let config = ServerConfig::new()
            .with_port(0)
            .with_logging(false);
        let server = WordsServer::with_config(store, config);

        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let handle = tokio::spawn(server.serve_with_shutdown(async {
            let _ = rx.await;
        }));

        tx.send(()).unwrap();
        let result = tokio::time::timeout(std::time::Duration::from_secs(5), handle)
            .await
            .expect("server did not shut down")
            .unwrap();
        assert!(result.is_ok());
    }
}

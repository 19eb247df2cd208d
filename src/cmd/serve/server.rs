// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::http::header::CACHE_CONTROL;
use axum::http::header::CONTENT_TYPE;
use axum::response::Html;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::net::TcpStream;
use tokio::signal::ctrl_c;
use tokio::time::sleep;

use crate::cmd::serve::get::get_handler;
use crate::cmd::serve::state::ServerState;
use crate::error::Fallible;
use crate::repository::Library;
use crate::sheet::template::SCRIPT;
use crate::sheet::template::STYLESHEET;

pub async fn start_server(
    directory: PathBuf,
    port: Option<u16>,
    open_browser: bool,
) -> Fallible<()> {
    let library = Library::open(&directory)?;
    let themes = library.load_themes()?;
    log::debug!(
        "Serving {} themes from {}",
        themes.len(),
        library.directory().display()
    );
    let port = port.unwrap_or(library.config().server.port);

    let state = ServerState {
        library: Arc::new(library),
    };
    let app = router(state);
    let bind = SocketAddr::from(([127, 0, 0, 1], port));

    if open_browser {
        // Open the browser once the server accepts connections.
        let url = format!("http://{bind}/");
        tokio::spawn(async move {
            loop {
                if let Ok(stream) = TcpStream::connect(bind).await {
                    drop(stream);
                    break;
                }
                sleep(Duration::from_millis(1)).await;
            }
            let _ = open::that(url);
        });
    }

    log::debug!("Starting server on {bind}");
    println!("Serving charade cards on http://{bind}/");
    let listener = TcpListener::bind(bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

pub fn router(state: ServerState) -> Router {
    let app = Router::new();
    let app = app.route("/", get(get_handler));
    let app = app.route("/script.js", get(script));
    let app = app.route("/style.css", get(stylesheet));
    let app = app.fallback(not_found_handler);
    app.with_state(state)
}

async fn shutdown_signal() {
    if ctrl_c().await.is_ok() {
        log::debug!("Shutting down.");
    }
}

async fn script() -> (StatusCode, [(HeaderName, &'static str); 1], &'static str) {
    (StatusCode::OK, [(CONTENT_TYPE, "text/javascript")], SCRIPT)
}

async fn stylesheet() -> (StatusCode, [(HeaderName, &'static str); 2], &'static str) {
    (
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/css"),
            (CACHE_CONTROL, "public, max-age=604800, immutable"),
        ],
        STYLESHEET,
    )
}

async fn not_found_handler() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html("Not Found".to_string()))
}

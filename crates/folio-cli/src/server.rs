use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::{Path as UrlPath, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use colored::Colorize;
use folio::render;
use folio::{Config, PageAssembler, PageVariant, Route, SiteConfig, SiteContent};
use tower_http::services::ServeDir;
use tracing::{info, warn};

/// Application state shared across handlers
#[derive(Clone)]
struct AppState {
    site: Arc<SiteConfig>,
    content: Arc<SiteContent>,
}

/// Start the server
pub async fn start_server(config: Config, content: SiteContent, port: u16) -> Result<()> {
    let pkg_dir = Path::new(&config.server.pkg_dir).to_path_buf();
    if !pkg_dir.exists() {
        warn!(
            pkg_dir = %pkg_dir.display(),
            "wasm bundle not found; build it with `wasm-pack build crates/folio-wasm --target web`"
        );
    }

    let app = router(
        AppState {
            site: Arc::new(config.site),
            content: Arc::new(content),
        },
        &pkg_dir,
    );

    let addr = format!("{}:{}", config.server.host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    println!();
    println!("{}", "✅ Server ready!".green().bold());
    println!();
    println!("  {} {}", "App:".cyan(), format!("http://{}/", addr).bold());
    println!("  {} http://{}/render/home", "Static:".cyan(), addr);
    println!("  {} Press Ctrl+C to stop", "ℹ".cyan());
    println!();

    info!(%addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: AppState, pkg_dir: &Path) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/render/*path", get(render_handler))
        .route("/api/page/*path", get(page_json_handler))
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .with_state(state)
}

/// Shell page; the wasm app takes over routing from here
async fn index_handler(State(state): State<AppState>) -> Html<String> {
    Html(render::shell(&state.site, "/pkg").into_string())
}

/// Server-rendered document for `/{path}`
async fn render_handler(State(state): State<AppState>, UrlPath(path): UrlPath<String>) -> Response {
    let route = Route::parse(&path);
    let page = PageAssembler::new(state.content.as_ref()).assemble(&route);
    let html = render::document(&state.site, &page).into_string();

    (status_for(page.variant), Html(html)).into_response()
}

async fn page_json_handler(State(state): State<AppState>, UrlPath(path): UrlPath<String>) -> Response {
    let route = Route::parse(&path);
    let page = PageAssembler::new(state.content.as_ref()).assemble(&route);

    (status_for(page.variant), Json(&page)).into_response()
}

fn status_for(variant: PageVariant) -> StatusCode {
    match variant {
        PageVariant::NotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::OK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn test_app() -> Router {
        router(
            AppState {
                site: Arc::new(SiteConfig::default()),
                content: Arc::new(SiteContent::builtin()),
            },
            Path::new("does/not/exist"),
        )
    }

    async fn fetch(uri: &str) -> (StatusCode, String) {
        let response = test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_index_serves_shell() {
        let (status, body) = fetch("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("/pkg/folio_wasm.js"));
    }

    #[tokio::test]
    async fn test_render_case_study() {
        let (status, body) = fetch("/render/projects/project-b").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Bronco Overland Adventures"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404_with_fallback() {
        let (status, body) = fetch("/render/projects/unknown").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found"));
    }

    #[tokio::test]
    async fn test_page_json() {
        let (status, body) = fetch("/api/page/projects/project-a").await;
        assert_eq!(status, StatusCode::OK);

        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["variant"], "case-study-a");
        assert_eq!(value["tree"]["page"], "case-study");
    }
}

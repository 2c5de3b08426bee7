//! Portfolio HTTP server
//!
//! Stateless per-request rendering: every handler re-reads the index and
//! post files, so content edits show up on the next refresh without any
//! cache invalidation. Requests share nothing mutable.

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::generator::Generator;
use crate::mail::{self, ContactMessage, LogRelay, MailRelay, RelayError};
use crate::templates::{APP_JS, STYLE_CSS};
use crate::Site;

/// Shared server state
struct ServerState {
    site: Site,
    generator: Generator,
    relay: Box<dyn MailRelay>,
}

/// Start the portfolio server
pub async fn start(site: &Site, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(ServerState {
        site: site.clone(),
        generator: Generator::new(site)?,
        relay: Box::new(LogRelay),
    });

    let app = Router::new()
        .route("/", get(home))
        .route("/blog", get(blog_index))
        .route("/blog/", get(blog_index))
        .route("/blog/:slug", get(blog_post))
        .route("/blog/:slug/", get(blog_post))
        .route("/contact", post(contact))
        .route("/css/style.css", get(stylesheet))
        .route("/js/app.js", get(script))
        .nest_service("/assets", ServeDir::new(&site.assets_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Render result to a response; template failures become a plain 500
fn page(result: Result<String>) -> Response {
    match result {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Render failed: {:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
    }
}

async fn home(State(state): State<Arc<ServerState>>) -> Response {
    page(state.generator.render_home())
}

async fn blog_index(State(state): State<Arc<ServerState>>) -> Response {
    page(state.generator.render_blog_index())
}

/// Unknown slugs get the not-found page with a success status
async fn blog_post(State(state): State<Arc<ServerState>>, Path(slug): Path<String>) -> Response {
    match state.generator.render_post(&slug) {
        Ok(Some(html)) => Html(html).into_response(),
        Ok(None) => page(state.generator.render_not_found()),
        Err(e) => page(Err(e)),
    }
}

/// Contact endpoint: validate, compose, hand off to the relay, answer
/// with the fragment htmx swaps into the form region
async fn contact(
    State(state): State<Arc<ServerState>>,
    Form(message): Form<ContactMessage>,
) -> Response {
    let outcome = mail::relay_submission(
        &state.site.config.contact,
        state.relay.as_ref(),
        &message,
    );

    let fragment = match outcome {
        Ok(()) => state.generator.render_contact_result(true, ""),
        Err(e @ RelayError::Invalid(_)) => {
            state.generator.render_contact_result(false, &e.to_string())
        }
        Err(RelayError::NotConfigured) => {
            tracing::warn!("Contact submission received but no relay recipient is configured");
            state.generator.render_contact_result(
                false,
                "The contact form is not set up yet. Please email me directly.",
            )
        }
        Err(e) => {
            tracing::error!("Contact relay failed: {}", e);
            state.generator.render_contact_result(
                false,
                "Something went wrong sending your message. Please try again later.",
            )
        }
    };

    page(fragment)
}

async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLE_CSS,
    )
}

async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        APP_JS,
    )
}

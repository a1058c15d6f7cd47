use axum::{
    Form, Router,
    extract::{Path, Query, Request, State},
    http::{StatusCode, Uri},
    middleware::Next,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use leptos::prelude::*;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::AppState;
use crate::backend::HttpBackend;
use crate::config::AppConfig;
use crate::page::{ChatPage, CollectedDialogs, ListingPage, SendOutcome};
use crate::route::PageRoute;
use crate::ui::app::{NotFoundPage, html_shell};
use crate::view::InputEvent;

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let backend = HttpBackend::new(
        &config.backend.base_url,
        config.backend.timeout_secs.map(Duration::from_secs),
    )?;

    info!(
        name: "backend.config.loaded",
        base_url = %backend.base_url(),
        timeout_secs = ?config.backend.timeout_secs,
        "Backend configuration loaded"
    );

    let state = AppState {
        backend: Arc::new(backend),
        ui: Arc::new(config.ui.clone()),
        config: Arc::clone(&config),
    };
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Build the application router.
///
/// Pages are resolved by [`PageRoute`] in the fallback handler; HTMX
/// fragments live under `/ui/npc/{id}`.
pub fn build_router(state: AppState) -> Router {
    let timeout_duration = Duration::from_secs(state.config.server.request_timeout_secs);
    let static_dir = state.config.server.static_dir.clone();

    Router::new()
        .route("/healthz", get(healthz))
        .route("/ui/npc/{id}/messages", post(send_message))
        .route(
            "/ui/npc/{id}/memories",
            get(show_memories).delete(clear_memories),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(page_handler)
        .layer(axum::middleware::from_fn(
            move |req: Request, next: Next| {
                let duration = timeout_duration;
                async move {
                    match tokio::time::timeout(duration, next.run(req)).await {
                        Ok(res) => res,
                        Err(_) => {
                            (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response()
                        }
                    }
                }
            },
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

// ─────────────────────────────────────────────────────────────────────────────
// Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Full-page render for `/` and `/npc/{id}`; everything else is a 404.
async fn page_handler(State(state): State<AppState>, uri: Uri) -> Response {
    match PageRoute::parse(uri.path()) {
        Ok(PageRoute::Listing) => {
            let mut page = ListingPage::new(Arc::clone(&state.backend), Arc::clone(&state.ui));
            page.load_characters().await;
            Html(page.render_document()).into_response()
        }
        Ok(PageRoute::Chat { id }) => {
            let mut page = chat_page(&state, id);
            page.load_character_info().await;
            Html(page.render_document()).into_response()
        }
        Err(e) => {
            debug!(name: "page.not_found", error = %e);
            let text = &state.ui.text;
            let content = view! {
                <NotFoundPage message=text.not_found.clone() back_label=text.back_to_list.clone() />
            }
            .to_html();
            (
                StatusCode::NOT_FOUND,
                Html(html_shell(&text.site_title, &text.not_found, &content)),
            )
                .into_response()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// HTMX Fragment Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Form body of the chat input.
#[derive(Debug, Deserialize)]
struct MessageForm {
    #[serde(default)]
    message: String,
}

/// POST /ui/npc/{id}/messages - Returns the reply bubble to append.
///
/// The browser has already shown the user bubble, so only what follows it
/// is sent back. A reply that misses the deadline becomes the fallback
/// bubble before the request timeout can turn it into an error status.
async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<MessageForm>,
) -> Response {
    let mut page = chat_page(&state, id).with_reply_timeout(state.config.server.reply_timeout());
    page.input_mut().set(form.message);

    match page.handle_input(InputEvent::SendClicked).await {
        SendOutcome::Ignored => StatusCode::NO_CONTENT.into_response(),
        SendOutcome::Sent => Html(page.transcript().render_from(1)).into_response(),
    }
}

/// Query of the memories fragment.
#[derive(Debug, Deserialize)]
struct MemoriesQuery {
    /// Display name already shown on the page.
    name: Option<String>,
}

/// GET /ui/npc/{id}/memories - Returns the open modal, or the closed modal
/// plus an alert.
async fn show_memories(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<MemoriesQuery>,
) -> Response {
    let mut page = chat_page(&state, id).with_name_hint(query.name);
    let mut dialogs = CollectedDialogs::confirmed();

    page.show_memories(&mut dialogs).await;

    Html(format!("{}{}", page.render_modal(), dialogs.render_oob())).into_response()
}

/// DELETE /ui/npc/{id}/memories - Confirmed in the browser via `hx-confirm`.
async fn clear_memories(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let mut page = chat_page(&state, id);
    let mut dialogs = CollectedDialogs::confirmed();

    page.clear_memories(&mut dialogs).await;

    Html(dialogs.render_oob()).into_response()
}

fn chat_page(state: &AppState, id: String) -> ChatPage {
    ChatPage::new(
        Arc::clone(&state.backend),
        Arc::clone(&state.ui),
        id,
    )
}

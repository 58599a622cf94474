use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::directory::{faq_entries, form_downloads, guide_links, office_locations, page_shell};

/// Router for the static resource directories. These endpoints are fully
/// in-process; the mock latency lives only in front of the catalogs the
/// intake flow awaits.
pub fn resources_router() -> Router {
    Router::new()
        .route("/api/v1/resources/faq", get(faq_handler))
        .route("/api/v1/resources/guides", get(guides_handler))
        .route("/api/v1/resources/forms", get(forms_handler))
        .route("/api/v1/resources/locations", get(locations_handler))
        .route("/api/v1/pages/:slug", get(page_handler))
        .route("/forms/:file", get(form_file_handler))
}

/// Search/category narrowing mirroring the guide grid's client-side filter.
#[derive(Debug, Default, Deserialize)]
pub struct DirectoryQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl DirectoryQuery {
    fn matches(&self, category: &str, haystacks: &[&str]) -> bool {
        if let Some(wanted) = self.category.as_deref() {
            if !wanted.eq_ignore_ascii_case("all") && !wanted.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        match self.q.as_deref().map(str::to_lowercase) {
            Some(needle) if !needle.is_empty() => haystacks
                .iter()
                .any(|text| text.to_lowercase().contains(&needle)),
            _ => true,
        }
    }
}

async fn faq_handler(Query(query): Query<DirectoryQuery>) -> Response {
    let entries: Vec<_> = faq_entries()
        .into_iter()
        .filter(|entry| query.matches(entry.category, &[entry.question, entry.answer]))
        .collect();
    (StatusCode::OK, Json(entries)).into_response()
}

async fn guides_handler(Query(query): Query<DirectoryQuery>) -> Response {
    let guides: Vec<_> = guide_links()
        .into_iter()
        .filter(|guide| query.matches(guide.category, &[guide.title, guide.description]))
        .collect();
    (StatusCode::OK, Json(guides)).into_response()
}

async fn forms_handler(Query(query): Query<DirectoryQuery>) -> Response {
    let forms: Vec<_> = form_downloads()
        .into_iter()
        .filter(|form| query.matches(form.category, &[form.title, form.description]))
        .collect();
    (StatusCode::OK, Json(forms)).into_response()
}

async fn locations_handler() -> Response {
    (StatusCode::OK, Json(office_locations())).into_response()
}

/// Serve one of the listed downloadable forms as a placeholder body with the
/// content type its extension implies. Files outside the directory 404; this
/// never touches the filesystem.
async fn form_file_handler(Path(file): Path<String>) -> Response {
    let url = format!("/forms/{file}");
    let Some(form) = form_downloads().into_iter().find(|entry| entry.file_url == url) else {
        let payload = json!({ "error": format!("no downloadable form at '{url}'") });
        return (StatusCode::NOT_FOUND, Json(payload)).into_response();
    };

    let content_type = mime_guess::from_path(&file).first_or_octet_stream();
    let body = format!("{} (placeholder download)\n", form.title);
    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, content_type.to_string())],
        body,
    )
        .into_response()
}

async fn page_handler(Path(slug): Path<String>) -> Response {
    match page_shell(&slug) {
        Some(shell) => (StatusCode::OK, Json(shell)).into_response(),
        None => {
            let payload = json!({ "error": format!("no page shell for '{slug}'") });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

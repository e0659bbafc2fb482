//! HTML page views and embedded static assets.
//!
//! Pages carry no computed content: the simulation page fetches its data
//! from `/api/calculate` in the browser.

use axum::Json;
use axum::extract::Path;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use rust_embed::RustEmbed;
use thiserror::Error;
use tracing::error;

use super::types::ErrorResponse;

#[derive(RustEmbed)]
#[folder = "templates/"]
struct Templates;

#[derive(RustEmbed)]
#[folder = "static/"]
struct StaticAssets;

const LAYOUT: &str = "layout.html";

/// The page views served by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Simulation,
    Exposure,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Simulation, Page::Exposure];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Simulation => "/simulation",
            Page::Exposure => "/exposure",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Simulation => "Simulation",
            Page::Exposure => "Exposure",
        }
    }

    fn template(self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::Simulation => "simulation.html",
            Page::Exposure => "exposure.html",
        }
    }
}

/// A template could not be loaded.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("template \"{0}\" is not embedded")]
    Missing(&'static str),
    #[error("template \"{0}\" is not valid UTF-8")]
    Encoding(&'static str),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        error!(error = %self, "failed to render page");
        (StatusCode::INTERNAL_SERVER_ERROR, Html("<h1>500</h1>")).into_response()
    }
}

fn load_template(name: &'static str) -> Result<String, PageError> {
    let file = Templates::get(name).ok_or(PageError::Missing(name))?;
    String::from_utf8(file.data.into_owned()).map_err(|_| PageError::Encoding(name))
}

fn nav(active: Page) -> String {
    Page::ALL
        .iter()
        .map(|&page| {
            let class = if page == active { " class=\"active\"" } else { "" };
            format!(
                "<a href=\"{}\"{class}>{}</a>",
                page.path(),
                page.title()
            )
        })
        .collect::<Vec<_>>()
        .join("\n      ")
}

/// Renders `page` inside the shared layout.
///
/// # Errors
///
/// Returns a `PageError` if the layout or page template is unavailable.
pub fn render(page: Page) -> Result<String, PageError> {
    let layout = load_template(LAYOUT)?;
    let content = load_template(page.template())?;

    Ok(layout
        .replace("{{ title }}", page.title())
        .replace("{{ nav }}", &nav(page))
        .replace("{{ content }}", &content))
}

/// `GET /` → landing page
pub async fn home() -> Result<Html<String>, PageError> {
    render(Page::Home).map(Html)
}

/// `GET /simulation` → simulation page (data loaded client-side)
pub async fn simulation() -> Result<Html<String>, PageError> {
    render(Page::Simulation).map(Html)
}

/// `GET /exposure` → informational page
pub async fn exposure() -> Result<Html<String>, PageError> {
    render(Page::Exposure).map(Html)
}

/// `GET /static/{*path}` → embedded asset, or 404 + `ErrorResponse`
pub async fn static_asset(Path(path): Path<String>) -> Response {
    match StaticAssets::get(&path) {
        Some(file) => {
            let mime = file.metadata.mimetype().to_string();
            ([(header::CONTENT_TYPE, mime)], file.data).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("no asset at /static/{path}"),
                fields: Vec::new(),
            }),
        )
            .into_response(),
    }
}

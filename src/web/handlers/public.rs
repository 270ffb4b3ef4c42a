use crate::services::{categories, search, topics};
use crate::web::error::AppResult;
use crate::web::state::AppState;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use serde::Deserialize;
use std::sync::Arc;
use tera::Context;

pub fn make_context(state: &AppState) -> Context {
    let mut ctx = Context::new();
    ctx.insert("site", &state.config.site);
    ctx
}

pub fn render_not_found(state: &AppState) -> AppResult<Response> {
    let ctx = make_context(state);
    let html = state.templates.render("public/404.html", &ctx)?;
    Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
}

pub async fn index(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let categories = categories::list_categories_with_counts(&state.db)?;
    let featured = topics::featured_topics(&state.db, state.config.content.featured_limit)?;

    let mut ctx = make_context(&state);
    ctx.insert("categories", &categories);
    ctx.insert("featured_topics", &featured);

    let html = state.templates.render("public/index.html", &ctx)?;
    Ok(Html(html))
}

pub async fn about(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let ctx = make_context(&state);
    let html = state.templates.render("public/about.html", &ctx)?;
    Ok(Html(html))
}

pub async fn contact_form(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let ctx = make_context(&state);
    let html = state.templates.render("public/contact.html", &ctx)?;
    Ok(Html(html))
}

#[derive(Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub message: String,
}

pub async fn contact_submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ContactForm>,
) -> AppResult<Html<String>> {
    tracing::info!(name = %form.name, email = %form.email, "Contact form submission");

    let mut ctx = make_context(&state);
    ctx.insert("submitted", &true);
    let html = state.templates.render("public/contact.html", &ctx)?;
    Ok(Html(html))
}

#[derive(Deserialize)]
pub struct SearchQuery {
    q: Option<String>,
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Html<String>> {
    let q = query.q.unwrap_or_default();
    let results = if q.trim().is_empty() {
        vec![]
    } else {
        search::search_topics(&state.db, &q, 50)?
    };

    let mut ctx = make_context(&state);
    ctx.insert("query", &q);
    ctx.insert("results", &results);

    let html = state.templates.render("public/search.html", &ctx)?;
    Ok(Html(html))
}

pub async fn bundle_css(State(state): State<Arc<AppState>>) -> AppResult<Response> {
    let css = state.templates.render("css/bundle.css", &Context::new())?;
    Ok(([(header::CONTENT_TYPE, "text/css; charset=utf-8")], css).into_response())
}

pub async fn main_js(State(state): State<Arc<AppState>>) -> AppResult<Response> {
    let js = state.templates.render("js/main.js", &Context::new())?;
    Ok((
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        js,
    )
        .into_response())
}

pub async fn not_found(State(state): State<Arc<AppState>>) -> AppResult<Response> {
    render_not_found(&state)
}

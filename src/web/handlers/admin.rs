use crate::models::{CreateCategory, CreateTopic, Difficulty};
use crate::services::{categories, examples, formulas, topics};
use crate::web::error::AppResult;
use crate::web::handlers::public::render_not_found;
use crate::web::state::AppState;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use std::sync::Arc;
use tera::Context;

fn make_admin_context(state: &AppState) -> Context {
    let mut ctx = Context::new();
    ctx.insert("site", &state.config.site);
    ctx.insert("version", env!("CARGO_PKG_VERSION"));
    ctx
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

pub async fn dashboard(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let total_topics = topics::count_topics(&state.db)?;
    let total_categories = categories::count_categories(&state.db)?;
    let total_formulas = formulas::count_formulas(&state.db)?;
    let total_examples = examples::count_examples(&state.db)?;

    let mut ctx = make_admin_context(&state);
    ctx.insert("total_topics", &total_topics);
    ctx.insert("total_categories", &total_categories);
    ctx.insert("total_formulas", &total_formulas);
    ctx.insert("total_examples", &total_examples);

    let html = state.templates.render("admin/dashboard.html", &ctx)?;
    Ok(Html(html))
}

// --- Categories ---

pub async fn manage_categories(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let categories = categories::list_categories_with_counts(&state.db)?;

    let mut ctx = make_admin_context(&state);
    ctx.insert("categories", &categories);

    let html = state.templates.render("admin/categories.html", &ctx)?;
    Ok(Html(html))
}

#[derive(Deserialize)]
pub struct CategoryForm {
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

impl From<CategoryForm> for CreateCategory {
    fn from(form: CategoryForm) -> Self {
        CreateCategory {
            name: form.name,
            slug: non_empty(form.slug),
            description: non_empty(form.description),
            icon: non_empty(form.icon),
        }
    }
}

pub async fn new_category(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let ctx = make_admin_context(&state);
    let html = state.templates.render("admin/category_form.html", &ctx)?;
    Ok(Html(html))
}

pub async fn create_category(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CategoryForm>,
) -> AppResult<Redirect> {
    categories::create_category(&state.db, form.into())?;
    Ok(Redirect::to("/admin/categories"))
}

pub async fn edit_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    let category = match categories::get_category_by_id(&state.db, id)? {
        Some(c) => c,
        None => return render_not_found(&state),
    };

    let mut ctx = make_admin_context(&state);
    ctx.insert("category", &category);

    let html = state.templates.render("admin/category_form.html", &ctx)?;
    Ok(Html(html).into_response())
}

pub async fn update_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Form(form): Form<CategoryForm>,
) -> AppResult<Redirect> {
    categories::update_category(&state.db, id, form.into())?;
    Ok(Redirect::to("/admin/categories"))
}

pub async fn delete_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<Redirect> {
    categories::delete_category(&state.db, id)?;
    Ok(Redirect::to("/admin/categories"))
}

// --- Topics ---

pub async fn manage_topics(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let topics = topics::list_topics(&state.db, 100, 0)?;

    let mut ctx = make_admin_context(&state);
    ctx.insert("topics", &topics);

    let html = state.templates.render("admin/topics.html", &ctx)?;
    Ok(Html(html))
}

#[derive(Deserialize)]
pub struct TopicForm {
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    pub category_id: i64,
    #[serde(default)]
    pub difficulty: String,
}

impl From<TopicForm> for CreateTopic {
    fn from(form: TopicForm) -> Self {
        CreateTopic {
            title: form.title,
            slug: non_empty(form.slug),
            description: non_empty(form.description),
            content: form.content,
            category_id: form.category_id,
            difficulty: form.difficulty.parse().unwrap_or(Difficulty::Beginner),
        }
    }
}

pub async fn new_topic(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let categories = categories::list_categories(&state.db)?;

    let mut ctx = make_admin_context(&state);
    ctx.insert("categories", &categories);

    let html = state.templates.render("admin/topic_form.html", &ctx)?;
    Ok(Html(html))
}

pub async fn create_topic(
    State(state): State<Arc<AppState>>,
    Form(form): Form<TopicForm>,
) -> AppResult<Redirect> {
    topics::create_topic(&state.db, form.into())?;
    Ok(Redirect::to("/admin/topics"))
}

pub async fn edit_topic(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    let topic = match topics::get_topic_by_id(&state.db, id)? {
        Some(t) => t,
        None => return render_not_found(&state),
    };
    let categories = categories::list_categories(&state.db)?;

    let mut ctx = make_admin_context(&state);
    ctx.insert("topic", &topic);
    ctx.insert("categories", &categories);

    let html = state.templates.render("admin/topic_form.html", &ctx)?;
    Ok(Html(html).into_response())
}

pub async fn update_topic(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Form(form): Form<TopicForm>,
) -> AppResult<Redirect> {
    topics::update_topic(&state.db, id, form.into())?;
    Ok(Redirect::to("/admin/topics"))
}

pub async fn delete_topic(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<Redirect> {
    topics::delete_topic(&state.db, id)?;
    Ok(Redirect::to("/admin/topics"))
}

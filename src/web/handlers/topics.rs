use crate::services::{categories, examples, formulas, topics};
use crate::web::error::AppResult;
use crate::web::handlers::public::{make_context, render_not_found};
use crate::web::state::AppState;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use std::sync::Arc;

pub async fn all_topics(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let categories = categories::list_categories(&state.db)?;
    let topics = topics::list_topics(&state.db, state.config.content.topics_per_page, 0)?;

    let mut ctx = make_context(&state);
    ctx.insert("categories", &categories);
    ctx.insert("topics", &topics);

    let html = state.templates.render("topics/index.html", &ctx)?;
    Ok(Html(html))
}

pub async fn category(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> AppResult<Response> {
    let category = match categories::get_category_by_slug(&state.db, &slug)? {
        Some(c) => c,
        None => return render_not_found(&state),
    };
    let topics = topics::list_topics_by_category(&state.db, category.id)?;

    let mut ctx = make_context(&state);
    ctx.insert("category", &category);
    ctx.insert("topics", &topics);

    let html = state.templates.render("topics/category.html", &ctx)?;
    Ok(Html(html).into_response())
}

pub async fn view_topic(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> AppResult<Response> {
    let topic = match topics::get_topic_by_slug(&state.db, &slug)? {
        Some(t) => t,
        None => return render_not_found(&state),
    };

    topics::record_view(&state.db, topic.topic.id)?;

    let formulas = formulas::list_formulas(&state.db, topic.topic.id)?;
    let examples = examples::list_examples(&state.db, topic.topic.id)?;
    let related = topics::related_topics(
        &state.db,
        topic.topic.category_id,
        topic.topic.id,
        state.config.content.related_limit,
    )?;

    let mut ctx = make_context(&state);
    ctx.insert("topic", &topic);
    ctx.insert("formulas", &formulas);
    ctx.insert("examples", &examples);
    ctx.insert("related_topics", &related);

    let html = state.templates.render("topics/view.html", &ctx)?;
    Ok(Html(html).into_response())
}

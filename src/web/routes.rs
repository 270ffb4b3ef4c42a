use super::handlers;
use super::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

pub fn public_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::public::index))
        .route("/about", get(handlers::public::about))
        .route(
            "/contact",
            get(handlers::public::contact_form).post(handlers::public::contact_submit),
        )
        .route("/search", get(handlers::public::search))
        .route("/static/css/bundle.css", get(handlers::public::bundle_css))
        .route("/static/js/main.js", get(handlers::public::main_js))
}

pub fn topics_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/topics", get(handlers::topics::all_topics))
        .route("/topics/category/:slug", get(handlers::topics::category))
        .route("/topics/:slug", get(handlers::topics::view_topic))
}

pub fn admin_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/admin", get(handlers::admin::dashboard))
        .route("/admin/categories", get(handlers::admin::manage_categories))
        .route(
            "/admin/categories/add",
            get(handlers::admin::new_category).post(handlers::admin::create_category),
        )
        .route(
            "/admin/categories/:id/edit",
            get(handlers::admin::edit_category),
        )
        .route(
            "/admin/categories/:id",
            post(handlers::admin::update_category),
        )
        .route(
            "/admin/categories/:id/delete",
            post(handlers::admin::delete_category),
        )
        .route("/admin/topics", get(handlers::admin::manage_topics))
        .route(
            "/admin/topics/add",
            get(handlers::admin::new_topic).post(handlers::admin::create_topic),
        )
        .route("/admin/topics/:id/edit", get(handlers::admin::edit_topic))
        .route("/admin/topics/:id", post(handlers::admin::update_topic))
        .route(
            "/admin/topics/:id/delete",
            post(handlers::admin::delete_topic),
        )
}

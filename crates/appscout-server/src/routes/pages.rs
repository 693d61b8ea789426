use axum::{response::Html, routing::get, Router};

use crate::render;

pub fn routes<S: Clone + Send + Sync + 'static>() -> Router<S> {
    Router::new().route("/", get(index))
}

pub async fn index() -> Html<String> {
    Html(render::index_page())
}

use axum::response::Html;

/// GET /
/// Landing page, embedded at compile time.
pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../templates/index.html"))
}

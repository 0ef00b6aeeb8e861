use axum::response::{Html, Redirect};

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// GET / - Landing page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Any unknown path goes back to the landing page.
pub async fn redirect_home() -> Redirect {
    Redirect::to("/")
}

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use askama::Template;

use packsite::services::Claims;

use crate::web::session::verify_request;
use crate::web::state::AppState;
use crate::web::templates::NotFoundTemplate;

pub fn render<T: Template>(t: T) -> HttpResponse {
    render_status(StatusCode::OK, t)
}

pub fn render_status<T: Template>(status: StatusCode, t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Template error: {}", e);
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body("Internal server error")
        }
    }
}

pub fn not_found_page() -> HttpResponse {
    render_status(StatusCode::NOT_FOUND, NotFoundTemplate)
}

/// Renders a page whose data came from the database: `None` is a 404, an error a logged 500.
pub fn render_loaded<T: Template>(loaded: Result<Option<T>, sqlx::Error>) -> HttpResponse {
    match loaded {
        Ok(Some(page)) => render(page),
        Ok(None) => not_found_page(),
        Err(e) => {
            log::error!("Failed to load page data: {}", e);
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body("Internal server error")
        }
    }
}

pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}

/// Admin session for HTML pages: a missing or bad token redirects to the login form.
pub fn require_admin_page(req: &HttpRequest, state: &AppState) -> Result<Claims, HttpResponse> {
    verify_request(req, &state.tokens).ok_or_else(|| see_other("/admin/login"))
}

/// Cuts `text` to at most `max` characters on a word boundary, appending an ellipsis.
pub fn excerpt(text: &str, max: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max {
        return text.to_string();
    }

    let cut: String = text.chars().take(max).collect();
    let cut = match cut.rfind(char::is_whitespace) {
        Some(idx) if idx > 0 => &cut[..idx],
        _ => cut.as_str(),
    };
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_keeps_short_text() {
        assert_eq!(excerpt("  Stretch film  ", 40), "Stretch film");
    }

    #[test]
    fn excerpt_cuts_on_word_boundary() {
        assert_eq!(
            excerpt("Heavy duty export crates for machinery", 20),
            "Heavy duty export…"
        );
        assert_eq!(excerpt("Unbreakablewordwithoutspaces", 6), "Unbrea…");
    }
}

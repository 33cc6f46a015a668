use actix_web::{get, http::header::ContentType, HttpResponse};

use crate::utils::webutils::AuthenticatedUser;
use crate::views::header::render_index;

/// Landing page. Credentials are optional here: with a valid Basic header
/// the signed-in header branch is rendered, otherwise the anonymous one.
#[get("/")]
pub async fn index(user: Option<AuthenticatedUser>) -> HttpResponse {
    let user = user.map(|u| u.0);
    let name = user.as_ref().map(|u| u.first_name.as_str());

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_index(name))
}

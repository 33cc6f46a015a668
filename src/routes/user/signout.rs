use actix_web::{get, HttpResponse};

use crate::utils::webutils::clear_user_cookie;

#[get("/signout")]
pub async fn signout() -> HttpResponse {
    let mut resp = HttpResponse::Ok();
    if let Some(cookie) = clear_user_cookie() {
        resp.cookie(cookie);
    }
    resp.finish()
}

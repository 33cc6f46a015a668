use actix_web::web;

pub mod course;
pub mod pages;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(pages::index);
    cfg.service(
        web::scope("/api")
            .service(user::signin::signin)
            .service(user::signout::signout)
            .service(user::create::create)
            .service(course::list::list)
            .service(course::get::get)
            .service(course::create::create)
            .service(course::update::update)
            .service(course::delete::delete),
    );
}

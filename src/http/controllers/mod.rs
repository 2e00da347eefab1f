use actix_web::web;

pub mod health;
pub mod stats;
pub mod users;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::check)).service(
        web::scope("/api")
            .service(
                web::resource("/users")
                    .route(web::get().to(users::list))
                    .route(web::post().to(users::create)),
            )
            .service(
                web::resource("/users/{id}")
                    .route(web::get().to(users::get))
                    .route(web::put().to(users::update))
                    .route(web::delete().to(users::delete)),
            )
            .route("/stats", web::get().to(stats::summary)),
    );
}

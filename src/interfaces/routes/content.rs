use actix_web::web;

use crate::handlers::content;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(web::resource("/content").route(web::get().to(content::get_content)))
            .service(web::resource("/projects").route(web::get().to(content::get_projects)))
            .service(web::resource("/blog-posts").route(web::get().to(content::get_blog_posts)))
            .service(web::resource("/publications").route(web::get().to(content::get_publications)))
    );
}

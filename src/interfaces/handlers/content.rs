use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::AppState;

#[instrument(skip(state))]
pub async fn get_content(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.bundle.as_ref())
}

#[instrument(skip(state))]
pub async fn get_projects(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(&state.bundle.projects)
}

#[instrument(skip(state))]
pub async fn get_blog_posts(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(&state.bundle.blog_posts)
}

#[instrument(skip(state))]
pub async fn get_publications(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(&state.bundle.publications)
}

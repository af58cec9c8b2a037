use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpResponse,
};
use futures_util::future::{ok, Ready, LocalBoxFuture};
use std::{rc::Rc, task::{Context, Poll}};

use crate::utils::assets::has_hidden_segment;

/// Refuses any request whose path has a segment starting with `.`.
pub struct DenyDotfiles {
    pub enabled: bool,
}

impl DenyDotfiles {
    pub fn new(enabled: bool) -> Self {
        DenyDotfiles { enabled }
    }
}

impl<S> Transform<S, ServiceRequest> for DenyDotfiles
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = DenyDotfilesService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(DenyDotfilesService {
            service: Rc::new(service),
            enabled: self.enabled,
        })
    }
}

pub struct DenyDotfilesService<S> {
    service: Rc<S>,
    enabled: bool,
}

impl<S> Service<ServiceRequest> for DenyDotfilesService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let enabled = self.enabled;

        Box::pin(async move {
            if enabled && has_hidden_segment(req.path()) {
                tracing::warn!("Denied dot-file request: {}", req.path());
                let res = HttpResponse::Forbidden().json(serde_json::json!({
                    "error": "Access to dot-files is denied"
                }));
                return Ok(req.into_response(res));
            }

            service.call(req).await
        })
    }
}

use std::io::Result;
use std::net::SocketAddr;

use actix_cors::Cors;
use actix_web::{
    web::{self, resource, scope},
    App, HttpResponse, HttpServer,
};
use serde_json::json;
use tracing::{debug, info};

use crate::core::data::Catalog;

/// Registers the read-only catalog routes. Expects `web::Data<Catalog>` on the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        scope("/v1")
            .service(resource("/projects").route(web::get().to(list_handler)))
            .service(resource("/projects/{slug}").route(web::get().to(project_handler)))
            .service(resource("/folio").route(web::get().to(status_handler))),
    );
}

pub async fn start_server(addr: SocketAddr, catalog: Catalog) -> Result<()> {
    let catalog = web::Data::new(catalog);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(catalog.clone())
            .configure(configure)
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_header()
                    .allow_any_method(),
            )
    })
    .bind(addr)?;
    info!("Server started at {}", addr);
    server.run().await
}

async fn list_handler(catalog: web::Data<Catalog>) -> HttpResponse {
    HttpResponse::Ok().json(catalog.projects())
}

async fn project_handler(catalog: web::Data<Catalog>, slug: web::Path<String>) -> HttpResponse {
    let slug = slug.into_inner();
    match catalog.find_by_slug(&slug) {
        Some(project) => HttpResponse::Ok().json(project),
        None => {
            debug!("No project with slug \"{}\"", slug);
            HttpResponse::NotFound().json(json!({ "error": "project not found", "slug": slug }))
        }
    }
}

async fn status_handler() -> HttpResponse {
    HttpResponse::Ok().body("folio is running")
}

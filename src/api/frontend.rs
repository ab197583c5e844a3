//! Prebuilt front-end serving.
//!
//! The showcase UI is built separately. When a bundle directory is
//! configured, `/assets` is served from it and every unmatched path falls
//! back to `index.html` for client-side routing. Without one, unmatched
//! paths get a JSON 404.

use std::path::PathBuf;

use actix_files::{Files, NamedFile};
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use crate::error::AppError;

/// Root directory of the front-end bundle.
#[derive(Debug, Clone)]
pub struct StaticDir(pub PathBuf);

/// SPA fallback handler - serves index.html for client-side routing.
async fn spa_fallback(req: HttpRequest) -> ActixResult<NamedFile> {
    let static_dir = req
        .app_data::<web::Data<StaticDir>>()
        .ok_or_else(|| AppError::NotFound(req.path().to_string()))?;
    Ok(NamedFile::open(static_dir.0.join("index.html"))?)
}

async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound(req.path().to_string()))
}

/// Register static asset routes and the default service.
///
/// Must be configured last: the default service catches every path not
/// matched by earlier services.
pub fn configure_frontend(static_dir: Option<PathBuf>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| match static_dir {
        Some(dir) => {
            cfg.app_data(web::Data::new(StaticDir(dir.clone())))
                .service(Files::new("/assets", dir.join("assets")).prefer_utf8(true))
                .default_service(web::route().to(spa_fallback));
        }
        None => {
            cfg.default_service(web::route().to(not_found));
        }
    }
}

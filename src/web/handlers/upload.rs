use actix_multipart::Multipart;
use actix_web::{delete, post, web, HttpResponse};
use futures_util::TryStreamExt;

use packsite::services::is_allowed_content_type;

use crate::web::response::{created, done, ApiError};
use crate::web::session::AdminClaims;
use crate::web::state::AppState;

const FILE_FIELD: &str = "file";

/// Accepts one multipart field named `file` and hands the bytes to the blob store.
#[post("/api/admin/upload")]
pub async fn upload(
    AdminClaims(admin): AdminClaims,
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    while let Some(mut field) = payload.try_next().await.map_err(bad_multipart)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let content_type = field
            .content_type()
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_default();
        if !is_allowed_content_type(&content_type) {
            return Err(ApiError::BadRequest(format!(
                "Unsupported file type: {}",
                if content_type.is_empty() { "unknown" } else { &content_type }
            )));
        }

        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .unwrap_or("upload")
            .to_string();

        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(bad_multipart)? {
            if bytes.len() + chunk.len() > state.upload_max_bytes {
                return Err(ApiError::BadRequest(format!(
                    "File exceeds the {} byte limit",
                    state.upload_max_bytes
                )));
            }
            bytes.extend_from_slice(&chunk);
        }

        if bytes.is_empty() {
            return Err(ApiError::BadRequest("file is empty".to_string()));
        }

        let size = bytes.len();
        let blob = state.blobs.put(&content_type, bytes).await?;
        log::info!("{} uploaded {} ({} bytes) as {}", admin.email, file_name, size, blob.key);

        return Ok(created(blob));
    }

    Err(ApiError::BadRequest("file is required".to_string()))
}

#[delete("/api/admin/upload/{key}")]
pub async fn remove(
    AdminClaims(admin): AdminClaims,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let key = path.into_inner();
    state.blobs.remove(&key).await?;
    log::info!("{} deleted upload {}", admin.email, key);

    Ok(done("Upload deleted"))
}

fn bad_multipart(err: actix_multipart::MultipartError) -> ApiError {
    log::debug!("Rejected multipart body: {}", err);
    ApiError::BadRequest(format!("Invalid upload: {err}"))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(upload).service(remove);
}

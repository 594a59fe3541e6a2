use actix_multipart::Multipart;
use actix_web::{HttpResponse, get, post, web};
use futures::TryStreamExt;

use crate::AppState;
use crate::dtos::blog::MessageResponse;
use crate::errors::ApiError;

/// POST /blogimage, multipart form field `file`, written to the file
/// store as-is. Independent of blog creation; the caller threads the
/// returned path into the `image` field itself.
#[post("/blogimage")]
pub async fn upload_image(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    while let Some(mut field) = payload.try_next().await? {
        if field.content_disposition().get_name() != Some("file") {
            continue;
        }
        let originalname = field
            .content_disposition()
            .get_filename()
            .unwrap_or("file")
            .to_string();
        let mimetype = field
            .content_type()
            .map(|m| m.to_string())
            .unwrap_or_else(|| mime::APPLICATION_OCTET_STREAM.to_string());

        let mut data = web::BytesMut::new();
        while let Some(chunk) = field.try_next().await? {
            data.extend_from_slice(&chunk);
        }

        let stored = state
            .files
            .save("file", &originalname, &mimetype, &data)
            .await?;
        return Ok(HttpResponse::Ok().json(stored));
    }
    Err(ApiError::Validation("No file uploaded".to_string()))
}

/// GET /uploads/{filename}, read-only serving of stored uploads.
#[get("/uploads/{filename}")]
pub async fn serve_upload(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let filename = path.into_inner();
    let Some(file_path) = state.files.resolve(&filename) else {
        return not_found();
    };

    match tokio::fs::read(&file_path).await {
        Ok(data) => {
            let content_type = match file_path.extension().and_then(|ext| ext.to_str()) {
                Some("jpg") | Some("jpeg") => "image/jpeg",
                Some("png") => "image/png",
                Some("gif") => "image/gif",
                Some("webp") => "image/webp",
                _ => "application/octet-stream",
            };
            HttpResponse::Ok().content_type(content_type).body(data)
        }
        Err(_) => not_found(),
    }
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(MessageResponse {
        message: "File not found".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test};
    use serde_json::Value;

    use crate::repositories::{BlogStore, MemoryBlogStore};
    use crate::storage::FileStore;
    use crate::{AppState, routes};

    const BOUNDARY: &str = "------------------------abcdef0123456789";

    fn multipart_body(field: &str, filename: &str, content: &str) -> String {
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: image/png\r\n\r\n\
             {content}\r\n\
             --{BOUNDARY}--\r\n"
        )
    }

    fn app_state(dir: &std::path::Path) -> actix_web::web::Data<AppState> {
        actix_web::web::Data::new(AppState {
            store: Arc::new(MemoryBlogStore::new()) as Arc<dyn BlogStore>,
            files: FileStore::new(dir),
        })
    }

    #[actix_web::test]
    async fn upload_stores_the_file_and_echoes_its_metadata() {
        let tmp = tempfile::tempdir().unwrap();
        let app =
            test::init_service(App::new().app_data(app_state(tmp.path())).configure(routes)).await;

        let req = test::TestRequest::post()
            .uri("/blogimage")
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(multipart_body("file", "pic.png", "PNGDATA"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["fieldname"], "file");
        assert_eq!(body["originalname"], "pic.png");
        assert_eq!(body["mimetype"], "image/png");
        assert_eq!(body["size"], 7);
        let filename = body["filename"].as_str().unwrap();
        assert!(filename.ends_with(".pic.png"));

        let on_disk = std::fs::read(tmp.path().join(filename)).unwrap();
        assert_eq!(on_disk, b"PNGDATA");

        // the stored file is served back under /uploads
        let req = test::TestRequest::get()
            .uri(&format!("/uploads/{filename}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "image/png"
        );
        assert_eq!(test::read_body(resp).await, b"PNGDATA".as_ref());
    }

    #[actix_web::test]
    async fn upload_without_a_file_part_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let app =
            test::init_service(App::new().app_data(app_state(tmp.path())).configure(routes)).await;

        let req = test::TestRequest::post()
            .uri("/blogimage")
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(multipart_body("avatar", "pic.png", "PNGDATA"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "No file uploaded");

        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[actix_web::test]
    async fn serving_an_unknown_file_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let app =
            test::init_service(App::new().app_data(app_state(tmp.path())).configure(routes)).await;

        let req = test::TestRequest::get().uri("/uploads/missing.png").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }
}

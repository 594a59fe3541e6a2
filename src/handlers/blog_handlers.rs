use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::AppState;
use crate::dtos::blog::{
    CreateBlogDTO, DataResponse, InsertResponse, MessageResponse, UpdateBlogDTO,
};
use crate::errors::ApiError;

#[get("/")]
pub async fn hello() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse {
        message: "Hello World!".to_string(),
    })
}

/// GET /blog/{category}. The reserved `all` lifts the restriction. An empty
/// result set is reported as not-found, unlike the by-id lookup below.
#[get("/blog/{category}")]
pub async fn list_blogs(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let category = path.into_inner();
    if category.is_empty() {
        return Err(ApiError::Validation(
            "Category parameter is required".to_string(),
        ));
    }
    let filter = (category != "all").then_some(category.as_str());
    let result = state.store.list(filter).await?;
    if result.is_empty() {
        return Err(ApiError::NotFound(
            "No blogs found for the given category".to_string(),
        ));
    }
    Ok(HttpResponse::Ok().json(DataResponse { data: result }))
}

/// GET /blog/id/{id}. The lookup never reports not-found: a malformed or
/// unknown id comes back as `{data: []}`.
#[get("/blog/id/{id}")]
pub async fn get_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    if id.is_empty() {
        return Err(ApiError::Validation("Blog ID is required".to_string()));
    }
    let result = state.store.find_by_id(&id).await?;
    Ok(HttpResponse::Ok().json(DataResponse { data: result }))
}

#[post("/blog")]
pub async fn create_blog(
    state: web::Data<AppState>,
    body: web::Json<CreateBlogDTO>,
) -> Result<HttpResponse, ApiError> {
    let Some(blog) = body.into_inner().into_new_blog() else {
        return Err(ApiError::Validation("Missing required fields".to_string()));
    };
    let inserted = state.store.insert(blog).await?;
    Ok(HttpResponse::Ok().json(InsertResponse {
        message: "Added a new blog".to_string(),
        desc: inserted,
    }))
}

#[delete("/blog/id/{id}")]
pub async fn delete_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    match state.store.delete_by_id(&path.into_inner()).await? {
        Some(deleted) => Ok(HttpResponse::Ok().json(DataResponse { data: deleted })),
        None => Err(ApiError::NotFound("Blog not found".to_string())),
    }
}

#[put("/blog/id/{id}")]
pub async fn update_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateBlogDTO>,
) -> Result<HttpResponse, ApiError> {
    match state.store.update_by_id(&path.into_inner(), &body).await? {
        Some(updated) => Ok(HttpResponse::Ok().json(DataResponse { data: updated })),
        None => Err(ApiError::NotFound("Blog not found".to_string())),
    }
}

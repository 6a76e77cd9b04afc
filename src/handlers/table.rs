use crate::models::*;
use crate::services::SeatingService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/tables",
    tag = "table",
    responses(
        (status = 200, description = "获取桌次安排成功", body = SeatingLayout)
    )
)]
pub async fn get_tables(service: web::Data<SeatingService>) -> Result<HttpResponse> {
    match service.layout().await {
        Ok(layout) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": layout }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/tables/assign",
    tag = "table",
    request_body = AssignTablesRequest,
    responses(
        (status = 200, description = "自动分桌成功（覆盖原有安排）", body = SeatingLayout),
        (status = 400, description = "每桌人数无效")
    )
)]
pub async fn assign_tables(
    service: web::Data<SeatingService>,
    request: web::Json<AssignTablesRequest>,
) -> Result<HttpResponse> {
    match service.assign(request.into_inner()).await {
        Ok(layout) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": layout }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/tables",
    tag = "table",
    responses(
        (status = 200, description = "清空桌次成功", body = SeatingLayout)
    )
)]
pub async fn clear_tables(service: web::Data<SeatingService>) -> Result<HttpResponse> {
    match service.clear().await {
        Ok(layout) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": layout }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/tables/move",
    tag = "table",
    request_body = MoveEmployeeRequest,
    responses(
        (status = 200, description = "换桌成功（可能超员）", body = SeatingLayout),
        (status = 404, description = "员工或桌次不存在")
    )
)]
pub async fn move_employee(
    service: web::Data<SeatingService>,
    request: web::Json<MoveEmployeeRequest>,
) -> Result<HttpResponse> {
    match service.move_employee(request.into_inner()).await {
        Ok(layout) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": layout }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn table_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tables")
            .route("", web::get().to(get_tables))
            .route("", web::delete().to(clear_tables))
            .route("/assign", web::post().to(assign_tables))
            .route("/move", web::put().to(move_employee)),
    );
}

use crate::models::*;
use crate::services::{RosterService, SeatingService};
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/employees",
    tag = "employee",
    params(
        ("q" = Option<String>, Query, description = "按姓名/部门/工号搜索"),
        ("page" = Option<u32>, Query, description = "页码"),
        ("per_page" = Option<u32>, Query, description = "每页数量")
    ),
    responses(
        (status = 200, description = "获取员工名单成功")
    )
)]
pub async fn list_employees(
    service: web::Data<RosterService>,
    query: web::Query<EmployeeQuery>,
) -> Result<HttpResponse> {
    match service.list_employees(&query).await {
        Ok(page) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": page }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/employees",
    tag = "employee",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 200, description = "新增员工成功", body = Employee),
        (status = 400, description = "姓名与工号为必填")
    )
)]
pub async fn create_employee(
    service: web::Data<RosterService>,
    request: web::Json<CreateEmployeeRequest>,
) -> Result<HttpResponse> {
    match service.add_employee(request.into_inner()).await {
        Ok(employee) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": employee }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/employees/{id}",
    tag = "employee",
    params(("id" = String, Path, description = "员工ID")),
    request_body = UpdateEmployeeRequest,
    responses(
        (status = 200, description = "修改员工成功", body = Employee),
        (status = 400, description = "请求参数错误"),
        (status = 404, description = "员工不存在")
    )
)]
pub async fn update_employee(
    service: web::Data<RosterService>,
    path: web::Path<String>,
    request: web::Json<UpdateEmployeeRequest>,
) -> Result<HttpResponse> {
    match service
        .update_employee(&path.into_inner(), request.into_inner())
        .await
    {
        Ok(employee) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": employee }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/employees/{id}",
    tag = "employee",
    params(("id" = String, Path, description = "员工ID")),
    responses(
        (status = 200, description = "删除员工成功", body = Employee),
        (status = 404, description = "员工不存在")
    )
)]
pub async fn delete_employee(
    service: web::Data<RosterService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match service.remove_employee(&path.into_inner()).await {
        Ok(employee) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": employee }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/employees",
    tag = "employee",
    responses(
        (status = 200, description = "清空名单成功", body = ClearResponse)
    )
)]
pub async fn clear_employees(service: web::Data<RosterService>) -> Result<HttpResponse> {
    match service.clear_employees().await {
        Ok(removed) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": ClearResponse { removed }
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/employees/import",
    tag = "employee",
    request_body(content = String, content_type = "text/csv", description = "首行为表头的 CSV 文本"),
    responses(
        (status = 200, description = "导入成功", body = ImportResponse),
        (status = 422, description = "文件格式错误")
    )
)]
pub async fn import_employees(
    service: web::Data<RosterService>,
    body: String,
) -> Result<HttpResponse> {
    match service.import_csv(&body).await {
        Ok(result) => {
            let message = format!("Imported {} employees", result.imported);
            Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(result, message)))
        }
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/employees/stats",
    tag = "employee",
    params(("capacity" = Option<u32>, Query, description = "每桌人数")),
    responses(
        (status = 200, description = "获取名单统计成功", body = RosterStats)
    )
)]
pub async fn roster_stats(
    service: web::Data<RosterService>,
    seating: web::Data<SeatingService>,
    query: web::Query<RosterStatsQuery>,
) -> Result<HttpResponse> {
    let capacity = query.capacity.unwrap_or_else(|| seating.default_capacity());
    match service.stats(capacity).await {
        Ok(stats) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": stats }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn employee_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/employees")
            .route("", web::get().to(list_employees))
            .route("", web::post().to(create_employee))
            .route("", web::delete().to(clear_employees))
            .route("/import", web::post().to(import_employees))
            .route("/stats", web::get().to(roster_stats))
            .route("/{id}", web::put().to(update_employee))
            .route("/{id}", web::delete().to(delete_employee)),
    );
}

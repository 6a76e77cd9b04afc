use crate::models::*;
use crate::services::StateStore;
use actix_web::{HttpResponse, Result, web};

#[utoipa::path(
    get,
    path = "/state",
    tag = "state",
    responses(
        (status = 200, description = "当前完整应用状态", body = AppState)
    )
)]
pub async fn get_state(store: web::Data<StateStore>) -> Result<HttpResponse> {
    let snapshot = store.snapshot().await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(snapshot.as_ref())))
}

pub fn state_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/state", web::get().to(get_state));
}

use crate::models::*;
use crate::services::LuckyDrawService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/lucky-draw/prizes",
    tag = "lucky_draw",
    responses(
        (status = 200, description = "获取奖项列表成功", body = [PrizeStatus])
    )
)]
/// 奖项列表，含已抽人数与剩余名额
pub async fn get_prizes(service: web::Data<LuckyDrawService>) -> Result<HttpResponse> {
    match service.list_prizes().await {
        Ok(list) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": list }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/lucky-draw/prizes",
    tag = "lucky_draw",
    request_body = CreatePrizeRequest,
    responses(
        (status = 200, description = "新增奖项成功", body = Prize),
        (status = 400, description = "请求参数错误")
    )
)]
pub async fn create_prize(
    service: web::Data<LuckyDrawService>,
    request: web::Json<CreatePrizeRequest>,
) -> Result<HttpResponse> {
    match service.add_prize(request.into_inner()).await {
        Ok(prize) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": prize }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/lucky-draw/draw",
    tag = "lucky_draw",
    request_body = DrawRequest,
    responses(
        (status = 200, description = "抽奖成功", body = DrawOutcome),
        (status = 400, description = "未选择奖项、名额已满或符合资格人数不足"),
        (status = 409, description = "已有抽奖进行中")
    )
)]
/// 立即抽奖（不经过滚动展示）
pub async fn draw(
    service: web::Data<LuckyDrawService>,
    request: web::Json<DrawRequest>,
) -> Result<HttpResponse> {
    match service.draw(request.into_inner()).await {
        Ok(outcome) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": outcome }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/lucky-draw/start",
    tag = "lucky_draw",
    request_body = DrawRequest,
    responses(
        (status = 200, description = "开始滚动，到时自动开奖", body = DrawDisplay),
        (status = 400, description = "未选择奖项、名额已满或符合资格人数不足"),
        (status = 409, description = "已有抽奖进行中")
    )
)]
/// 开始抽奖：
/// 1. 校验奖项与候选人数
/// 2. 滚动展示随机姓名（仅展示用）
/// 3. 到时停止滚动后正式抽取并保存
pub async fn start_draw(
    service: web::Data<LuckyDrawService>,
    request: web::Json<DrawRequest>,
) -> Result<HttpResponse> {
    match service.start_draw(request.into_inner()).await {
        Ok(display) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": display }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/lucky-draw/cancel",
    tag = "lucky_draw",
    responses(
        (status = 200, description = "已取消，未产生中奖记录", body = DrawDisplay),
        (status = 404, description = "没有进行中的抽奖")
    )
)]
pub async fn cancel_draw(service: web::Data<LuckyDrawService>) -> Result<HttpResponse> {
    match service.cancel_draw().await {
        Ok(display) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": display }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/lucky-draw/display",
    tag = "lucky_draw",
    responses(
        (status = 200, description = "当前展示内容", body = DrawDisplay)
    )
)]
pub async fn get_display(service: web::Data<LuckyDrawService>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": service.display() })))
}

#[utoipa::path(
    get,
    path = "/lucky-draw/winners",
    tag = "lucky_draw",
    params(("prizeId" = Option<String>, Query, description = "奖项ID")),
    responses(
        (status = 200, description = "获取中奖名单成功（新的在前）", body = [WinnerView])
    )
)]
pub async fn get_winners(
    service: web::Data<LuckyDrawService>,
    query: web::Query<WinnerQuery>,
) -> Result<HttpResponse> {
    match service.winners(query.prize_id.as_deref()).await {
        Ok(list) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": list }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/lucky-draw/export",
    tag = "lucky_draw",
    responses(
        (status = 200, description = "中奖名单 CSV", body = String, content_type = "text/csv")
    )
)]
pub async fn export_winners(service: web::Data<LuckyDrawService>) -> Result<HttpResponse> {
    match service.export_csv().await {
        Ok(csv) => Ok(HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                "Content-Disposition",
                "attachment; filename=\"winners.csv\"",
            ))
            .body(csv)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/lucky-draw/reset",
    tag = "lucky_draw",
    responses(
        (status = 200, description = "已清空中奖记录与中奖标记", body = ResetResponse),
        (status = 409, description = "已有抽奖进行中")
    )
)]
pub async fn reset_draw(service: web::Data<LuckyDrawService>) -> Result<HttpResponse> {
    match service.reset().await {
        Ok(result) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": result }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// 路由配置
pub fn lucky_draw_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/lucky-draw")
            .route("/prizes", web::get().to(get_prizes))
            .route("/prizes", web::post().to(create_prize))
            .route("/draw", web::post().to(draw))
            .route("/start", web::post().to(start_draw))
            .route("/cancel", web::post().to(cancel_draw))
            .route("/display", web::get().to(get_display))
            .route("/winners", web::get().to(get_winners))
            .route("/export", web::get().to(export_winners))
            .route("/reset", web::post().to(reset_draw)),
    );
}

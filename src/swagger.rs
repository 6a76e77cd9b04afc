use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::employee::list_employees,
        handlers::employee::create_employee,
        handlers::employee::update_employee,
        handlers::employee::delete_employee,
        handlers::employee::clear_employees,
        handlers::employee::import_employees,
        handlers::employee::roster_stats,
        handlers::table::get_tables,
        handlers::table::assign_tables,
        handlers::table::clear_tables,
        handlers::table::move_employee,
        handlers::lucky_draw::get_prizes,
        handlers::lucky_draw::create_prize,
        handlers::lucky_draw::draw,
        handlers::lucky_draw::start_draw,
        handlers::lucky_draw::cancel_draw,
        handlers::lucky_draw::get_display,
        handlers::lucky_draw::get_winners,
        handlers::lucky_draw::export_winners,
        handlers::lucky_draw::reset_draw,
        handlers::state::get_state,
    ),
    components(
        schemas(
            Employee,
            CreateEmployeeRequest,
            UpdateEmployeeRequest,
            EmployeeQuery,
            RosterStats,
            ImportResponse,
            ClearResponse,
            Table,
            SeatingMode,
            AssignTablesRequest,
            MoveEmployeeRequest,
            TableLayout,
            SeatingLayout,
            Prize,
            CreatePrizeRequest,
            PrizeStatus,
            WinnerRecord,
            DrawRequest,
            DrawOutcome,
            DrawDisplay,
            WinnerView,
            ResetResponse,
            AppState,
            ApiError,
        )
    ),
    tags(
        (name = "employee", description = "Employee roster API"),
        (name = "table", description = "Table assignment API"),
        (name = "lucky_draw", description = "Prize draw API"),
        (name = "state", description = "Application state API"),
    ),
    info(
        title = "Party Manager API",
        version = "1.0.0",
        description = "Event seating and prize draw administration API"
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}

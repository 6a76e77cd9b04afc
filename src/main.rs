use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local; // timestamp in log lines
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter
use std::sync::Arc;

use party_manager::{
    config::Config,
    database::{JsonFileStore, StateRepository},
    handlers,
    middlewares::create_cors,
    services::*,
    swagger::swagger_config,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    // 加载配置
    let config = Config::from_toml().map_err(std::io::Error::other)?;

    // 本地存储与状态加载（无存档时写入默认奖项）
    let file_store = JsonFileStore::open(&config.storage.data_dir).map_err(std::io::Error::other)?;
    let repository = StateRepository::new(Arc::new(file_store), config.storage.state_key.clone());
    let state_store = StateStore::open(repository);

    // 创建服务
    let roster_service = RosterService::new(state_store.clone());
    let seating_service = SeatingService::new(state_store.clone(), config.seating.clone());
    let lucky_draw_service = LuckyDrawService::new(state_store.clone(), config.draw.clone());

    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(web::Data::new(state_store.clone()))
            .app_data(web::Data::new(roster_service.clone()))
            .app_data(web::Data::new(seating_service.clone()))
            .app_data(web::Data::new(lucky_draw_service.clone()))
            .configure(swagger_config)
            .service(
                web::scope("/api/v1")
                    .configure(handlers::employee_config)
                    .configure(handlers::table_config)
                    .configure(handlers::lucky_draw_config)
                    .configure(handlers::state_config),
            )
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}

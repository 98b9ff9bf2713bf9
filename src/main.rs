//! 계정 서비스 메인 애플리케이션
//!
//! 설정을 읽고 MongoDB, Redis, 카카오 클라이언트를 초기화한 뒤
//! Actix-web HTTP 서버를 구동합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use account_service::caching::redis::RedisClient;
use account_service::config::AppConfig;
use account_service::db::Database;
use account_service::repositories::transaction::MongoCredentialStore;
use account_service::routes::configure_all_routes;
use account_service::services::account::AccountService;
use account_service::services::auth::{KakaoAuthService, KakaoClient, TokenService};
use account_service::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 계정 서비스 시작중...");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("설정 로드 실패: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    info!("실행 환경: {:?}", config.environment);

    let service = match build_account_service(&config).await {
        Ok(service) => web::Data::new(service),
        Err(e) => {
            error!("서비스 초기화 실패: {}", e);
            return Err(std::io::Error::other(e));
        }
    };

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(config, service).await
}

/// MongoDB와 Redis에 연결하고 계정 서비스를 조립합니다.
///
/// 연결 실패, 인덱스 생성 실패, 잘못된 서명 키는 모두 시작 실패입니다.
async fn build_account_service(config: &AppConfig) -> Result<AccountService, Box<dyn std::error::Error + Send + Sync>> {
    info!("📡 데이터베이스 연결 중...");

    let database = Arc::new(Database::new(&config.database).await?);
    let store = MongoCredentialStore::new(database);
    store.create_indexes().await?;

    let redis_client = RedisClient::new(&config.redis).await?;

    let kakao_client = KakaoClient::new(config.kakao.clone())?;

    Ok(AccountService::new(
        Arc::new(store),
        Arc::new(redis_client),
        TokenService::new(&config.jwt.secret)?,
        UserService::new(config.password.bcrypt_cost),
        KakaoAuthService::new(Arc::new(kakao_client), &config.kakao),
    ))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 요청 로깅, 경로 정규화 미들웨어를 포함합니다.
async fn start_http_server(config: AppConfig, service: web::Data<AccountService>) -> std::io::Result<()> {
    let bind_address = config.server.bind_address();
    let server_config = web::Data::new(config.server.clone());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(service.clone())
            .app_data(server_config.clone())
            .configure(configure_all_routes)
    })
    .bind(bind_address.as_str())?
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// `RUST_LOG`로 로깅 레벨을 설정합니다. 기본값은 `info,actix_web=info`입니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}

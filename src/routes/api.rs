//! JSON API under `/api`. Every failure body is `{"error": "..."}`.

use actix_web::error::InternalError;
use actix_web::{HttpResponse, Responder, Scope, get, post, web};
use serde_json::json;

use crate::dto::api::{ApiError, BannerPage, LoginResponse, MessageResponse, PageQuery};
use crate::forms::auth::{LoginForm, RegisterForm};
use crate::forms::banner::NewBannerForm;
use crate::models::auth::{AuthenticatedUser, removal_cookie, token_cookie};
use crate::models::config::ServerConfig;
use crate::pagination::parse_page;
use crate::repository::DieselRepository;
use crate::services::auth as auth_service;
use crate::services::banners as banner_service;
use crate::services::ServiceError;

/// Turns a service failure into the matching status and `{error}` body.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    let mut builder = match err {
        ServiceError::Unauthorized => HttpResponse::Unauthorized(),
        ServiceError::NotFound => HttpResponse::NotFound(),
        ServiceError::Conflict(_) => HttpResponse::Conflict(),
        ServiceError::Form(_) | ServiceError::Credentials(_) => HttpResponse::BadRequest(),
        ServiceError::Internal(_) => HttpResponse::InternalServerError(),
    };
    builder.json(ApiError::new(err.to_string()))
}

/// Rejects unreadable JSON bodies with a 400 `{error}` instead of plain text.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ApiError::new(message)),
        )
        .into()
    })
}

/// All `/api` endpoints.
pub fn api_scope() -> Scope {
    web::scope("/api")
        .service(api_register)
        .service(api_login)
        .service(api_logout)
        .service(api_new_banner)
        .service(api_banners_paged)
        .service(api_banners)
}

#[post("/register")]
pub async fn api_register(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<RegisterForm>,
) -> impl Responder {
    match auth_service::register(repo.get_ref(), form) {
        Ok(_) => HttpResponse::Created().json(json!({})),
        Err(err) => error_response(&err),
    }
}

#[post("/login")]
pub async fn api_login(
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    web::Json(form): web::Json<LoginForm>,
) -> impl Responder {
    match auth_service::login(repo.get_ref(), form, &server_config) {
        Ok(session) => HttpResponse::Accepted()
            .cookie(token_cookie(session.token.clone(), &server_config))
            .json(LoginResponse {
                token: session.token,
            }),
        Err(err) => error_response(&err),
    }
}

#[post("/logout")]
pub async fn api_logout() -> impl Responder {
    HttpResponse::Ok()
        .cookie(removal_cookie())
        .json(MessageResponse {
            message: "Logged out successfully".to_string(),
        })
}

#[post("/newbanner")]
pub async fn api_new_banner(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<NewBannerForm>,
) -> impl Responder {
    match banner_service::create_banner(repo.get_ref(), &user, form) {
        Ok(_) => HttpResponse::Created().json(json!({})),
        Err(err) => error_response(&err),
    }
}

#[get("/banners")]
pub async fn api_banners(repo: web::Data<DieselRepository>) -> impl Responder {
    match banner_service::list_all(repo.get_ref()) {
        Ok(banners) => HttpResponse::Ok().json(banners),
        Err(err) => error_response(&err),
    }
}

#[get("/banners/paged")]
pub async fn api_banners_paged(
    params: web::Query<PageQuery>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let requested = parse_page(params.page.as_deref());
    match banner_service::list_page(repo.get_ref(), requested, server_config.per_page) {
        Ok(slice) => HttpResponse::Ok().json(BannerPage {
            banners: slice.banners,
            page: slice.state.current_page(),
            max_page: slice.state.max_page(),
        }),
        Err(err) => error_response(&err),
    }
}

use actix_web::http::header;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;

use crate::auth_mode::AuthMode;
use crate::forms::auth::{LoginForm, RegisterForm};
use crate::models::auth::{AuthenticatedUser, removal_cookie, token_cookie};
use crate::models::config::ServerConfig;
use crate::pagination::HOME_ROUTE;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::auth as auth_service;

#[derive(Deserialize)]
struct AuthQueryParams {
    mode: Option<String>,
}

#[get("/auth")]
pub async fn show_auth(
    params: web::Query<AuthQueryParams>,
    user: Option<AuthenticatedUser>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mode = AuthMode::from_query(params.mode.as_deref());

    let mut context = base_context(&flash_messages, user.as_ref(), "auth");
    context.insert("mode", &mode);
    context.insert("toggle_mode", &mode.toggle());
    context.insert("toggle_label", mode.toggle_label());

    render_template(&tera, "auth/index.html", &context)
}

#[post("/auth/login")]
pub async fn login(
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<LoginForm>,
) -> impl Responder {
    match auth_service::login(repo.get_ref(), form, &server_config) {
        Ok(session) => HttpResponse::SeeOther()
            .cookie(token_cookie(session.token, &server_config))
            .insert_header((header::LOCATION, HOME_ROUTE))
            .finish(),
        Err(err) => {
            FlashMessage::error(format!("Error: {err}")).send();
            redirect("/auth")
        }
    }
}

#[post("/auth/register")]
pub async fn register(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<RegisterForm>,
) -> impl Responder {
    match auth_service::register(repo.get_ref(), form) {
        Ok(_) => {
            FlashMessage::success("Registration successful! You can sign in now.").send();
            redirect("/auth")
        }
        Err(err) => {
            FlashMessage::error(format!("Error: {err}")).send();
            redirect("/auth?mode=register")
        }
    }
}

#[post("/logout")]
pub async fn logout() -> impl Responder {
    HttpResponse::SeeOther()
        .cookie(removal_cookie())
        .insert_header((header::LOCATION, HOME_ROUTE))
        .finish()
}

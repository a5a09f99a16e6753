use actix_web::http::header;
use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::dto::api::PageQuery;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::pagination::{HOME_ROUTE, parse_page};
use crate::render::banner_cards;
use crate::repository::DieselRepository;
use crate::routes::{base_context, render_template};
use crate::services::banners as banner_service;

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, HOME_ROUTE))
        .finish()
}

#[get("/home")]
pub async fn show_home(
    params: web::Query<PageQuery>,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let requested = parse_page(params.page.as_deref());

    let data = match banner_service::load_home_page(
        repo.get_ref(),
        requested,
        server_config.per_page,
    ) {
        Ok(data) => data,
        Err(err) => {
            log::error!("Failed to load home page: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, user.as_ref(), "home");
    context.insert("banner_count", &data.total);
    context.insert("cards", &banner_cards(&data.banners.items));
    context.insert("pager", &data.banners.pager);
    context.insert("pager_controls", &data.banners.pager.controls());

    render_template(&tera, "main/home.html", &context)
}

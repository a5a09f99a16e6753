use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::banner::NewBannerForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::banners as banner_service;

#[get("/newbanner")]
pub async fn show_new_banner(
    user: Option<AuthenticatedUser>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let Some(user) = user else {
        return redirect("/auth");
    };

    let context = base_context(&flash_messages, Some(&user), "newbanner");
    render_template(&tera, "banners/new.html", &context)
}

#[post("/newbanner")]
pub async fn add_banner(
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<NewBannerForm>,
) -> impl Responder {
    let Some(user) = user else {
        return redirect("/auth");
    };

    match banner_service::create_banner(repo.get_ref(), &user, form) {
        Ok(_) => FlashMessage::success("Banner added!").send(),
        Err(err) => FlashMessage::error(format!("Error: {err}")).send(),
    }
    redirect("/newbanner")
}

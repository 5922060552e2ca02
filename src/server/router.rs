use std::sync::Arc;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use dioxus_logger::tracing::Level;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorLayer,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        blog::{AuthorDto, BlogPostDto, BlogPostSummaryDto, CategoryDto, ContentBlockDto},
        contact::ContactRequestDto,
        content::{ContentStatusDto, PageStatusDto},
        locale::{LocaleDto, LocalesDto},
        media::ImageDto,
        page::{ContactLinkDto, FooterDto, NavLinkDto, PageDto, SeoDto},
        section::SectionDto,
    },
    server::{
        controller::{
            blog::{get_post, get_posts},
            contact::submit_contact,
            content::get_content_status,
            locale::get_locales,
            page::get_page,
        },
        error::AppError,
        state::AppState,
    },
};

/// Seconds until one more contact submission is allowed, across all clients.
const CONTACT_REPLENISH_SECS: u64 = 6;
const CONTACT_BURST_SIZE: u32 = 5;

#[derive(OpenApi)]
#[openapi(
    info(title = "Kiut Dental API"),
    paths(
        crate::server::controller::locale::get_locales,
        crate::server::controller::page::get_page,
        crate::server::controller::blog::get_posts,
        crate::server::controller::blog::get_post,
        crate::server::controller::contact::submit_contact,
        crate::server::controller::content::get_content_status,
    ),
    components(schemas(
        ErrorDto,
        LocaleDto,
        LocalesDto,
        ImageDto,
        NavLinkDto,
        SeoDto,
        ContactLinkDto,
        FooterDto,
        PageDto,
        SectionDto,
        AuthorDto,
        CategoryDto,
        BlogPostSummaryDto,
        ContentBlockDto,
        BlogPostDto,
        ContactRequestDto,
        PageStatusDto,
        ContentStatusDto,
    )),
    tags(
        (name = "locale", description = "Locales the site is served in"),
        (name = "page", description = "Composed pages"),
        (name = "blog", description = "Blog posts"),
        (name = "contact", description = "Consultation requests"),
        (name = "content", description = "Content store diagnostics"),
    )
)]
pub struct ApiDoc;

/// Builds the JSON API router with its documentation and middleware.
///
/// The contact endpoint is rate limited globally; every API route is traced
/// and allows cross-origin `GET` and `POST` requests.
///
/// # Returns
/// - `Ok(Router<AppState>)` - API routes awaiting application state
/// - `Err(AppError::InternalError)` - Rate limiter configuration rejected
pub fn router() -> Result<Router<AppState>, AppError> {
    let governor_conf = GovernorConfigBuilder::default()
        .key_extractor(GlobalKeyExtractor)
        .per_second(CONTACT_REPLENISH_SECS)
        .burst_size(CONTACT_BURST_SIZE)
        .finish()
        .ok_or_else(|| AppError::InternalError("Invalid contact rate limit".to_string()))?;

    let contact = Router::new()
        .route("/api/contact", post(submit_contact))
        .layer(GovernorLayer::new(Arc::new(governor_conf)));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    let router = Router::new()
        .route("/api/locales", get(get_locales))
        .route("/api/pages/{slug}", get(get_page))
        .route("/api/blog", get(get_posts))
        .route("/api/blog/{slug}", get(get_post))
        .route("/api/content/status", get(get_content_status))
        .merge(contact)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    Ok(router)
}

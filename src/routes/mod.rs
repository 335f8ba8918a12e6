//! Routers per entity family plus middleware composition.

pub mod common;

use crate::config::AllowedOrigins;
use crate::handlers::{activity, analytics, company, contact, deal, lead};
use crate::state::AppState;
use axum::http::{header, Method};
use axum::{routing::get, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn contact_routes(state: AppState) -> Router {
    Router::new()
        .route("/contacts", get(contact::list).post(contact::create))
        .route(
            "/contacts/:id",
            get(contact::read)
                .put(contact::update)
                .patch(contact::update)
                .delete(contact::delete),
        )
        .with_state(state)
}

pub fn company_routes(state: AppState) -> Router {
    Router::new()
        .route("/companies", get(company::list).post(company::create))
        .route(
            "/companies/:id",
            get(company::read)
                .put(company::update)
                .patch(company::update)
                .delete(company::delete),
        )
        .with_state(state)
}

pub fn lead_routes(state: AppState) -> Router {
    Router::new()
        .route("/leads", get(lead::list).post(lead::create))
        .route(
            "/leads/:id",
            get(lead::read)
                .put(lead::update)
                .patch(lead::update)
                .delete(lead::delete),
        )
        .with_state(state)
}

/// Deal CRUD, mounted at /pipelines.
pub fn pipeline_routes(state: AppState) -> Router {
    Router::new()
        .route("/pipelines", get(deal::list).post(deal::create))
        .route(
            "/pipelines/:id",
            get(deal::read)
                .put(deal::update)
                .patch(deal::update)
                .delete(deal::delete),
        )
        .with_state(state)
}

pub fn activity_routes(state: AppState) -> Router {
    Router::new()
        .route("/activities", get(activity::list).post(activity::create))
        .route(
            "/activities/:id",
            get(activity::read)
                .put(activity::update)
                .patch(activity::update)
                .delete(activity::delete),
        )
        .with_state(state)
}

pub fn analytics_routes(state: AppState) -> Router {
    Router::new()
        .route("/analytics/deals", get(analytics::deals))
        .route("/analytics/deals/:id", get(analytics::deal))
        .route("/analytics/leads", get(analytics::leads))
        .route("/analytics/leads/:id", get(analytics::lead))
        .route("/analytics/contacts-by-role", get(analytics::contacts_by_role))
        .route("/analytics/recent-contacts", get(analytics::recent_contacts))
        .route("/analytics/recent-companies", get(analytics::recent_companies))
        .route("/analytics/companies-by-month", get(analytics::companies_by_month))
        .route("/analytics/activities", get(analytics::activities))
        .route("/analytics/recent-activities", get(analytics::recent_activities))
        .with_state(state)
}

/// A wildcard allow-list permits any origin without credentials; an explicit
/// list permits credentialed requests from exactly those origins.
pub fn cors_layer(origins: &AllowedOrigins) -> CorsLayer {
    match origins {
        AllowedOrigins::Any => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        AllowedOrigins::List(list) => {
            let parsed: Vec<_> = list.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(parsed))
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
                .allow_credentials(true)
        }
    }
}

/// The whole HTTP surface with CORS and request tracing applied.
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.settings.allowed_origins);
    Router::new()
        .merge(common::common_routes(state.clone()))
        .merge(contact_routes(state.clone()))
        .merge(company_routes(state.clone()))
        .merge(lead_routes(state.clone()))
        .merge(pipeline_routes(state.clone()))
        .merge(activity_routes(state.clone()))
        .merge(analytics_routes(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

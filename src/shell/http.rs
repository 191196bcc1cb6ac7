use axum::{Router, response::Html, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::events::use_cases::create_event::inbound::http as create_event_http;
use crate::modules::events::use_cases::delete_event::inbound::http as delete_event_http;
use crate::modules::events::use_cases::get_event::inbound::http as get_event_http;
use crate::modules::events::use_cases::list_events::inbound::http as list_events_http;
use crate::modules::events::use_cases::search_events::inbound::http as search_events_http;
use crate::modules::events::use_cases::update_event::inbound::http as update_event_http;
use crate::modules::registrations::use_cases::list_registrations::inbound::http as list_registrations_http;
use crate::modules::registrations::use_cases::register_for_event::inbound::http as register_http;
use crate::shell::state::AppState;

async fn banner() -> Html<&'static str> {
    Html("<h2>College Event Management Backend Running</h2>")
}

async fn contact() -> Html<&'static str> {
    Html("<h2>Contact us Page</h2>")
}

async fn about_us() -> Html<&'static str> {
    Html("<h1>This is About Us Page</h1>")
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(banner))
        .route("/contact", get(contact))
        .route("/aboutus", get(about_us))
        .route(
            "/events",
            get(list_events_http::handle).post(create_event_http::handle),
        )
        .route("/events/search", get(search_events_http::handle))
        .route(
            "/events/{id}",
            get(get_event_http::handle)
                .put(update_event_http::handle)
                .delete(delete_event_http::handle),
        )
        .route(
            "/registrations",
            get(list_registrations_http::handle).post(register_http::handle),
        )
        .route(
            "/register",
            get(list_registrations_http::handle).post(register_http::handle),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

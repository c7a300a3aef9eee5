use axum::{extract::Request, http::Uri, routing::get, Router};
use tower::{util::MapRequest, ServiceBuilder};
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use crate::db::PlayerStore;

pub mod players;

/// Paths served by the API, in the order they are announced at startup.
pub const ENDPOINTS: [&str; 3] = [
    "GET /api/players",
    "GET /api/players/:id",
    "POST /api/players",
];

/// The complete service: path rewriting in front of the router.
pub type App = MapRequest<NormalizePath<Router>, fn(Request) -> Request>;

/// Builds the application over the given store.
///
/// Paths match case-insensitively and ignore a trailing slash, so
/// `/API/players/` reaches the same handler as `/api/players`. Both rewrites
/// run before routing, which is why they wrap the router instead of being
/// added with `Router::layer`.
pub fn router(store: PlayerStore) -> App {
    // Browser front-ends call the API cross-origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        .route(
            "/api/players",
            get(players::get_players).post(players::create_player),
        )
        .route("/api/players/{id}", get(players::get_player_by_id))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(store);

    ServiceBuilder::new()
        .map_request(lowercase_path as fn(Request) -> Request)
        .layer(NormalizePathLayer::trim_trailing_slash())
        .service(routes)
}

fn lowercase_path(mut request: Request) -> Request {
    let uri = request.uri();
    if !uri.path().bytes().any(|b| b.is_ascii_uppercase()) {
        return request;
    }

    let path = uri.path().to_ascii_lowercase();
    let path_and_query = match uri.query() {
        Some(query) => format!("{path}?{query}"),
        None => path,
    };

    let mut parts = uri.clone().into_parts();
    if let Ok(path_and_query) = path_and_query.parse() {
        parts.path_and_query = Some(path_and_query);
        if let Ok(uri) = Uri::from_parts(parts) {
            *request.uri_mut() = uri;
        }
    }

    request
}

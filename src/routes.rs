// src/routes.rs

use axum::{
    Router, http::Method, middleware,
    routing::{get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{account, auth, leaderboard, posts, quiz},
    state::AppState,
    utils::jwt::auth_middleware,
};

/// Assembles the main application router.
///
/// * Public routes: home leaderboards, auth, reading posts.
/// * Protected routes (Bearer token): account, quiz, writing posts.
/// * Applies global middleware (Trace, CORS) and injects the state.
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    let public_routes = Router::new()
        .route("/api/home", get(leaderboard::home))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/posts", get(posts::list_posts))
        .route("/api/posts/{id}", get(posts::get_post));

    let protected_routes = Router::new()
        .route(
            "/api/account",
            get(account::get_account).put(account::update_account),
        )
        .route("/api/quiz", get(quiz::start_quiz).post(quiz::submit_quiz))
        .route("/api/posts", post(posts::create_post))
        .route(
            "/api/posts/{id}",
            put(posts::update_post).delete(posts::delete_post),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

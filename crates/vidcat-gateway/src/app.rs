use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    clear_all_handler, create_video_handler, delete_video_handler, get_video_handler,
    health_handler, list_videos_handler, update_video_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    /// Builds the router with every route mounted at the root.
    pub fn router(state: AppState) -> Router {
        Self::router_with_base_path(state, "")
    }

    /// Builds the router with the catalog routes mounted under `base_path`
    /// (e.g. `/api`). An empty or `/` base path mounts them at the root.
    pub fn router_with_base_path(state: AppState, base_path: &str) -> Router {
        let routes = Router::new()
            .route("/videos", get(list_videos_handler).post(create_video_handler))
            .route(
                "/videos/{id}",
                get(get_video_handler)
                    .put(update_video_handler)
                    .delete(delete_video_handler),
            )
            .route(
                "/testing/all-data",
                post(clear_all_handler).delete(clear_all_handler),
            );

        let base_path = base_path.trim_matches('/');
        let routes = if base_path.is_empty() {
            routes
        } else {
            Router::new().nest(&format!("/{base_path}"), routes)
        };

        Router::new()
            .route("/health", get(health_handler))
            .merge(routes)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}

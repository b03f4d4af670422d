pub mod handlers;
mod routes;
mod state;

pub use routes::{create_router, FUNCTION_PATH};
pub use state::AppState;

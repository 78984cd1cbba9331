pub mod routes;
pub mod server_core;

pub use server_core::{create_router, AppState, EmotionServer};

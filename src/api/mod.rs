pub mod handlers;
pub mod middleware;
pub mod params;
pub mod routes;

pub use handlers::*;
pub use routes::*;

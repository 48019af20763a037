pub mod migrate;
pub mod postgres;
pub mod traits;

pub use migrate::*;
pub use postgres::*;
pub use traits::*;

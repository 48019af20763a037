pub mod catalog;
pub mod dataset;
pub mod kinds;

pub use catalog::*;
pub use dataset::*;
pub use kinds::*;

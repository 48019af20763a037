//! Seed data: decoding the seed document and inserting it into the store.

pub mod coerce;
pub mod error;
pub mod ingest;
pub mod loader;
pub mod rows;

pub use coerce::{coerce, coerce_tag, EnumTag, Nullable, StoreScalar};
pub use error::{CoercionError, SeedError};
pub use ingest::apply;
pub use loader::{from_reader, from_slice, load};
pub use rows::{GuitarRow, GuitarSpecValueRow, SeedRow, SpecRow};

//! SeaORM entities for the two tables.

pub mod post;
pub mod user;

pub mod connection;
pub mod games;
pub mod models;
pub mod ratings;
pub mod setup;

pub use connection::{DbConn, DbPool, create_pool, get_connection};
pub use models::*;

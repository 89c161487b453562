pub mod connection;
pub mod models;
pub mod players;
pub mod setup;
pub mod store;
pub mod tournaments;

pub use connection::{create_pool, get_connection, DbConn, DbPool};
pub use store::SqliteStore;

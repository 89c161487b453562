pub mod server;
pub mod standings;

/// Database file location, overridable for deployments.
pub fn database_path() -> String {
    std::env::var("DATABASE_PATH").unwrap_or_else(|_| "tennis_club.db".to_string())
}

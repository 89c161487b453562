#[derive(Debug, Clone)]
pub struct RankingSettings {
    /// Seconds a cached ranking computation stays fresh
    pub cache_ttl_secs: i64,
    /// Default entry count for the top-players endpoint
    pub default_top_count: usize,
    /// Upper bound accepted by the top-players endpoint
    pub top_limit_max: usize,
    /// Tournaments scanned for the detailed-stats view
    pub recent_tournaments: usize,
    /// Matches returned by the detailed-stats view
    pub recent_matches: usize,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            cache_ttl_secs: 300,
            default_top_count: 10,
            top_limit_max: 100,
            recent_tournaments: 10,
            recent_matches: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub admin_token: &'static str,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            admin_token: "secret",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub ranking: RankingSettings,
    pub server: ServerSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

mod structs;

pub use structs::RankingCache;

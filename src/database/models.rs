use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ValueRef};

use crate::domain::{Gender, MatchType, MedalType, TournamentStatus};

// Text-column round-trips for the domain enums. The schema CHECK constraints
// keep the stored values in range; anything else is a conversion failure.

impl FromSql for Gender {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        parse_enum(value, Gender::parse, "gender")
    }
}

impl FromSql for MedalType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        parse_enum(value, MedalType::parse, "medal type")
    }
}

impl FromSql for MatchType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        parse_enum(value, MatchType::parse, "match type")
    }
}

impl FromSql for TournamentStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        parse_enum(value, TournamentStatus::parse, "tournament status")
    }
}

fn parse_enum<T>(
    value: ValueRef<'_>,
    parse: fn(&str) -> Option<T>,
    what: &str,
) -> FromSqlResult<T> {
    let text = value.as_str()?;
    parse(text).ok_or_else(|| FromSqlError::Other(format!("unknown {}: {}", what, text).into()))
}

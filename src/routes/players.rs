use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use crate::db::PlayerStore;
use crate::error::ApiError;
use crate::models::{CreatePlayerRequest, Player};

// GET /api/players - List all players
pub async fn get_players(State(store): State<PlayerStore>) -> Json<Vec<Player>> {
    tracing::info!("GET request received for all players.");

    Json(store.all())
}

// GET /api/players/{id} - Get player by ID
pub async fn get_player_by_id(
    State(store): State<PlayerStore>,
    Path(raw_id): Path<String>,
) -> Result<Json<Player>, ApiError> {
    let player_id = parse_player_id(&raw_id);
    match player_id {
        Some(id) => tracing::info!("GET request received for player ID: {}", id),
        None => tracing::info!("GET request received for player ID: {:?} (not a number)", raw_id),
    }

    let player = player_id
        .and_then(|id| store.get(id))
        .ok_or(ApiError::NotFound)?;

    Ok(Json(player))
}

// POST /api/players - Create a new player
pub async fn create_player(
    State(store): State<PlayerStore>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    let name = body.get("name").and_then(Value::as_str).unwrap_or_default();
    tracing::info!("POST request received to create player: {}", name);

    let new_player = CreatePlayerRequest::from_body(body)?.validate()?;
    let player = store.insert(new_player);

    tracing::debug!(id = player.id, total = store.len(), "player created");

    Ok((StatusCode::CREATED, Json(player)))
}

/// Reads a leading base-10 integer: optional whitespace, optional sign, then
/// digits up to the first non-digit. `"2abc"` is 2; `"abc"` is `None`.
/// Values that overflow `i64` are `None` as well, since no stored id can match.
pub fn parse_player_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    let sign_len = trimmed.len() - unsigned.len();
    if sign_len > 1 {
        return None;
    }

    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits == 0 {
        return None;
    }

    trimmed[..sign_len + digits].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::parse_player_id;

    #[test]
    fn parses_plain_ids() {
        assert_eq!(parse_player_id("2"), Some(2));
        assert_eq!(parse_player_id("0042"), Some(42));
        assert_eq!(parse_player_id("-7"), Some(-7));
        assert_eq!(parse_player_id("+3"), Some(3));
    }

    #[test]
    fn ignores_trailing_garbage() {
        assert_eq!(parse_player_id("2abc"), Some(2));
        assert_eq!(parse_player_id("1.5"), Some(1));
        assert_eq!(parse_player_id(" 3"), Some(3));
    }

    #[test]
    fn non_numeric_is_none() {
        assert_eq!(parse_player_id("abc"), None);
        assert_eq!(parse_player_id(""), None);
        assert_eq!(parse_player_id("-"), None);
        assert_eq!(parse_player_id("+-1"), None);
        assert_eq!(parse_player_id("99999999999999999999"), None);
    }
}

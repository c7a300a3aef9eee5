use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::error::ApiError;

/// Largest integer a client-side `number` holds exactly (2^53 - 1)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A player record as stored and served by the API
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
    pub name: String,
    /// Kept as a JSON number so `1200` is echoed back as `1200`, not `1200.0`
    pub score: Number,
}

impl Player {
    pub fn new(id: i64, name: impl Into<String>, score: impl Into<Number>) -> Self {
        Player {
            id,
            name: name.into(),
            score: score.into(),
        }
    }
}

/// Body of `POST /api/players` before validation.
///
/// Both fields are left untyped so that a wrong type (e.g. `"score": "high"`)
/// reaches `validate` and gets the 400 message instead of a JSON rejection.
#[derive(Debug, Default)]
pub struct CreatePlayerRequest {
    pub name: Option<Value>,
    pub score: Option<Value>,
}

/// A create request that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlayer {
    pub name: String,
    pub score: Number,
}

impl CreatePlayerRequest {
    /// Only a JSON object carries fields; arrays and scalars are invalid data.
    pub fn from_body(body: Value) -> Result<Self, ApiError> {
        match body {
            Value::Object(mut fields) => Ok(CreatePlayerRequest {
                name: fields.remove("name"),
                score: fields.remove("score"),
            }),
            _ => Err(ApiError::InvalidData),
        }
    }

    /// Name first, then score. Either failing yields `ApiError::InvalidData`.
    pub fn validate(self) -> Result<NewPlayer, ApiError> {
        let name = match self.name {
            Some(Value::String(name)) if !name.is_empty() => name,
            _ => return Err(ApiError::InvalidData),
        };

        let score = match self.score {
            Some(Value::Number(score)) => normalize_score(score),
            _ => return Err(ApiError::InvalidData),
        };

        Ok(NewPlayer { name, score })
    }
}

/// Whole-valued floats such as `1100.0` or `1e3` are stored as integers, the
/// way a JSON `number` prints them.
fn normalize_score(score: Number) -> Number {
    match score.as_f64() {
        Some(value) if score.is_f64() && is_whole(value) => Number::from(value as i64),
        _ => score,
    }
}

fn is_whole(value: f64) -> bool {
    value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER
}

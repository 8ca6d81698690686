use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::callable::CallableError;

pub const DEFAULT_LENGTH: u32 = 75;
pub const CARNAGE_CATEGORY: &str = "Carnage";
pub const CARNAGE_LENGTH: u32 = 30;
const MIN_TOKEN_BUDGET: u64 = 400;

static LEADING_INT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?[0-9]+)").expect("valid leading-integer regex"));

/// `data` payload exactly as the caller sent it.
#[derive(Debug, Default, Deserialize)]
pub struct RawGenerationInput {
    #[serde(default)]
    pub category: Option<Value>,
    #[serde(default)]
    pub length: Option<Value>,
}

impl RawGenerationInput {
    /// Reads a callable `data` value. Only a JSON object carries fields;
    /// arrays, scalars and `null` read as empty input.
    pub fn from_data(data: Value) -> Self {
        match data {
            Value::Object(_) => serde_json::from_value(data).unwrap_or_default(),
            _ => Self::default(),
        }
    }
}

/// A validated request with its effective length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub category: String,
    pub length: u32,
}

impl GenerationRequest {
    pub fn new(category: impl Into<String>, length: Option<u32>) -> Result<Self, CallableError> {
        let category = category.into();
        if category.is_empty() {
            return Err(missing_category());
        }
        let length = if category == CARNAGE_CATEGORY {
            CARNAGE_LENGTH
        } else {
            length.filter(|l| *l > 0).unwrap_or(DEFAULT_LENGTH)
        };
        Ok(Self { category, length })
    }

    pub fn from_raw(raw: RawGenerationInput) -> Result<Self, CallableError> {
        let category = match raw.category {
            Some(Value::String(s)) => s,
            _ => return Err(missing_category()),
        };
        Self::new(category, raw.length.as_ref().and_then(parse_length))
    }

    /// `max(400, ceil(length * 2))`.
    pub fn token_budget(&self) -> u64 {
        (u64::from(self.length) * 2).max(MIN_TOKEN_BUDGET)
    }
}

fn missing_category() -> CallableError {
    CallableError::InvalidArgument(
        "The function must be called with argument 'category'.".to_string(),
    )
}

/// Lenient integer read: numbers truncate, strings use their leading digits.
/// Zero, negatives and garbage yield `None`.
fn parse_length(value: &Value) -> Option<u32> {
    let n: i128 = match value {
        Value::Number(num) => {
            if let Some(i) = num.as_i64() {
                i as i128
            } else if let Some(u) = num.as_u64() {
                u as i128
            } else {
                let f = num.as_f64()?;
                if !f.is_finite() {
                    return None;
                }
                f.trunc() as i128
            }
        }
        Value::String(s) => {
            let digits = LEADING_INT.captures(s)?.get(1)?.as_str();
            match digits.parse::<i128>() {
                Ok(n) => n,
                // longer than i128: only the sign matters
                Err(_) if digits.starts_with('-') => return None,
                Err(_) => i128::MAX,
            }
        }
        _ => return None,
    };
    if n <= 0 {
        return None;
    }
    Some(u32::try_from(n).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawGenerationInput {
        RawGenerationInput::from_data(value)
    }

    #[test]
    fn missing_or_empty_category_is_invalid() {
        let inputs = [
            json!({}),
            json!({ "category": "" }),
            json!({ "category": null }),
            json!({ "category": 7 }),
        ];
        for input in inputs {
            let err = GenerationRequest::from_raw(raw(input)).unwrap_err();
            assert_eq!(err.code(), "invalid-argument");
        }
    }

    #[test]
    fn length_defaults_to_75() {
        let req = GenerationRequest::from_raw(raw(json!({ "category": "Animals" }))).unwrap();
        assert_eq!(req.length, 75);
    }

    #[test]
    fn carnage_forces_30_even_when_length_given() {
        let req =
            GenerationRequest::from_raw(raw(json!({ "category": "Carnage", "length": 1000 })))
                .unwrap();
        assert_eq!(req.length, 30);
        assert_eq!(GenerationRequest::new("Carnage", None).unwrap().length, 30);
    }

    #[test]
    fn carnage_match_is_case_sensitive() {
        assert_eq!(GenerationRequest::new("carnage", Some(120)).unwrap().length, 120);
    }

    #[test]
    fn length_accepts_numbers_and_numeric_strings() {
        let cases = [
            (json!(120), 120),
            (json!("120"), 120),
            (json!("  42 words"), 42),
            (json!(12.9), 12),
            (json!("+8"), 8),
        ];
        for (length, expected) in cases {
            let input = raw(json!({ "category": "Cats", "length": length.clone() }));
            let req = GenerationRequest::from_raw(input).unwrap();
            assert_eq!(req.length, expected, "length input {length}");
        }
    }

    #[test]
    fn unusable_length_falls_back_to_default() {
        let lengths = [
            json!("abc"),
            json!(0),
            json!("0"),
            json!(-5),
            json!(true),
            json!(null),
            json!(""),
        ];
        for length in lengths {
            let input = raw(json!({ "category": "Cats", "length": length }));
            let req = GenerationRequest::from_raw(input).unwrap();
            assert_eq!(req.length, DEFAULT_LENGTH);
        }
    }

    #[test]
    fn huge_length_saturates_and_budget_keeps_doubling() {
        let req = GenerationRequest::from_raw(raw(json!({
            "category": "Cats",
            "length": "99999999999999999999999999999999999999999999"
        })))
        .unwrap();
        assert_eq!(req.length, u32::MAX);
        assert_eq!(req.token_budget(), u64::from(u32::MAX) * 2);

        let req = GenerationRequest::new("Cats", Some(u32::MAX / 2 + 1)).unwrap();
        assert_eq!(req.token_budget(), u64::from(u32::MAX / 2 + 1) * 2);
    }

    #[test]
    fn non_object_data_has_no_category() {
        for data in [json!(["Animals", 50]), json!(["Animals"]), json!("Animals"), json!(null)] {
            let input = RawGenerationInput::from_data(data);
            assert!(input.category.is_none());
            let err = GenerationRequest::from_raw(input).unwrap_err();
            assert_eq!(err.code(), "invalid-argument");
        }
    }

    #[test]
    fn token_budget_has_a_floor_of_400() {
        assert_eq!(GenerationRequest::new("a", Some(75)).unwrap().token_budget(), 400);
        assert_eq!(GenerationRequest::new("a", Some(200)).unwrap().token_budget(), 400);
        assert_eq!(GenerationRequest::new("a", Some(201)).unwrap().token_budget(), 402);
        assert_eq!(GenerationRequest::new("a", Some(300)).unwrap().token_budget(), 600);
    }
}

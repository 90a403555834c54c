use crate::cli::types::{Placeholder, Position};
use crate::error::{RosterError, Result};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use std::collections::BTreeMap;


/// Raw feed keyed by Sleeper player id.
pub type RawRoster = BTreeMap<String, RawPlayer>;

/// Filter output keyed by player id, or team abbreviation for synthesized defenses.
pub type FilteredRoster = BTreeMap<String, FilteredPlayer>;

/// Loose truthiness: `"active": 1` counts the same as `true`.
fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn de_truthy<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;
    Ok(is_truthy(&v))
}

/// Accept any JSON value; a type mismatch becomes `None` instead of an error.
fn de_lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let v = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(v).ok())
}

/// One player record as Sleeper reports it.
///
/// Only the fields the roster filter looks at are kept; the feed carries
/// dozens more (college, height, injury notes, ...) which are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawPlayer {
    #[serde(default, deserialize_with = "de_truthy")]
    pub active: bool,
    #[serde(default, deserialize_with = "de_lenient")]
    pub sport: Option<String>,
    #[serde(default, deserialize_with = "de_lenient")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "de_lenient")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "de_lenient")]
    pub team: Option<String>,
    #[serde(default, deserialize_with = "de_lenient")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "de_lenient")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "de_lenient")]
    pub last_name: Option<String>,
    /// Kept as the feed's JSON number so `7` and `7.0` are written back unchanged.
    #[serde(default, deserialize_with = "de_lenient")]
    pub years_exp: Option<Number>,
    #[serde(default, deserialize_with = "de_lenient")]
    pub depth_chart_order: Option<Number>,
}

impl RawPlayer {
    /// Decode a single record. Anything that is not a JSON object decodes to
    /// an all-absent (and therefore inactive) record.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Turn the decoded response body into a [`RawRoster`].
///
/// The top level must be an object; individual records are decoded leniently.
pub fn decode_roster(body: Value) -> Result<RawRoster> {
    match body {
        Value::Object(map) => Ok(map
            .into_iter()
            .map(|(pid, record)| (pid, RawPlayer::from_value(record)))
            .collect()),
        other => Err(RosterError::UnexpectedShape {
            found: json_kind(&other).to_string(),
        }),
    }
}

/// An output value that is always written, even when the source lacked it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    Value(T),
    Null,
    Empty,
}

impl<T> Field<T> {
    /// Wrap an optional raw value, falling back to `placeholder` when absent.
    pub fn from_option(value: Option<T>, placeholder: Placeholder) -> Self {
        match (value, placeholder) {
            (Some(v), _) => Field::Value(v),
            (None, Placeholder::Null) => Field::Null,
            (None, Placeholder::Empty) => Field::Empty,
        }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Field::Value(v) => v.serialize(serializer),
            Field::Null => serializer.serialize_none(),
            Field::Empty => serializer.serialize_str(""),
        }
    }
}

/// The slimmed-down record written to the roster file.
///
/// Fields are declared alphabetically so each record serializes with sorted
/// keys. The extended fields are `None` (and omitted) under the core field set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredPlayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth_chart_order: Option<Field<Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<Field<String>>,
    pub full_name: Field<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<Field<String>>,
    pub player_id: String,
    pub position: Position,
    pub status: Field<String>,
    pub team: Field<String>,
    pub years_exp: Field<Number>,
}

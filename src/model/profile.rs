use crate::model::ApiError;
use chrono::{DateTime, TimeZone};
use serde_json::{Map, Value};
use std::fmt::Display;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A chess.com player record.
///
/// The API gives no guarantees about which fields exist, so every field is
/// optional and only picked up when it has the expected JSON type. Falsy
/// timestamps (`0`) and empty strings count as absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerProfile {
    pub username: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub avatar: Option<String>,
    pub url: Option<String>,
    pub country: Option<String>,
    /// Epoch seconds.
    pub joined: Option<i64>,
    pub followers: Option<u64>,
    /// Epoch seconds.
    pub last_online: Option<i64>,
    pub badges: Vec<String>,
    raw: Value,
}

fn text_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object
        .get(key)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn timestamp_field(object: &Map<String, Value>, key: &str) -> Option<i64> {
    let value = object.get(key)?;
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|secs| secs as i64))
        .filter(|secs| *secs != 0)
}

fn badge_names(value: Option<&Value>) -> Vec<String> {
    let Some(badges) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    badges
        .iter()
        .filter_map(|badge| match badge {
            Value::String(name) => Some(name.as_str()),
            Value::Object(fields) => fields.get("name").and_then(Value::as_str),
            _ => None,
        })
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn format_timestamp<Tz>(secs: i64, tz: &Tz, format: &str) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    DateTime::from_timestamp(secs, 0).map(|utc| utc.with_timezone(tz).format(format).to_string())
}

impl PlayerProfile {
    /// Picks the known fields out of any JSON value. Non-objects yield an
    /// empty profile rather than an error.
    pub fn from_value(raw: Value) -> Self {
        let Some(object) = raw.as_object() else {
            return PlayerProfile {
                raw,
                ..Default::default()
            };
        };

        PlayerProfile {
            username: text_field(object, "username"),
            name: text_field(object, "name"),
            title: text_field(object, "title"),
            avatar: text_field(object, "avatar"),
            url: text_field(object, "url"),
            country: text_field(object, "country"),
            joined: timestamp_field(object, "joined"),
            followers: object.get("followers").and_then(Value::as_u64),
            last_online: timestamp_field(object, "last_online"),
            badges: badge_names(object.get("badges")),
            raw,
        }
    }

    pub fn from_json(body: &str) -> Result<Self, ApiError> {
        let raw: Value = serde_json::from_str(body)?;
        Ok(Self::from_value(raw))
    }

    /// Display name, falling back to the username.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().or(self.username.as_deref())
    }

    /// Last-online timestamp in epoch milliseconds.
    pub fn last_online_ms(&self) -> Option<i64> {
        self.last_online.map(|secs| secs.saturating_mul(1000))
    }

    pub fn joined_date<Tz>(&self, tz: &Tz) -> Option<String>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.joined
            .and_then(|secs| format_timestamp(secs, tz, DATE_FORMAT))
    }

    pub fn last_seen_at<Tz>(&self, tz: &Tz) -> Option<String>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.last_online
            .and_then(|secs| format_timestamp(secs, tz, DATE_TIME_FORMAT))
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn raw_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.raw).unwrap_or_else(|_| self.raw.to_string())
    }
}

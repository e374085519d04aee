use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Result, UpstreamError};

/// An event as returned by the Elbphilharmonie booking API.
///
/// Fields missing from the response decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventRecord {
    #[serde(rename = "evis_id")]
    pub id: String,
    #[serde(rename = "title_de")]
    pub title: String,
    #[serde(rename = "subtitle_de")]
    pub subtitle: String,
    #[serde(rename = "description_long_de")]
    pub description: String,
    #[serde(rename = "room_dispname")]
    pub room: String,
    pub image_url: String,
    #[serde(rename = "image_copyright_de")]
    pub image_copyright: String,
    pub website_url: String,
    #[serde(rename = "date_start")]
    pub start_date: String,
    #[serde(rename = "date_end")]
    pub end_date: String,
    #[serde(rename = "modified_at")]
    pub modification_date: String,
    pub url: String,
    #[serde(rename = "item_html")]
    pub html: String,
}

impl EventRecord {
    /// Location of the schedule document for this event.
    pub fn schedule_url(&self) -> String {
        format!("{}.ics", self.website_url)
    }
}

/// The set of event ids a user has saved. Iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesList {
    event_ids: HashSet<String>,
}

impl FavoritesList {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.event_ids.iter().map(String::as_str)
    }

    pub fn contains(&self, event_id: &str) -> bool {
        self.event_ids.contains(event_id)
    }

    pub fn len(&self) -> usize {
        self.event_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.event_ids.is_empty()
    }

    /// Decodes the body of a favorites response.
    ///
    /// The event ids are the keys of the `events` object. An empty list may
    /// be sent as `[]` or `null` instead of `{}`.
    pub fn from_json(body: &[u8], url: &str) -> Result<Self> {
        #[derive(Deserialize)]
        struct Response {
            #[serde(default)]
            events: serde_json::Value,
        }

        let decode_error = |message: String| UpstreamError::Decode {
            url: url.to_string(),
            message,
        };

        let response: Response =
            serde_json::from_slice(body).map_err(|e| decode_error(e.to_string()))?;
        match response.events {
            serde_json::Value::Object(events) => Ok(events.into_iter().map(|(id, _)| id).collect()),
            serde_json::Value::Null => Ok(Self::default()),
            serde_json::Value::Array(events) if events.is_empty() => Ok(Self::default()),
            other => Err(decode_error(format!(
                "expected an object of events, found {other}"
            ))),
        }
    }
}

impl FromIterator<String> for FavoritesList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            event_ids: iter.into_iter().collect(),
        }
    }
}

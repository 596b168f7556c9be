//! Recurring content fetches (URL, RSS feed, or uploaded file).

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::null_as_default;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    #[default]
    Url,
    Rss,
    File,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Hourly,
    #[default]
    Daily,
    Weekly,
    Monthly,
}

macro_rules! lowercase_enum_text {
    ($ty:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $ty {
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($text => Ok(Self::$variant),)+
                    other => Err(format!("unknown {}: {other}", stringify!($ty))),
                }
            }
        }
    };
}

lowercase_enum_text!(SourceType { Url => "url", Rss => "rss", File => "file" });
lowercase_enum_text!(Frequency { Hourly => "hourly", Daily => "daily", Weekly => "weekly", Monthly => "monthly" });

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: String,
    #[serde(default)]
    pub source_type: SourceType,
    #[serde(default, alias = "article_url", deserialize_with = "null_as_default")]
    pub source_value: String,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(default)]
    pub last_fetched: Option<String>,
    #[serde(default)]
    pub next_fetch: Option<String>,
    #[serde(default)]
    pub workflow_id: Option<String>,
    #[serde(default = "active_by_default")]
    pub active: bool,
}

fn active_by_default() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewSchedule {
    pub source_type: SourceType,
    pub source_value: String,
    pub frequency: Frequency,
}

impl NewSchedule {
    /// # Errors
    ///
    /// Returns a message when the source value is blank.
    pub fn validate(&self) -> Result<(), String> {
        if self.source_value.trim().is_empty() {
            return Err(format!("A {} source is required", self.source_type));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SchedulePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

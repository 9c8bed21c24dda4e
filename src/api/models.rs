use serde::{Deserialize, Deserializer};

use crate::utils::{format_published_at, format_time};

/// Audio file attached to an episode, as served by the API.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct EpisodeFile {
    pub url: String,
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub duration: f64,
}

/// Episode record exactly as the API returns it.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct RawEpisode {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub members: String,
    #[serde(default, alias = "publishedAt")]
    pub published_at: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub file: EpisodeFile,
}

/// Episode ready for display.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Episode {
    pub id: String,
    pub title: String,
    pub members: String,
    pub thumbnail: String,
    pub published_at: String,
    /// Whole seconds.
    pub duration: u32,
    pub formatted_duration: String,
    pub url: String,
    pub description: String,
}

impl Episode {
    pub fn from_raw(raw: RawEpisode) -> Self {
        let duration = whole_seconds(raw.file.duration);
        Self {
            published_at: format_published_at(&raw.published_at),
            formatted_duration: format_time(duration),
            duration,
            id: raw.id,
            title: raw.title,
            members: raw.members,
            thumbnail: raw.thumbnail,
            url: raw.file.url,
            description: raw.description,
        }
    }
}

fn whole_seconds(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.min(u32::MAX as f64) as u32
}

/// Durations arrive as numbers from some backends and numeric strings from
/// others. Anything else decodes as NaN and ends up as zero seconds.
fn lenient_seconds<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        serde_json::Value::String(text) => text.trim().parse::<f64>().unwrap_or(f64::NAN),
        _ => f64::NAN,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "id": "a-importancia-da-contribuicao-em-open-source",
        "title": "Faladev #30 | A importância da contribuição em Open Source",
        "members": "Diego Fernandes, João Pedro, Diego Haz e Bruno Lemos",
        "published_at": "2021-01-22 10:00:00",
        "thumbnail": "https://example.com/opensource.jpg",
        "description": "<p>Nesse episódio do Faladev...</p>",
        "file": {
            "url": "https://example.com/opensource.m4a",
            "type": "audio/x-m4a",
            "duration": 3981
        }
    }"#;

    #[test]
    fn maps_api_record_to_episode() {
        let raw: RawEpisode = serde_json::from_str(SAMPLE).unwrap();
        let episode = Episode::from_raw(raw);

        assert_eq!(episode.id, "a-importancia-da-contribuicao-em-open-source");
        assert_eq!(episode.published_at, "22 jan 2021");
        assert_eq!(episode.duration, 3981);
        assert_eq!(episode.formatted_duration, "01:06:21");
        assert_eq!(episode.url, "https://example.com/opensource.m4a");
        assert_eq!(episode.description, "<p>Nesse episódio do Faladev...</p>");
    }

    #[test]
    fn duration_may_be_a_numeric_string() {
        let raw: RawEpisode = serde_json::from_str(
            r#"{"id": "x", "title": "X", "file": {"url": "u", "duration": " 125.9 "}}"#,
        )
        .unwrap();
        let episode = Episode::from_raw(raw);
        assert_eq!(episode.duration, 125);
        assert_eq!(episode.formatted_duration, "00:02:05");
    }

    #[test]
    fn bad_or_negative_durations_become_zero() {
        for duration in [r#""abc""#, "-30", "null", "true"] {
            let json = format!(
                r#"{{"id": "x", "title": "X", "file": {{"url": "u", "duration": {duration}}}}}"#
            );
            let raw: RawEpisode = serde_json::from_str(&json).unwrap();
            assert_eq!(Episode::from_raw(raw).duration, 0, "duration {duration}");
        }
    }

    #[test]
    fn list_records_without_description_still_decode() {
        let raw: RawEpisode = serde_json::from_str(
            r#"{"id": "x", "title": "X", "members": "Ana", "file": {"url": "u", "duration": 1}}"#,
        )
        .unwrap();
        assert!(raw.description.is_empty());
        assert_eq!(raw.file.duration, 1.0);
    }
}

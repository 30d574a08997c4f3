// models.rs
//
// Copyright 2024-2025 Lincast Developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! The records exchanged with the server.
//!
//! All of them are created server-side; the client only reads them back and
//! writes whole-or-partial updates through the [`crate::api`] functions.
//! Timestamps travel as ISO-8601 strings and are parsed into UTC date-times.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A podcast the server knows about. Immutable from the client's point of
/// view except for the subscription flag.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Podcast {
    pub id: i32,
    pub subscribed: bool,
    #[serde(rename = "authorName")]
    pub author_name: String,
    #[serde(rename = "authorEmail")]
    pub author_email: String,
    pub title: String,
    pub description: String,
    pub categories: Vec<String>,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    #[serde(rename = "imageTitle")]
    pub image_title: String,
    pub link: String,
    #[serde(rename = "feedLink")]
    pub feed_link: String,
    #[serde(rename = "feedType")]
    pub feed_type: String,
    #[serde(rename = "feedVersion")]
    pub feed_version: String,
    pub language: String,
    /// When the feed itself reported its last update.
    pub updated: DateTime<Utc>,
    #[serde(rename = "lastCheck")]
    pub last_check: DateTime<Utc>,
    pub added: DateTime<Utc>,
}

/// An episode of a [`Podcast`].
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Episode {
    pub id: i32,
    /// Id of the podcast this episode belongs to. Not enforced client-side.
    #[serde(rename = "podcastID")]
    pub podcast_id: i32,
    pub title: String,
    pub description: String,
    pub link: String,
    #[serde(rename = "authorName")]
    pub author_name: String,
    pub guid: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    #[serde(rename = "imageTitle")]
    pub image_title: String,
    pub categories: Vec<String>,
    #[serde(rename = "enclosureURL")]
    pub enclosure_url: String,
    #[serde(rename = "enclosureLength")]
    pub enclosure_length: String,
    #[serde(rename = "enclosureType")]
    pub enclosure_type: String,
    pub season: String,
    pub published: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub played: bool,
    #[serde(rename = "currentProgress")]
    pub current_progress: i64,
}

/// The single "now playing" pointer. At most one exists server-side.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct PlaybackInfo {
    #[serde(rename = "podcastID")]
    pub podcast_id: i32,
    #[serde(rename = "episodeID")]
    pub episode_id: i32,
}

/// Legacy now-playing record kept by `/player/progress`. Identifies the
/// episode by GUID instead of a numeric id.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct CurrentProgress {
    pub progress: i64,
    #[serde(rename = "episodeID")]
    pub episode_id: String,
    #[serde(rename = "podcastID")]
    pub podcast_id: i32,
}

/// An entry of the playback queue. `position` defines the ordering but is
/// not guaranteed to be contiguous.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct QueueEpisode {
    pub id: i32,
    #[serde(rename = "podcastID")]
    pub podcast_id: i32,
    #[serde(rename = "episodeID")]
    pub episode_id: String,
    pub position: i32,
}

/// The whole playback queue, ordered.
pub type Queue = Vec<QueueEpisode>;

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use pretty_assertions::assert_eq;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn parse_podcast() -> Result<()> {
        let input = r#"{
            "id": 7,
            "subscribed": true,
            "authorName": "Jack Rhysider",
            "authorEmail": "jack@example.com",
            "title": "Darknet Diaries",
            "description": "True stories from the dark side of the Internet.",
            "categories": ["Technology", "True Crime"],
            "imageURL": "https://example.com/art.jpg",
            "imageTitle": "Darknet Diaries",
            "link": "https://darknetdiaries.com",
            "feedLink": "https://feeds.megaphone.fm/darknetdiaries",
            "feedType": "rss",
            "feedVersion": "2.0",
            "language": "en",
            "updated": "2021-06-08T06:56:00Z",
            "lastCheck": "2021-06-09T12:00:00Z",
            "added": "2020-01-01T00:00:00Z"
        }"#;
        let p: Podcast = serde_json::from_str(input)?;
        assert_eq!(7, p.id);
        assert!(p.subscribed);
        assert_eq!("Darknet Diaries", p.title);
        assert_eq!(
            vec!["Technology".to_string(), "True Crime".to_string()],
            p.categories
        );
        assert_eq!("https://feeds.megaphone.fm/darknetdiaries", p.feed_link);
        assert_eq!(utc("2021-06-08T06:56:00Z"), p.updated);
        assert_eq!(utc("2021-06-09T12:00:00Z"), p.last_check);
        Ok(())
    }

    #[test]
    fn parse_episode() -> Result<()> {
        let input = r#"{
            "id": 89,
            "podcastID": 7,
            "title": "Cyber Bunker",
            "description": "A data center in a cold war bunker.",
            "link": "https://darknetdiaries.com/episode/89",
            "authorName": "Jack Rhysider",
            "guid": "ep-89",
            "imageURL": "https://example.com/89.jpg",
            "imageTitle": "",
            "categories": [],
            "enclosureURL": "https://example.com/89.mp3",
            "enclosureLength": "52416000",
            "enclosureType": "audio/mpeg",
            "season": "1",
            "published": "2021-03-02T08:00:00Z",
            "updated": "2021-03-02T08:00:00Z",
            "played": false,
            "currentProgress": 2760
        }"#;
        let e: Episode = serde_json::from_str(input)?;
        assert_eq!(89, e.id);
        assert_eq!(7, e.podcast_id);
        assert_eq!("ep-89", e.guid);
        assert_eq!(utc("2021-03-02T08:00:00Z"), e.published);
        assert!(!e.played);
        assert_eq!(2760, e.current_progress);
        Ok(())
    }

    #[test]
    fn parse_queue() -> Result<()> {
        let input = r#"[
            {"id": 1, "podcastID": 7, "episodeID": "ep-89", "position": 0},
            {"id": 2, "podcastID": 3, "episodeID": "ep-12", "position": 5}
        ]"#;
        let q: Queue = serde_json::from_str(input)?;
        assert_eq!(2, q.len());
        assert_eq!("ep-89", q[0].episode_id);
        // positions order the queue but don't have to be contiguous
        assert_eq!(5, q[1].position);
        Ok(())
    }

    #[test]
    fn playback_info_roundtrip() -> Result<()> {
        let info = PlaybackInfo {
            podcast_id: 7,
            episode_id: 89,
        };
        let s = serde_json::to_string(&info)?;
        assert_eq!(r#"{"podcastID":7,"episodeID":89}"#, s);
        assert_eq!(info, serde_json::from_str(&s)?);
        Ok(())
    }

    #[test]
    fn playback_info_starts_zeroed() {
        let info = PlaybackInfo::default();
        assert_eq!(0, info.podcast_id);
        assert_eq!(0, info.episode_id);
    }
}

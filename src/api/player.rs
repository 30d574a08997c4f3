// api/player.rs
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

//! Now-playing pointer and playback progress.

use crate::api::Client;
use crate::errors::ApiError;
use crate::models::{CurrentProgress, PlaybackInfo};

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
struct ProgressBody {
    progress: i64,
}

#[derive(Serialize, Debug)]
struct StatusBody {
    played: bool,
}

/// The episode the player is currently on. The server answers 404 when
/// nothing is being played.
pub async fn get_playback_info(client: &Client) -> Result<PlaybackInfo, ApiError> {
    let url = client.endpoint("/player/playback_info")?;
    client.get_json(url).await
}

pub async fn update_playback_info(client: &Client, info: &PlaybackInfo) -> Result<(), ApiError> {
    let url = client.endpoint("/player/playback_info")?;
    client.put_json(url, info).await
}

/// Legacy variant of the now-playing pointer, kept for older servers that
/// track the episode by GUID together with its progress.
pub async fn get_current_progress(client: &Client) -> Result<CurrentProgress, ApiError> {
    let url = client.endpoint("/player/progress")?;
    client.get_json(url).await
}

/// Legacy counterpart of [`get_current_progress`].
pub async fn send_current_progress(
    client: &Client,
    progress: &CurrentProgress,
) -> Result<(), ApiError> {
    let url = client.endpoint("/player/progress")?;
    client.put_json(url, progress).await
}

/// Playback position of one episode, in seconds.
pub async fn get_episode_progress(
    client: &Client,
    podcast_id: i32,
    episode_id: i32,
) -> Result<i64, ApiError> {
    let url = client.endpoint(&format!(
        "/podcasts/{}/episodes/{}/progress",
        podcast_id, episode_id
    ))?;
    let body: ProgressBody = client.get_json(url).await?;
    Ok(body.progress)
}

pub async fn update_episode_progress(
    client: &Client,
    podcast_id: i32,
    episode_id: i32,
    progress: i64,
) -> Result<(), ApiError> {
    let url = client.endpoint(&format!(
        "/podcasts/{}/episodes/{}/progress",
        podcast_id, episode_id
    ))?;
    client.put_json(url, &ProgressBody { progress }).await
}

/// Marks an episode as played or unplayed.
pub async fn set_episode_status(
    client: &Client,
    podcast_id: i32,
    episode_id: i32,
    played: bool,
) -> Result<(), ApiError> {
    let url = client.endpoint(&format!(
        "/podcasts/{}/episodes/{}/status",
        podcast_id, episode_id
    ))?;
    client.put_json(url, &StatusBody { played }).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use http_test_server::http::{Method, Status};
    use http_test_server::TestServer;
    use pretty_assertions::assert_eq;

    fn client_for(server: &TestServer) -> Result<Client> {
        Ok(Client::new(&format!("http://127.0.0.1:{}", server.port()))?)
    }

    #[test]
    fn test_get_playback_info() -> Result<()> {
        let rt = tokio::runtime::Runtime::new()?;
        let server = TestServer::new()?;
        server
            .create_resource("/api/v0/player/playback_info")
            .status(Status::OK)
            .header("Content-Type", "application/json")
            .body(r#"{"podcastID": 7, "episodeID": 89}"#);

        let client = client_for(&server)?;
        let info = rt.block_on(get_playback_info(&client))?;
        assert_eq!(7, info.podcast_id);
        assert_eq!(89, info.episode_id);
        Ok(())
    }

    #[test]
    fn test_get_playback_info_nothing_playing() -> Result<()> {
        let rt = tokio::runtime::Runtime::new()?;
        let server = TestServer::new()?;
        server
            .create_resource("/api/v0/player/playback_info")
            .status(Status::NotFound)
            .body("there is no episode being played");

        let client = client_for(&server)?;
        let err = rt.block_on(get_playback_info(&client)).unwrap_err();
        assert_eq!(Some(404), err.status().map(|s| s.as_u16()));
        Ok(())
    }

    #[test]
    fn test_update_playback_info() -> Result<()> {
        let rt = tokio::runtime::Runtime::new()?;
        let server = TestServer::new()?;
        server
            .create_resource("/api/v0/player/playback_info")
            .method(Method::PUT)
            .status(Status::Created);

        let client = client_for(&server)?;
        let info = PlaybackInfo {
            podcast_id: 7,
            episode_id: 89,
        };
        rt.block_on(update_playback_info(&client, &info))?;
        Ok(())
    }

    #[test]
    fn test_get_episode_progress() -> Result<()> {
        let rt = tokio::runtime::Runtime::new()?;
        let server = TestServer::new()?;
        server
            .create_resource("/api/v0/podcasts/7/episodes/89/progress")
            .status(Status::OK)
            .header("Content-Type", "application/json")
            .body(r#"{"progress": 2760}"#);

        let client = client_for(&server)?;
        let progress = rt.block_on(get_episode_progress(&client, 7, 89))?;
        assert_eq!(2760, progress);
        Ok(())
    }

    #[test]
    fn test_update_episode_progress() -> Result<()> {
        let rt = tokio::runtime::Runtime::new()?;
        let server = TestServer::new()?;
        server
            .create_resource("/api/v0/podcasts/7/episodes/89/progress")
            .method(Method::PUT)
            .status(Status::Created);

        let client = client_for(&server)?;
        rt.block_on(update_episode_progress(&client, 7, 89, 2761))?;
        Ok(())
    }

    #[test]
    fn test_legacy_progress_roundtrip_shape() -> Result<()> {
        let rt = tokio::runtime::Runtime::new()?;
        let server = TestServer::new()?;
        server
            .create_resource("/api/v0/player/progress")
            .status(Status::OK)
            .header("Content-Type", "application/json")
            .body(r#"{"progress": 120, "episodeID": "ep-89", "podcastID": 7}"#);

        let client = client_for(&server)?;
        let p = rt.block_on(get_current_progress(&client))?;
        assert_eq!(120, p.progress);
        assert_eq!("ep-89", p.episode_id);
        assert_eq!(7, p.podcast_id);
        Ok(())
    }

    #[test]
    fn test_set_episode_status() -> Result<()> {
        let rt = tokio::runtime::Runtime::new()?;
        let server = TestServer::new()?;
        server
            .create_resource("/api/v0/podcasts/7/episodes/89/status")
            .method(Method::PUT)
            .status(Status::Created);

        let client = client_for(&server)?;
        rt.block_on(set_episode_status(&client, 7, 89, true))?;
        Ok(())
    }
}

// api/subscriptions.rs
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

//! Subscriptions and per-podcast episode listings.

use crate::api::Client;
use crate::errors::ApiError;
use crate::models::{Episode, Podcast};

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Serialize, Debug)]
struct SubscribeBody<'a> {
    url: &'a str,
}

/// All podcasts the user is subscribed to.
pub async fn get_subscriptions(client: &Client) -> Result<Vec<Podcast>, ApiError> {
    let url = client.endpoint("/user/subscriptions")?;
    client.get_json(url).await
}

pub async fn get_podcast(client: &Client, podcast_id: i32) -> Result<Podcast, ApiError> {
    let url = client.endpoint(&format!("/podcasts/{}/details", podcast_id))?;
    client.get_json(url).await
}

pub async fn get_episodes(client: &Client, podcast_id: i32) -> Result<Vec<Episode>, ApiError> {
    let url = client.endpoint(&format!("/podcasts/{}/episodes", podcast_id))?;
    client.get_json(url).await
}

pub async fn get_episode(
    client: &Client,
    podcast_id: i32,
    episode_id: i32,
) -> Result<Episode, ApiError> {
    let url = client.endpoint(&format!(
        "/podcasts/{}/episodes/{}",
        podcast_id, episode_id
    ))?;
    client.get_json(url).await
}

/// Subscribes to the feed at `feed_url`. The server fetches and stores the
/// feed; re-fetch the subscription list to see the new podcast.
pub async fn subscribe(client: &Client, feed_url: &str) -> Result<(), ApiError> {
    let url = client.endpoint("/podcasts/subscribe")?;
    client.post_json(url, &SubscribeBody { url: feed_url }).await
}

pub async fn unsubscribe(client: &Client, podcast_id: i32) -> Result<(), ApiError> {
    let mut url = client.endpoint("/podcasts/unsubscribe")?;
    url.set_query(Some(&format!("id={}", podcast_id)));
    client.put(url).await
}

/// Episodes published across all subscriptions between `from` and `to`,
/// both exchanged as plain `YYYY-MM-DD` dates.
pub async fn get_latest_episodes(
    client: &Client,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<Episode>, ApiError> {
    let mut url = client.endpoint("/podcasts/latest_eps")?;
    url.query_pairs_mut()
        .append_pair("from", &from.format("%Y-%m-%d").to_string())
        .append_pair("to", &to.format("%Y-%m-%d").to_string());
    client.get_json(url).await
}

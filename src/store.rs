// store.rs
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

//! In-memory copy of the last-fetched server state.
//!
//! Every `fetch_*` action calls the matching API read and replaces the whole
//! slice with the result; there are no partial merges. Writes go through the
//! network first and commit locally only on success, with one exception:
//! [`Store::set_progress`] commits locally before pushing, so the UI never
//! lags behind the scrubber. Errors are never caught here, they propagate to
//! the caller which may simply re-invoke the action.

use crate::api::{player, queue, subscriptions, Client};
use crate::errors::ApiError;
use crate::models::{Episode, PlaybackInfo, Podcast, Queue, QueueEpisode};

use chrono::NaiveDate;
use log::debug;

/// The state container. Starts out with empty collections and a zeroed
/// now-playing pointer; it is never explicitly torn down.
#[derive(Debug)]
pub struct Store {
    client: Client,
    podcasts: Vec<Podcast>,
    latest_episodes: Vec<Episode>,
    playback_info: PlaybackInfo,
    progress: i64,
    queue: Queue,
}

impl Store {
    pub fn new(client: Client) -> Self {
        Store {
            client,
            podcasts: Vec::new(),
            latest_episodes: Vec::new(),
            playback_info: PlaybackInfo::default(),
            progress: 0,
            queue: Queue::new(),
        }
    }

    // Getters are plain projections, nothing is computed here.

    pub fn podcasts(&self) -> &[Podcast] {
        &self.podcasts
    }

    pub fn latest_episodes(&self) -> &[Episode] {
        &self.latest_episodes
    }

    pub fn playback_info(&self) -> PlaybackInfo {
        self.playback_info
    }

    pub fn progress(&self) -> i64 {
        self.progress
    }

    pub fn queue(&self) -> &[QueueEpisode] {
        &self.queue
    }

    /// Re-fetches the subscription list and replaces the local copy.
    pub async fn fetch_podcasts(&mut self) -> Result<(), ApiError> {
        self.podcasts = subscriptions::get_subscriptions(&self.client).await?;
        debug!("store: cached {} subscriptions", self.podcasts.len());
        Ok(())
    }

    /// Re-fetches the episodes published between `from` and `to` across all
    /// subscriptions.
    pub async fn fetch_latest_episodes(
        &mut self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<(), ApiError> {
        self.latest_episodes =
            subscriptions::get_latest_episodes(&self.client, from, to).await?;
        Ok(())
    }

    pub async fn fetch_playback_info(&mut self) -> Result<(), ApiError> {
        self.playback_info = player::get_playback_info(&self.client).await?;
        Ok(())
    }

    /// Points the player at another episode. Write-through: the local copy
    /// changes only once the server has accepted the new pointer.
    pub async fn set_playback_info(&mut self, info: PlaybackInfo) -> Result<(), ApiError> {
        player::update_playback_info(&self.client, &info).await?;
        self.playback_info = info;
        Ok(())
    }

    /// Fetches the progress of the episode the cached playback info points
    /// at.
    pub async fn fetch_progress(&mut self) -> Result<(), ApiError> {
        let info = self.playback_info;
        self.progress =
            player::get_episode_progress(&self.client, info.podcast_id, info.episode_id).await?;
        Ok(())
    }

    /// Records a new playback position. The local copy is updated before the
    /// server confirms the write; a failed push leaves the optimistic value
    /// in place.
    pub async fn set_progress(&mut self, progress: i64) -> Result<(), ApiError> {
        self.progress = progress;
        let info = self.playback_info;
        player::update_episode_progress(&self.client, info.podcast_id, info.episode_id, progress)
            .await
    }

    pub async fn fetch_queue(&mut self) -> Result<(), ApiError> {
        self.queue = queue::get_queue(&self.client).await?;
        Ok(())
    }

    /// Adds an entry to the queue, at the tail when `append` is true and at
    /// the head otherwise. The local copy is touched only after the server
    /// confirmed the write, so there is no rollback path.
    pub async fn add_to_queue(
        &mut self,
        episode: QueueEpisode,
        append: bool,
    ) -> Result<(), ApiError> {
        queue::add_to_queue(&self.client, &episode, append).await?;
        self.commit_queue_add(episode, append);
        Ok(())
    }

    pub async fn remove_from_queue(&mut self, id: i32) -> Result<(), ApiError> {
        queue::remove_from_queue(&self.client, id).await?;
        self.commit_queue_remove(id);
        Ok(())
    }

    pub async fn replace_queue(&mut self, new_queue: Queue) -> Result<(), ApiError> {
        queue::replace_queue(&self.client, &new_queue).await?;
        self.queue = new_queue;
        Ok(())
    }

    pub async fn clear_queue(&mut self) -> Result<(), ApiError> {
        queue::clear_queue(&self.client).await?;
        self.queue.clear();
        Ok(())
    }

    /// Subscribes to a feed. The local podcast list is not touched; call
    /// [`Store::fetch_podcasts`] to observe the change.
    pub async fn subscribe(&self, feed_url: &str) -> Result<(), ApiError> {
        subscriptions::subscribe(&self.client, feed_url).await
    }

    /// Counterpart of [`Store::subscribe`], same refresh policy.
    pub async fn unsubscribe(&self, podcast_id: i32) -> Result<(), ApiError> {
        subscriptions::unsubscribe(&self.client, podcast_id).await
    }

    fn commit_queue_add(&mut self, episode: QueueEpisode, append: bool) {
        if append {
            self.queue.push(episode);
        } else {
            self.queue.insert(0, episode);
        }
    }

    fn commit_queue_remove(&mut self, id: i32) {
        self.queue.retain(|e| e.id != id);
    }
}

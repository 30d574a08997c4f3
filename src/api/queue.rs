// api/queue.rs
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

//! The playback queue. The queue is mutated wholesale (replace, clear) or
//! incrementally (add with an append-vs-prepend flag, remove by id).

use crate::api::Client;
use crate::errors::ApiError;
use crate::models::{Queue, QueueEpisode};

pub async fn get_queue(client: &Client) -> Result<Queue, ApiError> {
    let url = client.endpoint("/player/queue")?;
    client.get_json(url).await
}

pub async fn clear_queue(client: &Client) -> Result<(), ApiError> {
    let url = client.endpoint("/player/queue")?;
    client.delete(url).await
}

/// Replaces the server-side queue with `queue` in one shot.
pub async fn replace_queue(client: &Client, queue: &[QueueEpisode]) -> Result<(), ApiError> {
    let url = client.endpoint("/player/queue")?;
    client.put_json(url, queue).await
}

/// Adds one entry, at the tail when `append` is true and at the head
/// otherwise.
pub async fn add_to_queue(
    client: &Client,
    episode: &QueueEpisode,
    append: bool,
) -> Result<(), ApiError> {
    let mut url = client.endpoint("/player/queue/add")?;
    url.set_query(Some(&format!("append={}", append)));
    client.post_json(url, episode).await
}

pub async fn remove_from_queue(client: &Client, id: i32) -> Result<(), ApiError> {
    let mut url = client.endpoint("/player/queue/remove")?;
    url.set_query(Some(&format!("id={}", id)));
    client.delete(url).await
}

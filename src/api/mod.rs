// api/mod.rs
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

//! One async function per REST operation, grouped by resource.
//!
//! Every function takes a [`Client`] and turns the response into a typed
//! value or an [`ApiError`]. No retries, no timeouts beyond the transport's
//! defaults, no caching; each call is a fresh round-trip.

pub mod player;
pub mod queue;
pub mod subscriptions;

use crate::errors::ApiError;

use log::debug;
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Version segment every resource path is mounted under.
pub const BASE_PATH: &str = "/api/v0";

/// Connection to one Lincast server.
#[derive(Clone, Debug)]
pub struct Client {
    base: Url,
    http: reqwest::Client,
}

pub(crate) fn parse_url_without_scheme(s: &str) -> Result<Url, url::ParseError> {
    Url::parse(s).or(Url::parse(&["https://", s].join("")))
}

pub(crate) fn client_builder() -> reqwest::ClientBuilder {
    reqwest::Client::builder().user_agent(crate::USER_AGENT)
}

impl Client {
    /// `server` is the address the server is reachable at,
    /// e.g. `https://lincast.example.com` or just `lincast.example.com`.
    pub fn new(server: &str) -> Result<Self, ApiError> {
        Ok(Client {
            base: parse_url_without_scheme(server)?,
            http: client_builder().build()?,
        })
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base.join(&[BASE_PATH, path].concat())?)
    }

    pub(crate) async fn get_json<T>(&self, url: Url) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        debug!("GET {}", url);
        let resp = self.http.get(url).send().await?;
        Ok(checked(resp).await?.json().await?)
    }

    pub(crate) async fn put_json<B>(&self, url: Url, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        debug!("PUT {}", url);
        let resp = self.http.put(url).json(body).send().await?;
        checked(resp).await?;
        Ok(())
    }

    pub(crate) async fn post_json<B>(&self, url: Url, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        debug!("POST {}", url);
        let resp = self.http.post(url).json(body).send().await?;
        checked(resp).await?;
        Ok(())
    }

    pub(crate) async fn put(&self, url: Url) -> Result<(), ApiError> {
        debug!("PUT {}", url);
        let resp = self.http.put(url).send().await?;
        checked(resp).await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, url: Url) -> Result<(), ApiError> {
        debug!("DELETE {}", url);
        let resp = self.http.delete(url).send().await?;
        checked(resp).await?;
        Ok(())
    }
}

/// Passes 2xx responses through and turns everything else into
/// [`ApiError::RequestFailure`], keeping the body text when there is one.
async fn checked(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.ok().filter(|t| !t.is_empty());
    Err(ApiError::RequestFailure { status, body })
}

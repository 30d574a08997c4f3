// lib.rs
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

//! Typed client for the Lincast REST API.
//!
//! The crate has two layers. [`api`] exposes one async function per REST
//! operation, grouped by resource (player, queue, subscriptions). [`Store`]
//! sits on top of it and keeps an in-memory copy of the last-fetched server
//! state. The server is always the source of truth, the store is a
//! best-effort cache that is refreshed by re-fetching.

#![warn(nonstandard_style, unused)]

pub mod api;
pub mod errors;
pub mod models;
pub mod store;

pub use crate::api::Client;
pub use crate::errors::ApiError;
pub use crate::store::Store;

/// The user-agent sent with every request.
pub const USER_AGENT: &str = concat!("lincast-client/", env!("CARGO_PKG_VERSION"));

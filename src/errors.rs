// errors.rs
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

use reqwest::StatusCode;
use thiserror::Error;

/// Everything a client call can fail with.
///
/// There is deliberately no transient/permanent split and no retry logic:
/// every failure is terminal for that one operation and the caller decides
/// whether to issue the call again.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Url parse error: {0}")]
    UrlParse(#[from] url::ParseError),
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
    /// The server answered with a status outside the 2xx range.
    /// `body` holds the response text when it was readable and non-empty.
    #[error("Request failed with status code {status}")]
    RequestFailure {
        status: StatusCode,
        body: Option<String>,
    },
}

impl ApiError {
    /// The HTTP status of a rejected request, if this error is one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::RequestFailure { status, .. } => Some(*status),
            _ => None,
        }
    }
}

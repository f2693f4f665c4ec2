// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

/// Result with the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Error {
    /// A required construction parameter is missing or invalid.
    Construction(&'static str),
    /// A route segment that doesn't match the route grammar.
    UnexpectedRouteToken(String),
    /// A fix ident that is not within the navigation data.
    UnknownFix(String),
    /// A procedure ident that is not within the navigation data.
    UnknownProcedure(String),
    /// A procedure has no transition for the entry or exit fix.
    UnknownTransition {
        procedure: String,
        transition: String,
    },
    /// A procedure fix spec with a malformed restriction value.
    InvalidFixSpec(String),
    /// A waypoint ident that is not within the flight plan.
    WaypointNotFound(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Construction(param) => {
                write!(f, "missing or invalid construction parameter: {param}")
            }
            Self::UnexpectedRouteToken(token) => {
                write!(f, "unexpected route token: {token}")
            }
            Self::UnknownFix(ident) => write!(f, "unknown fix: {ident}"),
            Self::UnknownProcedure(ident) => write!(f, "unknown procedure: {ident}"),
            Self::UnknownTransition {
                procedure,
                transition,
            } => {
                write!(f, "no transition {transition} on procedure {procedure}")
            }
            Self::InvalidFixSpec(spec) => write!(f, "invalid fix spec: {spec}"),
            Self::WaypointNotFound(ident) => {
                write!(f, "waypoint not in flight plan: {ident}")
            }
        }
    }
}

impl std::error::Error for Error {}

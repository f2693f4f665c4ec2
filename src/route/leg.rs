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

use std::collections::VecDeque;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Waypoint;

/// How a leg was constructed from its route segment.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LegKind {
    /// A single fix with no implied path towards it.
    Direct,
    /// An expanded procedure reference.
    Procedure,
    /// A holding pattern at a single fix.
    Hold,
}

/// An ordered run of waypoints sharing one route segment.
///
/// The front waypoint is the next one to fly. A leg with no remaining
/// waypoints is spent; the [`Fms`] removes spent legs from the plan
/// before the next waypoint is consulted.
///
/// [`Fms`]: crate::fms::Fms
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Leg {
    route_string: String,
    kind: LegKind,
    waypoints: VecDeque<Waypoint>,
}

impl Leg {
    /// Creates a direct leg to a single waypoint.
    pub(crate) fn direct(waypoint: Waypoint) -> Self {
        Self {
            route_string: waypoint.ident().to_string(),
            kind: LegKind::Direct,
            waypoints: VecDeque::from([waypoint]),
        }
    }

    /// Creates a hold leg at a single waypoint.
    pub(crate) fn hold(mut waypoint: Waypoint) -> Self {
        waypoint.set_hold(true);
        Self {
            route_string: format!("@{}", waypoint.ident()),
            kind: LegKind::Hold,
            waypoints: VecDeque::from([waypoint]),
        }
    }

    /// Creates a procedure leg from its expanded waypoint sequence.
    pub(crate) fn procedure(route_string: String, waypoints: Vec<Waypoint>) -> Self {
        Self {
            route_string,
            kind: LegKind::Procedure,
            waypoints: VecDeque::from(waypoints),
        }
    }

    /// The lowercase route segment the leg was built from.
    pub fn route_string(&self) -> &str {
        &self.route_string
    }

    pub fn kind(&self) -> LegKind {
        self.kind
    }

    pub fn is_direct(&self) -> bool {
        self.kind == LegKind::Direct
    }

    pub fn is_procedure(&self) -> bool {
        self.kind == LegKind::Procedure
    }

    pub fn is_hold(&self) -> bool {
        self.kind == LegKind::Hold
    }

    /// The remaining waypoints of the leg, front = next-to-fly.
    pub fn waypoints(&self) -> &VecDeque<Waypoint> {
        &self.waypoints
    }

    /// True once no waypoints remain.
    pub fn is_spent(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub(crate) fn front_mut(&mut self) -> Option<&mut Waypoint> {
        self.waypoints.front_mut()
    }

    /// Drops the front waypoint.
    pub(crate) fn advance(&mut self) -> Option<Waypoint> {
        self.waypoints.pop_front()
    }

    /// Drops all waypoints in front of the given index.
    pub(crate) fn skip_to(&mut self, index: usize) {
        self.waypoints.drain(..index.min(self.waypoints.len()));
    }
}

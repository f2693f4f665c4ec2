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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use geo::Point;

/// A waypoint within the flight plan.
///
/// A waypoint is created during route decoding from a fix of the
/// navigation data, possibly with restrictions attached by the
/// procedure that referenced it. Its ident and position are fixed for
/// its lifetime in the plan while the restrictions may be amended, e.g.
/// by an ATC clearance.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Waypoint {
    ident: String,
    position: Point<f64>,
    altitude_restriction: Option<f64>,
    speed_restriction: Option<f64>,
    heading_restriction: Option<f64>,
    fly_over: bool,
    hold: bool,
}

impl Waypoint {
    /// Creates a waypoint without restrictions, normalizing the ident
    /// to lowercase.
    pub fn new(ident: &str, position: Point<f64>) -> Self {
        Self {
            ident: ident.to_lowercase(),
            position,
            altitude_restriction: None,
            speed_restriction: None,
            heading_restriction: None,
            fly_over: false,
            hold: false,
        }
    }

    pub fn ident(&self) -> &str {
        &self.ident
    }

    pub fn position(&self) -> Point<f64> {
        self.position
    }

    /// The altitude in feet to be flown at this waypoint, if the route
    /// restricts it.
    pub fn altitude_restriction(&self) -> Option<f64> {
        self.altitude_restriction
    }

    pub fn set_altitude_restriction(&mut self, altitude: Option<f64>) {
        self.altitude_restriction = altitude;
    }

    /// The speed in knots to be flown at this waypoint, if the route
    /// restricts it.
    pub fn speed_restriction(&self) -> Option<f64> {
        self.speed_restriction
    }

    pub fn set_speed_restriction(&mut self, speed: Option<f64>) {
        self.speed_restriction = speed;
    }

    /// The heading in degrees to be flown from this waypoint, if the
    /// route restricts it. `None` means the route puts no lateral
    /// restriction here.
    pub fn heading_restriction(&self) -> Option<f64> {
        self.heading_restriction
    }

    pub fn set_heading_restriction(&mut self, heading: Option<f64>) {
        self.heading_restriction = heading;
    }

    /// Whether the waypoint must be overflown rather than turned ahead
    /// of. Carried for the autopilot, not interpreted by the plan.
    pub fn is_fly_over(&self) -> bool {
        self.fly_over
    }

    pub fn set_fly_over(&mut self, fly_over: bool) {
        self.fly_over = fly_over;
    }

    /// Whether a holding pattern is published at the waypoint. Carried
    /// for the autopilot, not interpreted by the plan.
    pub fn is_hold(&self) -> bool {
        self.hold
    }

    pub fn set_hold(&mut self, hold: bool) {
        self.hold = hold;
    }
}

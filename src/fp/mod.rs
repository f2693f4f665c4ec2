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

//! Aircraft performance.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The performance envelope of an aircraft type.
///
/// The cruise values are the guidance defaults when neither the pilot
/// nor the route commands otherwise.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Performance {
    cruise_altitude: f64,
    cruise_speed: f64,
}

impl Performance {
    /// Creates a performance definition with the cruise altitude in
    /// feet and the cruise speed in knots.
    pub fn new(cruise_altitude: f64, cruise_speed: f64) -> Self {
        Self {
            cruise_altitude,
            cruise_speed,
        }
    }

    pub fn cruise_altitude(&self) -> f64 {
        self.cruise_altitude
    }

    pub fn cruise_speed(&self) -> f64 {
        self.cruise_speed
    }
}

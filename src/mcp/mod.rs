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

//! Mode Control Panel.
//!
//! The [`ModeController`] holds the pilot-selected targets and the mode
//! of each guidance axis. It is shared between the [`Fms`] and the
//! autopilot: the FMS reads it to resolve guidance (a held target
//! overrides any route-derived value) and writes it when the aircraft
//! is taken off the published route.
//!
//! [`Fms`]: crate::fms::Fms

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Vertical guidance mode.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AltitudeMode {
    #[default]
    Off,
    /// Fly the altitude the route resolves to.
    Vnav,
    /// Hold the pilot-set altitude.
    Hold,
}

/// Lateral guidance mode.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HeadingMode {
    #[default]
    Off,
    /// Follow the lateral path of the flight plan.
    Lnav,
    /// Hold the pilot-set heading.
    Hold,
}

/// Speed guidance mode.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpeedMode {
    #[default]
    Off,
    /// Fly the speed the route resolves to.
    Vnav,
    /// Hold the pilot-set speed.
    Hold,
}

/// Overall autopilot engagement.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AutopilotMode {
    #[default]
    Off,
    On,
}

/// Pilot-selected guidance targets and axis modes.
///
/// Targets are plain numbers: altitude in feet, speed in knots, heading
/// in degrees. A heading of `None` means no heading has been selected
/// yet.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ModeController {
    altitude_mode: AltitudeMode,
    heading_mode: HeadingMode,
    speed_mode: SpeedMode,
    autopilot_mode: AutopilotMode,
    altitude: f64,
    heading: Option<f64>,
    speed: f64,
}

impl ModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn altitude_mode(&self) -> AltitudeMode {
        self.altitude_mode
    }

    pub fn heading_mode(&self) -> HeadingMode {
        self.heading_mode
    }

    pub fn speed_mode(&self) -> SpeedMode {
        self.speed_mode
    }

    pub fn autopilot_mode(&self) -> AutopilotMode {
        self.autopilot_mode
    }

    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    pub fn heading(&self) -> Option<f64> {
        self.heading
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// The pilot-set altitude iff the altitude axis is held.
    pub fn altitude_hold(&self) -> Option<f64> {
        (self.altitude_mode == AltitudeMode::Hold).then_some(self.altitude)
    }

    /// The pilot-set heading iff the heading axis is held.
    pub fn heading_hold(&self) -> Option<f64> {
        match self.heading_mode {
            HeadingMode::Hold => self.heading,
            _ => None,
        }
    }

    /// The pilot-set speed iff the speed axis is held.
    pub fn speed_hold(&self) -> Option<f64> {
        (self.speed_mode == SpeedMode::Hold).then_some(self.speed)
    }

    /// Holds the altitude axis at the given target.
    pub fn hold_altitude(&mut self, altitude: f64) {
        self.altitude_mode = AltitudeMode::Hold;
        self.altitude = altitude;
    }

    /// Holds the heading axis at the given target.
    ///
    /// `None` freezes the axis without a selected heading; the
    /// autopilot keeps the present heading in that case.
    pub fn hold_heading(&mut self, heading: Option<f64>) {
        self.heading_mode = HeadingMode::Hold;
        self.heading = heading;
    }

    /// Holds the speed axis at the given target.
    pub fn hold_speed(&mut self, speed: f64) {
        self.speed_mode = SpeedMode::Hold;
        self.speed = speed;
    }

    /// Engages LNAV/VNAV on all axes with the autopilot on, the
    /// departure-phase defaults for flying the filed route.
    pub fn engage_lnav_vnav(&mut self) {
        self.altitude_mode = AltitudeMode::Vnav;
        self.heading_mode = HeadingMode::Lnav;
        self.speed_mode = SpeedMode::Vnav;
        self.autopilot_mode = AutopilotMode::On;
    }

    pub fn disengage_autopilot(&mut self) {
        self.autopilot_mode = AutopilotMode::Off;
    }
}

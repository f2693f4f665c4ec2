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

//! Flight Management System library for a simulated aircraft.
//!
//! The crate models the lateral and vertical navigation core of an
//! aircraft: a textual route is decoded into an ordered flight plan of
//! [`legs`] and [`waypoints`], the [`Fms`] tracks progress through that
//! plan as the aircraft flies it, and the commanded altitude, heading
//! and speed are resolved from a layered priority of pilot override,
//! route restriction and performance default.
//!
//! # Decoding a route
//!
//! A route is a sequence of segments separated by `..` where each
//! segment is either a single fix or an `entry.procedure.exit`
//! reference that is expanded against the [`NavigationData`]:
//!
//! ```text
//! COWBY..BIKKR..DAG.KEPEC3.KLAS
//! ```
//!
//! decodes into three legs: direct to COWBY, direct to BIKKR, then the
//! KEPEC3 arrival entered at DAG with exit KLAS.
//!
//! [`legs`]: route::Leg
//! [`waypoints`]: route::Waypoint
//! [`Fms`]: fms::Fms
//! [`NavigationData`]: nd::NavigationData

mod error;
#[macro_use]
mod macros;

pub mod fms;
pub mod fp;
pub mod mcp;
pub mod nd;
pub mod route;

pub use error::{Error, Result};

/// Often used types ready for import.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::fms::Fms;
    pub use crate::fp::Performance;
    pub use crate::mcp::{
        AltitudeMode, AutopilotMode, HeadingMode, ModeController, SpeedMode,
    };
    pub use crate::nd::{Fix, NavigationData, Procedure};
    pub use crate::route::{Leg, LegKind, Waypoint};
}

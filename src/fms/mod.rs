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

//! Flight Management System.
//!
//! [`Fms`] is the authoritative model of what route is filed, where on
//! it the aircraft is, and what it should be doing right now. It owns
//! the ordered [`legs`] of the flight plan and the history of already
//! flown route segments, and it resolves the commanded altitude,
//! heading and speed against the shared [`ModeController`] and the
//! aircraft [`Performance`].
//!
//! The current waypoint is always the front waypoint of the front leg;
//! there is no cursor into the plan. Every mutating operation restores
//! the invariant that no spent leg remains at the front before it
//! returns.
//!
//! [`legs`]: Leg
//! [`ModeController`]: crate::mcp::ModeController
//! [`Performance`]: crate::fp::Performance

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use geo::Point;
use log::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::fp::Performance;
use crate::mcp::{HeadingMode, ModeController};
use crate::nd::NavigationData;
use crate::route::{self, Leg, Waypoint};

/// The Flight Management System of one aircraft.
///
/// See the [module documentation](self) for details.
#[derive(PartialEq, Debug)]
pub struct Fms {
    legs: VecDeque<Leg>,
    previous_route_segments: Vec<String>,
    mode_controller: Rc<RefCell<ModeController>>,
    performance: Performance,
    nd: Rc<NavigationData>,
}

impl Fms {
    /// Constructs an `Fms` with the filed route decoded into the leg
    /// collection.
    ///
    /// The mode controller is shared with the autopilot, which is why
    /// it is passed by reference counted cell. Returns a
    /// [`Construction`] error for a blank route and a parse error when
    /// the route doesn't resolve against the navigation data.
    ///
    /// [`Construction`]: Error::Construction
    pub fn try_new(
        route: &str,
        mode_controller: Rc<RefCell<ModeController>>,
        performance: Performance,
        nd: Rc<NavigationData>,
    ) -> Result<Self> {
        if route.trim().is_empty() {
            return Err(Error::Construction("route"));
        }

        let mut fms = Self {
            legs: VecDeque::new(),
            previous_route_segments: Vec::new(),
            mode_controller,
            performance,
            nd,
        };
        fms.build_leg_collection(route)?;

        Ok(fms)
    }

    /// The legs remaining to fly, front = active leg.
    pub fn legs(&self) -> &VecDeque<Leg> {
        &self.legs
    }

    /// The active leg.
    pub fn current_leg(&self) -> Option<&Leg> {
        self.legs.front()
    }

    /// The waypoint the aircraft is currently navigating to.
    pub fn current_waypoint(&self) -> Option<&Waypoint> {
        self.legs.front().and_then(|leg| leg.waypoints().front())
    }

    /// Mutable access to the current waypoint, e.g. to amend its
    /// restrictions on an ATC clearance.
    pub fn current_waypoint_mut(&mut self) -> Option<&mut Waypoint> {
        self.legs.front_mut().and_then(Leg::front_mut)
    }

    /// The shared mode controller.
    pub fn mode_controller(&self) -> Rc<RefCell<ModeController>> {
        Rc::clone(&self.mode_controller)
    }

    pub fn performance(&self) -> &Performance {
        &self.performance
    }

    /////////////////////////////////////////////////////////////////////
    // Construction & amendment
    /////////////////////////////////////////////////////////////////////

    /// Replaces the flight plan wholesale with the given route.
    ///
    /// The current legs and the flown-segment history are destroyed
    /// unconditionally before the rebuild, so a route that fails to
    /// decode leaves an empty plan rather than a partially replaced
    /// one.
    pub fn replace_flight_plan(&mut self, route: &str) -> Result<()> {
        debug!("replacing flight plan with {:?}", route);
        self.destroy_leg_collection();
        self.previous_route_segments.clear();
        self.build_leg_collection(route)
    }

    /// Parses the route segment and splices the resulting leg(s) in
    /// front of the current leg.
    ///
    /// Everything already in the plan stays untouched; on a parse
    /// failure nothing is inserted.
    pub fn prepend_leg(&mut self, segment: &str) -> Result<()> {
        debug!("prepending {:?} to the flight plan", segment);
        let legs = route::decode(segment, &self.nd)?;

        for leg in legs.into_iter().rev() {
            self.legs.push_front(leg);
        }

        self.drop_spent_legs();
        Ok(())
    }

    fn build_leg_collection(&mut self, route: &str) -> Result<()> {
        self.legs = route::decode(route, &self.nd)?.into();
        self.drop_spent_legs();
        Ok(())
    }

    fn destroy_leg_collection(&mut self) {
        self.legs.clear();
    }

    /////////////////////////////////////////////////////////////////////
    // Navigation
    /////////////////////////////////////////////////////////////////////

    /// True iff any waypoint remains strictly after the current one.
    pub fn has_next_waypoint(&self) -> bool {
        self.legs
            .front()
            .is_some_and(|leg| leg.waypoints().len() > 1)
            || self.legs.iter().skip(1).any(|leg| !leg.is_spent())
    }

    /// The position of the waypoint that would become current after one
    /// [`next_waypoint`](Self::next_waypoint) call, without advancing.
    pub fn next_waypoint_position(&self) -> Option<Point<f64>> {
        let front = self.legs.front()?;

        if front.waypoints().len() > 1 {
            return Some(front.waypoints()[1].position());
        }

        self.legs
            .iter()
            .skip(1)
            .find(|leg| !leg.is_spent())
            .map(|leg| leg.waypoints()[0].position())
    }

    /// Advances past the current waypoint.
    ///
    /// Within a leg this drops the leg's front waypoint. When the
    /// current leg is about to be exhausted, its route string is
    /// recorded into the flown-segment history and the whole leg is
    /// removed, so the history plus the remaining legs always
    /// reconstruct the filed route.
    pub fn next_waypoint(&mut self) {
        let Some(leg) = self.legs.front_mut() else {
            warn!("next waypoint requested on an empty flight plan");
            return;
        };

        if leg.waypoints().len() > 1 {
            if let Some(waypoint) = leg.advance() {
                trace!("flown past waypoint {}", waypoint.ident());
            }
        } else {
            self.move_to_next_leg();
        }

        self.drop_spent_legs();
    }

    /// Skips ahead to the named waypoint, case-insensitive.
    ///
    /// All legs in front of the target leg are dropped with their route
    /// strings recorded into the history; waypoints in front of the
    /// target within its leg are dropped silently since the leg's route
    /// string stays part of the remaining route. Skipping to the
    /// current waypoint is a no-op. An unknown ident fails with
    /// [`WaypointNotFound`] and leaves the plan untouched.
    ///
    /// [`WaypointNotFound`]: Error::WaypointNotFound
    pub fn skip_to_waypoint(&mut self, ident: &str) -> Result<()> {
        let ident = ident.to_lowercase();
        let (leg_index, waypoint_index) = self
            .find_leg_and_waypoint_index(&ident)
            .ok_or_else(|| Error::WaypointNotFound(ident.clone()))?;

        if leg_index == 0 && waypoint_index == 0 {
            trace!("skip to {ident}: already the current waypoint");
            return Ok(());
        }

        debug!("skipping to waypoint {ident}");
        self.collect_route_strings_for_legs_to_be_dropped(leg_index);
        self.legs.drain(..leg_index);

        if let Some(leg) = self.legs.front_mut() {
            leg.skip_to(waypoint_index);
        }

        self.drop_spent_legs();
        Ok(())
    }

    /// First match of the ident over legs then waypoints in flying
    /// order.
    fn find_leg_and_waypoint_index(&self, ident: &str) -> Option<(usize, usize)> {
        self.legs.iter().enumerate().find_map(|(leg_index, leg)| {
            leg.waypoints()
                .iter()
                .position(|waypoint| waypoint.ident() == ident)
                .map(|waypoint_index| (leg_index, waypoint_index))
        })
    }

    fn collect_route_strings_for_legs_to_be_dropped(&mut self, leg_index: usize) {
        let segments: Vec<String> = self
            .legs
            .iter()
            .take(leg_index)
            .map(|leg| leg.route_string().to_string())
            .collect();
        self.previous_route_segments.extend(segments);
    }

    fn move_to_next_leg(&mut self) {
        if let Some(leg) = self.legs.pop_front() {
            debug!("leg {} complete", leg.route_string());
            self.previous_route_segments
                .push(leg.route_string().to_string());
        }
    }

    /// Restores the no-spent-leg invariant at the front of the plan.
    fn drop_spent_legs(&mut self) {
        while self.legs.front().is_some_and(Leg::is_spent) {
            self.move_to_next_leg();
        }
    }

    /////////////////////////////////////////////////////////////////////
    // Guidance resolution
    /////////////////////////////////////////////////////////////////////

    /// The commanded altitude in feet: the held pilot altitude, else
    /// the current waypoint's restriction, else the cruise altitude.
    pub fn altitude(&self) -> f64 {
        if let Some(altitude) = self.mode_controller.borrow().altitude_hold() {
            return altitude;
        }

        self.current_waypoint()
            .and_then(Waypoint::altitude_restriction)
            .unwrap_or_else(|| self.performance.cruise_altitude())
    }

    /// The commanded speed in knots: the held pilot speed, else the
    /// current waypoint's restriction, else the cruise speed.
    pub fn speed(&self) -> f64 {
        if let Some(speed) = self.mode_controller.borrow().speed_hold() {
            return speed;
        }

        self.current_waypoint()
            .and_then(Waypoint::speed_restriction)
            .unwrap_or_else(|| self.performance.cruise_speed())
    }

    /// The commanded heading in degrees: the held pilot heading, else
    /// the current waypoint's restriction as-is. `None` means the route
    /// puts no lateral restriction here and is left for the autopilot
    /// to interpret; there is no performance default for heading.
    pub fn heading(&self) -> Option<f64> {
        {
            let mc = self.mode_controller.borrow();
            if mc.heading_mode() == HeadingMode::Hold {
                return mc.heading();
            }
        }

        self.current_waypoint()
            .and_then(Waypoint::heading_restriction)
    }

    /// Freezes the guidance at the present resolved values.
    ///
    /// All three axes are set to hold at the values
    /// [`altitude`](Self::altitude), [`heading`](Self::heading) and
    /// [`speed`](Self::speed) resolve to right now, and the autopilot
    /// is disengaged. Used when the aircraft is taken off the published
    /// route.
    pub fn cancel_waypoint(&mut self) {
        let altitude = self.altitude();
        let heading = self.heading();
        let speed = self.speed();

        debug!(
            "cancelling waypoint guidance: holding altitude {altitude}, speed {speed}, heading {heading:?}"
        );

        let mut mc = self.mode_controller.borrow_mut();
        mc.hold_altitude(altitude);
        mc.hold_heading(heading);
        mc.hold_speed(speed);
        mc.disengage_autopilot();
    }

    /// Initializes the mode controller with the departure-phase
    /// defaults for flying the filed route.
    pub fn update_modes_for_departure(&self) {
        debug!("engaging LNAV/VNAV for departure");
        self.mode_controller.borrow_mut().engage_lnav_vnav();
    }

    /////////////////////////////////////////////////////////////////////
    // Route text reconstruction
    /////////////////////////////////////////////////////////////////////

    /// The remaining route as a route string; empty if no legs remain.
    pub fn current_route(&self) -> String {
        self.legs
            .iter()
            .map(Leg::route_string)
            .collect::<Vec<&str>>()
            .join(route::SEGMENT_SEPARATOR)
    }

    /// The full filed route as a route string, independent of how far
    /// navigation has progressed; empty if nothing was ever filed.
    pub fn flight_plan(&self) -> String {
        self.previous_route_segments
            .iter()
            .map(String::as_str)
            .chain(self.legs.iter().map(Leg::route_string))
            .collect::<Vec<&str>>()
            .join(route::SEGMENT_SEPARATOR)
    }
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////

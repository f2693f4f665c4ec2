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

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::nd::{FixSpec, NavigationData};

mod leg;
mod token;
mod waypoint;

pub use leg::{Leg, LegKind};
pub use token::{Token, Tokens};
pub use waypoint::Waypoint;

/// The delimiter joining leg route strings into a full route.
pub(crate) const SEGMENT_SEPARATOR: &str = "..";

/// Decodes a route string into legs against the navigation data.
///
/// The route is first [tokenized](Tokens) and each token is then
/// resolved: a direct or hold segment by fix lookup, a procedure
/// segment by selecting its transitions and expanding the full waypoint
/// sequence. An unresolvable ident fails the whole decode; no partial
/// leg list is returned.
pub fn decode(route: &str, nd: &NavigationData) -> Result<Vec<Leg>> {
    debug!("route decode: {:?}", route);

    let legs = Tokens::try_new(route)?
        .into_iter()
        .map(|token| build_leg(token, nd))
        .collect::<Result<Vec<Leg>>>()?;

    debug!("route decoded: {} leg(s)", legs.len());

    Ok(legs)
}

fn build_leg(token: Token, nd: &NavigationData) -> Result<Leg> {
    trace!("building leg from token {token}");

    match &token {
        Token::Direct(ident) => Ok(Leg::direct(resolve_fix(ident, nd)?)),
        Token::Hold(ident) => Ok(Leg::hold(resolve_fix(ident, nd)?)),
        Token::Procedure {
            entry,
            procedure,
            exit,
        } => {
            let proc = nd
                .procedure(procedure)
                .ok_or_else(|| Error::UnknownProcedure(procedure.clone()))?;

            let entry_specs = match entry {
                Some(entry) => {
                    proc.entry_transition(entry)
                        .ok_or_else(|| Error::UnknownTransition {
                            procedure: procedure.clone(),
                            transition: entry.clone(),
                        })?
                }
                None => &[],
            };

            let exit_specs =
                proc.exit_transition(exit)
                    .ok_or_else(|| Error::UnknownTransition {
                        procedure: procedure.clone(),
                        transition: exit.clone(),
                    })?;

            let waypoints = entry_specs
                .iter()
                .chain(proc.body())
                .chain(exit_specs)
                .map(|spec| resolve_spec(spec, nd))
                .collect::<Result<Vec<Waypoint>>>()?;

            Ok(Leg::procedure(token.to_string(), waypoints))
        }
    }
}

fn resolve_fix(ident: &str, nd: &NavigationData) -> Result<Waypoint> {
    nd.find_fix(ident)
        .map(|fix| Waypoint::new(fix.ident(), fix.position()))
        .ok_or_else(|| Error::UnknownFix(ident.to_string()))
}

fn resolve_spec(spec: &FixSpec, nd: &NavigationData) -> Result<Waypoint> {
    let mut waypoint = resolve_fix(spec.ident(), nd)?;
    waypoint.set_altitude_restriction(spec.altitude());
    waypoint.set_speed_restriction(spec.speed());
    Ok(waypoint)
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nd::{Fix, Procedure};

    // Fixes around Las Vegas with the KEPEC THREE arrival into KLAS.
    fn navigation_data() -> NavigationData {
        let mut nd = NavigationData::new();

        for (ident, lat, lon) in [
            ("COWBY", 35.85, -114.85),
            ("BIKKR", 36.57, -115.50),
            ("DAG", 34.96, -116.58),
            ("BTY", 36.80, -116.75),
            ("MISEN", 35.26, -116.04),
            ("CLARR", 35.53, -115.52),
            ("SKEBR", 35.74, -115.35),
            ("KEPEC", 35.92, -115.20),
            ("IPUMY", 36.04, -115.13),
            ("NIPZO", 36.12, -115.12),
            ("SUNST", 36.18, -115.14),
            ("KIMME", 36.22, -115.16),
            ("CHIPZ", 36.26, -115.18),
            ("POKRR", 36.30, -115.20),
            ("PRINO", 36.33, -115.22),
            ("KLAS", 36.08, -115.15),
        ] {
            nd.insert_fix(Fix::new(ident, coord!(lat, lon)));
        }

        let kepec3 = Procedure::try_new(
            "KEPEC3",
            &[
                "SKEBR|A170",
                "KEPEC|A130",
                "IPUMY|A110|S230",
                "NIPZO",
                "SUNST|A100",
                "KIMME|A80",
                "CHIPZ|A80|S170",
                "POKRR|A70",
                "PRINO",
            ],
        )
        .and_then(|p| p.entry("DAG", &["DAG", "MISEN|A240", "CLARR"]))
        .and_then(|p| p.entry("BTY", &["BTY", "MISEN|A240", "CLARR"]))
        .and_then(|p| p.exit("KLAS", &[]))
        .expect("procedure should build");

        nd.insert_procedure(kepec3);
        nd
    }

    #[test]
    fn decodes_complex_route() {
        let nd = navigation_data();
        let legs =
            decode("COWBY..BIKKR..DAG.KEPEC3.KLAS", &nd).expect("route should decode");

        assert_eq!(legs.len(), 3);
        assert!(legs[0].is_direct());
        assert!(legs[1].is_direct());
        assert!(legs[2].is_procedure());
        assert_eq!(legs[0].route_string(), "cowby");
        assert_eq!(legs[1].route_string(), "bikkr");
        assert_eq!(legs[2].route_string(), "dag.kepec3.klas");
    }

    #[test]
    fn expands_procedure_waypoints() {
        let nd = navigation_data();
        let legs = decode("DAG.KEPEC3.KLAS", &nd).expect("route should decode");

        assert_eq!(legs.len(), 1);
        assert_eq!(legs[0].waypoints().len(), 12);
        assert_eq!(legs[0].waypoints()[0].ident(), "dag");
        assert_eq!(legs[0].waypoints()[11].ident(), "prino");
    }

    #[test]
    fn attaches_procedure_restrictions() {
        let nd = navigation_data();
        let legs = decode("DAG.KEPEC3.KLAS", &nd).expect("route should decode");
        let waypoints = legs[0].waypoints();

        let misen = &waypoints[1];
        assert_eq!(misen.ident(), "misen");
        assert_eq!(misen.altitude_restriction(), Some(24000.0));
        assert_eq!(misen.speed_restriction(), None);

        let ipumy = &waypoints[5];
        assert_eq!(ipumy.ident(), "ipumy");
        assert_eq!(ipumy.altitude_restriction(), Some(11000.0));
        assert_eq!(ipumy.speed_restriction(), Some(230.0));

        // entry fix itself is unrestricted
        assert_eq!(waypoints[0].altitude_restriction(), None);
    }

    #[test]
    fn decodes_procedure_without_entry() {
        let nd = navigation_data();
        let legs = decode("KEPEC3.KLAS", &nd).expect("route should decode");

        assert_eq!(legs[0].waypoints().len(), 9);
        assert_eq!(legs[0].route_string(), "kepec3.klas");
        assert_eq!(legs[0].waypoints()[0].ident(), "skebr");
    }

    #[test]
    fn decodes_hold_segment() {
        let nd = navigation_data();
        let legs = decode("@BIKKR", &nd).expect("route should decode");

        assert!(legs[0].is_hold());
        assert_eq!(legs[0].route_string(), "@bikkr");
        assert!(legs[0].waypoints()[0].is_hold());
    }

    #[test]
    fn fails_on_unknown_fix() {
        let nd = navigation_data();

        assert_eq!(
            decode("COWBY..ZZZZZ", &nd),
            Err(Error::UnknownFix("zzzzz".to_string()))
        );
    }

    #[test]
    fn fails_on_unknown_procedure() {
        let nd = navigation_data();

        assert_eq!(
            decode("DAG.KEPEC4.KLAS", &nd),
            Err(Error::UnknownProcedure("kepec4".to_string()))
        );
    }

    #[test]
    fn fails_on_unknown_transition() {
        let nd = navigation_data();

        assert_eq!(
            decode("MLF.KEPEC3.KLAS", &nd),
            Err(Error::UnknownTransition {
                procedure: "kepec3".to_string(),
                transition: "mlf".to_string(),
            })
        );
        assert_eq!(
            decode("DAG.KEPEC3.KDEN", &nd),
            Err(Error::UnknownTransition {
                procedure: "kepec3".to_string(),
                transition: "kden".to_string(),
            })
        );
    }
}

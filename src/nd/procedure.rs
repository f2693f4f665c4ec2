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

use std::collections::HashMap;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A fix reference within a procedure, with optional restrictions.
///
/// The compact published form is the fix ident followed by `|`-separated
/// restriction values: `A` prefixes an altitude in hundreds of feet and
/// `S` a speed in knots. A trailing `+` or `-` (at/above, at/below) is
/// accepted and dropped since the flight plan models restrictions as
/// plain numbers.
///
/// ```
/// # use std::str::FromStr;
/// # use fms::nd::FixSpec;
/// let spec = FixSpec::from_str("IPUMY|A110|S230").unwrap();
/// assert_eq!(spec.ident(), "IPUMY");
/// assert_eq!(spec.altitude(), Some(11000.0));
/// assert_eq!(spec.speed(), Some(230.0));
/// ```
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FixSpec {
    ident: String,
    altitude: Option<f64>,
    speed: Option<f64>,
}

impl FixSpec {
    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// The altitude restriction in feet.
    pub fn altitude(&self) -> Option<f64> {
        self.altitude
    }

    /// The speed restriction in knots.
    pub fn speed(&self) -> Option<f64> {
        self.speed
    }
}

impl FromStr for FixSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('|');

        let ident = match parts.next() {
            Some(ident) if !ident.is_empty() => ident.to_uppercase(),
            _ => return Err(Error::InvalidFixSpec(s.to_string())),
        };

        let mut altitude = None;
        let mut speed = None;

        for restriction in parts {
            let value = restriction
                .get(1..)
                .map(|v| v.trim_end_matches(['+', '-']))
                .and_then(|v| v.parse::<f64>().ok())
                .ok_or_else(|| Error::InvalidFixSpec(s.to_string()))?;

            match restriction.chars().next() {
                Some('A') | Some('a') => altitude = Some(value * 100.0),
                Some('S') | Some('s') => speed = Some(value),
                _ => return Err(Error::InvalidFixSpec(s.to_string())),
            }
        }

        Ok(Self {
            ident,
            altitude,
            speed,
        })
    }
}

/// A published procedure: a named chain of fixes with entry and exit
/// transitions.
///
/// A procedure reference within a route selects one entry and one exit
/// transition, e.g. `DAG.KEPEC3.KLAS` flies the KEPEC3 arrival entered
/// at DAG towards KLAS. The expanded waypoint sequence is the entry
/// transition followed by the body followed by the exit transition.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Procedure {
    ident: String,
    entries: HashMap<String, Vec<FixSpec>>,
    body: Vec<FixSpec>,
    exits: HashMap<String, Vec<FixSpec>>,
}

impl Procedure {
    /// Creates a procedure from its body fix specs.
    pub fn try_new(ident: &str, body: &[&str]) -> Result<Self, Error> {
        Ok(Self {
            ident: ident.to_uppercase(),
            entries: HashMap::new(),
            body: Self::parse_specs(body)?,
            exits: HashMap::new(),
        })
    }

    /// Adds an entry transition selected by the given fix ident.
    pub fn entry(mut self, fix: &str, specs: &[&str]) -> Result<Self, Error> {
        self.entries
            .insert(fix.to_uppercase(), Self::parse_specs(specs)?);
        Ok(self)
    }

    /// Adds an exit transition selected by the given fix ident.
    pub fn exit(mut self, fix: &str, specs: &[&str]) -> Result<Self, Error> {
        self.exits
            .insert(fix.to_uppercase(), Self::parse_specs(specs)?);
        Ok(self)
    }

    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// The entry transition for the fix or `None` if the procedure has
    /// no entry at that fix.
    pub fn entry_transition(&self, fix: &str) -> Option<&[FixSpec]> {
        self.entries.get(&fix.to_uppercase()).map(Vec::as_slice)
    }

    /// The exit transition for the fix or `None` if the procedure has
    /// no exit at that fix.
    pub fn exit_transition(&self, fix: &str) -> Option<&[FixSpec]> {
        self.exits.get(&fix.to_uppercase()).map(Vec::as_slice)
    }

    pub fn body(&self) -> &[FixSpec] {
        &self.body
    }

    fn parse_specs(specs: &[&str]) -> Result<Vec<FixSpec>, Error> {
        specs.iter().map(|s| s.parse()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_fix_spec() {
        let spec = FixSpec::from_str("PRINO").expect("spec should parse");

        assert_eq!(spec.ident(), "PRINO");
        assert_eq!(spec.altitude(), None);
        assert_eq!(spec.speed(), None);
    }

    #[test]
    fn parses_restrictions() {
        let spec = FixSpec::from_str("MISEN|A240").expect("spec should parse");
        assert_eq!(spec.altitude(), Some(24000.0));
        assert_eq!(spec.speed(), None);

        let spec = FixSpec::from_str("IPUMY|A110|S230").expect("spec should parse");
        assert_eq!(spec.altitude(), Some(11000.0));
        assert_eq!(spec.speed(), Some(230.0));
    }

    #[test]
    fn drops_at_or_above_and_below_qualifiers() {
        let spec = FixSpec::from_str("FRAWG|A80+|S210+").expect("spec should parse");
        assert_eq!(spec.altitude(), Some(8000.0));
        assert_eq!(spec.speed(), Some(210.0));

        let spec = FixSpec::from_str("SHEAD|A140-").expect("spec should parse");
        assert_eq!(spec.altitude(), Some(14000.0));
    }

    #[test]
    fn fails_on_unknown_restriction() {
        assert_eq!(
            FixSpec::from_str("MISEN|Q240"),
            Err(Error::InvalidFixSpec("MISEN|Q240".to_string()))
        );
        assert_eq!(
            FixSpec::from_str("MISEN|A"),
            Err(Error::InvalidFixSpec("MISEN|A".to_string()))
        );
        assert_eq!(
            FixSpec::from_str("|A240"),
            Err(Error::InvalidFixSpec("|A240".to_string()))
        );
    }

    #[test]
    fn selects_transitions() {
        let procedure = Procedure::try_new("KEPEC3", &["SKEBR|A170", "PRINO"])
            .and_then(|p| p.entry("DAG", &["DAG", "MISEN|A240", "CLARR"]))
            .and_then(|p| p.exit("KLAS", &[]))
            .expect("procedure should build");

        assert_eq!(
            procedure
                .entry_transition("dag")
                .map(|specs| specs.len()),
            Some(3)
        );
        assert!(procedure.entry_transition("MLF").is_none());
        assert_eq!(procedure.exit_transition("klas").map(|s| s.len()), Some(0));
        assert_eq!(procedure.body().len(), 2);
    }
}

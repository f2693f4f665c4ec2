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

//! Navigation Data.
//!
//! The navigation data is the lookup collaborator of the route decoder:
//! it resolves fix idents to positions and procedure idents to their
//! [`Procedure`] definitions. All lookups are case-insensitive from the
//! caller's perspective; idents are stored uppercase as published.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use geo::Point;

mod procedure;

pub use procedure::{FixSpec, Procedure};

/// A named navigation fix with a position.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fix {
    ident: String,
    position: Point<f64>,
}

impl Fix {
    /// Creates a fix, normalizing the ident to uppercase.
    pub fn new(ident: &str, position: Point<f64>) -> Self {
        Self {
            ident: ident.to_uppercase(),
            position,
        }
    }

    pub fn ident(&self) -> &str {
        &self.ident
    }

    pub fn position(&self) -> Point<f64> {
        self.position
    }
}

/// In-memory navigation database of fixes and procedures.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavigationData {
    fixes: HashMap<String, Fix>,
    procedures: HashMap<String, Procedure>,
}

impl NavigationData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a fix, replacing any fix published under the same ident.
    pub fn insert_fix(&mut self, fix: Fix) {
        self.fixes.insert(fix.ident.clone(), fix);
    }

    /// Adds a procedure, replacing any procedure published under the
    /// same ident.
    pub fn insert_procedure(&mut self, procedure: Procedure) {
        self.procedures
            .insert(procedure.ident().to_string(), procedure);
    }

    /// Searches for a fix by ident.
    ///
    /// The search is case-insensitive and does not perform partial
    /// matching.
    pub fn find_fix(&self, ident: &str) -> Option<&Fix> {
        self.fixes.get(&ident.to_uppercase())
    }

    /// Searches for a procedure by ident.
    ///
    /// The search is case-insensitive and does not perform partial
    /// matching.
    pub fn procedure(&self, ident: &str) -> Option<&Procedure> {
        self.procedures.get(&ident.to_uppercase())
    }
}

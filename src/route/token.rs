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

//! Route string tokenization.
//!
//! A route string is a sequence of segments separated by `..`. Each
//! segment is classified on its format alone, without consulting the
//! navigation data:
//!
//! - `"COWBY"` → [`Token::Direct`]
//! - `"@BIKKR"` → [`Token::Hold`]
//! - `"DAG.KEPEC3.KLAS"` → [`Token::Procedure`] with an entry transition
//! - `"KEPEC3.KLAS"` → [`Token::Procedure`] without an entry transition
//!
//! Resolution against the navigation data happens afterwards when the
//! tokens are [built into legs](super::decode). The input is normalized
//! to lowercase; all emitted route text is lowercase.

use std::fmt;

use crate::error::{Error, Result};

const SEGMENT_SEPARATOR: &str = "..";
const PROCEDURE_SEPARATOR: char = '.';
const HOLD_PREFIX: char = '@';

/// A classified route segment, not yet resolved.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Token {
    /// A single fix flown direct.
    Direct(String),
    /// A holding pattern at a single fix.
    Hold(String),
    /// A procedure reference selecting an optional entry and an exit
    /// transition.
    Procedure {
        entry: Option<String>,
        procedure: String,
        exit: String,
    },
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct(ident) => write!(f, "{ident}"),
            Self::Hold(ident) => write!(f, "{HOLD_PREFIX}{ident}"),
            Self::Procedure {
                entry: Some(entry),
                procedure,
                exit,
            } => write!(f, "{entry}.{procedure}.{exit}"),
            Self::Procedure {
                entry: None,
                procedure,
                exit,
            } => write!(f, "{procedure}.{exit}"),
        }
    }
}

/// The classified segments of a route string, in flying order.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Tokens {
    tokens: Vec<Token>,
}

impl Tokens {
    pub fn try_new(s: &str) -> Result<Self> {
        let tokens = s
            .trim()
            .to_lowercase()
            .split(SEGMENT_SEPARATOR)
            .map(Self::classify)
            .collect::<Result<Vec<Token>>>()?;

        Ok(Self { tokens })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    fn classify(segment: &str) -> Result<Token> {
        if let Some(ident) = segment.strip_prefix(HOLD_PREFIX) {
            if ident.is_empty() || ident.contains(PROCEDURE_SEPARATOR) {
                return Err(Error::UnexpectedRouteToken(segment.to_string()));
            }

            return Ok(Token::Hold(ident.to_string()));
        }

        let parts: Vec<&str> = segment.split(PROCEDURE_SEPARATOR).collect();

        if parts.iter().any(|part| part.is_empty()) {
            return Err(Error::UnexpectedRouteToken(segment.to_string()));
        }

        match parts[..] {
            [ident] => Ok(Token::Direct(ident.to_string())),
            [procedure, exit] => Ok(Token::Procedure {
                entry: None,
                procedure: procedure.to_string(),
                exit: exit.to_string(),
            }),
            [entry, procedure, exit] => Ok(Token::Procedure {
                entry: Some(entry.to_string()),
                procedure: procedure.to_string(),
                exit: exit.to_string(),
            }),
            _ => Err(Error::UnexpectedRouteToken(segment.to_string())),
        }
    }
}

impl IntoIterator for Tokens {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////

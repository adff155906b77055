/*
Copyright 2021 BlackRock, Inc.

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a zero linear or constant coefficient is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ZeroTerms {
    /// Drop the term entirely: `x² + 1`.
    #[default]
    Omit,
    /// Keep the term with an explicit zero: `x² + 0x + 1`.
    Explicit,
}

impl fmt::Display for ZeroTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZeroTerms::Omit => write!(f, "omit"),
            ZeroTerms::Explicit => write!(f, "explicit"),
        }
    }
}

impl FromStr for ZeroTerms {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "omit" => Ok(ZeroTerms::Omit),
            "explicit" => Ok(ZeroTerms::Explicit),
            other => Err(format!(
                "unknown zero-term policy '{}' (expected 'omit' or 'explicit')",
                other
            )),
        }
    }
}

/// Settings that control how computed values are rendered as text.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Settings {
    /// Values within this absolute distance of a whole number are
    /// rendered as that whole number.
    pub whole_tolerance: f64,
    /// Rendering policy for zero linear and constant coefficients.
    pub zero_terms: ZeroTerms,
}

impl Settings {
    /// Initializes a new bundle of rendering settings.
    ///
    /// # Panics
    /// * If `whole_tolerance` is negative or not finite.
    ///
    /// # Example
    /// ```
    /// use quadratics::{Settings, ZeroTerms};
    /// let settings = Settings::new(0., ZeroTerms::Explicit);
    /// assert_eq!(settings.zero_terms, ZeroTerms::Explicit);
    /// ```
    pub fn new(whole_tolerance: f64, zero_terms: ZeroTerms) -> Settings {
        assert!(
            whole_tolerance.is_finite() && whole_tolerance >= 0.,
            "Whole-number tolerance must be finite and non-negative."
        );
        Settings {
            whole_tolerance,
            zero_terms,
        }
    }

    /// Gets default rendering settings.
    pub fn defaults() -> Self {
        Self {
            whole_tolerance: 1e-9,
            zero_terms: ZeroTerms::default(),
        }
    }

    pub fn with_whole_tolerance(self, whole_tolerance: f64) -> Self {
        Settings::new(whole_tolerance, self.zero_terms)
    }

    pub fn with_zero_terms(self, zero_terms: ZeroTerms) -> Self {
        Settings { zero_terms, ..self }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::defaults()
    }
}

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

//! Plain-text rendering of numbers and quadratic functions.

use crate::quadratics::quadratic::Quadratic;
use crate::quadratics::utils;
use crate::settings::{Settings, ZeroTerms};
use num::traits::ToPrimitive;
use std::fmt;

/// A number as it should be displayed: whole numbers lose their fractional part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coefficient {
    Whole(i64),
    Real(f64),
}

impl Coefficient {
    /// Normalizes `k`, snapping it to a whole number if it lies within the settings' tolerance
    /// of one.
    ///
    /// # Example
    /// ```
    /// use quadratics::quadratics::render::Coefficient;
    /// use quadratics::Settings;
    /// assert_eq!(Coefficient::normalize(2., &Settings::defaults()), Coefficient::Whole(2));
    /// assert_eq!(Coefficient::normalize(-0.25, &Settings::defaults()), Coefficient::Real(-0.25));
    /// ```
    pub fn normalize(k: f64, settings: &Settings) -> Coefficient {
        match utils::nearest_whole(k, settings.whole_tolerance).and_then(|w| w.to_i64()) {
            Some(whole) => Coefficient::Whole(whole),
            None => Coefficient::Real(k),
        }
    }

    pub fn is_zero(&self) -> bool {
        match *self {
            Coefficient::Whole(w) => w == 0,
            Coefficient::Real(r) => r == 0.,
        }
    }

    pub fn is_negative(&self) -> bool {
        match *self {
            Coefficient::Whole(w) => w < 0,
            Coefficient::Real(r) => r < 0.,
        }
    }

    /// Returns `true` for exactly one or minus one.
    pub fn is_unit(&self) -> bool {
        matches!(*self, Coefficient::Whole(1) | Coefficient::Whole(-1))
    }

    /// Renders the magnitude without a sign.
    fn magnitude(&self) -> String {
        match *self {
            Coefficient::Whole(w) => w.unsigned_abs().to_string(),
            Coefficient::Real(r) => r.abs().to_string(),
        }
    }
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Coefficient::Whole(w) => write!(f, "{}", w),
            Coefficient::Real(r) => write!(f, "{}", r),
        }
    }
}

/// Renders a standalone number, e.g. `2` for 2.0 and `-0.25` for -0.25.
pub fn number(x: f64, settings: &Settings) -> String {
    Coefficient::normalize(x, settings).to_string()
}

/// Renders a coefficient as a signed trailing term: `+ 5` for 5, `- 5` for -5. Zero renders as
/// `+ 0` or not at all, depending on `settings.zero_terms`.
///
/// # Example
/// ```
/// use quadratics::quadratics::render::format_coefficient;
/// use quadratics::{Settings, ZeroTerms};
/// let settings = Settings::defaults();
/// assert_eq!(format_coefficient(5., &settings), Some("+ 5".to_string()));
/// assert_eq!(format_coefficient(-2.5, &settings), Some("- 2.5".to_string()));
/// assert_eq!(format_coefficient(0., &settings), None);
/// let explicit = settings.with_zero_terms(ZeroTerms::Explicit);
/// assert_eq!(format_coefficient(0., &explicit), Some("+ 0".to_string()));
/// ```
pub fn format_coefficient(k: f64, settings: &Settings) -> Option<String> {
    signed_term(Coefficient::normalize(k, settings), "", settings)
}

fn signed_term(k: Coefficient, variable: &str, settings: &Settings) -> Option<String> {
    if k.is_zero() && settings.zero_terms == ZeroTerms::Omit {
        return None;
    }
    let sign = if k.is_negative() { "-" } else { "+" };
    // the unit coefficient is implicit only when a variable follows it
    let magnitude = if k.is_unit() && !variable.is_empty() {
        String::new()
    } else {
        k.magnitude()
    };
    Some(format!("{} {}{}", sign, magnitude, variable))
}

fn leading_term(a: Coefficient) -> String {
    if a.is_unit() {
        let sign = if a.is_negative() { "-" } else { "" };
        format!("{}x\u{b2}", sign)
    } else {
        format!("{}x\u{b2}", a)
    }
}

/// Renders the right-hand side of f(x) = ax^2 + bx + c, e.g. `x² - 3x + 2`.
pub fn function_text(quad: &Quadratic, settings: &Settings) -> String {
    let mut terms = vec![leading_term(Coefficient::normalize(quad.a, settings))];
    if let Some(linear) = signed_term(Coefficient::normalize(quad.b, settings), "x", settings) {
        terms.push(linear);
    }
    if let Some(constant) = format_coefficient(quad.c, settings) {
        terms.push(constant);
    }
    terms.join(" ")
}

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

//! Closed-form properties of quadratic functions f(x) = ax² + bx + c.
//!
//! Every computation is a pure function of its inputs and returns a
//! [`Calculation`](quadratics/calculation/struct.Calculation.html) pairing the
//! machine-usable value with a plain-text rendering.
//!
//! # Example
//! ```
//! use quadratics::{find_roots, peak_point};
//! let roots = find_roots(1., -3., 2.).unwrap();
//! assert_eq!(roots.value(), &Some((2., 1.)));
//! assert_eq!(roots.readable(), "x = 2 or x = 1");
//! assert_eq!(peak_point(1., -3., 2.).unwrap().value(), &(1.5, -0.25));
//! ```

#[macro_use]
extern crate approx;

pub mod error;
pub mod quadratics;
pub mod settings;

pub use crate::error::{QuadraticError, Result};
pub use crate::quadratics::analysis::{
    crossing_x_axis, crossing_y_axis, discriminant, find_function_from_crossing_x,
    find_function_from_crossing_x_with, find_function_from_peak_point,
    find_function_from_peak_point_with, find_roots, optimum, peak_point, symmetry,
};
pub use crate::quadratics::calculation::Calculation;
pub use crate::quadratics::quadratic::{Optimum, OptimumKind, Point, Quadratic};
pub use crate::settings::{Settings, ZeroTerms};

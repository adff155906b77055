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

//! Error types for quadratic computations.

use thiserror::Error;

/// Result type alias using [`QuadraticError`].
pub type Result<T> = std::result::Result<T, QuadraticError>;

/// Errors that can occur when analyzing or reconstructing a quadratic.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum QuadraticError {
    /// The discriminant is negative, so the roots are complex.
    #[error("No real roots: discriminant {discriminant} is negative")]
    NoRealRoots {
        /// The offending discriminant b^2 - 4ac.
        discriminant: f64,
    },

    /// The quadratic coefficient is zero, so the function is not a quadratic.
    #[error("Degenerate coefficient: the quadratic coefficient must be nonzero")]
    DegenerateCoefficient,

    /// The arbitrary point used for reconstruction shares its x-coordinate with the
    /// peak point or with one of the roots.
    #[error("Coincident input points: arbitrary point shares x = {x} with a known point")]
    CoincidentInputPoints {
        /// The shared x-coordinate.
        x: f64,
    },
}

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

use crate::error::{QuadraticError, Result};
use crate::quadratics::render;
use crate::settings::Settings;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// A point (x, y) in the plane.
pub type Point = (f64, f64);

/// This structure represents a quadratic function f(x) = `a`x^2 + `b`x + `c` over the whole line.
///
/// Any triple can be stored, but every computation that divides by `a` rejects `a` == 0
/// with `QuadraticError::DegenerateCoefficient`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quadratic {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Whether the optimum of a quadratic is a maximum or a minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OptimumKind {
    /// The parabola opens downward (`a` < 0).
    Maximum,
    /// The parabola opens upward (`a` > 0).
    Minimum,
}

impl fmt::Display for OptimumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptimumKind::Maximum => write!(f, "maximum"),
            OptimumKind::Minimum => write!(f, "minimum"),
        }
    }
}

/// The optimum value of a quadratic and whether it is a maximum or a minimum.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Optimum {
    pub value: f64,
    pub kind: OptimumKind,
}

impl Quadratic {
    /// Constructs a new `Quadratic` from its coefficients.
    ///
    /// # Example
    /// ```
    /// use quadratics::Quadratic;
    /// // The function below corresponds to f(x) = x^2 - 3x + 2
    /// let quad = Quadratic::new(1., -3., 2.);
    /// assert_eq!(quad.eval(2.), 0.);
    /// ```
    pub fn new(a: f64, b: f64, c: f64) -> Quadratic {
        Quadratic { a, b, c }
    }

    /// Determines whether the quadratic coefficient is zero, in which case the function is
    /// affine and has no vertex. Any nonzero `a`, however small, is a genuine quadratic.
    pub fn is_degenerate(&self) -> bool {
        self.a == 0.
    }

    fn ensure_quadratic(&self) -> Result<()> {
        if self.is_degenerate() {
            debug!(a = self.a, b = self.b, c = self.c, "rejecting degenerate quadratic");
            return Err(QuadraticError::DegenerateCoefficient);
        }
        Ok(())
    }

    /// Determines whether two quadratics have approximately the same coefficients.
    pub fn approx(&self, other: &Quadratic) -> bool {
        relative_eq!(self.a, other.a, epsilon = 1e-9, max_relative = 1e-9)
            && relative_eq!(self.b, other.b, epsilon = 1e-9, max_relative = 1e-9)
            && relative_eq!(self.c, other.c, epsilon = 1e-9, max_relative = 1e-9)
    }

    /// Evaluates `self` at a point `x`.
    pub fn eval(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }

    /// Returns the discriminant b^2 - 4ac.
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4. * self.a * self.c
    }

    /// Returns the real roots `((-b + sqrt(D)) / 2a, (-b - sqrt(D)) / 2a)` in that order. Any
    /// negative discriminant, however small, means there are no real roots. The
    /// roots are not sorted, so the first root is the larger one exactly when `a` > 0.
    ///
    /// # Errors
    /// * `NoRealRoots` if the discriminant is negative.
    /// * `DegenerateCoefficient` if `a` is zero.
    ///
    /// # Example
    /// ```
    /// use quadratics::Quadratic;
    /// // f(x) = (x - 2)(x - 1)
    /// let quad = Quadratic::new(1., -3., 2.);
    /// assert_eq!(quad.real_roots().unwrap(), (2., 1.));
    /// ```
    pub fn real_roots(&self) -> Result<(f64, f64)> {
        self.ensure_quadratic()?;
        let discriminant = self.discriminant();
        if discriminant < 0. {
            debug!(discriminant, "no real roots");
            return Err(QuadraticError::NoRealRoots { discriminant });
        }
        let sqrt_discriminant = discriminant.sqrt();
        let x1 = (-self.b + sqrt_discriminant) / (2. * self.a);
        let x2 = (-self.b - sqrt_discriminant) / (2. * self.a);
        trace!(x1, x2, "found roots");
        Ok((x1, x2))
    }

    /// Like `real_roots`, but reports a negative discriminant as `None` rather than an error.
    pub fn roots(&self) -> Result<Option<(f64, f64)>> {
        match self.real_roots() {
            Ok(roots) => Ok(Some(roots)),
            Err(QuadraticError::NoRealRoots { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Returns f(0), which is always `c`.
    pub fn y_intercept(&self) -> f64 {
        self.c
    }

    /// Returns the x-coordinate of the axis of symmetry, -b / 2a.
    pub fn axis_of_symmetry(&self) -> Result<f64> {
        self.ensure_quadratic()?;
        Ok(-self.b / (2. * self.a))
    }

    /// Returns the optimum value -D / 4a, which is a maximum if the parabola opens downward
    /// and a minimum otherwise.
    pub fn optimum(&self) -> Result<Optimum> {
        self.ensure_quadratic()?;
        let value = -self.discriminant() / (4. * self.a);
        let kind = if self.a < 0. {
            OptimumKind::Maximum
        } else {
            OptimumKind::Minimum
        };
        Ok(Optimum { value, kind })
    }

    /// Returns the vertex of the parabola, (axis of symmetry, optimum value).
    pub fn peak_point(&self) -> Result<Point> {
        Ok((self.axis_of_symmetry()?, self.optimum()?.value))
    }

    /// Reconstructs the quadratic with vertex `peak` that passes through `arb`, by solving the
    /// vertex form f(x) = a(x - xp)^2 + yp at `arb` for `a`.
    ///
    /// # Errors
    /// * `CoincidentInputPoints` if `arb` has the same x-coordinate as `peak`, or one so close
    ///   that the squared distance between them underflows to zero.
    /// * `DegenerateCoefficient` if `arb` has the same y-coordinate as `peak`, in which case
    ///   the only solution is a constant function.
    ///
    /// # Example
    /// ```
    /// use quadratics::Quadratic;
    /// let quad = Quadratic::from_peak_point((1.5, -0.25), (2., 0.)).unwrap();
    /// assert_eq!(quad, Quadratic::new(1., -3., 2.));
    /// ```
    pub fn from_peak_point(peak: Point, arb: Point) -> Result<Quadratic> {
        let (xp, yp) = peak;
        let (xq, yq) = arb;
        // (xq - xp)^2 == xq^2 - 2 xq xp + xp^2 without the cancellation of the expanded form
        let squared_distance = (xq - xp) * (xq - xp);
        if squared_distance == 0. {
            debug!(x = xq, "arbitrary point is vertically aligned with the peak point");
            return Err(QuadraticError::CoincidentInputPoints { x: xq });
        }
        let a = (yq - yp) / squared_distance;
        let b = -2. * a * xp;
        let c = a * xp * xp + yp;
        let quad = Quadratic::new(a, b, c);
        quad.ensure_quadratic()?;
        Ok(quad)
    }

    /// Reconstructs the quadratic with roots `roots` that passes through `arb`, by solving the
    /// factored form f(x) = a(x - r1)(x - r2) at `arb` for `a`.
    ///
    /// # Errors
    /// * `CoincidentInputPoints` if `arb` has the same x-coordinate as either root, or the
    ///   product of its distances to the roots underflows to zero.
    /// * `DegenerateCoefficient` if `arb` lies on the x-axis.
    pub fn from_roots(roots: (f64, f64), arb: Point) -> Result<Quadratic> {
        let (r1, r2) = roots;
        let (xq, yq) = arb;
        let root_product = (xq - r1) * (xq - r2);
        if root_product == 0. {
            debug!(x = xq, "arbitrary point is vertically aligned with a root");
            return Err(QuadraticError::CoincidentInputPoints { x: xq });
        }
        let a = yq / root_product;
        let b = -a * r2 - a * r1;
        let c = a * r1 * r2;
        let quad = Quadratic::new(a, b, c);
        quad.ensure_quadratic()?;
        Ok(quad)
    }
}

// Can print out quadratics
impl fmt::Display for Quadratic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "f(x) = {}",
            render::function_text(self, &Settings::defaults())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // DISCRIMINANT

    #[test]
    fn test_discriminant() {
        assert_eq!(Quadratic::new(1., -3., 2.).discriminant(), 1.);
        assert_eq!(Quadratic::new(1., 0., 1.).discriminant(), -4.);
        // the discriminant is defined even without a quadratic term
        assert_eq!(Quadratic::new(0., 2., 5.).discriminant(), 4.);
    }

    // ROOTS

    #[test]
    fn test_real_roots_are_unsorted() {
        let (x1, x2) = Quadratic::new(1., -3., 2.).real_roots().unwrap();
        assert_eq!((x1, x2), (2., 1.));
        // with a < 0 the "+" root is the smaller one
        let (x1, x2) = Quadratic::new(-1., 3., -2.).real_roots().unwrap();
        assert_eq!((x1, x2), (1., 2.));
    }

    #[test]
    fn test_real_roots_double() {
        let (x1, x2) = Quadratic::new(1., -4., 4.).real_roots().unwrap();
        assert_eq!(x1, 2.);
        assert_eq!(x2, 2.);
    }

    #[test]
    fn test_real_roots_none() {
        let err = Quadratic::new(1., 0., 1.).real_roots().unwrap_err();
        assert_eq!(err, QuadraticError::NoRealRoots { discriminant: -4. });
        assert_eq!(Quadratic::new(1., 0., 1.).roots(), Ok(None));
    }

    #[test]
    fn test_real_roots_none_at_any_scale() {
        for &scale in &[1e-9, 1e-150, 1., 1e9] {
            let quad = Quadratic::new(scale, 0., scale);
            assert!(quad.discriminant() < 0.);
            assert_eq!(quad.roots(), Ok(None), "{:?}", quad);
        }
    }

    #[test]
    fn test_real_roots_tiny_leading_coefficient() {
        // f(x) = 1e-17 x^2 - x has roots 0 and 1e17
        let quad = Quadratic::new(1e-17, -1., 0.);
        assert!(!quad.is_degenerate());
        let (x1, x2) = quad.real_roots().unwrap();
        assert_relative_eq!(x1, 1e17, max_relative = 1e-12);
        assert_eq!(x2, 0.);
    }

    #[test]
    fn test_real_roots_degenerate() {
        let line = Quadratic::new(0., 1., -1.);
        assert_eq!(
            line.real_roots(),
            Err(QuadraticError::DegenerateCoefficient)
        );
        assert_eq!(line.roots(), Err(QuadraticError::DegenerateCoefficient));
    }

    #[test]
    fn test_roots_satisfy_equation() {
        let quad = Quadratic::new(2.5, 7.25, -3.);
        let (x1, x2) = quad.real_roots().unwrap();
        assert_relative_eq!(quad.eval(x1), 0., epsilon = 1e-12);
        assert_relative_eq!(quad.eval(x2), 0., epsilon = 1e-12);
    }

    // INTERCEPT, SYMMETRY, OPTIMUM

    #[test]
    fn test_y_intercept() {
        let quad = Quadratic::new(0., 0., -7.5);
        assert_eq!(quad.y_intercept(), -7.5);
        assert_eq!(quad.y_intercept(), quad.eval(0.));
    }

    #[test]
    fn test_axis_of_symmetry() {
        assert_eq!(Quadratic::new(1., -3., 2.).axis_of_symmetry(), Ok(1.5));
        assert_eq!(
            Quadratic::new(0., -3., 2.).axis_of_symmetry(),
            Err(QuadraticError::DegenerateCoefficient)
        );
    }

    #[test]
    fn test_optimum_minimum() {
        let optimum = Quadratic::new(1., -3., 2.).optimum().unwrap();
        assert_eq!(optimum.value, -0.25);
        assert_eq!(optimum.kind, OptimumKind::Minimum);
    }

    #[test]
    fn test_optimum_maximum() {
        let optimum = Quadratic::new(-2., 4., 1.).optimum().unwrap();
        assert_eq!(optimum.value, 3.);
        assert_eq!(optimum.kind, OptimumKind::Maximum);
    }

    #[test]
    fn test_optimum_without_real_roots() {
        let optimum = Quadratic::new(1., 0., 1.).optimum().unwrap();
        assert_eq!(optimum.value, 1.);
        assert_eq!(optimum.kind, OptimumKind::Minimum);
    }

    #[test]
    fn test_optimum_degenerate() {
        assert_eq!(
            Quadratic::new(0., 1., 1.).optimum(),
            Err(QuadraticError::DegenerateCoefficient)
        );
    }

    // PEAK POINT

    #[test]
    fn test_peak_point() {
        let quad = Quadratic::new(1., -3., 2.);
        let (x, y) = quad.peak_point().unwrap();
        assert_eq!((x, y), (1.5, -0.25));
        assert_eq!(x, quad.axis_of_symmetry().unwrap());
        assert_relative_eq!(quad.eval(x), y);
    }

    // RECONSTRUCTION

    #[test]
    fn test_from_peak_point() {
        let quad = Quadratic::from_peak_point((1.5, -0.25), (2., 0.)).unwrap();
        assert_eq!(quad, Quadratic::new(1., -3., 2.));
    }

    #[test]
    fn test_from_peak_point_off_curve_point() {
        // (2, 2) is not on x^2 - 3x + 2, so a steeper parabola through it comes back
        let quad = Quadratic::from_peak_point((1.5, -0.25), (2., 2.)).unwrap();
        assert_eq!(quad, Quadratic::new(9., -27., 20.));
    }

    #[test]
    fn test_from_peak_point_coincident() {
        assert_eq!(
            Quadratic::from_peak_point((1.5, -0.25), (1.5, 3.)),
            Err(QuadraticError::CoincidentInputPoints { x: 1.5 })
        );
    }

    #[test]
    fn test_from_peak_point_flat() {
        assert_eq!(
            Quadratic::from_peak_point((1.5, -0.25), (4., -0.25)),
            Err(QuadraticError::DegenerateCoefficient)
        );
    }

    #[test]
    fn test_from_peak_point_tiny_coefficient() {
        let quad = Quadratic::from_peak_point((0., 0.), (1e5, 1e-7)).unwrap();
        assert_relative_eq!(quad.a, 1e-17, max_relative = 1e-12);
        assert_eq!(quad.b, 0.);
        assert_eq!(quad.c, 0.);
    }

    #[test]
    fn test_from_peak_point_nearby_abscissa() {
        // the x-coordinates differ by far less than f64::EPSILON but are still distinct
        let quad = Quadratic::from_peak_point((0., 0.), (1e-20, 1e-40)).unwrap();
        assert_relative_eq!(quad.a, 1., max_relative = 1e-12);
        assert_eq!(
            Quadratic::from_peak_point((1e-300, 0.), (2e-300, 1.)),
            Err(QuadraticError::CoincidentInputPoints { x: 2e-300 })
        );
    }

    #[test]
    fn test_from_roots() {
        let quad = Quadratic::from_roots((2., 1.), (3., 2.)).unwrap();
        assert_eq!(quad, Quadratic::new(1., -3., 2.));
        let quad = Quadratic::from_roots((-1., 3.), (1., 8.)).unwrap();
        assert_eq!(quad, Quadratic::new(-2., 4., 6.));
    }

    #[test]
    fn test_from_roots_coincident() {
        assert_eq!(
            Quadratic::from_roots((2., 1.), (1., 5.)),
            Err(QuadraticError::CoincidentInputPoints { x: 1. })
        );
        assert_eq!(
            Quadratic::from_roots((2., 1.), (2., 5.)),
            Err(QuadraticError::CoincidentInputPoints { x: 2. })
        );
    }

    #[test]
    fn test_from_roots_tiny_roots() {
        // f(x) = x(x - 1e-20) through (1, 1 - 1e-20)
        let quad = Quadratic::from_roots((0., 1e-20), (1., 1.)).unwrap();
        assert_relative_eq!(quad.a, 1., max_relative = 1e-12);
        assert_relative_eq!(quad.b, -1e-20, max_relative = 1e-12);
        assert_eq!(quad.c, 0.);
    }

    #[test]
    fn test_from_roots_on_axis() {
        assert_eq!(
            Quadratic::from_roots((2., 1.), (5., 0.)),
            Err(QuadraticError::DegenerateCoefficient)
        );
    }

    #[test]
    fn test_approx() {
        let quad = Quadratic::new(0.1 + 0.2, -3., 2.);
        assert_ne!(quad, Quadratic::new(0.3, -3., 2.));
        assert!(quad.approx(&Quadratic::new(0.3, -3., 2.)));
        assert!(!quad.approx(&Quadratic::new(0.3, -3., 2.001)));
    }

    // DISPLAY

    #[test]
    fn test_display() {
        assert_eq!(
            Quadratic::new(1., -3., 2.).to_string(),
            "f(x) = x\u{b2} - 3x + 2"
        );
        assert_eq!(
            Quadratic::new(-0.5, 1., 0.).to_string(),
            "f(x) = -0.5x\u{b2} + x"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let quad = Quadratic::new(1., -3., 2.);
        let json = serde_json::to_string(&quad).unwrap();
        let parsed: Quadratic = serde_json::from_str(&json).unwrap();
        assert_eq!(quad, parsed);
    }
}

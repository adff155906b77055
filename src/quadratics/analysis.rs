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

//! One function per computation over the coefficients `a`, `b`, `c` of f(x) = ax^2 + bx + c.
//! Each returns a `Calculation` holding the value and its plain-text rendering.

use crate::error::Result;
use crate::quadratics::calculation::Calculation;
use crate::quadratics::quadratic::{Optimum, Point, Quadratic};
use crate::quadratics::render;
use crate::settings::Settings;

fn num(x: f64) -> String {
    render::number(x, &Settings::defaults())
}

fn roots_text(roots: (f64, f64)) -> String {
    format!("x = {} or x = {}", num(roots.0), num(roots.1))
}

/// Returns the discriminant b^2 - 4ac.
pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    Quadratic::new(a, b, c).discriminant()
}

/// Finds the real roots of ax^2 + bx + c. The value is `None` when the discriminant is negative.
///
/// # Errors
/// * `DegenerateCoefficient` if `a` is zero.
///
/// # Example
/// ```
/// use quadratics::find_roots;
/// let roots = find_roots(1., 0., 1.).unwrap();
/// assert_eq!(roots.value(), &None);
/// assert_eq!(roots.readable(), "No real roots");
/// ```
pub fn find_roots(a: f64, b: f64, c: f64) -> Result<Calculation<Option<(f64, f64)>>> {
    let roots = Quadratic::new(a, b, c).roots()?;
    let readable = match roots {
        Some(pair) => roots_text(pair),
        None => "No real roots".to_string(),
    };
    Ok(Calculation::new(roots, readable))
}

/// Finds x such that f(x) = 0. Same values as `find_roots`.
pub fn crossing_x_axis(a: f64, b: f64, c: f64) -> Result<Calculation<Option<(f64, f64)>>> {
    let roots = find_roots(a, b, c)?.into_value();
    let readable = match roots {
        Some(pair) => roots_text(pair),
        None => "no real roots".to_string(),
    };
    Ok(Calculation::new(roots, readable))
}

/// Finds y = f(0), which is always `c`.
pub fn crossing_y_axis(a: f64, b: f64, c: f64) -> Calculation<f64> {
    let y = Quadratic::new(a, b, c).y_intercept();
    Calculation::new(y, format!("f(0) = {}", num(y)))
}

/// Finds the axis of symmetry x = -b / 2a.
pub fn symmetry(a: f64, b: f64, c: f64) -> Result<Calculation<f64>> {
    let x = Quadratic::new(a, b, c).axis_of_symmetry()?;
    Ok(Calculation::new(x, format!("x = {}", num(x))))
}

/// Finds the optimum (maximum or minimum) value -D / 4a.
pub fn optimum(a: f64, b: f64, c: f64) -> Result<Calculation<Optimum>> {
    let optimum = Quadratic::new(a, b, c).optimum()?;
    let readable = format!("optimum: {} ({})", num(optimum.value), optimum.kind);
    Ok(Calculation::new(optimum, readable))
}

/// Finds the peak point (vertex) of the parabola.
pub fn peak_point(a: f64, b: f64, c: f64) -> Result<Calculation<Point>> {
    let point = (
        symmetry(a, b, c)?.into_value(),
        optimum(a, b, c)?.into_value().value,
    );
    let readable = format!("peak point: ({}, {})", num(point.0), num(point.1));
    Ok(Calculation::new(point, readable))
}

fn function_calculation(quad: &Quadratic, settings: &Settings) -> Calculation<String> {
    let text = render::function_text(quad, settings);
    let readable = format!("f(x) = {}", text);
    Calculation::new(text, readable)
}

/// Finds the function with the given peak point that passes through `arb_point`. The value is
/// the rendered right-hand side of the function, e.g. `x² - 3x + 2`.
///
/// # Example
/// ```
/// use quadratics::find_function_from_peak_point;
/// let function = find_function_from_peak_point((1.5, -0.25), (2., 0.)).unwrap();
/// assert_eq!(function.readable(), "f(x) = x\u{b2} - 3x + 2");
/// ```
pub fn find_function_from_peak_point(peak: Point, arb_point: Point) -> Result<Calculation<String>> {
    find_function_from_peak_point_with(peak, arb_point, &Settings::defaults())
}

/// Like `find_function_from_peak_point`, rendering the function with `settings`.
pub fn find_function_from_peak_point_with(
    peak: Point,
    arb_point: Point,
    settings: &Settings,
) -> Result<Calculation<String>> {
    let quad = Quadratic::from_peak_point(peak, arb_point)?;
    Ok(function_calculation(&quad, settings))
}

/// Finds the function crossing the x-axis at `crossing_x_points` that passes through `arb_point`.
pub fn find_function_from_crossing_x(
    crossing_x_points: (f64, f64),
    arb_point: Point,
) -> Result<Calculation<String>> {
    find_function_from_crossing_x_with(crossing_x_points, arb_point, &Settings::defaults())
}

/// Like `find_function_from_crossing_x`, rendering the function with `settings`.
pub fn find_function_from_crossing_x_with(
    crossing_x_points: (f64, f64),
    arb_point: Point,
    settings: &Settings,
) -> Result<Calculation<String>> {
    let quad = Quadratic::from_roots(crossing_x_points, arb_point)?;
    Ok(function_calculation(&quad, settings))
}

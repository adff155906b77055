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

/// Returns the whole number closest to `x` if `x` is within `tolerance` of it, and `None`
/// otherwise. The tolerance is absolute, so large values with a fractional part are never
/// snapped. A nonzero `x` is never snapped to zero. A `tolerance` of zero only accepts exact
/// whole numbers.
pub fn nearest_whole(x: f64, tolerance: f64) -> Option<f64> {
    if !x.is_finite() {
        return None;
    }
    let rounded = x.round();
    if rounded == 0. && x != 0. {
        return None;
    }
    if abs_diff_eq!(x, rounded, epsilon = tolerance) {
        // adding zero turns -0 into 0
        Some(rounded + 0.)
    } else {
        None
    }
}

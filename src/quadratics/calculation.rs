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

/// The outcome of a single computation: the computed value together with a plain-text,
/// human-readable rendering of it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Calculation<T> {
    value: T,
    readable: String,
}

impl<T> Calculation<T> {
    /// Pairs a computed value with its rendering.
    pub fn new(value: T, readable: String) -> Calculation<T> {
        Calculation { value, readable }
    }

    /// The machine-usable value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The human-readable rendering.
    pub fn readable(&self) -> &str {
        &self.readable
    }

    /// Consumes the calculation, keeping only the value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Consumes the calculation, returning the value and the rendering.
    pub fn into_parts(self) -> (T, String) {
        (self.value, self.readable)
    }
}

impl<T> fmt::Display for Calculation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.readable)
    }
}

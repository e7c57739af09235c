//! Helper module with the options for gamut mapping.
//!
//! This module provides the options for mapping out-of-gamut colors into
//! gamut and the corresponding builder. The defaults match the values
//! suggested by [CSS Color
//! 4](https://drafts.csswg.org/css-color/#css-gamut-mapping).
//!
//!
//! # Example
//!
//! ```
//! # use csscolor::opt::MappingOptions;
//! let options = MappingOptions::builder()
//!     .jnd(0.03)
//!     .max_iterations(8)
//!     .build();
//!
//! assert_eq!(options.jnd(), 0.03);
//! assert_eq!(options.max_iterations(), 8);
//! assert_eq!(options.tolerance(), 0.000001);
//! ```

#[derive(Clone, Copy, Debug, PartialEq)]
struct OptionData {
    jnd: f64,
    epsilon: f64,
    tolerance: f64,
    max_iterations: usize,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            jnd: 0.02,
            epsilon: 0.0001,
            tolerance: 0.000001,
            max_iterations: 20,
        }
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the just noticeable difference.
    ///
    /// Gamut mapping accepts a clipped color whose ΔE OK to the unclipped
    /// color is less than this value.
    pub fn jnd(&mut self, jnd: f64) -> &mut Self {
        self.0.jnd = jnd.abs();
        self
    }

    /// Set the epsilon, which serves as both the resolution of the chroma
    /// search and the slack for accepting a clipped color early.
    pub fn epsilon(&mut self, epsilon: f64) -> &mut Self {
        self.0.epsilon = epsilon.abs();
        self
    }

    /// Set the tolerance for in-gamut tests.
    ///
    /// A coordinate counts as in gamut if it is within `-tolerance..=1 +
    /// tolerance`. Negative values are treated as zero.
    pub fn tolerance(&mut self, tolerance: f64) -> &mut Self {
        self.0.tolerance = tolerance.max(0.0);
        self
    }

    /// Set the maximum number of binary search steps.
    pub fn max_iterations(&mut self, max_iterations: usize) -> &mut Self {
        self.0.max_iterations = max_iterations;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> MappingOptions {
        MappingOptions(self.0)
    }
}

/// An options object for gamut mapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MappingOptions(OptionData);

impl Default for MappingOptions {
    fn default() -> Self {
        MappingOptions(OptionData::new())
    }
}

impl MappingOptions {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Instantiate options that do not tolerate any deviation from the unit
    /// range when testing whether colors are in gamut.
    pub fn strict() -> MappingOptions {
        Self::builder().tolerance(0.0).build()
    }

    /// Get the just noticeable difference.
    pub fn jnd(&self) -> f64 {
        self.0.jnd
    }

    /// Get the epsilon.
    pub fn epsilon(&self) -> f64 {
        self.0.epsilon
    }

    /// Get the tolerance for in-gamut tests.
    pub fn tolerance(&self) -> f64 {
        self.0.tolerance
    }

    /// Get the maximum number of binary search steps.
    pub fn max_iterations(&self) -> usize {
        self.0.max_iterations
    }
}

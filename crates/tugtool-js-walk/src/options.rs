// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Walk configuration.
//!
//! The walker keeps its own work stack on the heap, so deeply nested input
//! cannot overflow the thread's call stack. [`WalkOptions`] lets callers that
//! process untrusted input put a bound on nesting anyway, turning a
//! pathological tree into an error instead of an unbounded allocation.

/// Options for [`walk_with_options`](crate::walk_with_options).
///
/// # Example
///
/// ```
/// use tugtool_js_walk::WalkOptions;
///
/// let options = WalkOptions::new().with_max_depth(512);
/// assert_eq!(options.max_depth, Some(512));
/// assert_eq!(WalkOptions::default().max_depth, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WalkOptions {
    /// Maximum number of nested open nodes, counting the root as depth 1.
    ///
    /// `None` (the default) walks any depth.
    pub max_depth: Option<usize>,
}

impl WalkOptions {
    /// Creates options with no depth limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unlimited() {
        assert_eq!(WalkOptions::new().max_depth, None);
        assert_eq!(WalkOptions::new(), WalkOptions::default());
    }

    #[test]
    fn test_with_max_depth() {
        let options = WalkOptions::new().with_max_depth(3);
        assert_eq!(options.max_depth, Some(3));
        assert_eq!(options.with_max_depth(8).max_depth, Some(8));
    }
}

// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Error type for bounded walks.

use thiserror::Error;

/// Why [`walk_with_options`](crate::walk_with_options) stopped early.
///
/// `E` is the visitor's own error type. The walker never inspects it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalkError<E> {
    /// Entering the next node would have exceeded
    /// [`WalkOptions::max_depth`](crate::WalkOptions::max_depth).
    #[error("walk exceeded maximum depth of {limit}")]
    DepthLimitExceeded { limit: usize },

    /// A visitor callback returned an error.
    #[error("visitor aborted walk: {0}")]
    Visitor(E),
}

impl<E> WalkError<E> {
    /// Returns the visitor's error, if that is what stopped the walk.
    pub fn into_visitor_error(self) -> Option<E> {
        match self {
            WalkError::Visitor(err) => Some(err),
            WalkError::DepthLimitExceeded { .. } => None,
        }
    }
}

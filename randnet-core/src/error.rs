//! Error types for the randnet core library.
//!
//! Defines the error enums exposed by the public API and a convenient result
//! alias. Failing to add a link is not an error: [`crate::Network::add_link`]
//! reports it through its boolean return value.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by a [`crate::RandomSource`] draw.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DrawError {
    /// The Poisson mean was negative, NaN, infinite or too large to sample.
    #[error("poisson mean must be finite and non-negative (got {mean})")]
    InvalidMean {
        /// The rejected mean.
        mean: f64,
    },
}

/// Error type produced by [`crate::Network`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum NetworkError {
    /// A node index was at or beyond the current network size.
    #[error("node index {index} is out of range for a network of {size} nodes")]
    IndexOutOfRange {
        /// The requested node index.
        index: usize,
        /// Network size at the time of the request.
        size: usize,
    },
    /// The mean degree handed to the wiring algorithm cannot parameterise a
    /// Poisson draw.
    #[error("mean degree must be finite and non-negative (got {mean})")]
    InvalidMeanDegree {
        /// The rejected mean degree.
        mean: f64,
    },
    /// The random source failed to produce a draw.
    #[error("random draw failed: {0}")]
    Draw(#[from] DrawError),
}

define_error_codes! {
    /// Stable codes describing [`NetworkError`] variants.
    enum NetworkErrorCode for NetworkError {
        /// A node index was at or beyond the current network size.
        IndexOutOfRange => IndexOutOfRange { .. } => "NETWORK_INDEX_OUT_OF_RANGE",
        /// The mean degree cannot parameterise a Poisson draw.
        InvalidMeanDegree => InvalidMeanDegree { .. } => "NETWORK_INVALID_MEAN_DEGREE",
        /// The random source failed to produce a draw.
        DrawFailed => Draw(..) => "NETWORK_DRAW_FAILED",
    }
}

/// Largest Poisson mean accepted for a draw.
///
/// The rejection sampler stops terminating for rates near `f64::MAX`; past
/// this bound a target degree no longer fits in any realistic node count.
pub(crate) const MAX_MEAN: f64 = 1.844e19;

/// Returns `true` when `mean` can parameterise a Poisson draw.
pub(crate) fn is_valid_mean(mean: f64) -> bool {
    (0.0..=MAX_MEAN).contains(&mean)
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, NetworkError>;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(NetworkError::IndexOutOfRange { index: 3, size: 3 }, "NETWORK_INDEX_OUT_OF_RANGE")]
    #[case(NetworkError::InvalidMeanDegree { mean: -1.0 }, "NETWORK_INVALID_MEAN_DEGREE")]
    #[case(
        NetworkError::Draw(DrawError::InvalidMean { mean: f64::NAN }),
        "NETWORK_DRAW_FAILED"
    )]
    fn codes_are_stable(#[case] err: NetworkError, #[case] expected: &str) {
        assert_eq!(err.code().as_str(), expected);
        assert_eq!(err.code().to_string(), expected);
    }

    #[rstest]
    fn out_of_range_message_names_index_and_size() {
        let err = NetworkError::IndexOutOfRange { index: 7, size: 4 };
        assert_eq!(
            err.to_string(),
            "node index 7 is out of range for a network of 4 nodes"
        );
    }

    #[rstest]
    #[case(0.0, true)]
    #[case(2.5, true)]
    #[case(-0.5, false)]
    #[case(f64::NAN, false)]
    #[case(f64::INFINITY, false)]
    #[case(MAX_MEAN, true)]
    #[case(1e306, false)]
    #[case(f64::MAX, false)]
    fn mean_validation(#[case] mean: f64, #[case] valid: bool) {
        assert_eq!(is_valid_mean(mean), valid);
    }
}

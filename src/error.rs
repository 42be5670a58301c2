use crate::color::Channel;
use thiserror::Error;

/// Crate-specific error enum.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A channel value was outside of `0..=255`.
    #[error("{channel} channel value {value} is out of range 0 to 255 (inclusive)")]
    ChannelOutOfRange {
        /// The offending channel.
        channel: Channel,

        /// The value that was rejected.
        value: f64,
    },
}

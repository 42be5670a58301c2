//! An RGB color value with HSV construction and four-component scalar interop.
//!
//! # Constructing
//!
//! Create a `Color3` from red, green and blue, each in `0..=255`:
//!
//! ```
//! use color3::Color3;
//! let color = Color3::new(255., 128., 0.).unwrap();
//! assert!(Color3::new(256., 0., 0.).is_err());
//! ```
//!
//! Or from hue, saturation and value. Hue is measured in turns:
//!
//! ```
//! use color3::Color3;
//! let green = Color3::from_hsv(1. / 3., 1., 1.);
//! assert_eq!(Color3::new(0., 255., 0.).unwrap(), green);
//! ```
//!
//! # Scalars
//!
//! Vision libraries usually pass colors around as four-component scalars. Convert back and
//! forth with `Color3::to_scalar` and `Scalar::to_color3`:
//!
//! ```
//! use color3::{Color3, Scalar};
//! let color = Color3::new(1., 2., 3.).unwrap();
//! let scalar = color.to_scalar(255.);
//! assert_eq!(Scalar::new(1., 2., 3., 255.), scalar);
//! assert_eq!(color, scalar.to_color3().unwrap());
//! ```
//!
//! Colors compare equal to scalars with the same first three components:
//!
//! ```
//! use color3::{Color3, Scalar};
//! let color = Color3::new(1., 2., 3.).unwrap();
//! assert_eq!(color, Scalar::new(1u8, 2, 3, 42));
//! ```

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

pub mod hsv;

mod color;
mod error;
mod scalar;

pub use color::{Channel, Color3};
pub use error::Error;
pub use scalar::Scalar;

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;

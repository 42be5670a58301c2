use crate::{Color3, Result};
use num_traits::{ToPrimitive, Zero};
use std::ops::{Index, IndexMut};

/// A four-component numeric vector, as used by vision libraries to carry colors.
///
/// Component order is whatever the caller's library uses. [Color3] reads the first three
/// components as red, green and blue and ignores the fourth.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Scalar<T = f64> {
    /// The four components.
    pub val: [T; 4],
}

impl<T> Scalar<T> {
    /// Creates a new scalar from all four components.
    ///
    /// # Examples
    ///
    /// ```
    /// use color3::Scalar;
    /// let scalar = Scalar::new(1., 2., 3., 4.);
    /// assert_eq!(4., scalar[3]);
    /// ```
    pub fn new(v0: T, v1: T, v2: T, v3: T) -> Scalar<T> {
        Scalar {
            val: [v0, v1, v2, v3],
        }
    }
}

impl<T: Zero> Scalar<T> {
    /// Creates a new scalar from three components, with the fourth set to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use color3::Scalar;
    /// let scalar = Scalar::from_rgb(1u8, 2, 3);
    /// assert_eq!([1, 2, 3, 0], scalar.val);
    /// ```
    pub fn from_rgb(v0: T, v1: T, v2: T) -> Scalar<T> {
        Scalar::new(v0, v1, v2, T::zero())
    }
}

impl<T: ToPrimitive + Copy> Scalar<T> {
    /// Converts this scalar to a [Color3], discarding the fourth component.
    ///
    /// # Examples
    ///
    /// ```
    /// use color3::{Color3, Scalar};
    /// let color = Scalar::<f64>::new(10., 20., 30., 255.).to_color3().unwrap();
    /// assert_eq!(Color3::new(10., 20., 30.).unwrap(), color);
    /// assert!(Scalar::<f64>::new(10., 20., 300., 0.).to_color3().is_err());
    /// ```
    pub fn to_color3(&self) -> Result<Color3> {
        Color3::from_scalar(self)
    }

    /// Returns the first three components as `f64`.
    ///
    /// Components with no `f64` representation come back as NaN.
    pub(crate) fn rgb(&self) -> [f64; 3] {
        let component = |n: T| n.to_f64().unwrap_or(f64::NAN);
        [
            component(self.val[0]),
            component(self.val[1]),
            component(self.val[2]),
        ]
    }
}

impl<T> From<[T; 4]> for Scalar<T> {
    fn from(val: [T; 4]) -> Scalar<T> {
        Scalar { val }
    }
}

impl<T> From<Scalar<T>> for [T; 4] {
    fn from(scalar: Scalar<T>) -> [T; 4] {
        scalar.val
    }
}

impl<T> Index<usize> for Scalar<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.val[index]
    }
}

impl<T> IndexMut<usize> for Scalar<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.val[index]
    }
}

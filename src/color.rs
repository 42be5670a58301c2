use crate::{Error, Result, Scalar, hsv};
use num_traits::ToPrimitive;
use std::fmt;
use std::ops::RangeInclusive;

const CHANNEL_RANGE: RangeInclusive<f64> = 0.0..=255.0;

/// A RGB color value, with each channel in `0..=255`.
///
/// Channels are checked when the color is constructed. The fields are public, and assigning
/// to them directly skips that check.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color3 {
    /// Red channel.
    pub red: f64,

    /// Green channel.
    pub green: f64,

    /// Blue channel.
    pub blue: f64,
}

/// One of the three channels of a [Color3].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Color3 {
    /// Creates a new color.
    ///
    /// Returns an error if any channel is outside of `0..=255`.
    ///
    /// # Examples
    ///
    /// ```
    /// use color3::Color3;
    /// let color = Color3::new(1., 2., 3.).unwrap();
    /// assert_eq!(1., color.red);
    /// assert_eq!(2., color.green);
    /// assert_eq!(3., color.blue);
    /// assert!(Color3::new(-1., 0., 0.).is_err());
    /// ```
    pub fn new(red: f64, green: f64, blue: f64) -> Result<Color3> {
        Ok(Color3 {
            red: check(Channel::Red, red)?,
            green: check(Channel::Green, green)?,
            blue: check(Channel::Blue, blue)?,
        })
    }

    /// Creates a new color from red, green and blue. Same as [Color3::new].
    ///
    /// # Examples
    ///
    /// ```
    /// use color3::Color3;
    /// assert_eq!(Color3::new(4., 5., 6.).unwrap(), Color3::from_rgb(4., 5., 6.).unwrap());
    /// ```
    pub fn from_rgb(red: f64, green: f64, blue: f64) -> Result<Color3> {
        Color3::new(red, green, blue)
    }

    /// Creates a new color from hue, saturation and value.
    ///
    /// Hue is in turns, so `1. / 3.` is green. See [hsv] for the details of the conversion,
    /// which always produces channels in range.
    ///
    /// # Examples
    ///
    /// ```
    /// use color3::Color3;
    /// let color = Color3::from_hsv(0., 1., 1.);
    /// assert_eq!(Color3::new(255., 0., 0.).unwrap(), color);
    /// ```
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Color3 {
        let [red, green, blue] = hsv::hsv_to_rgb(hue as f32, saturation as f32, value as f32);
        Color3 {
            red: red.into(),
            green: green.into(),
            blue: blue.into(),
        }
    }

    /// Creates a new color from the first three components of a scalar.
    ///
    /// The fourth component is discarded. Returns an error if any of the first three is
    /// outside of `0..=255`.
    ///
    /// # Examples
    ///
    /// ```
    /// use color3::{Color3, Scalar};
    /// let color = Color3::from_scalar(&Scalar::new(7u8, 8, 9, 10)).unwrap();
    /// assert_eq!(Color3::new(7., 8., 9.).unwrap(), color);
    /// ```
    pub fn from_scalar<T: ToPrimitive + Copy>(scalar: &Scalar<T>) -> Result<Color3> {
        let [red, green, blue] = scalar.rgb();
        Color3::new(red, green, blue)
    }

    /// Converts this color to a scalar, with `alpha` as the fourth component.
    ///
    /// Use `Scalar::from(color)` for the usual alpha of zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use color3::{Color3, Scalar};
    /// let color = Color3::new(1., 2., 3.).unwrap();
    /// assert_eq!(Scalar::<f64>::new(1., 2., 3., 255.), color.to_scalar(255.));
    /// assert_eq!(Scalar::<f64>::new(1., 2., 3., 0.), Scalar::from(color));
    /// ```
    pub fn to_scalar(&self, alpha: f64) -> Scalar {
        Scalar::new(self.red, self.green, self.blue, alpha)
    }

    /// Returns the value of one channel.
    ///
    /// # Examples
    ///
    /// ```
    /// use color3::{Channel, Color3};
    /// let color = Color3::new(1., 2., 3.).unwrap();
    /// assert_eq!(2., color.channel(Channel::Green));
    /// ```
    pub fn channel(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }
}

impl fmt::Display for Color3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color3({:?}, {:?}, {:?})", self.red, self.green, self.blue)
    }
}

impl From<Color3> for Scalar {
    /// Converts with a fourth component of zero.
    fn from(color: Color3) -> Scalar {
        color.to_scalar(0.)
    }
}

impl<T: ToPrimitive + Copy> TryFrom<Scalar<T>> for Color3 {
    type Error = Error;

    fn try_from(scalar: Scalar<T>) -> Result<Color3> {
        Color3::from_scalar(&scalar)
    }
}

impl<T: ToPrimitive + Copy> PartialEq<Scalar<T>> for Color3 {
    fn eq(&self, other: &Scalar<T>) -> bool {
        let [red, green, blue] = other.rgb();
        self.red == red && self.green == green && self.blue == blue
    }
}

impl<T: ToPrimitive + Copy> PartialEq<Color3> for Scalar<T> {
    fn eq(&self, other: &Color3) -> bool {
        other == self
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        };
        f.write_str(name)
    }
}

fn check(channel: Channel, value: f64) -> Result<f64> {
    if CHANNEL_RANGE.contains(&value) {
        Ok(value)
    } else {
        Err(Error::ChannelOutOfRange { channel, value })
    }
}

//! HSV to RGB conversion and the packed ARGB word it produces.
//!
//! Hue is measured in turns, so only its fractional part matters: `0.0`, `1.0` and `-1.0` are
//! all red. Saturation and value are nominally in `0.0..=1.0`.
//!
//! The arithmetic is done in `f32`, and every result passes through a packed ARGB word (see
//! [pack_argb]) before being handed back. For well-formed inputs that round trip changes
//! nothing. For out-of-range saturation or value it masks the channels back into a byte, so
//! [hsv_to_rgb] always returns valid channels.

use log::{Level, log};

const FULL_ALPHA: i32 = 0xFF00_0000_u32 as i32;

/// Converts a hue, saturation and value to red, green and blue bytes.
///
/// # Examples
///
/// ```
/// use color3::hsv::hsv_to_rgb;
/// assert_eq!([255, 0, 0], hsv_to_rgb(0., 1., 1.));
/// assert_eq!([0, 0, 255], hsv_to_rgb(2. / 3., 1., 1.));
/// assert_eq!([128, 128, 128], hsv_to_rgb(0.25, 0., 0.5));
/// ```
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> [u8; 3] {
    let [r, g, b] = if saturation == 0. {
        [to_channel(value); 3]
    } else {
        let h = (hue - hue.floor()) * 6.;
        let f = h - h.floor();
        let p = value * (1. - saturation);
        let q = value * (1. - saturation * f);
        let t = value * (1. - saturation * (1. - f));
        let sector = h as i32;
        let (x, y, z) = match sector {
            0 => (value, t, p),
            1 => (q, value, p),
            2 => (p, value, t),
            3 => (p, q, value),
            4 => (t, p, value),
            5 => (value, p, q),
            _ => {
                // Only reachable when `hue - hue.floor()` rounds up to exactly 1.0.
                log!(
                    Level::Warn,
                    "hue {} landed in sector {}, leaving all channels at zero",
                    hue,
                    sector
                );
                (0., 0., 0.)
            }
        };
        [to_channel(x), to_channel(y), to_channel(z)]
    };
    unpack_argb(pack_argb(r, g, b))
}

/// Packs red, green and blue into a `0xAARRGGBB` word with full alpha.
///
/// Channels are not masked before shifting, so a value outside `0..=255` bleeds into its
/// neighbours.
///
/// # Examples
///
/// ```
/// use color3::hsv::pack_argb;
/// assert_eq!(0xFF102030, pack_argb(0x10, 0x20, 0x30));
/// assert_eq!(0xFFFFFFFE, pack_argb(510, 510, 510));
/// ```
pub fn pack_argb(r: i32, g: i32, b: i32) -> u32 {
    (FULL_ALPHA | (r << 16) | (g << 8) | b) as u32
}

/// Unpacks the red, green and blue bytes of a `0xAARRGGBB` word.
///
/// # Examples
///
/// ```
/// use color3::hsv::unpack_argb;
/// assert_eq!([0x10, 0x20, 0x30], unpack_argb(0xFF102030));
/// ```
pub fn unpack_argb(word: u32) -> [u8; 3] {
    [(word >> 16) as u8, (word >> 8) as u8, word as u8]
}

fn to_channel(n: f32) -> i32 {
    (n * 255. + 0.5) as i32
}

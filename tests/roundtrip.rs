//! Roundtrip tests through scalars and HSV.

use color3::{Color3, Scalar};

#[test]
fn rgb_is_identity() {
    for r in [0., 0.25, 1., 127.5, 254., 255.] {
        for g in [0., 64., 255.] {
            for b in [0., 200.75, 255.] {
                let color = Color3::from_rgb(r, g, b).unwrap();
                assert_eq!(r, color.red);
                assert_eq!(g, color.green);
                assert_eq!(b, color.blue);
            }
        }
    }
}

#[test]
fn out_of_range_fails() {
    for bad in [-1., 256., -0.001, 255.001, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(Color3::from_rgb(bad, 0., 0.).is_err());
        assert!(Color3::from_rgb(0., bad, 0.).is_err());
        assert!(Color3::from_rgb(0., 0., bad).is_err());
        assert!(Color3::from_scalar(&Scalar::new(0., 0., bad, 0.)).is_err());
    }
}

#[test]
fn scalar_roundtrip_discards_alpha() {
    let color = Color3::from_rgb(12., 34., 56.).unwrap();
    for alpha in [0., 1., 255., -3.5, 1e9] {
        let scalar = color.to_scalar(alpha);
        assert_eq!(alpha, scalar[3]);
        assert_eq!(color, Color3::from_scalar(&scalar).unwrap());
        assert_eq!(color, scalar.to_color3().unwrap());
    }
}

#[test]
fn default_scalar_alpha_is_zero() {
    let color = Color3::from_rgb(1., 2., 3.).unwrap();
    assert_eq!(0., Scalar::from(color)[3]);
}

#[test]
fn equality_is_symmetric() {
    let a = Color3::from_rgb(9., 8., 7.).unwrap();
    let b = Color3::from_rgb(9., 8., 7.).unwrap();
    let c = Color3::from_rgb(9., 8., 6.).unwrap();
    assert!(a == b && b == a);
    assert!(a != c && c != a);

    let scalar = Scalar::<f64>::new(9., 8., 7., 100.);
    assert!(a == scalar && scalar == a);
    let scalar = Scalar::<f64>::new(9., 8., 6., 0.);
    assert!(a != scalar && scalar != a);
}

#[test]
fn hsv_boundaries() {
    let rgb = |h, s, v| {
        let color = Color3::from_hsv(h, s, v);
        (color.red, color.green, color.blue)
    };
    assert_eq!((255., 255., 255.), rgb(0., 0., 1.));
    assert_eq!((0., 0., 0.), rgb(0., 0., 0.));
    assert_eq!((255., 0., 0.), rgb(0., 1., 1.));
    assert_eq!((255., 255., 0.), rgb(1. / 6., 1., 1.));
    assert_eq!((0., 255., 0.), rgb(1. / 3., 1., 1.));
    assert_eq!((0., 0., 255.), rgb(2. / 3., 1., 1.));
    assert_eq!((0., 0., 0.), rgb(-1e-9, 1., 1.));
}

#[test]
fn hsv_never_fails_construction() {
    let color = Color3::from_hsv(0., 0., 2.);
    assert_eq!(Color3::from_rgb(255., 255., 254.).unwrap(), color);
}

#[test]
fn display() {
    let color = Color3::from_rgb(1., 2., 3.).unwrap();
    assert_eq!("Color3(1.0, 2.0, 3.0)", format!("{}", color));
    assert_eq!("Color3(0.0, 0.0, 0.0)", Color3::default().to_string());
}

//! proptest 기반 물리 성질 검증.
use coating_wvtr::air::{mixing_ratio, saturation_pressure_kpa};
use coating_wvtr::coating::coating_thickness_m;
use coating_wvtr::wvtr::{temperature_factor, wvtr_base, Conditions, WvtrParams};
use proptest::prelude::*;

proptest! {
    #[test]
    fn saturation_pressure_positive_and_increasing(t in 0.0f64..50.0, dt in 0.01f64..5.0) {
        let p1 = saturation_pressure_kpa(t);
        let p2 = saturation_pressure_kpa(t + dt);
        prop_assert!(p1 > 0.0);
        prop_assert!(p2 > p1, "Psat({}) = {} <= Psat({}) = {}", t + dt, p2, t, p1);
    }

    #[test]
    fn mixing_ratio_in_plausible_range(t in 0.0f64..50.0, rh in 0.0f64..=100.0) {
        let w = mixing_ratio(t, rh);
        prop_assert!(w >= 0.0);
        prop_assert!(w < 0.1);
    }

    #[test]
    fn thickness_linear_in_weight(w in 0.1f64..500.0, rho in 100.0f64..3000.0) {
        let d1 = coating_thickness_m(w, rho);
        let d2 = coating_thickness_m(2.0 * w, rho);
        prop_assert!(d1 > 0.0);
        prop_assert!((d2 - 2.0 * d1).abs() <= 1e-12 * d2.abs());
    }

    #[test]
    fn thickness_inverse_in_density(w in 0.1f64..500.0, rho in 100.0f64..3000.0) {
        let d1 = coating_thickness_m(w, rho);
        let d2 = coating_thickness_m(w, 2.0 * rho);
        prop_assert!((d1 - 2.0 * d2).abs() <= 1e-12 * d1.abs());
    }

    #[test]
    fn temperature_factor_is_linear_around_reference(t in -50.0f64..80.0) {
        let params = WvtrParams::default();
        let expected = 1.0 + 0.03 * (t - 23.0);
        prop_assert!((temperature_factor(t, &params) - expected).abs() < 1e-12);
    }

    #[test]
    fn base_wvtr_inverse_in_weight(t in 0.0f64..50.0, rh in 1.0f64..100.0, w in 1.0f64..100.0) {
        let params = WvtrParams::default();
        let b1 = wvtr_base(&Conditions::new(t, rh, w), &params).unwrap().base;
        let b2 = wvtr_base(&Conditions::new(t, rh, 2.0 * w), &params).unwrap().base;
        prop_assert!((b1 - 2.0 * b2).abs() <= 1e-9 * b1.abs());
    }
}

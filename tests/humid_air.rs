//! Tetens 포화압과 혼합비 회귀 테스트.
mod common;

use coating_wvtr::air::{
    humid_air_state, mixing_ratio, mixing_ratio_at_pressure, saturation_pressure_kpa,
    ATMOSPHERIC_PRESSURE_KPA,
};
use common::assert_close;

#[test]
fn saturation_pressure_at_reference_temperature() {
    // 0.61078 * exp(17.27*23 / 260.3)
    assert_close("Psat(23)", saturation_pressure_kpa(23.0), 2.809_345_6, 1e-6);
}

#[test]
fn saturation_pressure_at_freezing_point_is_tetens_constant() {
    assert_close("Psat(0)", saturation_pressure_kpa(0.0), 0.61078, 1e-12);
}

#[test]
fn saturation_pressure_at_fifty_degrees() {
    assert_close("Psat(50)", saturation_pressure_kpa(50.0), 12.336_356, 1e-6);
}

#[test]
fn saturation_pressure_singularity_is_not_guarded() {
    let p = saturation_pressure_kpa(-237.3);
    assert!(!p.is_finite() || p == 0.0, "got {p}");
}

#[test]
fn mixing_ratio_at_23c_50pct() {
    // Pv = 1.40467 kPa, ω = 0.622 * Pv / (101.3 - Pv)
    assert_close("ω(23, 50)", mixing_ratio(23.0, 50.0), 0.008_746_22, 1e-5);
}

#[test]
fn mixing_ratio_is_zero_for_dry_air() {
    for t in [-5.0, 0.0, 23.0, 40.0, 80.0] {
        assert_eq!(mixing_ratio(t, 0.0), 0.0, "T={t}");
    }
}

#[test]
fn mixing_ratio_uses_standard_atmosphere() {
    assert_eq!(
        mixing_ratio(30.0, 70.0),
        mixing_ratio_at_pressure(30.0, 70.0, ATMOSPHERIC_PRESSURE_KPA)
    );
}

#[test]
fn relative_humidity_is_not_clamped() {
    let over = mixing_ratio(25.0, 150.0);
    let full = mixing_ratio(25.0, 100.0);
    assert!(over > full);
    assert!(mixing_ratio(25.0, -20.0) < 0.0);
}

#[test]
fn supersaturated_state_flips_sign() {
    // Psat(100) ≈ 102.2 kPa > 101.3 kPa
    let state = humid_air_state(100.0, 100.0, ATMOSPHERIC_PRESSURE_KPA);
    assert!(state.is_supersaturated());
    assert!(state.mixing_ratio < 0.0);
}

#[test]
fn humid_air_state_exposes_intermediates() {
    let state = humid_air_state(23.0, 50.0, ATMOSPHERIC_PRESSURE_KPA);
    assert_close("Psat", state.saturation_pressure_kpa, 2.809_345_6, 1e-6);
    assert_close("Pv", state.vapor_pressure_kpa, 1.404_672_8, 1e-6);
    assert_eq!(state.relative_humidity_pct, 50.0);
    assert!(!state.is_supersaturated());
}

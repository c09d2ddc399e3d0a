use serde::{Deserialize, Serialize};

use crate::air::ATMOSPHERIC_PRESSURE_KPA;
use crate::coating::DEFAULT_DENSITY_KG_PER_M3;

/// WVTR 모델 상수.
///
/// 기본값은 23 °C 기준, 온도계수 0.03/°C, 스케일 상수 K=500, 잡음 5%,
/// LDPE 밀도 920 kg/m³, 대기압 101.3 kPa 이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WvtrParams {
    /// 온도 보정 기준점 [°C]
    pub reference_temp_c: f64,
    /// 온도 민감도 계수 [1/°C]
    pub temp_coefficient_per_c: f64,
    /// 현실적인 WVTR 범위로 맞추는 스케일 상수
    pub scale_k: f64,
    /// 잡음 표준편차 / 기준 WVTR
    pub noise_fraction: f64,
    /// 코팅 밀도 [kg/m³]
    pub density_kg_per_m3: f64,
    /// 전압 [kPa]
    pub atmospheric_pressure_kpa: f64,
}

impl Default for WvtrParams {
    fn default() -> Self {
        Self {
            reference_temp_c: 23.0,
            temp_coefficient_per_c: 0.03,
            scale_k: 500.0,
            noise_fraction: 0.05,
            density_kg_per_m3: DEFAULT_DENSITY_KG_PER_M3,
            atmospheric_pressure_kpa: ATMOSPHERIC_PRESSURE_KPA,
        }
    }
}

impl WvtrParams {
    /// 잡음을 끈 복사본. 결정론적 기준값 비교에 쓴다.
    pub fn noiseless(self) -> Self {
        Self {
            noise_fraction: 0.0,
            ..self
        }
    }
}

/// 한 번의 추정에 쓰이는 입력 조건.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditions {
    /// 온도 [°C]
    pub temperature_c: f64,
    /// 상대습도 [%]
    pub relative_humidity_pct: f64,
    /// 코팅 평량 [g/m²]
    pub coating_weight_g_per_m2: f64,
}

impl Conditions {
    pub fn new(temperature_c: f64, relative_humidity_pct: f64, coating_weight_g_per_m2: f64) -> Self {
        Self {
            temperature_c,
            relative_humidity_pct,
            coating_weight_g_per_m2,
        }
    }
}

/// 선형 온도 보정계수 aT = 1 + c * (T - Tref).
///
/// 기준점에서 정확히 1 이며, 기본값 기준 약 -10.3 °C 아래에서는 음수가 된다.
pub fn temperature_factor(t_c: f64, params: &WvtrParams) -> f64 {
    1.0 + params.temp_coefficient_per_c * (t_c - params.reference_temp_c)
}

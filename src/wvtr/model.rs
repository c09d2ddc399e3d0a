use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use super::params::{temperature_factor, Conditions, WvtrParams};
use crate::air::{humid_air_state, HumidAirState};
use crate::coating::{coating_thickness_m, thickness_um};
use crate::config::ModelConfig;

/// WVTR 계산 중 발생 가능한 수치 정의역 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum WvtrError {
    /// 두께가 0 이거나 유한하지 않아 나눗셈이 정의되지 않음
    DegenerateThickness {
        weight_g_per_m2: f64,
        density_kg_per_m3: f64,
        thickness_m: f64,
    },
    /// 수증기 분압이 전압 이상이라 혼합비 분모가 0 이하
    VaporPressureExceedsTotal {
        vapor_pressure_kpa: f64,
        total_pressure_kpa: f64,
    },
    /// 그 밖의 이유로 결과가 NaN/무한대
    NonFinite { value: f64 },
}

impl std::fmt::Display for WvtrError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WvtrError::DegenerateThickness {
                weight_g_per_m2,
                density_kg_per_m3,
                thickness_m,
            } => write!(
                f,
                "코팅 두께가 유효하지 않음: w={weight_g_per_m2} g/m², ρ={density_kg_per_m3} kg/m³ -> {thickness_m} m"
            ),
            WvtrError::VaporPressureExceedsTotal {
                vapor_pressure_kpa,
                total_pressure_kpa,
            } => write!(
                f,
                "수증기 분압 {vapor_pressure_kpa:.4} kPa 가 전압 {total_pressure_kpa:.4} kPa 이상"
            ),
            WvtrError::NonFinite { value } => write!(f, "WVTR 결과가 유한하지 않음: {value}"),
        }
    }
}

impl std::error::Error for WvtrError {}

/// 잡음을 더하기 전 결정론적 계산 내역.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WvtrBreakdown {
    /// 습공기 중간값(포화압, 분압, 혼합비)
    pub air: HumidAirState,
    /// 온도 보정계수 aT
    pub temperature_factor: f64,
    /// 코팅 두께 [m]
    pub thickness_m: f64,
    /// 기준 WVTR [g/m²·day]
    pub base: f64,
}

/// 잡음이 포함된 한 번의 추정 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WvtrSample {
    pub conditions: Conditions,
    pub breakdown: WvtrBreakdown,
    /// 더해진 잡음 [g/m²·day]
    pub noise: f64,
    /// 최종 WVTR = base + noise
    pub value: f64,
}

/// 잡음 없는 기준 WVTR = K * ω * aT / 두께.
///
/// 두께가 0 이거나 혼합비 분모가 0 이하이면 무한대 대신 오류를 반환한다.
/// 물리 범위를 벗어난 입력(RH 범위 밖, 음의 aT, 음의 평량)은 경고만 남기고 그대로 계산한다.
pub fn wvtr_base(conditions: &Conditions, params: &WvtrParams) -> Result<WvtrBreakdown, WvtrError> {
    let Conditions {
        temperature_c: t_c,
        relative_humidity_pct: rh,
        coating_weight_g_per_m2: w,
    } = *conditions;

    if !(0.0..=100.0).contains(&rh) {
        warn!("상대습도 {rh}% 가 0~100% 범위 밖이지만 그대로 계산한다");
    }

    // 1) 습도 효과
    let air = humid_air_state(t_c, rh, params.atmospheric_pressure_kpa);
    if air.is_supersaturated() {
        return Err(WvtrError::VaporPressureExceedsTotal {
            vapor_pressure_kpa: air.vapor_pressure_kpa,
            total_pressure_kpa: air.total_pressure_kpa,
        });
    }

    // 2) 온도 효과
    let a_t = temperature_factor(t_c, params);
    if a_t < 0.0 {
        warn!("온도 보정계수 aT={a_t:.4} 가 음수 (T={t_c} °C)");
    }

    // 3) 두께 효과
    if w < 0.0 {
        warn!("코팅 평량 {w} g/m² 가 음수");
    }
    let thickness = coating_thickness_m(w, params.density_kg_per_m3);
    if thickness == 0.0 || !thickness.is_finite() {
        return Err(WvtrError::DegenerateThickness {
            weight_g_per_m2: w,
            density_kg_per_m3: params.density_kg_per_m3,
            thickness_m: thickness,
        });
    }

    let base = params.scale_k * air.mixing_ratio * a_t / thickness;
    if !base.is_finite() {
        return Err(WvtrError::NonFinite { value: base });
    }

    debug!(
        "WVTR base: T={t_c} °C RH={rh}% w={w} g/m² -> ω={:.6}, aT={a_t:.4}, d={:.2} µm, base={base:.3}",
        air.mixing_ratio,
        thickness_um(thickness)
    );

    Ok(WvtrBreakdown {
        air,
        temperature_factor: a_t,
        thickness_m: thickness,
        base,
    })
}

/// 기준 WVTR 에 N(0, (f·base)²) 잡음을 한 번 더한 표본을 만든다.
///
/// 성공한 호출마다 표준정규 표본을 정확히 하나 소비하며, 오류 시에는 소비하지 않는다.
/// base 가 음수여도 분포는 대칭이므로 오류로 보지 않는다.
pub fn wvtr_sample<R: Rng + ?Sized>(
    rng: &mut R,
    conditions: &Conditions,
    params: &WvtrParams,
) -> Result<WvtrSample, WvtrError> {
    let breakdown = wvtr_base(conditions, params)?;
    let sigma = params.noise_fraction * breakdown.base;
    let z: f64 = rng.sample(StandardNormal);
    let noise = sigma * z;
    Ok(WvtrSample {
        conditions: *conditions,
        breakdown,
        noise,
        value: breakdown.base + noise,
    })
}

/// 기본 상수로 잡음이 포함된 WVTR [g/m²·day] 을 추정한다.
pub fn wvtr_physics<R: Rng + ?Sized>(
    rng: &mut R,
    t_c: f64,
    relative_humidity_pct: f64,
    weight_g_per_m2: f64,
) -> Result<f64, WvtrError> {
    let conditions = Conditions::new(t_c, relative_humidity_pct, weight_g_per_m2);
    wvtr_sample(rng, &conditions, &WvtrParams::default()).map(|s| s.value)
}

/// 난수 생성기와 상수를 소유하는 WVTR 추정기.
///
/// 모든 추정은 `&mut self` 로 생성기 스트림을 한 칸씩 전진시킨다. 공유 상태가 없으므로
/// `R: Send` 이면 다른 스레드로 옮길 수는 있지만 동시에 여러 스레드에서 쓸 수는 없다.
/// 병렬로 데이터를 만들려면 스레드마다 서로 다른 시드로 추정기를 하나씩 만든다.
#[derive(Debug, Clone)]
pub struct WvtrModel<R = StdRng> {
    rng: R,
    params: WvtrParams,
}

impl WvtrModel<StdRng> {
    /// 고정 시드로 재현 가능한 추정기를 만든다.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), WvtrParams::default())
    }

    /// OS 엔트로피로 시드한 추정기를 만든다.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy(), WvtrParams::default())
    }

    /// 설정 파일 값으로 추정기를 만든다. 시드가 없으면 엔트로피를 쓴다.
    pub fn from_config(config: &ModelConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(rng, config.params)
    }
}

impl<R: Rng> WvtrModel<R> {
    pub fn with_rng(rng: R, params: WvtrParams) -> Self {
        Self { rng, params }
    }

    /// 상수를 교체한 추정기를 반환한다.
    pub fn with_params(self, params: WvtrParams) -> Self {
        Self { params, ..self }
    }

    pub fn params(&self) -> &WvtrParams {
        &self.params
    }

    /// 잡음이 포함된 WVTR [g/m²·day].
    pub fn estimate(
        &mut self,
        t_c: f64,
        relative_humidity_pct: f64,
        weight_g_per_m2: f64,
    ) -> Result<f64, WvtrError> {
        self.estimate_conditions(&Conditions::new(t_c, relative_humidity_pct, weight_g_per_m2))
    }

    pub fn estimate_conditions(&mut self, conditions: &Conditions) -> Result<f64, WvtrError> {
        self.estimate_detailed(conditions).map(|s| s.value)
    }

    /// 계산 내역과 잡음을 함께 반환한다.
    pub fn estimate_detailed(&mut self, conditions: &Conditions) -> Result<WvtrSample, WvtrError> {
        wvtr_sample(&mut self.rng, conditions, &self.params)
    }

    /// 여러 조건에 대해 순서대로 표본을 만든다(합성 학습 데이터 생성용).
    ///
    /// 첫 번째 정의역 오류에서 중단하고 그 오류를 반환한다.
    pub fn estimate_batch(&mut self, conditions: &[Conditions]) -> Result<Vec<WvtrSample>, WvtrError> {
        let samples = conditions
            .iter()
            .map(|c| self.estimate_detailed(c))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("WVTR 표본 {}개 생성", samples.len());
        Ok(samples)
    }

    /// 잡음 없는 기준값. 생성기 스트림은 소비하지 않는다.
    pub fn base(&self, conditions: &Conditions) -> Result<WvtrBreakdown, WvtrError> {
        wvtr_base(conditions, &self.params)
    }
}

/// 표준 대기압 [kPa]
pub const ATMOSPHERIC_PRESSURE_KPA: f64 = 101.3;

/// 수증기/건공기 분자량 비 (18.015 / 28.966)
const MOLAR_MASS_RATIO: f64 = 0.622;

/// 한 번의 습공기 계산에서 얻은 중간값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HumidAirState {
    /// 상대습도 [%] (입력 그대로, 범위 제한 없음)
    pub relative_humidity_pct: f64,
    /// 포화 수증기압 [kPa]
    pub saturation_pressure_kpa: f64,
    /// 수증기 분압 [kPa]
    pub vapor_pressure_kpa: f64,
    /// 전압 [kPa]
    pub total_pressure_kpa: f64,
    /// 혼합비 [kg수증기/kg건공기]
    pub mixing_ratio: f64,
}

impl HumidAirState {
    /// 분압이 전압 이상이면 혼합비 분모가 0 또는 음수가 된다.
    pub fn is_supersaturated(&self) -> bool {
        self.vapor_pressure_kpa >= self.total_pressure_kpa
    }
}

/// Tetens 식으로 물의 포화수증기압(kPa)을 구한다.
///
/// 대략 0~50 °C 범위에서 유효하다. 범위 검사는 하지 않으며,
/// -237.3 °C 에서는 분모가 0이 되어 그대로 비정상 값이 나온다.
pub fn saturation_pressure_kpa(t_c: f64) -> f64 {
    // Psat(kPa) = 0.61078 * exp(17.27*T / (T+237.3))
    0.61078 * (17.27 * t_c / (t_c + 237.3)).exp()
}

/// 표준 대기압(101.3 kPa)에서 건구온도와 상대습도로 혼합비를 계산한다.
pub fn mixing_ratio(t_c: f64, relative_humidity_pct: f64) -> f64 {
    mixing_ratio_at_pressure(t_c, relative_humidity_pct, ATMOSPHERIC_PRESSURE_KPA)
}

/// 주어진 전압에서 혼합비 ω = 0.622 * Pv / (P - Pv) 를 계산한다.
///
/// 상대습도는 클램프하지 않는다. Pv 가 P 에 도달하면 무한대로 발산하고,
/// 넘어서면 부호가 뒤집힌다. 판정은 호출자([`humid_air_state`] 참고)의 몫이다.
pub fn mixing_ratio_at_pressure(
    t_c: f64,
    relative_humidity_pct: f64,
    total_pressure_kpa: f64,
) -> f64 {
    humid_air_state(t_c, relative_humidity_pct, total_pressure_kpa).mixing_ratio
}

/// 습공기 상태를 중간값과 함께 계산한다.
pub fn humid_air_state(
    t_c: f64,
    relative_humidity_pct: f64,
    total_pressure_kpa: f64,
) -> HumidAirState {
    let p_sat = saturation_pressure_kpa(t_c);
    let pv = (relative_humidity_pct / 100.0) * p_sat;
    let w = MOLAR_MASS_RATIO * pv / (total_pressure_kpa - pv);
    HumidAirState {
        relative_humidity_pct,
        saturation_pressure_kpa: p_sat,
        vapor_pressure_kpa: pv,
        total_pressure_kpa,
        mixing_ratio: w,
    }
}

/// LDPE 계열 고분자의 기본 밀도 [kg/m³]
pub const DEFAULT_DENSITY_KG_PER_M3: f64 = 920.0;

/// 코팅 평량(g/m²)을 두께(m)로 환산한다.
///
/// 두께 = (w / 1000) / ρ. 입력 검증은 하지 않으므로 w 또는 ρ 가 0 이면
/// 0 또는 무한대가 그대로 반환된다.
pub fn coating_thickness_m(weight_g_per_m2: f64, density_kg_per_m3: f64) -> f64 {
    let w_kg_m2 = weight_g_per_m2 / 1000.0; // g/m² -> kg/m²
    w_kg_m2 / density_kg_per_m3
}

/// 기본 밀도(920 kg/m³)를 적용한 두께(m).
pub fn coating_thickness_default_m(weight_g_per_m2: f64) -> f64 {
    coating_thickness_m(weight_g_per_m2, DEFAULT_DENSITY_KG_PER_M3)
}

/// 두께(m)를 µm 로 표시할 때 쓴다.
pub fn thickness_um(thickness_m: f64) -> f64 {
    thickness_m * 1.0e6
}

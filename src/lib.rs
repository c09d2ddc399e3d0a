//! 고분자 코팅의 투습도(WVTR)를 물리 기반으로 추정하는 계산 라이브러리.
//!
//! 포화수증기압 -> 혼합비 -> 코팅 두께 -> WVTR(+잡음) 순서로 계산하며,
//! 난수 생성기는 [`wvtr::WvtrModel`] 이 소유한다.

pub mod air;
pub mod coating;
pub mod config;
pub mod wvtr;

pub use air::{mixing_ratio, saturation_pressure_kpa};
pub use coating::{coating_thickness_default_m, coating_thickness_m};
pub use config::{ConfigError, ModelConfig};
pub use wvtr::{wvtr_physics, Conditions, WvtrError, WvtrModel, WvtrParams};

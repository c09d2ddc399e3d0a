//! 투습도(WVTR) 추정 모듈.
//! 습도 효과(혼합비), 온도 보정, 두께 효과를 결합하고 실험 산포를 모사하는 잡음을 더한다.

pub mod model;
pub mod params;

pub use model::*;
pub use params::*;

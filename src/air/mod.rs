//! 습공기 관련 계산 모듈을 모아둔다.
//! 포화수증기압(Tetens)과 습도비(혼합비) 계산으로 구성한다.

pub mod humid_air;

pub use humid_air::*;

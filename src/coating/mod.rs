//! 코팅층 관련 환산 모듈.

pub mod thickness;

pub use thickness::*;

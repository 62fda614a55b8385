//! 算法系统集合
#[cfg(feature = "traditional")]
pub mod traditional;

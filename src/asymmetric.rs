//! 非对称加密：错误类型、核心 trait 与算法实现

pub mod errors;
pub mod systems;
pub mod traits;

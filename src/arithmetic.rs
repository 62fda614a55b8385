//! 整数运算。

/// 返回 `x + y`。
///
/// 溢出行为与原生 `i64` 加法一致：debug 构建下 panic，release 构建下回绕。
pub fn add(x: i64, y: i64) -> i64 {
    x + y
}

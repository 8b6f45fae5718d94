//! # 画作编码与解码模块
//!
//! ## 设计思路
//!
//! 画作编码是一个 `;` 分隔的行主序颜色段序列。解码对破损输入只做视觉降级：
//! 任何单格失败都以不透明白色替代并记录 warn 日志，整幅解码永不失败，
//! 残缺或被篡改的编码最多让画面变白，不会让渲染方崩溃。
//!
//! ## 实现思路
//!
//! - 段数与格子数允许不一致：缺段补白，多余段忽略。
//! - 连续 `;` 产生的空段在切分阶段丢弃。
//! - 编码方向固定 3 位小数与 `.` 分隔符，保证往返误差在 1e-3 以内。

use crate::color::ColorGrid;

use super::segment::{format_color_segment, parse_color_segment};

/// 将画作编码解码为颜色网格。
///
/// 前置条件：`height >= 1` 且 `width >= 1`，由调用方保证。
/// 本函数从不失败：所有格子粒度的解析错误都回退为不透明白。
pub fn decode_cells(code: &str, height: usize, width: usize) -> ColorGrid {
    let segments: Vec<&str> = code.split(';').filter(|s| !s.is_empty()).collect();

    let mut grid = ColorGrid::filled_white(height, width);
    for row in 0..height {
        for col in 0..width {
            let index = row * width + col;
            let Some(segment) = segments.get(index) else {
                // 缺段保持构造时的白色
                continue;
            };

            match parse_color_segment(segment) {
                Ok(color) => grid.set(row, col, color),
                Err(err) => {
                    log::warn!("画作第 {} 格颜色段 '{}' 解析失败：{}，回退为白色", index, segment, err);
                }
            }
        }
    }

    grid
}

/// 将颜色网格编码为画作编码字符串。
///
/// 行主序逐格输出，格子间以 `;` 连接。
pub fn encode_cells(grid: &ColorGrid) -> String {
    grid.cells()
        .iter()
        .map(format_color_segment)
        .collect::<Vec<_>>()
        .join(";")
}

//! # 光栅化模块
//!
//! ## 设计思路
//!
//! 把逻辑颜色网格放大为物理像素缓冲：每个格子扩展为 `s × s` 的同色方块。
//! 为避免超大画布放大后占用过多显存，超过 32 格的边会把缩放强制回 1。
//!
//! ## 实现思路
//!
//! - 每次调用都分配全新的 `RgbaImage`，不做任何缓存，输出由调用方独占。
//! - 相同输入必然产生逐位相同的输出，无隐藏随机性。

use image::{Rgba, RgbaImage};

use crate::codec::decode_cells;
use crate::color::ColorGrid;

/// 不触发缩放回退的最大边长（格）。
///
/// 高或宽超过该值时，有效缩放固定为 1，忽略配置的倍率。
pub const MAX_UNSCALED_DIMENSION: usize = 32;

/// 计算实际生效的缩放倍率。
pub fn effective_scale(height: usize, width: usize, size_multiplier: u32) -> u32 {
    if height > MAX_UNSCALED_DIMENSION || width > MAX_UNSCALED_DIMENSION {
        1
    } else {
        size_multiplier
    }
}

/// 将颜色网格光栅化为 RGBA 像素缓冲。
///
/// 前置条件：`size_multiplier >= 1`，由调用方保证。
/// 输出尺寸为 `(width × s, height × s)`，`s` 为有效缩放。
pub fn rasterize(grid: &ColorGrid, size_multiplier: u32) -> RgbaImage {
    let scale = effective_scale(grid.height(), grid.width(), size_multiplier);
    let mut image = RgbaImage::new(
        grid.width() as u32 * scale,
        grid.height() as u32 * scale,
    );

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let pixel = Rgba(grid.get(row, col).to_rgba8());
            let base_x = col as u32 * scale;
            let base_y = row as u32 * scale;
            for x in base_x..base_x + scale {
                for y in base_y..base_y + scale {
                    image.put_pixel(x, y, pixel);
                }
            }
        }
    }

    image
}

/// 一步完成画作编码解码与光栅化。
///
/// 前置条件：`height >= 1`、`width >= 1`、`size_multiplier >= 1`。
/// 本函数从不失败：破损编码只会让对应格子渲染为不透明白。
pub fn decode(code: &str, height: usize, width: usize, size_multiplier: u32) -> RgbaImage {
    rasterize(&decode_cells(code, height, width), size_multiplier)
}

//! # 颜色数据模型模块
//!
//! # 设计思路
//!
//! 画作内部统一使用归一化浮点颜色（每通道 `[0.0, 1.0]`），
//! 只在光栅化输出时量化为 8 位 RGBA。这样编码/解码往返不受量化误差影响，
//! 精度损失只发生在最终出图的一步。
//!
//! # 实现思路
//!
//! - `Color::clamped` 是唯一入口：任何来源的通道值都先钳制再落地，
//!   NaN 归零，保证合法 `Color` 永远不含越界或非有限值。
//! - `ColorGrid` 以行主序一维 `Vec` 存储，构造时即填满白色，
//!   缺失格子天然回退为白。

use serde::{Deserialize, Serialize};

/// 归一化 RGBA 颜色。
///
/// 不变式：四个通道均为有限值且位于 `[0.0, 1.0]`。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// 不透明白色：所有解析失败格子的回退值。
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// 构造颜色并逐通道钳制到 `[0.0, 1.0]`，NaN 归零。
    pub fn clamped(r: f32, g: f32, b: f32, a: f32) -> Self {
        fn unit(value: f32) -> f32 {
            if value.is_nan() {
                0.0
            } else {
                value.clamp(0.0, 1.0)
            }
        }

        Self {
            r: unit(r),
            g: unit(g),
            b: unit(b),
            a: unit(a),
        }
    }

    /// 从 8 位 RGBA 像素换算为归一化颜色。
    pub fn from_rgba8(pixel: [u8; 4]) -> Self {
        Self {
            r: pixel[0] as f32 / 255.0,
            g: pixel[1] as f32 / 255.0,
            b: pixel[2] as f32 / 255.0,
            a: pixel[3] as f32 / 255.0,
        }
    }

    /// 量化为 8 位 RGBA，供光栅化输出使用。
    pub fn to_rgba8(self) -> [u8; 4] {
        fn byte(value: f32) -> u8 {
            (value * 255.0).round() as u8
        }

        [byte(self.r), byte(self.g), byte(self.b), byte(self.a)]
    }

    /// 逐通道误差比较，往返测试用。
    pub fn approx_eq(self, other: Color, tolerance: f32) -> bool {
        (self.r - other.r).abs() <= tolerance
            && (self.g - other.g).abs() <= tolerance
            && (self.b - other.b).abs() <= tolerance
            && (self.a - other.a).abs() <= tolerance
    }
}

/// 行主序颜色网格：画作在光栅化前的逻辑形态。
#[derive(Debug, Clone, PartialEq)]
pub struct ColorGrid {
    height: usize,
    width: usize,
    cells: Vec<Color>,
}

impl ColorGrid {
    /// 构造 `height × width` 网格，所有格子初始为不透明白。
    ///
    /// 前置条件：`height >= 1` 且 `width >= 1`，由调用方保证。
    pub fn filled_white(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![Color::WHITE; height * width],
        }
    }

    /// 从现成的行主序格子列表构造；长度不符返回 `None`。
    pub fn from_cells(height: usize, width: usize, cells: Vec<Color>) -> Option<Self> {
        if cells.len() != height * width {
            return None;
        }
        Some(Self {
            height,
            width,
            cells,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// 读取 (row, col) 处的颜色。
    ///
    /// # Panics
    /// 越界访问会 panic，网格尺寸由构造方固定。
    pub fn get(&self, row: usize, col: usize) -> Color {
        self.cells[row * self.width + col]
    }

    pub fn set(&mut self, row: usize, col: usize, color: Color) {
        self.cells[row * self.width + col] = color;
    }

    /// 行主序格子切片。
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }
}

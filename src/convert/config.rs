//! # 转换配置模块
//!
//! ## 设计思路
//!
//! 将图像导入链路的"可调策略"集中到 `ConvertConfig`，
//! 保证运行时行为可观测、可调整、可测试。
//!
//! ## 实现思路
//!
//! `Default` 提供生产可用的配置：像素画导入默认最近邻重采样，
//! 保留硬边缘；体积与像素上限用于在完整解码前快速拒绝恶意输入。

use image::imageops::FilterType;

/// 图像转换配置。
///
/// 字段覆盖了读取、解码与重采样三个阶段。
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// 读取源文件时允许的最大体积（字节）。
    pub max_file_size: u64,
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
    /// 解码阶段允许的预计内存上限（按 RGBA 估算，字节）。
    pub max_decoded_bytes: u64,
    /// 降采样到画布网格时使用的滤镜。
    ///
    /// 像素画默认最近邻，避免插值产生的中间色污染调色板。
    pub resize_filter: FilterType,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            max_file_size: 50 * 1024 * 1024,
            max_decoded_pixels: 40_000_000,
            max_decoded_bytes: 160 * 1024 * 1024,
            resize_filter: FilterType::Nearest,
        }
    }
}

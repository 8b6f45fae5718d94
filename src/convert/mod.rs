//! # 图像转换模块（convert）
//!
//! ## 设计思路
//!
//! 该模块把"图像文件/字节 → 加载校验 → 重采样 → 画作编码"
//! 按职责拆分为多个子模块，避免单文件膨胀与耦合。
//!
//! - `loader`：负责文件/内存加载与资源上限校验
//! - `pipeline`：负责重采样、网格换算与编码输出
//! - `config`/`error`：配置与错误模型
//!
//! ## 实现思路
//!
//! 对外仅暴露必要类型与函数，内部细节保持 `mod` 私有。
//! 反方向（画作编码 → 图像）由 `raster::decode` 承担，
//! 这里只补 PNG 落盘一步。

mod config;
mod error;
mod loader;
mod pipeline;

pub use config::ConvertConfig;
pub use error::ConvertError;
pub use loader::{load_image_from_memory, load_image_from_path};
pub use pipeline::{image_to_code, image_to_grid, save_png};

//! # 画作编码库 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 宿主 (游戏客户端 / 服务端)                │
//! │                                                          │
//! │   UI 交互 ── 状态同步 ── 纹理上传 (均在库外)              │
//! └───────┼──────────────────────────────────────────────────┘
//!         ↕ PaintingCode 字符串 / CanvasState 记录
//! ┌───────┼──────────────────────────────────────────────────┐
//! │       ↕            painting-codec                        │
//! │                                                          │
//! │  ┌─ codec ───── 编码 ⇄ 颜色网格 (格子粒度容错)            │
//! │  │   ├─ numeric    手写单位区间数值解析                   │
//! │  │   ├─ segment    r|g|b|a 颜色段                        │
//! │  │   ├─ painting   整幅编码/解码                          │
//! │  │   └─ detection  编码特征识别 (regex)                   │
//! │  │                                                       │
//! │  ├─ color ───── Color / ColorGrid 数据模型                │
//! │  ├─ raster ──── 网格 → RGBA 像素缓冲 (放大 + 32 格上限)   │
//! │  ├─ convert ─── 图像文件 ⇄ 画作编码 (限额 + 重采样)       │
//! │  └─ canvas ──── 显式画布状态记录 (serde)                  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`codec`] | 画作编码的解析、编码、容错回退与特征检测 |
//! | [`color`] | 归一化颜色与行主序颜色网格 |
//! | [`raster`] | 颜色网格光栅化为像素缓冲，含缩放上限回退 |
//! | [`convert`] | 图像文件与画作编码的双向转换 |
//! | [`canvas`] | 画布可见状态的显式记录与 JSON 辅助 |
//!
//! ## 并发模型
//!
//! 整个库是纯同步无状态的转换集合：无共享可变状态、无 I/O 副作用
//! （convert 的文件读写除外）、无缓存。任意函数都可以从多线程并发调用。

pub mod canvas;
pub mod codec;
pub mod color;
pub mod convert;
pub mod raster;

pub use canvas::{CanvasState, StateError};
pub use codec::{
    decode_cells, encode_cells, is_likely_painting_code, parse_clamped_unit_float,
    parse_color_segment, FormatError,
};
pub use color::{Color, ColorGrid};
pub use convert::{ConvertConfig, ConvertError};
pub use raster::{decode, effective_scale, rasterize, MAX_UNSCALED_DIMENSION};

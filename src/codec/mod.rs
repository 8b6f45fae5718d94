//! # 画作编码核心模块（codec）
//!
//! ## 设计思路
//!
//! 该模块将"文本编码 → 颜色网格"的往返按职责拆分为多个子模块，
//! 每个子模块只做一件事：
//!
//! - `numeric`：单位区间数值的手写解析（`.`/`,` 双分隔符 + 钳制语义）
//! - `segment`：单个 `r|g|b|a` 颜色段的解析与格式化
//! - `painting`：整幅画作编码的解码/编码（格子粒度容错）
//! - `detection`：画作编码的快速启发式识别
//! - `error`：格式错误模型
//!
//! ## 实现思路
//!
//! 整条链路是纯同步无状态的转换：不持有锁、不做 I/O、不缓存输出，
//! 多线程并发调用无需任何协调。诊断信息通过 `log` 输出，
//! 永远不会以错误形式打断解码调用方。

mod detection;
mod error;
mod numeric;
mod painting;
mod segment;

pub use detection::is_likely_painting_code;
pub use error::FormatError;
pub use numeric::parse_clamped_unit_float;
pub use painting::{decode_cells, encode_cells};
pub use segment::{format_color_segment, parse_color_segment};

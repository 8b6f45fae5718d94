//! # 画布状态模块
//!
//! # 设计思路
//!
//! 把画布实体的可见状态建模为显式、独立持有的记录：
//! 宿主（游戏服务端/客户端）之间传递整条记录，
//! 而不是依赖隐式的"标脏"组件突变。
//!
//! # 实现思路
//!
//! - `serde` 派生保证记录可直接走宿主的序列化通道。
//! - JSON 辅助函数覆盖最常见的落盘/调试场景。
//! - `validate` 集中检查 codec 各函数的前置条件，
//!   宿主在调用渲染前先校验一次即可。

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::raster::decode;

/// 画布状态校验错误。
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("画布状态非法：{0}")]
    Invalid(String),

    #[error("画布状态序列化失败：{0}")]
    Serialize(String),

    #[error("画布状态反序列化失败：{0}")]
    Deserialize(String),
}

/// 一张画布的完整可见状态。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasState {
    /// 画作编码，空串表示尚未作画。
    pub painting_code: String,
    /// 画布高度（格）。
    pub height: usize,
    /// 画布宽度（格）。
    pub width: usize,
    /// 渲染放大倍率。
    pub size_multiplier: u32,
    /// 作者名，空串表示未完成署名。
    pub artist: String,
    /// 画作签名。
    pub signature: String,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            painting_code: String::new(),
            height: 16,
            width: 16,
            size_multiplier: 2,
            artist: String::new(),
            signature: String::new(),
        }
    }
}

impl CanvasState {
    /// 校验渲染前置条件：尺寸与倍率均须为正。
    pub fn validate(&self) -> Result<(), StateError> {
        if self.height == 0 || self.width == 0 {
            return Err(StateError::Invalid(format!(
                "画布尺寸须为正：{}x{}",
                self.width, self.height
            )));
        }
        if self.size_multiplier == 0 {
            return Err(StateError::Invalid("放大倍率须为正".to_string()));
        }
        Ok(())
    }

    /// 是否还没有任何画作内容。
    pub fn is_blank(&self) -> bool {
        self.painting_code.is_empty()
    }

    /// 按自身尺寸与倍率渲染画作。
    ///
    /// 调用前须通过 [`CanvasState::validate`]。
    pub fn render(&self) -> RgbaImage {
        decode(
            &self.painting_code,
            self.height,
            self.width,
            self.size_multiplier,
        )
    }

    pub fn to_json(&self) -> Result<String, StateError> {
        serde_json::to_string(self).map_err(|e| StateError::Serialize(e.to_string()))
    }

    pub fn from_json(text: &str) -> Result<Self, StateError> {
        serde_json::from_str(text).map_err(|e| StateError::Deserialize(e.to_string()))
    }
}

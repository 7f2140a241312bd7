//! 统一错误类型定义.
//!
//! 所有 Bo crate 共用的错误类型, 支持跨模块传播.

use thiserror::Error;

/// Bo 库统一错误类型
#[derive(Debug, Error)]
pub enum BoError {
    /// 无效参数 (调用方前置条件违例)
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    /// 不支持的操作或格式
    #[error("不支持的操作: {0}")]
    Unsupported(String),

    /// 无效数据 (损坏的容器结构等)
    #[error("无效数据: {0}")]
    InvalidData(String),

    /// I/O 错误
    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),

    /// 已到达流末尾
    #[error("已到达流末尾")]
    Eof,

    /// 内部错误 (不应发生)
    #[error("内部错误: {0}")]
    Internal(String),
}

/// Bo 库统一 Result 类型
pub type BoResult<T> = Result<T, BoError>;

//! # bo-core
//!
//! Bo 波形处理库核心类型, 提供统一错误定义与 PCM 波形缓冲.
//!
//! 本 crate 是整个工作区的最底层, 不依赖其他成员 crate.

pub mod error;
pub mod pcm;

// 重导出常用类型
pub use error::{BoError, BoResult};
pub use pcm::{FS_DEF, Pcm};

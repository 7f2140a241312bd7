//! # Bo (波)
//!
//! 纯 Rust 实现的波形处理库: 离散窗函数生成与 RIFF/WAVE 线性 PCM 读写.
//!
//! Bo 提供:
//! - **窗函数**: 16 种窗函数族 (Hann, Hamming, Kaiser, KBD, 平顶窗...)
//!   的对称离散序列生成, 带数值退化处理
//! - **容器格式**: WAVE 线性 PCM 的解析与写出 (8/16/24/32 位, 多声道)
//! - **PCM 缓冲**: 逐声道的 f64 采样缓冲类型
//!
//! # 快速开始
//!
//! ```rust
//! use bo::dsp::window;
//!
//! // 生成 1024 点 Hann 窗
//! let w = window::hann(1024).unwrap();
//! assert_eq!(w[512], 1.0);
//! ```
//!
//! # Crate 结构
//!
//! | Crate | 功能 |
//! |-------|------|
//! | `bo-core` | 核心类型: 错误与 PCM 缓冲 |
//! | `bo-dsp` | 窗函数生成与 Bessel 函数 |
//! | `bo-format` | RIFF/WAVE 容器读写 |

/// 核心类型: 错误与 PCM 缓冲
pub use bo_core as core;

/// 窗函数生成与 Bessel 函数
pub use bo_dsp as dsp;

/// RIFF/WAVE 容器读写
pub use bo_format as format;

/// 获取 Bo 版本号
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! # bo-dsp
//!
//! Bo 波形处理库的窗函数引擎.
//!
//! 提供频谱分析, FIR 滤波器设计与 MDCT 加窗常用的离散窗函数生成:
//! 逐点表达式 + 对称迭代引擎的组合, 以及两者共用的贝塞尔核.
//!
//! # 使用示例
//!
//! ```rust
//! use bo_dsp::window;
//!
//! let w = window::hann(5).unwrap();
//! assert!((w[2] - 1.0).abs() < 1e-15);
//!
//! let kbd = window::kbd_with(2048, 4.0).unwrap();
//! assert_eq!(kbd.len(), 2048);
//! ```

pub mod bessel;
pub mod window;

// 重导出常用类型
pub use window::{WindowKind, generate};

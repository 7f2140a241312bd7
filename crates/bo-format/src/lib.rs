//! # bo-format
//!
//! Bo 波形处理库容器层: RIFF/WAVE 线性 PCM 文件的读取与写入.
//!
//! 读取方向把交错的整型采样按位深归一化为 f64, 逐声道装入
//! [`bo_core::Pcm`] 缓冲; 写入方向做相反的映射 (NaN 置零,
//! 越界截断). 底层 I/O 经由可替换后端的 [`io::IoContext`].
//!
//! # 使用示例
//!
//! ```rust,no_run
//! use bo_format::riff;
//!
//! let channels = riff::read_wave_file("input.wav").unwrap();
//! println!("{} 声道, {} Hz", channels.len(), channels[0].sample_rate());
//! riff::write_wave_file("output.wav", &channels, 16).unwrap();
//! ```

pub mod io;
pub mod riff;

// 重导出常用类型
pub use io::{IoBackend, IoContext, MemoryBackend};
pub use riff::{read_linear_pcm, read_wave_file, write_linear_pcm, write_wave_file};

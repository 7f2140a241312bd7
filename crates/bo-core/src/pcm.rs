//! PCM 波形缓冲.
//!
//! 以 f64 存储单声道波形数据, 附带采样率标签.
//! 窗函数生成与 RIFF 读写均以本类型为数据载体, 多声道以
//! `Vec<Pcm>` 表达 (每声道一个缓冲).

use std::ops::{Index, IndexMut};

use crate::error::{BoError, BoResult};

/// 默认采样率 (Hz)
pub const FS_DEF: u32 = 48_000;

/// PCM 波形缓冲
///
/// 长度可变, 扩容时新增尾部填零, 缩容时截断.
#[derive(Debug, Clone, PartialEq)]
pub struct Pcm {
    /// 采样率 (Hz), 恒为正
    fs: u32,
    /// 波形数据
    samples: Vec<f64>,
}

impl Pcm {
    /// 创建指定长度与采样率的缓冲, 初值全零.
    ///
    /// 采样率为 0 时返回 `InvalidArgument`.
    pub fn new(len: usize, fs: u32) -> BoResult<Self> {
        if fs == 0 {
            return Err(BoError::InvalidArgument("采样率必须为正".into()));
        }
        Ok(Self {
            fs,
            samples: vec![0.0; len],
        })
    }

    /// 以默认采样率 [`FS_DEF`] 创建缓冲.
    pub fn with_default_fs(len: usize) -> Self {
        Self {
            fs: FS_DEF,
            samples: vec![0.0; len],
        }
    }

    /// 创建缓冲并以闭包逐点填充: 第 n 个采样为 `f(n)`.
    pub fn from_fn(len: usize, fs: u32, mut f: impl FnMut(usize) -> f64) -> BoResult<Self> {
        let mut pcm = Self::new(len, fs)?;
        for (n, s) in pcm.samples.iter_mut().enumerate() {
            *s = f(n);
        }
        Ok(pcm)
    }

    /// 从已有波形数据创建.
    pub fn from_samples(samples: Vec<f64>, fs: u32) -> BoResult<Self> {
        if fs == 0 {
            return Err(BoError::InvalidArgument("采样率必须为正".into()));
        }
        Ok(Self { fs, samples })
    }

    /// 采样率 (Hz)
    pub fn sample_rate(&self) -> u32 {
        self.fs
    }

    /// 设置采样率, 约束与构造时相同.
    pub fn set_sample_rate(&mut self, fs: u32) -> BoResult<()> {
        if fs == 0 {
            return Err(BoError::InvalidArgument("采样率必须为正".into()));
        }
        self.fs = fs;
        Ok(())
    }

    /// 采样数
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// 是否为空缓冲
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// 调整长度: 扩容部分填零, 缩容截断.
    pub fn resize(&mut self, new_len: usize) {
        self.samples.resize(new_len, 0.0);
    }

    /// 波形数据 (只读)
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// 波形数据 (可写)
    pub fn samples_mut(&mut self) -> &mut [f64] {
        &mut self.samples
    }

    /// 消耗自身, 返回波形数据
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }
}

impl Index<usize> for Pcm {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.samples[index]
    }
}

impl IndexMut<usize> for Pcm {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.samples[index]
    }
}

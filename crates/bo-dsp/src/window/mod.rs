//! 离散窗函数生成.
//!
//! 对外接口: [`WindowKind`] 枚举指定窗族 (带形状参数的窗族以变体
//! 字段携带参数), [`generate`] 产出长度为 len 的对称窗数组.
//! 每个窗族另有同名便捷函数.
//!
//! 生成流程: 窗族 → 迭代描述符 (逐点表达式 + 参数变换 + 退化策略)
//! → 迭代引擎填充数组. 引擎只按迭代规则分派, 不感知窗族本身.
//!
//! # 使用示例
//!
//! ```rust
//! use bo_dsp::window::{self, WindowKind};
//!
//! let w = window::generate(WindowKind::Hann, 5).unwrap();
//! assert_eq!(w.len(), 5);
//! assert_eq!(w[2], 1.0);
//!
//! // 等价写法
//! let w2 = window::hann(5).unwrap();
//! assert_eq!(w, w2);
//! ```

mod expr;
mod iter;

use bo_core::{BoError, BoResult};

use iter::{IterRule, IterSpec, SpecialCase};

/// 窗族
///
/// 带形状参数的窗族以变体字段携带参数; 无参变体使用固定形状
/// (高斯 σ = 3/10, 凯泽 α = 3).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowKind {
    /// 矩形窗
    Rectangular,
    /// 汉窗
    Hann,
    /// 汉明窗
    Hamming,
    /// 广义汉明窗, 定义域 0.5 <= alpha <= 1.0
    GeneralizedHamming {
        /// 系数 α
        alpha: f64,
    },
    /// 巴特利特窗 (三角窗)
    Bartlett,
    /// 布莱克曼窗
    Blackman,
    /// 高斯窗 (固定 σ = 3/10)
    Gaussian,
    /// 参数化高斯窗
    GaussianWith {
        /// 标准差 σ
        sigma: f64,
    },
    /// 凯泽窗 (固定 α = 3)
    Kaiser,
    /// 参数化凯泽窗
    KaiserWith {
        /// 形状参数 α
        alpha: f64,
    },
    /// 巴特利特-汉窗
    BartlettHann,
    /// 布莱克曼-哈里斯窗
    BlackmanHarris,
    /// 纳托尔窗
    Nuttall,
    /// 布莱克曼-纳托尔窗
    BlackmanNuttall,
    /// 平顶窗
    FlatTop,
    /// 凯泽-贝塞尔派生 (KBD) 窗, MDCT 加窗专用
    KbdWith {
        /// 形状参数 α
        alpha: f64,
    },
}

impl WindowKind {
    /// 构造迭代描述符, 含形状参数的定义域校验与参数变换.
    fn iter_spec(&self) -> BoResult<IterSpec> {
        let spec = match *self {
            Self::Rectangular => IterSpec::one_sided(expr::rectangular, 0.0),
            Self::Hann => IterSpec::one_sided(expr::hann, 0.0),
            Self::Hamming => IterSpec::one_sided(expr::hamming, 0.0),
            Self::GeneralizedHamming { alpha } => {
                if !(0.5..=1.0).contains(&alpha) {
                    return Err(BoError::InvalidArgument(format!(
                        "广义汉明窗参数 alpha 超出定义域 [0.5, 1.0]: {alpha}"
                    )));
                }
                IterSpec::one_sided(expr::generalized_hamming, alpha)
            }
            Self::Bartlett => IterSpec::one_sided(expr::bartlett, 0.0),
            Self::Blackman => IterSpec::one_sided(expr::blackman, 0.0),
            Self::Gaussian => IterSpec::one_sided(expr::gaussian, 0.0),
            Self::GaussianWith { sigma } => IterSpec {
                eval: expr::gaussian_with,
                // 退化检查作用于变换后的 t, 而非 σ 本身:
                // σ 充分小时 8σ² 下溢为 0, 同样取中心脉冲极限
                param: expr::gaussian_transform(sigma),
                rule: IterRule::OneSided,
                on_nan: SpecialCase::CenterSpike,
                on_inf: SpecialCase::NoOverride,
                on_zero: SpecialCase::CenterSpike,
            },
            Self::Kaiser => IterSpec::one_sided(expr::kaiser, 0.0),
            Self::KaiserWith { alpha } => IterSpec {
                eval: expr::kaiser_with,
                param: alpha,
                rule: IterRule::OneSided,
                on_nan: SpecialCase::CenterSpike,
                on_inf: SpecialCase::CenterSpike,
                on_zero: SpecialCase::AllOnes,
            },
            Self::BartlettHann => IterSpec::one_sided(expr::bartlett_hann, 0.0),
            Self::BlackmanHarris => IterSpec::one_sided(expr::blackman_harris, 0.0),
            Self::Nuttall => IterSpec::one_sided(expr::nuttall, 0.0),
            Self::BlackmanNuttall => IterSpec::one_sided(expr::blackman_nuttall, 0.0),
            Self::FlatTop => IterSpec::one_sided(expr::flat_top, 0.0),
            Self::KbdWith { alpha } => IterSpec {
                eval: expr::kbd_with,
                param: alpha,
                rule: IterRule::MdctConvolution,
                on_nan: SpecialCase::NoOverride,
                on_inf: SpecialCase::CenterSpike,
                on_zero: SpecialCase::NoOverride,
            },
        };
        Ok(spec)
    }
}

/// 生成长度为 len 的离散窗数组.
///
/// len 为 0 或形状参数超出窗族定义域时返回 `InvalidArgument`.
/// 形状参数为 NaN / 无穷 / 零的数值退化不视为错误, 由各窗族的
/// 特例策略解析为确定的固定图样.
pub fn generate(kind: WindowKind, len: usize) -> BoResult<Vec<f64>> {
    if len == 0 {
        return Err(BoError::InvalidArgument("窗长度必须为正".into()));
    }
    let spec = kind.iter_spec()?;
    Ok(iter::generate(&spec, len))
}

/// 矩形窗
pub fn rectangular(len: usize) -> BoResult<Vec<f64>> {
    generate(WindowKind::Rectangular, len)
}

/// 汉窗
pub fn hann(len: usize) -> BoResult<Vec<f64>> {
    generate(WindowKind::Hann, len)
}

/// 汉明窗
pub fn hamming(len: usize) -> BoResult<Vec<f64>> {
    generate(WindowKind::Hamming, len)
}

/// 广义汉明窗, 定义域 0.5 <= alpha <= 1.0
pub fn generalized_hamming(len: usize, alpha: f64) -> BoResult<Vec<f64>> {
    generate(WindowKind::GeneralizedHamming { alpha }, len)
}

/// 巴特利特窗
pub fn bartlett(len: usize) -> BoResult<Vec<f64>> {
    generate(WindowKind::Bartlett, len)
}

/// 布莱克曼窗
pub fn blackman(len: usize) -> BoResult<Vec<f64>> {
    generate(WindowKind::Blackman, len)
}

/// 高斯窗 (固定 σ = 3/10)
pub fn gaussian(len: usize) -> BoResult<Vec<f64>> {
    generate(WindowKind::Gaussian, len)
}

/// 参数化高斯窗
pub fn gaussian_with(len: usize, sigma: f64) -> BoResult<Vec<f64>> {
    generate(WindowKind::GaussianWith { sigma }, len)
}

/// 凯泽窗 (固定 α = 3)
pub fn kaiser(len: usize) -> BoResult<Vec<f64>> {
    generate(WindowKind::Kaiser, len)
}

/// 参数化凯泽窗
pub fn kaiser_with(len: usize, alpha: f64) -> BoResult<Vec<f64>> {
    generate(WindowKind::KaiserWith { alpha }, len)
}

/// 巴特利特-汉窗
pub fn bartlett_hann(len: usize) -> BoResult<Vec<f64>> {
    generate(WindowKind::BartlettHann, len)
}

/// 布莱克曼-哈里斯窗
pub fn blackman_harris(len: usize) -> BoResult<Vec<f64>> {
    generate(WindowKind::BlackmanHarris, len)
}

/// 纳托尔窗
pub fn nuttall(len: usize) -> BoResult<Vec<f64>> {
    generate(WindowKind::Nuttall, len)
}

/// 布莱克曼-纳托尔窗
pub fn blackman_nuttall(len: usize) -> BoResult<Vec<f64>> {
    generate(WindowKind::BlackmanNuttall, len)
}

/// 平顶窗
pub fn flat_top(len: usize) -> BoResult<Vec<f64>> {
    generate(WindowKind::FlatTop, len)
}

/// KBD 窗 (MDCT 卷积规则)
pub fn kbd_with(len: usize, alpha: f64) -> BoResult<Vec<f64>> {
    generate(WindowKind::KbdWith { alpha }, len)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 所有无参窗族, 供遍历类测试使用
    const FIXED_KINDS: [WindowKind; 12] = [
        WindowKind::Rectangular,
        WindowKind::Hann,
        WindowKind::Hamming,
        WindowKind::Bartlett,
        WindowKind::Blackman,
        WindowKind::Gaussian,
        WindowKind::Kaiser,
        WindowKind::BartlettHann,
        WindowKind::BlackmanHarris,
        WindowKind::Nuttall,
        WindowKind::BlackmanNuttall,
        WindowKind::FlatTop,
    ];

    fn assert_close(got: &[f64], expect: &[f64], tol: f64) {
        assert_eq!(got.len(), expect.len());
        for (i, (&g, &e)) in got.iter().zip(expect).enumerate() {
            assert!((g - e).abs() < tol, "下标 {i}: 得到 {g}, 期望 {e}");
        }
    }

    /// 奇数长度关于两端对称, 偶数长度关于中心下标对称
    fn assert_symmetric(w: &[f64]) {
        let len = w.len();
        if len % 2 == 1 {
            for i in 0..len {
                assert_eq!(w[i], w[len - 1 - i], "奇数长度下标 {i}");
            }
        } else {
            for i in 1..len {
                assert_eq!(w[i], w[len - i], "偶数长度下标 {i}");
            }
        }
    }

    #[test]
    fn test_hann_参考值() {
        let w = hann(5).unwrap();
        let expect = [
            0.09549150281252627,
            0.6545084971874737,
            1.0,
            0.6545084971874737,
            0.09549150281252633,
        ];
        assert_close(&w, &expect, 1e-12);
    }

    #[test]
    fn test_hamming_参考值() {
        let w = hamming(5).unwrap();
        let expect = [
            0.174144415611437,
            0.684551236562476,
            1.0,
            0.684551236562476,
            0.17414441561143706,
        ];
        assert_close(&w, &expect, 1e-12);
    }

    #[test]
    fn test_kaiser_参考值() {
        let expect = [
            0.4076303841265242,
            0.8184078580166961,
            1.0,
            0.8184078580166961,
            0.4076303841265242,
        ];
        // 固定形状与 α = 3 的参数化形式应一致
        assert_close(&kaiser(5).unwrap(), &expect, 1e-12);
        assert_close(&kaiser_with(5, 3.0).unwrap(), &expect, 1e-12);
    }

    #[test]
    fn test_kbd_参考值() {
        let w = kbd_with(5, 3.0).unwrap();
        let expect = [
            0.4114947429371883,
            0.9996957233074878,
            1.0,
            0.9996957233074878,
            0.4114947429371883,
        ];
        assert_close(&w, &expect, 1e-12);
    }

    #[test]
    fn test_gaussian_参考值() {
        let expect = [
            0.4111122905071874,
            0.8007374029168081,
            1.0,
            0.8007374029168082,
            0.4111122905071874,
        ];
        assert_close(&gaussian(5).unwrap(), &expect, 1e-12);
        // 固定形状即 σ = 3/10
        assert_close(&gaussian_with(5, 0.3).unwrap(), &expect, 1e-12);
    }

    #[test]
    fn test_矩形窗全为一() {
        for len in [1, 2, 5, 8, 33] {
            let w = rectangular(len).unwrap();
            assert_eq!(w.len(), len);
            assert!(w.iter().all(|&v| v == 1.0), "len={len}");
        }
    }

    #[test]
    fn test_长度与对称性() {
        for kind in FIXED_KINDS {
            for len in [1, 2, 5, 16, 17] {
                let w = generate(kind, len).unwrap();
                assert_eq!(w.len(), len, "{kind:?}");
                assert_symmetric(&w);
            }
        }
        for len in [2, 5, 16, 17] {
            assert_symmetric(&kbd_with(len, 4.0).unwrap());
            assert_symmetric(&kaiser_with(len, 8.0).unwrap());
            assert_symmetric(&gaussian_with(len, 0.4).unwrap());
        }
    }

    #[test]
    fn test_中心点边界约定() {
        for kind in FIXED_KINDS {
            for len in [1, 5, 17] {
                let w = generate(kind, len).unwrap();
                assert_eq!(w[len / 2], 1.0, "{kind:?}, len={len}");
            }
        }
    }

    #[test]
    fn test_长度为一退化为单点窗() {
        for kind in FIXED_KINDS {
            assert_eq!(generate(kind, 1).unwrap(), vec![1.0], "{kind:?}");
        }
        assert_eq!(kbd_with(1, 3.0).unwrap(), vec![1.0]);
    }

    #[test]
    fn test_长度为零报错() {
        assert!(matches!(
            hann(0),
            Err(bo_core::BoError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_gaussian_sigma_为零退化为中心脉冲() {
        for len in [4, 5] {
            let w = gaussian_with(len, 0.0).unwrap();
            for (i, &v) in w.iter().enumerate() {
                let expect = if i == len / 2 { 1.0 } else { 0.0 };
                assert_eq!(v, expect, "len={len}, i={i}");
            }
        }
    }

    #[test]
    fn test_gaussian_sigma_下溢触发退化() {
        // 8σ² 下溢为 0 时与 σ == 0 同样处理
        let w = gaussian_with(6, 1e-170).unwrap();
        assert_eq!(w, vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
        // 次正规但非零的 t 不触发退化
        let w = gaussian_with(6, 1e-160).unwrap();
        assert_eq!(w[3], 1.0);
        assert_eq!(w[1], 0.0);
    }

    #[test]
    fn test_kaiser_alpha_溢出退化为中心脉冲() {
        // I0(1000) 溢出为无穷, 但 α 本身有限: 经表达式逐点退化
        for len in [4, 5] {
            let w = kaiser_with(len, 1000.0).unwrap();
            for (i, &v) in w.iter().enumerate() {
                let expect = if i == len / 2 { 1.0 } else { 0.0 };
                assert_eq!(v, expect, "len={len}, i={i}");
            }
        }
    }

    #[test]
    fn test_kaiser_alpha_特例策略() {
        // α = ∞ 与 α = NaN: 中心脉冲
        for alpha in [f64::INFINITY, f64::NAN] {
            let w = kaiser_with(5, alpha).unwrap();
            assert_eq!(w, vec![0.0, 0.0, 1.0, 0.0, 0.0]);
        }
        // α = 0: 退化为矩形窗
        let w = kaiser_with(5, 0.0).unwrap();
        assert!(w.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_kbd_alpha_无穷退化为中心脉冲() {
        let w = kbd_with(6, f64::INFINITY).unwrap();
        assert_eq!(w, vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_广义汉明_定义域() {
        assert!(generalized_hamming(5, 0.4).is_err());
        assert!(generalized_hamming(5, 1.1).is_err());
        assert!(generalized_hamming(5, f64::NAN).is_err());
        assert!(generalized_hamming(5, 0.5).is_ok());
        assert!(generalized_hamming(5, 1.0).is_ok());
    }

    #[test]
    fn test_广义汉明_alpha_一与矩形窗相同() {
        for len in [4, 5, 9] {
            assert_eq!(
                generalized_hamming(len, 1.0).unwrap(),
                rectangular(len).unwrap(),
                "len={len}"
            );
        }
    }

    #[test]
    fn test_广义汉明_半数系数即汉窗() {
        let w = generalized_hamming(7, 0.5).unwrap();
        let h = hann(7).unwrap();
        for (a, b) in w.iter().zip(&h) {
            assert!((a - b).abs() < 1e-15);
        }
    }

    #[test]
    fn test_gaussian_sigma_无穷退化为全一() {
        // t = ∞ 不触发策略, 表达式 exp(-x/∞) = 1 自然成立
        let w = gaussian_with(5, f64::INFINITY).unwrap();
        assert!(w.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_kbd_偶数长度能量互补() {
        // 偶数长度时核值关于半窗中点对称, 累积和满足
        // cum[n] + cum[half-1-n] = total, 即 w[n]² + w[half-1-n]² = 1
        let len = 32;
        let half = len / 2;
        let w = kbd_with(len, 4.0).unwrap();
        for n in 0..half {
            let s = w[n] * w[n] + w[half - 1 - n] * w[half - 1 - n];
            assert!((s - 1.0).abs() < 1e-12, "n={n}: {s}");
        }
    }
}

//! 窗函数逐点表达式.
//!
//! 每个窗族一个纯函数 `fn(n, len, param) -> f64`, 无副作用.
//! 迭代引擎利用偶对称性, 只在 `0 <= n <= len/2` 范围内调用;
//! 奇数长度时 n 为半整数 (n + 0.5), 由引擎统一处理.
//!
//! 除特别注明外, 下文 x = n/len.

use std::f64::consts::PI;

use crate::bessel::bessel_i0;

/// 矩形窗: w(x) = 1
pub(crate) fn rectangular(_n: f64, _len: i64, _param: f64) -> f64 {
    1.0
}

/// 汉窗: w(x) = 0.5 - 0.5 cos(2πx)
pub(crate) fn hann(n: f64, len: i64, _param: f64) -> f64 {
    let x = n / len as f64;
    0.5 - 0.5 * (2.0 * PI * x).cos()
}

/// 汉明窗: w(x) = 25/46 - 21/46 cos(2πx)
pub(crate) fn hamming(n: f64, len: i64, _param: f64) -> f64 {
    let x = n / len as f64;
    25.0 / 46.0 - 21.0 / 46.0 * (2.0 * PI * x).cos()
}

/// 广义汉明窗: w(x) = α - (1-α) cos(2πx)
///
/// 定义域 0.5 <= α <= 1.0, 由公开接口在构造描述符前校验.
pub(crate) fn generalized_hamming(n: f64, len: i64, alpha: f64) -> f64 {
    let x = n / len as f64;
    alpha - (1.0 - alpha) * (2.0 * PI * x).cos()
}

/// 巴特利特窗 (三角窗): w(x) = 1 - 2|x - 0.5|
pub(crate) fn bartlett(n: f64, len: i64, _param: f64) -> f64 {
    let x = n / len as f64;
    1.0 - 2.0 * (x - 0.5).abs()
}

/// 布莱克曼窗: w(x) = 0.42 - 0.5 cos(2πx) + 0.08 cos(4πx)
pub(crate) fn blackman(n: f64, len: i64, _param: f64) -> f64 {
    let x = n / len as f64;
    0.42 - 0.5 * (2.0 * PI * x).cos() + 0.08 * (4.0 * PI * x).cos()
}

/// 高斯窗 (固定 σ = 3/10): w(x) = exp(-25/18 (-1+2x)²)
pub(crate) fn gaussian(n: f64, len: i64, _param: f64) -> f64 {
    const T1: f64 = -(25.0 / 18.0);
    let t2 = -1.0 + 2.0 * n / len as f64;
    (T1 * t2 * t2).exp()
}

/// 参数化高斯窗: w(x) = exp(-(-1+2x)² / t), t = 8σ²
///
/// 接收的参数是变换后的 t 而非 σ 本身; σ → 0 的退化极限
/// (t == 0 时的 0/0) 由迭代引擎的特例策略兜底, 不在此处理.
pub(crate) fn gaussian_with(n: f64, len: i64, t2: f64) -> f64 {
    let t1 = -1.0 + 2.0 * n / len as f64;
    (-(t1 * t1 / t2)).exp()
}

/// σ → t = 8σ² 参数变换
pub(crate) fn gaussian_transform(sigma: f64) -> f64 {
    8.0 * sigma * sigma
}

/// 凯泽窗 (固定 α = 3): w(x) = I0(6 √(-(x-1)x)) / I0(3)
pub(crate) fn kaiser(n: f64, len: i64, _param: f64) -> f64 {
    let x = n / len as f64;
    bessel_i0(6.0 * (-(x - 1.0) * x).sqrt()) / bessel_i0(3.0)
}

/// 参数化凯泽窗: w(x) = I0(2α √(-(x-1)x)) / I0(α)
///
/// I0(α) 溢出为无穷时, 归一化分母失去意义, 数学极限是中心处的
/// 单位脉冲: 仅 x == 0.5 返回 1, 其余返回 0. 偶数长度下中心点由
/// 引擎强制为 1, 故整体效果即中心脉冲.
pub(crate) fn kaiser_with(n: f64, len: i64, alpha: f64) -> f64 {
    let x = n / len as f64;
    let denom = bessel_i0(alpha);
    if denom.is_infinite() {
        return if x == 0.5 { 1.0 } else { 0.0 };
    }
    bessel_i0(alpha * 2.0 * (-(x - 1.0) * x).sqrt()) / denom
}

/// 巴特利特-汉窗: w(x) = 0.62 - 0.48|x-0.5| + 0.38 cos(2π(x-0.5))
pub(crate) fn bartlett_hann(n: f64, len: i64, _param: f64) -> f64 {
    let x = n / len as f64;
    0.62 - 0.48 * (x - 0.5).abs() + 0.38 * (2.0 * PI * (x - 0.5)).cos()
}

/// 余弦级数求值: a0 - a1 cos(2πx) + a2 cos(4πx) - a3 cos(6πx) [+ a4 cos(8πx)]
fn cosine_series(x: f64, coef: &[f64]) -> f64 {
    let mut acc = 0.0;
    let mut sign = 1.0;
    for (k, &a) in coef.iter().enumerate() {
        acc += sign * a * (2.0 * PI * k as f64 * x).cos();
        sign = -sign;
    }
    acc
}

/// 布莱克曼-哈里斯窗 (4 项余弦级数)
pub(crate) fn blackman_harris(n: f64, len: i64, _param: f64) -> f64 {
    const COEF: [f64; 4] = [0.35875, 0.48829, 0.14128, 0.01168];
    cosine_series(n / len as f64, &COEF)
}

/// 纳托尔窗 (4 项余弦级数)
pub(crate) fn nuttall(n: f64, len: i64, _param: f64) -> f64 {
    const COEF: [f64; 4] = [
        88942.0 / 250000.0,
        121849.0 / 250000.0,
        36058.0 / 250000.0,
        3151.0 / 250000.0,
    ];
    cosine_series(n / len as f64, &COEF)
}

/// 布莱克曼-纳托尔窗 (4 项余弦级数)
pub(crate) fn blackman_nuttall(n: f64, len: i64, _param: f64) -> f64 {
    const COEF: [f64; 4] = [0.3635819, 0.4891775, 0.1365995, 0.0106411];
    cosine_series(n / len as f64, &COEF)
}

/// 平顶窗 (5 项余弦级数)
pub(crate) fn flat_top(n: f64, len: i64, _param: f64) -> f64 {
    const COEF: [f64; 5] = [
        0.215578947,
        0.416631580,
        0.277263158,
        0.083578947,
        0.006947368,
    ];
    cosine_series(n / len as f64, &COEF)
}

/// KBD 窗核: w(x) = I0(πα √(1 - (4x-1)²))
///
/// 仅与 MDCT 卷积迭代规则配合使用, 输出是未归一化的核值,
/// 归一化 (累积能量开方) 由引擎完成.
pub(crate) fn kbd_with(n: f64, len: i64, alpha: f64) -> f64 {
    let t1 = 4.0 * n / len as f64 - 1.0;
    bessel_i0(PI * alpha * (1.0 - t1 * t1).max(0.0).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_级数在原点取系数交错和() {
        // x = 0 时 cos 全为 1, 级数值为 a0 - a1 + a2 - a3
        let v = blackman_harris(0.0, 1, 0.0);
        assert!((v - (0.35875 - 0.48829 + 0.14128 - 0.01168)).abs() < 1e-15);
    }

    #[test]
    fn test_表达式中点值() {
        // x = 0.5 处各窗应达到主瓣峰值
        assert!((hann(2.0, 4, 0.0) - 1.0).abs() < 1e-15);
        assert!((bartlett(2.0, 4, 0.0) - 1.0).abs() < 1e-15);
        assert!((gaussian(2.0, 4, 0.0) - 1.0).abs() < 1e-15);
        assert!((kaiser(2.0, 4, 0.0) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_凯泽窗分母溢出时为中心指示函数() {
        // I0(1000) 溢出, 表达式退化为 x == 0.5 的指示函数
        assert_eq!(kaiser_with(2.0, 4, 1000.0), 1.0);
        assert_eq!(kaiser_with(1.0, 4, 1000.0), 0.0);
        assert_eq!(kaiser_with(0.0, 4, 1000.0), 0.0);
    }

    #[test]
    fn test_高斯参数变换() {
        assert_eq!(gaussian_transform(0.0), 0.0);
        assert_eq!(gaussian_transform(0.5), 2.0);
        // σ 过小时 8σ² 下溢为 0, 正是触发特例策略的场景
        assert_eq!(gaussian_transform(1e-170), 0.0);
        assert!(gaussian_transform(1e-160) > 0.0);
    }
}

//! 第一类修正贝塞尔函数 (零阶).
//!
//! Kaiser 与 KBD 窗共用的数值核. 并非所有目标平台的数学库都提供
//! `cyl_bessel_i0`, 因此这里自带一份幂级数实现.

/// 第一类修正贝塞尔函数 I0.
///
/// 幂级数求值:
/// $ I_0(x) = \sum_{k=0}^{\infty} \frac{(x^2/4)^k}{(k!)^2} $
///
/// 对所有有限 x 有效, 偶函数 (`i0(x) == i0(-x)`).
/// 真值超出 f64 可表示范围时返回 `+∞`, 不报错; 调用方须把无穷
/// 作为独立的控制流分支处理 (参见 Kaiser 窗的归一化分母).
/// NaN 输入原样传播.
pub fn bessel_i0(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }

    // 级数只出现 (x/2)^2, 偶对称自然成立
    let q = (x * 0.5) * (x * 0.5);
    let mut sum = 1.0f64;
    let mut term = 1.0f64;
    let mut k = 1.0f64;
    loop {
        term *= q / (k * k);
        if !term.is_finite() {
            // 中间项溢出, 真值必然超出可表示范围
            return f64::INFINITY;
        }
        sum += term;
        // 项为正且在峰值后单调递减, 相对收敛判据安全
        if term <= sum * 1e-17 {
            break;
        }
        k += 1.0;
    }
    sum
}

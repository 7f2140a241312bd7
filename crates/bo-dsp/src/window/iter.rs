//! 对称迭代引擎.
//!
//! 所有窗族共用的数组填充算法: 只计算半窗, 依偶对称性镜像到
//! 另一半, 中心点恒置 1.0. 形状参数的 NaN / 无穷 / 零三类退化
//! 情形在求值前按描述符策略短路为固定图样 (全 1 或中心脉冲).

use log::debug;

/// 迭代规则
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IterRule {
    /// 一维对称迭代: 逐点求值半窗并镜像 (KBD 以外的所有窗)
    OneSided,
    /// MDCT 卷积迭代: 半窗核值累积和归一化开方 (仅 KBD)
    MdctConvolution,
}

/// 形状参数退化时的固定图样策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SpecialCase {
    /// 不短路, 正常迭代
    NoOverride,
    /// 全部元素置 1.0 (退化为矩形窗)
    AllOnes,
    /// 中心 1.0, 其余 0.0 (退化为单位脉冲)
    CenterSpike,
}

/// 迭代描述符
///
/// 每次窗函数调用临时构造, 不保留. 携带逐点求值函数, 变换后的
/// 形状参数, 迭代规则与三类退化情形各自的策略.
pub(crate) struct IterSpec {
    /// 逐点求值函数
    pub eval: fn(f64, i64, f64) -> f64,
    /// 形状参数 (已做参数变换, 如高斯的 t = 8σ²)
    pub param: f64,
    /// 迭代规则
    pub rule: IterRule,
    /// 参数为 NaN 时的策略
    pub on_nan: SpecialCase,
    /// 参数为 ±∞ 时的策略
    pub on_inf: SpecialCase,
    /// 参数恰为 0 时的策略
    pub on_zero: SpecialCase,
}

impl IterSpec {
    /// 无参数窗的一维迭代描述符 (三类策略全部不短路)
    pub fn one_sided(eval: fn(f64, i64, f64) -> f64, param: f64) -> Self {
        Self {
            eval,
            param,
            rule: IterRule::OneSided,
            on_nan: SpecialCase::NoOverride,
            on_inf: SpecialCase::NoOverride,
            on_zero: SpecialCase::NoOverride,
        }
    }

    /// 解析退化情形, 优先级固定为 NaN > 无穷 > 零.
    fn special_case(&self) -> SpecialCase {
        if self.on_nan != SpecialCase::NoOverride && self.param.is_nan() {
            return self.on_nan;
        }
        if self.on_inf != SpecialCase::NoOverride && self.param.is_infinite() {
            return self.on_inf;
        }
        if self.on_zero != SpecialCase::NoOverride && self.param == 0.0 {
            return self.on_zero;
        }
        SpecialCase::NoOverride
    }
}

/// 生成长度为 len 的窗数组.
///
/// 前置条件: len >= 1, 由公开接口在调用前保证.
pub(crate) fn generate(spec: &IterSpec, len: usize) -> Vec<f64> {
    debug_assert!(len >= 1);

    match spec.special_case() {
        SpecialCase::AllOnes => {
            debug!("形状参数退化 (param={}), 输出全 1 图样", spec.param);
            vec![1.0; len]
        }
        SpecialCase::CenterSpike => {
            debug!("形状参数退化 (param={}), 输出中心脉冲图样", spec.param);
            make_center_spike(len)
        }
        SpecialCase::NoOverride => match spec.rule {
            IterRule::OneSided => fill_one_sided(spec, len),
            IterRule::MdctConvolution => fill_mdct(spec, len),
        },
    }
}

/// 中心 1.0 其余 0.0 的固定图样
fn make_center_spike(len: usize) -> Vec<f64> {
    let mut w = vec![0.0; len];
    w[len / 2] = 1.0;
    w
}

/// 半窗采样位置的半整数偏移: 偶数长度用整数位置, 奇数长度用 n + 0.5.
fn half_offset(len: usize) -> f64 {
    if len % 2 == 0 { 0.0 } else { 0.5 }
}

/// 把半窗值写入 n 及其镜像位置.
///
/// 偶数长度关于中心下标 len/2 对称 (镜像 len - n, n = 0 无镜像);
/// 奇数长度关于两端对称 (镜像 len - 1 - n).
fn store_mirrored(w: &mut [f64], n: usize, value: f64) {
    let len = w.len();
    w[n] = value;
    if len % 2 == 0 {
        if n > 0 {
            w[len - n] = value;
        }
    } else {
        w[len - 1 - n] = value;
    }
}

/// 一维对称迭代.
///
/// 中心点不经公式求值, 恒置 1.0; 这是引擎的边界约定而非公式推论.
fn fill_one_sided(spec: &IterSpec, len: usize) -> Vec<f64> {
    let mut w = vec![0.0; len];
    let half = len / 2;
    let offset = half_offset(len);
    let n_len = len as i64;

    for n in 0..half {
        let value = (spec.eval)(n as f64 + offset, n_len, spec.param);
        store_mirrored(&mut w, n, value);
    }
    w[half] = 1.0;
    w
}

/// MDCT 卷积迭代 (KBD 窗).
///
/// 两个串行阶段: 先累积半窗核值 (半窗总和含 len/2 处的边界项),
/// 再对累积和归一化开方并镜像. 无穷累积值饱和为 1.0.
fn fill_mdct(spec: &IterSpec, len: usize) -> Vec<f64> {
    let mut w = vec![0.0; len];
    let half = len / 2;
    let offset = half_offset(len);
    let n_len = len as i64;

    let mut cum = Vec::with_capacity(half);
    let mut running = 0.0f64;
    for n in 0..half {
        running += (spec.eval)(n as f64 + offset, n_len, spec.param);
        cum.push(running);
    }
    let total = running + (spec.eval)(half as f64 + offset, n_len, spec.param);

    for (n, &c) in cum.iter().enumerate() {
        let value = if c.is_infinite() {
            1.0
        } else {
            (c / total).sqrt()
        };
        store_mirrored(&mut w, n, value);
    }
    w[half] = 1.0;
    w
}

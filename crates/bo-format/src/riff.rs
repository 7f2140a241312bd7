//! RIFF/WAVE 线性 PCM 读写.
//!
//! WAV 文件结构 (全部小端):
//! ```text
//! RIFF header:  "RIFF" + file_size-8 + "WAVE"
//! fmt  chunk:   "fmt " + size(16) + format_tag + channels + sample_rate
//!              + byte_rate + block_size + bits_per_sample
//! data chunk:   "data" + data_size + 交错 PCM 采样...
//! ```
//!
//! 仅支持 format_tag == 1 (线性 PCM), 位深 8/16/24/32.
//! 读取方向逐声道产出 [`Pcm`] 缓冲; 写入方向把等长同采样率的
//! 多个声道交错写出, 返回写入的总字节数.

use log::{debug, warn};

use bo_core::{BoError, BoResult, Pcm};

use crate::io::IoContext;

/// WAV 音频格式码: PCM 整数
const WAVE_FORMAT_PCM: u16 = 0x0001;

/// 读写数据块时的 I/O 缓冲大小 (字节)
const IO_BUFFER_SIZE: usize = 0x1000;

/// fmt 块内容
#[derive(Debug, Clone, Copy)]
struct FmtChunk {
    channels: u16,
    sample_rate: u32,
    block_size: u16,
    bits_per_sample: u16,
}

fn must_be_nonzero(value: u32, memb: &str) -> BoResult<()> {
    if value == 0 {
        return Err(BoError::InvalidData(format!("'{memb}' 必须为非零")));
    }
    Ok(())
}

/// 解析并校验 fmt 块.
///
/// 结构性校验全部在此完成: 字段非零, 块大小与字节率的算术一致性,
/// 位深受支持. 任何不一致立即报错, 不做静默修正.
fn parse_fmt_chunk(io: &mut IoContext, chunk_size: u32) -> BoResult<FmtChunk> {
    if chunk_size < 16 {
        return Err(BoError::InvalidData("fmt 块大小不足 16 字节".into()));
    }

    let format_tag = io.read_u16_le()?;
    if format_tag != WAVE_FORMAT_PCM {
        return Err(BoError::Unsupported(format!(
            "非线性 PCM 格式码: 0x{format_tag:04X}"
        )));
    }

    let channels = io.read_u16_le()?;
    must_be_nonzero(u32::from(channels), "channels")?;

    let sample_rate = io.read_u32_le()?;
    must_be_nonzero(sample_rate, "sample_rate")?;

    let byte_rate = io.read_u32_le()?;
    must_be_nonzero(byte_rate, "byte_rate")?;

    let block_size = io.read_u16_le()?;
    must_be_nonzero(u32::from(block_size), "block_size")?;

    let bits_per_sample = io.read_u16_le()?;
    must_be_nonzero(u32::from(bits_per_sample), "bits_per_sample")?;

    if u32::from(bits_per_sample) / 8 * u32::from(channels) != u32::from(block_size) {
        return Err(BoError::InvalidData("'block_size' 不匹配".into()));
    }
    if sample_rate.wrapping_mul(u32::from(block_size)) != byte_rate {
        return Err(BoError::InvalidData("'byte_rate' 不匹配".into()));
    }
    if !matches!(bits_per_sample, 8 | 16 | 24 | 32) {
        return Err(BoError::Unsupported(format!(
            "不支持的位深: {bits_per_sample} (格式码: {format_tag})"
        )));
    }

    // 跳过 fmt 块的扩展部分
    if chunk_size > 16 {
        io.skip((chunk_size - 16) as usize)?;
    }

    debug!(
        "fmt: channels={}, rate={}, block_size={}, bits={}",
        channels, sample_rate, block_size, bits_per_sample,
    );

    Ok(FmtChunk {
        channels,
        sample_rate,
        block_size,
        bits_per_sample,
    })
}

/// 从 WAVE 容器读取线性 PCM, 每声道一个 [`Pcm`] 缓冲.
///
/// fmt 与 data 之间的未知块跳过并告警; 结构不合法 (魔数错误,
/// 字段算术不一致, data 先于 fmt, 位深不受支持等) 立即报错.
pub fn read_linear_pcm(io: &mut IoContext) -> BoResult<Vec<Pcm>> {
    // RIFF 头
    let riff_tag = io.read_tag()?;
    if &riff_tag != b"RIFF" {
        return Err(BoError::InvalidData("不是有效的 RIFF 文件".into()));
    }
    let _riff_size = io.read_u32_le()?;
    let wave_tag = io.read_tag()?;
    if &wave_tag != b"WAVE" {
        return Err(BoError::InvalidData("不是有效的 WAVE 文件".into()));
    }

    debug!("检测到 RIFF/WAVE 文件");

    // 逐块解析, 直到 data 块
    let mut fmt: Option<FmtChunk> = None;
    loop {
        let chunk_id = match io.read_tag() {
            Ok(tag) => tag,
            Err(BoError::Eof) => {
                return Err(BoError::InvalidData("未找到 data 块".into()));
            }
            Err(e) => return Err(e),
        };
        let chunk_size = io.read_u32_le()?;

        match &chunk_id {
            b"fmt " => {
                fmt = Some(parse_fmt_chunk(io, chunk_size)?);
            }
            b"data" => {
                let fmt = fmt.ok_or_else(|| {
                    BoError::InvalidData("data 块出现在 fmt 块之前".into())
                })?;
                let offset = io.position().unwrap_or(0);
                debug!("data: offset={}, size={}", offset, chunk_size);
                return read_data_chunk(io, &fmt, chunk_size);
            }
            _ => {
                warn!(
                    "跳过未知块: '{}', 大小={}",
                    String::from_utf8_lossy(&chunk_id),
                    chunk_size
                );
                io.skip(chunk_size as usize)?;
            }
        }

        // 块要求偶数对齐, 奇数大小跳过 1 个填充字节
        if chunk_size % 2 != 0 {
            io.skip(1)?;
        }
    }
}

/// 读取 data 块并解交错到各声道缓冲.
fn read_data_chunk(io: &mut IoContext, fmt: &FmtChunk, data_size: u32) -> BoResult<Vec<Pcm>> {
    let block = fmt.block_size as usize;
    if data_size as usize % block != 0 {
        return Err(BoError::InvalidData(
            "'data_size' 不是 'block_size' 的整数倍".into(),
        ));
    }

    let length = data_size as usize / block;
    let channels = fmt.channels as usize;
    let bytes_per = (fmt.bits_per_sample / 8) as usize;
    let decode = decoder_for(fmt.bits_per_sample)?;

    let mut pcms = Vec::with_capacity(channels);
    for _ in 0..channels {
        pcms.push(Pcm::new(length, fmt.sample_rate)?);
    }

    // 按对齐到整块的缓冲大小分段读取
    let buffer_size = (IO_BUFFER_SIZE / block).max(1) * block;
    let mut remaining = data_size as usize;
    let mut idx = 0;
    while remaining > 0 {
        let to_read = buffer_size.min(remaining);
        let buf = io.read_bytes(to_read)?;
        for frame in buf.chunks_exact(block) {
            for (ch, pcm) in pcms.iter_mut().enumerate() {
                let off = ch * bytes_per;
                pcm[idx] = decode(&frame[off..off + bytes_per]);
            }
            idx += 1;
        }
        remaining -= to_read;
    }

    debug!(
        "WAV 读取完成: {} Hz, {} 声道, {} 位, 采样数={}",
        fmt.sample_rate, fmt.channels, fmt.bits_per_sample, length,
    );

    Ok(pcms)
}

/// 把多个声道的 PCM 缓冲以指定位深写出为 WAVE 容器.
///
/// 各声道必须等长且同采样率. data 块大小为奇数时补 1 个零字节
/// (大小字段记录补齐前的真实长度). 返回写入的总字节数.
pub fn write_linear_pcm(io: &mut IoContext, channels: &[Pcm], bits: u16) -> BoResult<u64> {
    if channels.is_empty() {
        return Err(BoError::InvalidArgument("至少需要一个声道".into()));
    }
    if channels.len() > usize::from(u16::MAX) {
        return Err(BoError::InvalidArgument("声道数超出 WAVE 容量".into()));
    }
    let sample_rate = channels[0].sample_rate();
    let length = channels[0].len();
    for (i, ch) in channels.iter().enumerate() {
        if ch.sample_rate() != sample_rate {
            return Err(BoError::InvalidArgument(format!(
                "声道 {i} 的采样率不一致: {} != {}",
                ch.sample_rate(),
                sample_rate
            )));
        }
        if ch.len() != length {
            return Err(BoError::InvalidArgument(format!(
                "声道 {i} 的长度不一致: {} != {}",
                ch.len(),
                length
            )));
        }
    }

    let encode = encoder_for(bits)?;
    let bytes_per = (bits / 8) as usize;
    let block = bytes_per * channels.len();
    let data_size = length as u64 * block as u64;
    let pad = data_size % 2;
    if 36 + data_size + pad > u64::from(u32::MAX) {
        return Err(BoError::InvalidArgument("数据总量超出 RIFF 容量".into()));
    }

    let byte_rate = sample_rate * block as u32;

    // RIFF 头
    io.write_tag(b"RIFF")?;
    io.write_u32_le(36 + data_size as u32 + pad as u32)?;
    io.write_tag(b"WAVE")?;

    // fmt 块
    io.write_tag(b"fmt ")?;
    io.write_u32_le(16)?;
    io.write_u16_le(WAVE_FORMAT_PCM)?;
    io.write_u16_le(channels.len() as u16)?;
    io.write_u32_le(sample_rate)?;
    io.write_u32_le(byte_rate)?;
    io.write_u16_le(block as u16)?;
    io.write_u16_le(bits)?;

    // data 块
    io.write_tag(b"data")?;
    io.write_u32_le(data_size as u32)?;

    // 按对齐到整块的缓冲大小分段交错写出
    let frames_per_buf = (IO_BUFFER_SIZE / block).max(1);
    let mut buf = vec![0u8; frames_per_buf * block];
    let mut idx = 0;
    while idx < length {
        let frames = frames_per_buf.min(length - idx);
        for f in 0..frames {
            for (ch, pcm) in channels.iter().enumerate() {
                let off = f * block + ch * bytes_per;
                encode(pcm[idx + f], &mut buf[off..off + bytes_per]);
            }
        }
        io.write_all(&buf[..frames * block])?;
        idx += frames;
    }

    if pad != 0 {
        io.write_u8(0)?;
    }

    let total = 44 + data_size + pad;
    debug!(
        "WAV 写入完成: {} Hz, {} 声道, {} 位, 共 {} 字节",
        sample_rate,
        channels.len(),
        bits,
        total,
    );

    Ok(total)
}

/// 从文件读取 WAVE 线性 PCM.
pub fn read_wave_file(path: &str) -> BoResult<Vec<Pcm>> {
    let mut io = IoContext::open_read(path)?;
    read_linear_pcm(&mut io)
}

/// 把声道缓冲写入 WAVE 文件, 返回写入的总字节数.
pub fn write_wave_file(path: &str, channels: &[Pcm], bits: u16) -> BoResult<u64> {
    let mut io = IoContext::open_write(path)?;
    write_linear_pcm(&mut io, channels, bits)
}

// ========================
// 采样归一化
// ========================

/// 按位深选择解码函数 (整型采样 → f64)
fn decoder_for(bits: u16) -> BoResult<fn(&[u8]) -> f64> {
    match bits {
        8 => Ok(decode_8bit),
        16 => Ok(decode_16bit),
        24 => Ok(decode_24bit),
        32 => Ok(decode_32bit),
        _ => Err(BoError::Unsupported(format!("不支持的位深: {bits}"))),
    }
}

/// 按位深选择编码函数 (f64 → 整型采样)
fn encoder_for(bits: u16) -> BoResult<fn(f64, &mut [u8])> {
    match bits {
        8 => Ok(encode_8bit),
        16 => Ok(encode_16bit),
        24 => Ok(encode_24bit),
        32 => Ok(encode_32bit),
        _ => Err(BoError::Unsupported(format!("不支持的位深: {bits}"))),
    }
}

/// 8 位: 偏移二进制, 减 0x80 后以 1/128 归一化
fn decode_8bit(buf: &[u8]) -> f64 {
    f64::from(i32::from(buf[0]) - 0x80) / 128.0
}

/// 16 位: 有符号小端, 1/32768
fn decode_16bit(buf: &[u8]) -> f64 {
    f64::from(i16::from_le_bytes([buf[0], buf[1]])) / 32768.0
}

/// 24 位: 有符号小端 3 字节, 符号扩展后 1/8388608
fn decode_24bit(buf: &[u8]) -> f64 {
    let mut v = i32::from(buf[0]) | (i32::from(buf[1]) << 8) | (i32::from(buf[2]) << 16);
    if v & 0x80_0000 != 0 {
        v -= 0x100_0000;
    }
    f64::from(v) / 8388608.0
}

/// 32 位: 有符号小端, 1/2147483648
fn decode_32bit(buf: &[u8]) -> f64 {
    f64::from(i32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]])) / 2147483648.0
}

/// 量化归一: NaN 置零, 放大后截断到可表示整数范围.
fn digitize(x: f64, min: f64, max: f64, rate: f64) -> f64 {
    let x = if x.is_nan() { 0.0 } else { x };
    (x * rate).clamp(min, max)
}

fn encode_8bit(s: f64, buf: &mut [u8]) {
    let d = digitize(s, -128.0, 127.0, 128.0);
    buf[0] = (d as i32 + 0x80) as u8;
}

fn encode_16bit(s: f64, buf: &mut [u8]) {
    let d = digitize(s, -32768.0, 32767.0, 32768.0) as i16;
    buf.copy_from_slice(&d.to_le_bytes());
}

fn encode_24bit(s: f64, buf: &mut [u8]) {
    let d = digitize(s, -8388608.0, 8388607.0, 8388608.0) as i32;
    buf[0] = (d & 0xFF) as u8;
    buf[1] = ((d >> 8) & 0xFF) as u8;
    buf[2] = ((d >> 16) & 0xFF) as u8;
}

fn encode_32bit(s: f64, buf: &mut [u8]) {
    let d = digitize(s, -2147483648.0, 2147483647.0, 2147483648.0) as i32;
    buf.copy_from_slice(&d.to_le_bytes());
}

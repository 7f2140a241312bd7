//! Bo 波形处理库性能基准测试.
//!
//! 覆盖窗函数生成与 WAVE 容器读写两条核心路径.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::io::SeekFrom;

use bo::core::Pcm;
use bo::dsp::window::{self, WindowKind};
use bo::format::{IoContext, MemoryBackend, read_linear_pcm, write_linear_pcm};

fn bench_window_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_generate");
    for len in [256usize, 2048, 16384] {
        group.bench_function(format!("hann_{len}"), |b| {
            b.iter(|| window::generate(black_box(WindowKind::Hann), black_box(len)).unwrap());
        });
        group.bench_function(format!("blackman_harris_{len}"), |b| {
            b.iter(|| {
                window::generate(black_box(WindowKind::BlackmanHarris), black_box(len)).unwrap()
            });
        });
        group.bench_function(format!("kaiser_{len}"), |b| {
            b.iter(|| window::generate(black_box(WindowKind::Kaiser), black_box(len)).unwrap());
        });
        group.bench_function(format!("kbd_{len}"), |b| {
            b.iter(|| {
                window::generate(black_box(WindowKind::KbdWith { alpha: 4.0 }), black_box(len))
                    .unwrap()
            });
        });
    }
    group.finish();
}

fn bench_bessel_i0(c: &mut Criterion) {
    c.bench_function("bessel_i0_sweep", |b| {
        b.iter(|| {
            let mut sum = 0.0f64;
            for i in 0..100 {
                sum += bo::dsp::bessel::bessel_i0(black_box(i as f64 * 0.5));
            }
            sum
        });
    });
}

fn bench_wave_roundtrip(c: &mut Criterion) {
    // 双声道 1 秒 48kHz 正弦
    let left = Pcm::from_fn(48000, 48000, |n| {
        (2.0 * std::f64::consts::PI * 440.0 * n as f64 / 48000.0).sin() * 0.8
    })
    .unwrap();
    let right = left.clone();
    let channels = [left, right];

    c.bench_function("wave_write_stereo_48k_s16", |b| {
        b.iter(|| {
            let mut io = IoContext::new(Box::new(MemoryBackend::new()));
            write_linear_pcm(&mut io, black_box(&channels), 16).unwrap()
        });
    });

    let mut io = IoContext::new(Box::new(MemoryBackend::new()));
    write_linear_pcm(&mut io, &channels, 16).unwrap();
    io.seek(SeekFrom::Start(0)).unwrap();
    let wav_data = {
        let size = io.size().unwrap() as usize;
        io.read_bytes(size).unwrap()
    };

    c.bench_function("wave_read_stereo_48k_s16", |b| {
        b.iter(|| {
            let mut io = IoContext::new(Box::new(MemoryBackend::from_data(wav_data.clone())));
            read_linear_pcm(&mut io).unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_window_generation,
    bench_bessel_i0,
    bench_wave_roundtrip
);
criterion_main!(benches);

//! Performance benchmarks for HU01 decoding.
//!
//! Covers decode-table construction and end-to-end stream decompression
//! for both entropy-coded and stored blocks.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use hu01::table::{DESCRIPTOR_LEN, TABLE_SIZE, build_decode_table};
use hu01::{Hu01Decompressor, PushDecompressor};
use hu01_core::crc::Crc32;
use std::hint::black_box;

/// Descriptor giving every symbol a 9-bit code (code of symbol s is s).
fn uniform_descriptor() -> Vec<u8> {
    vec![0x99; DESCRIPTOR_LEN]
}

/// Descriptor with lengths 1..=10, 11, 12, 12: exercises the secondary
/// tree construction.
fn staircase_descriptor() -> Vec<u8> {
    let mut descriptor = vec![0u8; DESCRIPTOR_LEN];
    let lengths = [1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 12];
    for (symbol, &length) in lengths.iter().enumerate() {
        descriptor[symbol >> 1] |= if symbol & 1 != 0 {
            length << 4
        } else {
            length
        };
    }
    descriptor
}

fn frame_block(decompressed_size: u32, crc: u32, payload: &[u8]) -> Vec<u8> {
    let mut block = Vec::with_capacity(20 + payload.len());
    block.extend_from_slice(b"SCBH");
    block.extend_from_slice(&20u32.to_le_bytes());
    block.extend_from_slice(&decompressed_size.to_le_bytes());
    block.extend_from_slice(&crc.to_le_bytes());
    block.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    block.extend_from_slice(payload);
    block
}

fn file_header(declared_size: u32) -> Vec<u8> {
    let mut header = vec![0u8; 40];
    header[0..4].copy_from_slice(b"HU01");
    header[4..8].copy_from_slice(&40u32.to_le_bytes());
    header[32..36].copy_from_slice(&declared_size.to_le_bytes());
    header
}

/// Literal-only entropy-coded stream under the uniform descriptor: each
/// plaintext byte becomes its own 9-bit code, packed MSB-first into
/// little-endian 16-bit words.
fn literal_stream(plain: &[u8]) -> Vec<u8> {
    let mut words = Vec::new();
    let mut acc = 0u32;
    let mut filled = 0u32;
    for &byte in plain {
        for i in (0..9u32).rev() {
            acc = (acc << 1) | ((byte as u32 >> i) & 1);
            filled += 1;
            if filled == 16 {
                words.extend_from_slice(&(acc as u16).to_le_bytes());
                acc = 0;
                filled = 0;
            }
        }
    }
    if filled > 0 {
        words.extend_from_slice(&((acc << (16 - filled)) as u16).to_le_bytes());
    }
    words.extend_from_slice(&[0, 0, 0, 0]);

    let mut payload = uniform_descriptor();
    payload.extend_from_slice(&words);
    let mut stream = file_header(plain.len() as u32);
    stream.extend_from_slice(&frame_block(
        plain.len() as u32,
        Crc32::compute(plain),
        &payload,
    ));
    stream
}

/// Stream of stored blocks, 1 KB each.
fn raw_stream(total: usize) -> Vec<u8> {
    let chunk = vec![0x5Au8; 1024];
    let crc = Crc32::compute(&chunk);
    let mut stream = file_header(total as u32);
    for _ in 0..total / 1024 {
        stream.extend_from_slice(&frame_block(1024, crc, &chunk));
    }
    stream
}

fn text_like(size: usize) -> Vec<u8> {
    let text = b"From: someone@example.com\r\nSubject: benchmark payload\r\n\r\n";
    let mut data = Vec::with_capacity(size);
    while data.len() < size {
        let remaining = size - data.len();
        data.extend_from_slice(&text[..remaining.min(text.len())]);
    }
    data
}

fn bench_table_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_build");

    let descriptors = [
        ("uniform", uniform_descriptor()),
        ("staircase", staircase_descriptor()),
    ];

    for (name, descriptor) in descriptors {
        let mut table = vec![0u16; TABLE_SIZE];
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &descriptor,
            |b, descriptor| {
                b.iter(|| {
                    build_decode_table(black_box(descriptor), &mut table)
                        .expect("descriptor rejected");
                    black_box(&table);
                });
            },
        );
    }

    group.finish();
}

fn bench_decompress_literals(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompress_literals");

    for size in [1024, 16 * 1024, 64 * 1024] {
        let plain = text_like(size);
        let stream = literal_stream(&plain);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}B", size)),
            &stream,
            |b, stream| {
                b.iter(|| {
                    let mut decoder = Hu01Decompressor::new();
                    let out = decoder
                        .decompress_all(black_box(stream))
                        .expect("decode failed");
                    black_box(out);
                });
            },
        );
    }

    group.finish();
}

fn bench_decompress_raw_blocks(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompress_raw_blocks");

    let size = 64 * 1024;
    let stream = raw_stream(size);

    group.throughput(Throughput::Bytes(size as u64));
    group.bench_with_input(BenchmarkId::from_parameter("64KB"), &stream, |b, stream| {
        b.iter(|| {
            let mut decoder = Hu01Decompressor::new();
            let out = decoder
                .decompress_all(black_box(stream))
                .expect("decode failed");
            black_box(out);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_table_build,
    bench_decompress_literals,
    bench_decompress_raw_blocks,
);
criterion_main!(benches);

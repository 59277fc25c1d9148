//! Performance benchmarks for ferro-sv
//!
//! Run with: cargo bench
//! Run specific benchmark: cargo bench -- overlap

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ferro_sv::annotate::{match_alignments, match_catalog};
use ferro_sv::catalog::Catalog;
use ferro_sv::interval::Position;
use ferro_sv::liftover::{AlignmentFile, AlternativeMapping, LiftoverData};
use ferro_sv::smap::SmapDataset;

// =============================================================================
// Synthetic data
// =============================================================================

/// Direct records tiling chromosomes 1-22, with every tenth record empty
fn alignments(per_chromosome: usize) -> String {
    let mut rows = String::new();
    for chr in 1..=22 {
        for i in 0..per_chromosome {
            let start = i * 10_000 + 1;
            let end = start + 9_999;
            if i % 10 == 9 {
                rows.push_str(&format!("E\tchr{}:{}-{}\n", chr, start, end));
            } else {
                rows.push_str(&format!(
                    "S\tchr{}:{}-{}\tchr{}:{}-{}\n",
                    chr,
                    start,
                    end,
                    chr,
                    start + 500,
                    end + 500
                ));
            }
        }
    }
    rows
}

fn catalog(per_chromosome: usize) -> String {
    let mut rows = String::new();
    for chr in 1..=22 {
        for i in 0..per_chromosome {
            let start = i * 50_000 + 20_000;
            rows.push_str(&format!(
                "DEL;chr{}:{}-{};chr{}:{}-{}\n",
                chr,
                start,
                start + 300,
                chr,
                start + 500,
                start + 600
            ));
        }
    }
    rows
}

fn smap(rows: usize) -> String {
    let mut content = String::from("# SMAP File Version:\t0.0.1\n");
    for id in 0..rows {
        let chr = id % 22 + 1;
        let start = (id * 7_919) % 5_000_000;
        content.push_str(&format!(
            "{}\t1\t{}\t{}\t0\t0\t{}.0\t{}.0\t0\tdeletion\t0\t0\t-1\n",
            id + 1,
            chr,
            chr,
            start,
            start + 2_000
        ));
    }
    content
}

fn queries() -> Vec<Position> {
    (0..100)
        .map(|i| format!("chr{}:{}-{}", i % 22 + 1, i * 37_000, i * 37_000 + 25_000))
        .map(|s| s.parse().unwrap())
        .collect()
}

// =============================================================================
// Overlap scans
// =============================================================================

fn bench_overlap(c: &mut Criterion) {
    let queries = queries();
    let mut group = c.benchmark_group("overlap");
    group.throughput(Throughput::Elements(queries.len() as u64));

    for size in [100usize, 1_000] {
        let data = LiftoverData::new(
            AlignmentFile::parse(alignments(size).as_bytes(), "bench").unwrap(),
            vec!["chr1:600-900".parse().unwrap()],
            vec![AlternativeMapping {
                source: "chr2:1000-2000".parse().unwrap(),
                first: "chr7:1-1001".parse().unwrap(),
                second: "chr2:5000-6000".parse().unwrap(),
            }],
        );
        let catalog = Catalog::parse(catalog(size / 5).as_bytes(), "bench").unwrap();

        group.bench_with_input(BenchmarkId::new("alignments", size), &data, |b, data| {
            b.iter(|| {
                for query in &queries {
                    black_box(match_alignments(black_box(query), data).unwrap());
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("catalog", size), &catalog, |b, catalog| {
            b.iter(|| {
                for query in &queries {
                    black_box(match_catalog(black_box(query), catalog));
                }
            })
        });
    }

    group.finish();
}

// =============================================================================
// Parsing
// =============================================================================

fn bench_smap_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("smap_parse");

    for rows in [1_000usize, 10_000] {
        let content = smap(rows);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &content, |b, content| {
            b.iter(|| SmapDataset::parse(black_box(content.as_bytes()), "bench", 10_000.0).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_overlap, bench_smap_parse);
criterion_main!(benches);

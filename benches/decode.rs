use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use scorefeed::feed::decode;
use scorefeed::stats;

fn synthetic_stats_feed(rows: usize) -> String {
    let mut out = String::from("SE÷Match~");
    for row in 0..rows {
        out.push_str(&format!("SG÷Metric {row}¬SH÷{row}¬SI÷{}~", row * 2));
        if row % 40 == 0 {
            out.push_str("SE÷1st Half~");
        }
    }
    out.push_str("A1÷~");
    out
}

fn bench_decode(c: &mut Criterion) {
    let payload = synthetic_stats_feed(200);
    c.bench_function("decode_stats_feed", |b| {
        b.iter(|| {
            let records = decode(black_box(&payload)).unwrap();
            black_box(records.len());
        })
    });
}

fn bench_stats_parse(c: &mut Criterion) {
    let payload = synthetic_stats_feed(200);
    let records = decode(&payload).unwrap();
    c.bench_function("stats_parse", |b| {
        b.iter(|| {
            let parsed = stats::parse(black_box(&records)).unwrap();
            black_box(parsed.match_totals.len());
        })
    });
}

criterion_group!(benches, bench_decode, bench_stats_parse);
criterion_main!(benches);

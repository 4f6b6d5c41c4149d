use criterion::{black_box, criterion_group, criterion_main, Criterion};
use icmp_stats::icmpv4::*;
use icmp_stats::Cursor;

fn record_fields(buf: &[u8]) {
    let record = Icmpv4StatsRecord::parse(Cursor::new(buf)).unwrap();
    assert!(record.in_msgs().raw() > 0);
    assert!(record.out_msgs().raw() > 0);
    assert!(record.in_echos().raw() > 0);
    assert!(record.out_echo_reps().raw() > 0);
}

fn record_to_stats(buf: &[u8]) {
    let record = Icmpv4StatsRecord::parse(Cursor::new(buf)).unwrap();
    let stats = record.to_stats();
    assert!(stats.in_msgs.raw() > 0);
}

fn bench(c: &mut Criterion) {
    let mut image = [0u8; ICMPV4_STATS_RECORD_LEN];
    for (i, b) in image.iter_mut().enumerate() {
        *b = (i + 1) as u8;
    }

    c.bench_function("record fields", |b| {
        b.iter(|| record_fields(black_box(&image[..])))
    });
    c.bench_function("record to stats", |b| {
        b.iter(|| record_to_stats(black_box(&image[..])))
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);

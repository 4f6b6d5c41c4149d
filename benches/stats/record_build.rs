use criterion::{black_box, criterion_group, criterion_main, Criterion};
use icmp_stats::icmpv4::*;
use icmp_stats::Counter;

fn record_build(image: &mut [u8; ICMPV4_STATS_RECORD_LEN], stats: &Icmpv4Stats) {
    let mut record = Icmpv4StatsRecord::from_record_array_mut(image);
    record.set_stats(stats);
}

fn bench(c: &mut Criterion) {
    let mut stats = Icmpv4Stats::new();
    stats.in_msgs = Counter::new(1000);
    stats.in_echos = Counter::new(600);
    stats.out_msgs = Counter::new(990);
    stats.out_echo_reps = Counter::new(600);

    c.bench_function("record build", |b| {
        let mut image = ICMPV4_STATS_RECORD_TEMPLATE;
        b.iter(|| {
            record_build(black_box(&mut image), &stats);
            assert_eq!(image[7], 0xe8);
        })
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);

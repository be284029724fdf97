use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tupdb_codec::{pack, unpack, Value};

fn sample_key() -> Vec<Value> {
    vec![
        Value::from(42i64),
        Value::from(-7i64),
        Value::from("hello, world"),
        Value::from(vec![0u8, 1, 2, 3, 4, 5, 6, 7]),
        Value::from(true),
    ]
}

fn bench_pack(c: &mut Criterion) {
    let key = sample_key();
    c.bench_function("pack tuple", |b| {
        b.iter(|| pack(b"", black_box(key.clone())).unwrap())
    });
}

fn bench_unpack(c: &mut Criterion) {
    let key = sample_key();
    let bytes = pack(b"", key).unwrap();
    c.bench_function("unpack tuple", |b| {
        b.iter(|| unpack(b"", &bytes).unwrap().unwrap())
    });
}

criterion_group!(benches, bench_pack, bench_unpack);
criterion_main!(benches);

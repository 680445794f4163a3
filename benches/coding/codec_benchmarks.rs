use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gf2codes::coding::{BlockCode, Code, CodeSpec};
use gf2codes::config::{EngineConfig, MinimalPolynomialSource};
use gf2codes::gf2::BitVector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_words(count: usize, len: usize, seed: u64) -> Vec<BitVector> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (0..len).map(|_| rng.gen_bool(0.5)).collect())
        .collect()
}

fn specs() -> [CodeSpec; 4] {
    [
        CodeSpec::ParityCheck { k: 26 },
        CodeSpec::Cyclic { k: 11, t: 1 },
        CodeSpec::Bch { k: 7, s: 2 },
        CodeSpec::Bch { k: 16, s: 3 },
    ]
}

fn construction_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for spec in specs().iter() {
        group.bench_with_input(
            BenchmarkId::new("build", format!("{:?}", spec)),
            spec,
            |b, &spec| b.iter(|| Code::new(spec)),
        );
    }

    // (127, 64) needs P15 and P17, which only the derived table has
    let config = EngineConfig::default().with_minimal_polynomials(MinimalPolynomialSource::Derived);
    group.bench_function("build_bch_127", |b| {
        b.iter(|| Code::with_config(CodeSpec::Bch { k: 64, s: 10 }, &config))
    });

    group.finish();
}

fn codec_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    for spec in specs().iter() {
        let code = Code::new(*spec).unwrap();
        let params = *code.parameters();
        let words = random_words(1, params.info_len(), 1);
        let codeword = code.encode(&words[0]).unwrap();
        let mut received = codeword.bits().clone();
        received.flip(params.n() / 2);

        group.bench_with_input(
            BenchmarkId::new("encode", code.to_string()),
            &words[0],
            |b, info| b.iter(|| code.encode(info)),
        );
        group.bench_with_input(
            BenchmarkId::new("decode_single_error", code.to_string()),
            &received,
            |b, received| b.iter(|| code.decode(received)),
        );
    }

    group.finish();
}

fn batch_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let code = Code::new(CodeSpec::Bch { k: 16, s: 3 }).unwrap();
    let words = random_words(4096, 16, 7);
    let encoded: Vec<BitVector> = code
        .encode_batch(&words)
        .unwrap()
        .into_iter()
        .map(|c| c.into_bits())
        .collect();

    group.bench_function("encode_sequential", |b| {
        b.iter(|| words.iter().map(|w| code.encode(w)).collect::<Vec<_>>())
    });
    group.bench_function("encode_parallel", |b| b.iter(|| code.encode_batch(&words)));
    group.bench_function("decode_sequential", |b| {
        b.iter(|| encoded.iter().map(|w| code.decode(w)).collect::<Vec<_>>())
    });
    group.bench_function("decode_parallel", |b| b.iter(|| code.decode_batch(&encoded)));

    group.finish();
}

criterion_group!(
    benches,
    construction_benchmarks,
    codec_benchmarks,
    batch_benchmarks
);
criterion_main!(benches);

use ciminion::{
    field::{Bn254Fr, Gf2_64},
    pattern::{patterned_elements, patterned_key},
    presets, Ciminion, CiminionParams, FieldElement, MasterKey, Sealed,
};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn bench_engine<F: FieldElement>(c: &mut Criterion, name: &str, engine: &Ciminion<F>) {
    let key: MasterKey<F> = patterned_key(11, 7);
    let nonce = patterned_elements::<F>(1, 0, 42)[0];

    c.bench_function(&format!("{name}/encrypt_single_element"), |b| {
        let message = patterned_elements::<F>(1, 5, 3);
        b.iter(|| black_box(engine.encrypt(&key, nonce, black_box(&message))));
    });

    for len in [16usize, 256] {
        c.bench_with_input(
            BenchmarkId::new(format!("{name}/encrypt"), len),
            &len,
            |b, &len| {
                let message = patterned_elements::<F>(len, 5, 3);
                b.iter(|| black_box(engine.encrypt(&key, nonce, black_box(&message))));
            },
        );
    }

    c.bench_with_input(
        BenchmarkId::new(format!("{name}/open_all"), 16usize),
        &16usize,
        |b, &tiles| {
            let sealed: Vec<Sealed<F>> = (0..tiles as u64)
                .map(|i| {
                    // Distinct nonce and content per tile.
                    let nonce = patterned_elements::<F>(1, 0, i)[0];
                    engine.seal(&key, nonce, &patterned_elements::<F>(64, 5 + i, 3))
                })
                .collect();
            b.iter(|| black_box(engine.open_all(&key, black_box(&sealed))));
        },
    );
}

fn bench_ciminion(c: &mut Criterion) {
    let bn254 = presets::bn254().expect("bn254 preset");
    let gf2 = presets::gf2_64().expect("gf2-64 preset");

    bench_engine::<Bn254Fr>(c, "bn254", bn254);
    bench_engine::<Gf2_64>(c, "gf2_64", gf2);

    c.bench_function("bn254/derive_engine", |b| {
        b.iter_batched(
            || CiminionParams::DEFAULT,
            |params| black_box(Ciminion::<Bn254Fr>::new(params)),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_ciminion);
criterion_main!(benches);

extern crate criterion;

use self::criterion::*;
use huffcode::huffman_codes;
use huffcode::parse_letters;
use huffcode::Alphabet;

fn alphabet(c: &mut Criterion) {
    let mut group = c.benchmark_group("alphabet");
    let default_alphabet = Alphabet::default();
    group.bench_function("huffman_codes_default", |b| {
        b.iter(|| huffman_codes(&default_alphabet).unwrap());
    });
    group.bench_function("parse_and_build", |b| {
        b.iter(|| {
            let letters = parse_letters("q,w,e,r,t,y,u,i,o,p").unwrap();
            let alphabet =
                Alphabet::from_partial_frequencies(&letters, &[9, 8, 7, 6, 5, 4, 3, 2, 1])
                    .unwrap();
            huffman_codes(&alphabet).unwrap()
        });
    });
    group.finish();
}

criterion_group!(benches, alphabet);
criterion_main!(benches);

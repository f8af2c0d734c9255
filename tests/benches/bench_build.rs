use criterion::{Criterion, black_box, criterion_group, criterion_main};
use iregex::{
    CompileCache, CompileOptions, Regex, alternate,
    consts::{DIGIT, LETTER, WORD},
};

pub fn concat_1000(c: &mut Criterion) {
    c.bench_function("concat 1000", |b| {
        b.iter(|| {
            let mut re = Regex::new();
            for i in 0..1000 {
                re = re.concat(black_box(if i % 2 == 0 { "a" } else { "b" })).unwrap();
            }
            black_box(re.render())
        });
    });
}

pub fn alternate_100(c: &mut Criterion) {
    let words = (0..100).map(|i| format!("word{i}")).collect::<Vec<_>>();
    c.bench_function("alternate 100", |b| {
        b.iter(|| {
            let mut re = Regex::literal(&words[0]);
            for word in &words[1..] {
                re = alternate(re, word).unwrap();
            }
            black_box(re)
        });
    });
}

pub fn build_date(c: &mut Criterion) {
    c.bench_function("build date pattern", |b| {
        b.iter(|| {
            let date = DIGIT
                .exactly(4)
                .and_then(|y| y.to_named_capture_group("year"))
                .and_then(|y| y.concat("-"))
                .and_then(|y| y.concat(DIGIT.exactly(2)?.to_named_capture_group("month")?))
                .and_then(|y| y.concat("-"))
                .and_then(|y| y.concat(DIGIT.exactly(2)?.to_named_capture_group("day")?))
                .unwrap();
            black_box(date)
        });
    });
}

pub fn compile_cached(c: &mut Criterion) {
    let cache = CompileCache::new();
    let options = CompileOptions::default();
    let re = LETTER
        .concat(WORD.zero_or_more().unwrap())
        .and_then(|re| re.to_named_capture_group("ident"))
        .unwrap();
    c.bench_function("compile uncached", |b| {
        b.iter(|| black_box(re.compile_with(&options)).unwrap());
    });
    c.bench_function("compile cached", |b| {
        b.iter(|| black_box(cache.get_or_compile(&re, &options)).unwrap());
    });
}

criterion_group!(
    bench_build,
    concat_1000,
    alternate_100,
    build_date,
    compile_cached
);
criterion_main!(bench_build);

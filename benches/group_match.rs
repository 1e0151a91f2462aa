use acbs_utils::{group_match, Logic, PatternGroup};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn create_package_names(count: usize) -> Vec<String> {
    let prefixes = vec![
        "lib", "python-", "perl-", "rust-", "go-", "font-", "xorg-", "kde-", "gnome-", "",
    ];

    (0..count)
        .map(|i| format!("{}pkg{}", prefixes[i % prefixes.len()], i))
        .collect()
}

fn benchmark_group_match(c: &mut Criterion) {
    let names = create_package_names(10_000);
    let patterns = ["python-.*", "perl-.*", "rust-.*", "lib.*"];

    let mut group = c.benchmark_group("group_match");

    // Patterns compiled on every call
    group.bench_function("or_uncompiled", |b| {
        b.iter(|| {
            let hits = names
                .iter()
                .filter(|n| group_match(&patterns, black_box(n), Logic::Or).unwrap_or(false))
                .count();
            assert!(hits > 0);
        });
    });

    // Patterns compiled once up front
    group.bench_function("or_precompiled", |b| {
        let compiled = PatternGroup::new(&patterns).unwrap();
        b.iter(|| {
            let hits = names
                .iter()
                .filter(|n| compiled.matches(black_box(n), Logic::Or))
                .count();
            assert!(hits > 0);
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_group_match);
criterion_main!(benches);

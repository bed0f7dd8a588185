use criterion::{black_box, criterion_group, criterion_main, Criterion};
use parity_core::config::FailurePolicy;
use parity_core::traits::DynamicGroup;
use parity_core::{SymbolPath, SymbolTable};
use parity_engine::{MappingRegistry, ParityChecker};

const GROUPS: usize = 50;
const MEMBERS: usize = 8;

fn fixture() -> (SymbolTable, MappingRegistry) {
    let mut table = SymbolTable::new();
    let mut builder = MappingRegistry::builder().namespace(SymbolPath::parse("bench").unwrap());
    for g in 0..GROUPS {
        let name = format!("Group{g}");
        let mut group = DynamicGroup::new(SymbolPath::parse(&format!("bench::{name}")).unwrap());
        for m in 0..MEMBERS {
            let value = (g * MEMBERS + m) as i64;
            group = group.with_value(format!("Member{m}"), value);
            builder = builder.entry(value, name.as_str(), format!("Member{m}"));
        }
        table = table.with_group(group);
    }
    (table, builder.build().unwrap())
}

fn bench_verify(c: &mut Criterion) {
    let (table, registry) = fixture();

    c.bench_function("verify_fail_fast_400", |b| {
        b.iter(|| {
            let checker = ParityChecker::new(&table);
            black_box(checker.verify(black_box(&registry)).unwrap())
        })
    });

    c.bench_function("run_collect_all_400", |b| {
        b.iter(|| {
            let checker = ParityChecker::new(&table).with_policy(FailurePolicy::CollectAll);
            black_box(checker.run(black_box(&registry)))
        })
    });
}

criterion_group!(benches, bench_verify);
criterion_main!(benches);

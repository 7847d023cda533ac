use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bond_stake::{policy, StakeLedger};
use bond_types::{AccountId, ProtocolParams, Tier, Timestamp};

fn populated_ledger(accounts: usize, params: &ProtocolParams) -> StakeLedger {
    let mut ledger = StakeLedger::new();
    for i in 0..accounts {
        let owner = AccountId::new(format!("bond_{:0>12}", i));
        ledger
            .stake(
                &owner,
                params.gold.minimum_stake,
                Tier::Gold,
                12,
                params,
                Timestamp::new(0),
            )
            .unwrap();
    }
    ledger
}

fn bench_capacity_check(c: &mut Criterion) {
    let params = ProtocolParams::bond_defaults();
    let mut group = c.benchmark_group("capacity_check");

    for account_count in [100, 1_000, 10_000] {
        let ledger = populated_ledger(account_count, &params);
        let probe = AccountId::new(format!("bond_{:0>12}", account_count / 2));

        group.bench_with_input(
            BenchmarkId::new("has_capacity", account_count),
            &account_count,
            |b, _| {
                b.iter(|| {
                    black_box(policy::has_capacity(
                        black_box(&ledger),
                        black_box(&probe),
                        Tier::Silver,
                    ))
                });
            },
        );
    }
    group.finish();
}

fn bench_slash_reduction(c: &mut Criterion) {
    let params = ProtocolParams::bond_defaults();
    let mut group = c.benchmark_group("slash_reduction");

    for account_count in [100, 1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::new("reduce_for_slash", account_count),
            &account_count,
            |b, _| {
                b.iter_batched(
                    || populated_ledger(account_count, &params),
                    |mut ledger| {
                        let victim = AccountId::new(format!("bond_{:0>12}", 0));
                        black_box(ledger.reduce_for_slash(&victim, u128::MAX));
                    },
                    criterion::BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_capacity_check, bench_slash_reduction);
criterion_main!(benches);

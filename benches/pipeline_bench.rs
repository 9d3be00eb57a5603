use criterion::{black_box, criterion_group, criterion_main, Criterion};
use funding_terminal::adapters::types::{
    AssetMeta, AssetMetrics, OpenInterestRecord, RawMarketQuote, ReferenceData,
};
use funding_terminal::core::{
    join, normalize_str, open_interest_map, rank_and_page, secondary_rates, JoinOptions,
    UnmatchedSecondary, Venue,
};

fn make_quotes(n: usize) -> Vec<RawMarketQuote> {
    (0..n)
        .map(|i| RawMarketQuote {
            symbol: format!("T{}_USDC_PERP", i),
            funding_rate: Some(format!("0.0000{}", i % 10)),
            mark_price: Some(format!("{}.25", 10 + i)),
            index_price: None,
            next_funding_time: Some(1_700_000_000_000),
        })
        .collect()
}

fn make_open_interest(n: usize) -> Vec<OpenInterestRecord> {
    (0..n)
        .map(|i| OpenInterestRecord {
            symbol: format!("T{}_USDC_PERP", i),
            open_interest: Some(format!("{}", (i * 37) % 1000)),
        })
        .collect()
}

fn make_reference(n: usize) -> ReferenceData {
    ReferenceData {
        metadata: Some(
            (0..n)
                .map(|i| AssetMeta {
                    name: format!("T{}", i),
                    is_delisted: false,
                })
                .collect(),
        ),
        metrics: Some(
            (0..n)
                .map(|i| AssetMetrics {
                    funding: Some(format!("0.00000{}", i % 10)),
                    mark_price: Some(format!("{}.3", 10 + i)),
                    open_interest: Some("1.5".to_string()),
                })
                .collect(),
        ),
    }
}

fn options() -> JoinOptions {
    JoinOptions {
        primary: Venue::Backpack,
        secondary: Venue::Hyperliquid,
        primary_interval_hours: 8,
        unmatched: UnmatchedSecondary::Zero,
    }
}

fn bench_normalize_rate(c: &mut Criterion) {
    c.bench_function("normalize_rate", |b| {
        b.iter(|| {
            black_box(normalize_str(black_box("0.0000125"), black_box(1)).ok());
        });
    });
}

fn bench_join_and_rank_200(c: &mut Criterion) {
    c.bench_function("join_and_rank_200", |b| {
        let quotes = make_quotes(200);
        let oi = open_interest_map(&make_open_interest(200));
        let secondary = secondary_rates(&make_reference(150), 1);
        let opts = options();

        b.iter(|| {
            let joined = join(black_box(&quotes), &secondary, &oi, &opts);
            black_box(rank_and_page(joined, 20));
        });
    });
}

fn bench_secondary_rates_200(c: &mut Criterion) {
    c.bench_function("secondary_rates_200", |b| {
        let reference = make_reference(200);

        b.iter(|| {
            black_box(secondary_rates(black_box(&reference), 1));
        });
    });
}

criterion_group!(
    benches,
    bench_normalize_rate,
    bench_join_and_rank_200,
    bench_secondary_rates_200
);
criterion_main!(benches);

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        evaluating_river_value,
        evaluating_omaha_showdown,
        exhausting_flop_odds,
        enumerating_flop_odds,
        sampling_preflop_odds,
        iterating_turn_river_deals,
}

fn evaluating_river_value(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a 7-card Hand", |b| {
        let hand = Hand::try_from("As Kd Qh 9c 9s 4d 2h").unwrap();
        b.iter(|| Value::from(hand))
    });
}

fn evaluating_omaha_showdown(c: &mut criterion::Criterion) {
    let hole = Card::parse("As Ks Qh Jh").unwrap();
    let board = Card::parse("Th 9h 2d 2c 7s").unwrap();
    c.bench_function("evaluate an Omaha showdown", |b| {
        b.iter(|| Variant::Omaha.evaluate(&hole, &board))
    });
}

fn exhausting_flop_odds(c: &mut criterion::Criterion) {
    let table = flop();
    c.bench_function("exhaust heads-up Flop odds", |b| b.iter(|| table.exhaust()));
}

fn enumerating_flop_odds(c: &mut criterion::Criterion) {
    let table = flop();
    c.bench_function("enumerate heads-up Flop odds", |b| {
        b.iter(|| table.enumerate())
    });
}

fn sampling_preflop_odds(c: &mut criterion::Criterion) {
    let table = Variant::Holdem
        .table(
            vec![Card::parse("As Ks").unwrap(), Card::parse("Jd Jh").unwrap()],
            vec![],
        )
        .unwrap();
    c.bench_function("simulate 10k Preflop samples", |b| {
        b.iter(|| {
            Simulation::try_from(&table)
                .unwrap()
                .with_samples(10_000)
                .with_seed(0)
                .last()
        })
    });
}

fn iterating_turn_river_deals(c: &mut criterion::Criterion) {
    let dealt = Hand::try_from("AsKsJdJhQdJs8d").unwrap();
    c.bench_function("exhaust all Turn and River deals", |b| {
        b.iter(|| HandIterator::from((2, dealt)).count())
    });
}

fn flop() -> Table {
    Variant::Holdem
        .table(
            vec![Card::parse("As Ks").unwrap(), Card::parse("Jd Jh").unwrap()],
            Card::parse("Qd Js 8d").unwrap(),
        )
        .unwrap()
}

use poker_odds::*;

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
        dealing_four_hands,
        classifying_random_singles,
        classifying_straight_flush,
        classifying_dealt_hand,
        validating_bomb_over_pair,
        memoizing_repeated_plays,
        classifying_many_plays,
}

fn dealing_four_hands(c: &mut criterion::Criterion) {
    c.bench_function("deal four 27-card Hands", |b| {
        b.iter(|| Deck::new().deal())
    });
}

fn classifying_random_singles(c: &mut criterion::Criterion) {
    let level = Level::default();
    c.bench_function("classify a random single Card", |b| {
        b.iter(|| classify(Hand::from(Deck::new().draw()), level))
    });
}

fn classifying_straight_flush(c: &mut criterion::Criterion) {
    let level = Level::default();
    let hand = Hand::try_from("8s 9s Ts Js Qs").expect("valid cards");
    c.bench_function("classify a 5-card straight flush", |b| {
        b.iter(|| classify(hand, level))
    });
}

fn classifying_dealt_hand(c: &mut criterion::Criterion) {
    let level = Level::default();
    c.bench_function("reject a dealt 27-card Hand", |b| {
        b.iter(|| classify(Deck::new().hand(guandan::HAND_SIZE), level))
    });
}

fn validating_bomb_over_pair(c: &mut criterion::Criterion) {
    let level = Level::default();
    let play = Hand::try_from("7c 7d 7h 7s").expect("valid cards");
    let table = Hand::try_from("Ac Ad").expect("valid cards");
    c.bench_function("validate a bomb against a pair", |b| {
        b.iter(|| validate(play, Some(table), play, level))
    });
}

fn memoizing_repeated_plays(c: &mut criterion::Criterion) {
    let level = Level::default();
    let plays = (0..64)
        .map(|_| Deck::new().hand(5))
        .collect::<Vec<Hand>>();
    c.bench_function("classify 64 repeated plays through a Memo", |b| {
        let mut memo = Memo::default();
        b.iter(|| {
            plays
                .iter()
                .map(|play| memo.classify(*play, level))
                .filter(Option::is_some)
                .count()
        })
    });
}

fn classifying_many_plays(c: &mut criterion::Criterion) {
    let level = Level::default();
    let plays = (0..1024)
        .map(|i| Deck::new().hand(1 + i % 8))
        .collect::<Vec<Hand>>();
    c.bench_function("classify 1024 candidate plays", |b| {
        b.iter(|| classify_all(&plays, level))
    });
}

use guandan::cards::deck::Deck;
use guandan::cards::hand::Hand;
use guandan::evaluation::*;

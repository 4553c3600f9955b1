use poker_odds::*;
use std::sync::Arc;
use std::sync::Mutex;

fn cards(s: &str) -> Vec<Card> {
    Card::parse(s).unwrap()
}

fn holdem(holes: &[&str], board: &str) -> Table {
    Variant::Holdem
        .table(holes.iter().map(|h| cards(h)).collect(), cards(board))
        .unwrap()
}

fn counts(odds: &[Odds]) -> Vec<(u64, u64, u64)> {
    odds.iter().map(|o| (o.wins, o.ties, o.total)).collect()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

#[test]
fn heads_up_without_ties() {
    let odds = odds(&holdem(&["As Ks", "Jd Jh"], "Qd Js 8d")).unwrap();
    assert_eq!(counts(&odds), vec![(298, 0, 1980), (1682, 0, 1980)]);
    assert!(close(odds[1].equity, 1682. / 1980.));
}

#[test]
fn heads_up_with_ties() {
    let odds = odds(&holdem(&["As Ks", "Ad Kd"], "Qd Js 8h")).unwrap();
    assert_eq!(counts(&odds), vec![(90, 1800, 1980), (90, 1800, 1980)]);
    assert!(close(odds[0].equity, 0.5));
    assert!(close(odds[1].equity, 0.5));
}

#[test]
fn three_way_flop() {
    let odds = odds(&holdem(&["As Ks", "Ad Kd", "Jd Jh"], "Qd Js 8h")).unwrap();
    assert_eq!(
        counts(&odds),
        vec![(58, 228, 1806), (56, 228, 1806), (1464, 0, 1806)]
    );
    assert!(close(odds[0].equity, 86. / 903.));
    assert!(close(odds[1].equity, 85. / 903.));
    assert!(close(odds[2].equity, 732. / 903.));
}

#[test]
fn unknown_hole_card() {
    let odds = odds(&holdem(&["As Ks", "Ad"], "Qd Js 8h")).unwrap();
    assert_eq!(
        counts(&odds),
        vec![(59072, 8272, 91080), (23736, 8272, 91080)]
    );
    assert!(close(odds[0].equity, 31604. / 45540.));
    assert!(close(odds[0].equity + odds[1].equity, 1.));
}

#[test]
fn everything_known() {
    let odds = odds(&holdem(&["As Ks", "Ad Ac"], "Qd Js 8h Th 2s")).unwrap();
    assert_eq!(counts(&odds), vec![(1, 0, 1), (0, 0, 1)]);
    assert!(close(odds[0].equity, 1.));
}

#[test]
#[ignore]
fn three_way_preflop() {
    let odds = odds(&holdem(&["As Ks", "Ad Kd", "Jd Jh"], "")).unwrap();
    assert_eq!(
        counts(&odds),
        vec![
            (11545080, 48622800, 164490480),
            (9595800, 48622800, 164490480),
            (94726800, 682440, 164490480),
        ]
    );
}

#[test]
fn omaha_flop() {
    let table = Variant::Omaha
        .table(vec![cards("As Ks Qh Jh"), cards("Ad Ac 7c 6c")], cards("Th 9h 2d"))
        .unwrap();
    let odds = odds(&table).unwrap();
    assert_eq!(odds[0].total, 41 * 40);
    assert!(odds.iter().all(|o| o.wins + o.ties <= o.total));
    assert!(close(odds.iter().map(|o| o.equity).sum::<f64>(), 1.));
    assert_eq!(counts(&odds), counts(&table.enumerate().unwrap()));
}

#[test]
fn pull_until_exhausted() {
    let snapshots = Simulation::try_from(&holdem(&["As Ks", "Jd Jh"], "Qd Js 8d"))
        .unwrap()
        .with_batch(1)
        .with_seed(5)
        .collect::<Vec<_>>();
    assert_eq!(snapshots.len(), 1980);
    assert_eq!(snapshots[0][0].total, 1);
    assert_eq!(snapshots[1][0].total, 2);
    assert_eq!(snapshots[2][0].total, 3);
}

#[tokio::test]
async fn callbacks_until_budget() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = calls.clone();
    let handle = simulate(
        &holdem(&["As Ks", "Jd Jh"], "Qd Js 8d"),
        Some(2500),
        None,
        move |odds| sink.lock().unwrap().push(odds.to_vec()),
    )
    .unwrap();
    let last = handle.join().await.unwrap();
    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls.last().unwrap(), &last);
    assert_eq!(last[0].total, 2500);
    for snapshot in calls.iter() {
        assert!(close(snapshot.iter().map(|o| o.equity).sum::<f64>(), 1.));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn cancel_returns_partial_totals() {
    let handle = simulate(&holdem(&["As Ks", "Jd Jh"], ""), None, Some(250), |_| {}).unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    handle.cancel();
    let odds = handle.join().await.unwrap();
    assert_eq!(odds[0].total % 250, 0);
    assert!(odds[0].total > 0);
    assert!(odds[0].wins + odds[1].wins + odds[0].ties == odds[0].total);
}

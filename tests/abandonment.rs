//! Abandonment: combinators return promptly, late reports vanish, and
//! abandoned tasks keep running to completion.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use brickwall::test_utils::{init_test_logging, sleepy};
use brickwall::{BoxTask, Fault, Outcome, Policy, Settlement, Wall, race, some, task};

fn counted(done: &Arc<AtomicUsize>, value: u32, millis: u64) -> BoxTask<u32> {
    let done = Arc::clone(done);
    task::boxed(move || {
        thread::sleep(Duration::from_millis(millis));
        done.fetch_add(1, Ordering::SeqCst);
        Ok(value)
    })
}

fn wait_for(done: &AtomicUsize, expected: usize, limit: Duration) -> bool {
    let start = Instant::now();
    while start.elapsed() < limit {
        if done.load(Ordering::SeqCst) == expected {
            return true;
        }
        thread::sleep(Duration::from_millis(10));
    }
    false
}

#[test]
fn race_returns_before_losers_finish() {
    init_test_logging();
    let done = Arc::new(AtomicUsize::new(0));
    let start = Instant::now();
    let winner = race(vec![
        counted(&done, 1, 20),
        counted(&done, 2, 600),
        counted(&done, 3, 600),
    ]);
    assert_eq!(winner, Outcome::Ok(1));
    assert!(start.elapsed() < Duration::from_millis(500));

    // Losers are abandoned, not stopped.
    assert!(wait_for(&done, 3, Duration::from_secs(5)));
}

#[test]
fn some_does_not_wait_for_the_rest() {
    init_test_logging();
    let done = Arc::new(AtomicUsize::new(0));
    let start = Instant::now();
    let outcomes = some(
        1,
        vec![counted(&done, 1, 700), counted(&done, 2, 30)],
    );
    assert_eq!(outcomes, vec![Outcome::Ok(2)]);
    assert!(start.elapsed() < Duration::from_millis(600));
    assert!(wait_for(&done, 2, Duration::from_secs(5)));
}

#[test]
fn failing_all_returns_promptly() {
    init_test_logging();
    let start = Instant::now();
    let tasks: Vec<BoxTask<u32>> = vec![
        sleepy(1, 800),
        task::boxed(|| Err(Fault::task("early"))),
    ];
    let report = Wall::default().report(Policy::All, None, tasks);
    assert_eq!(report.settlement, Settlement::Aborted { position: 1 });
    assert!(start.elapsed() < Duration::from_millis(700));
}

#[test]
fn late_reports_do_not_leak_into_later_sessions() {
    init_test_logging();
    let wall = Wall::default();
    let first = wall.race(vec![sleepy("first-fast", 10), sleepy("first-slow", 150)]);
    assert_eq!(first, Outcome::Ok("first-fast"));

    // The abandoned 150ms task reports while this session is collecting.
    let second = wall.all_settled(vec![sleepy("a", 250), sleepy("b", 300)]);
    assert_eq!(second, vec![Outcome::Ok("a"), Outcome::Ok("b")]);
}

#[test]
fn concurrent_sessions_are_independent() {
    init_test_logging();
    let handles: Vec<_> = (0..4_u32)
        .map(|session| {
            thread::spawn(move || {
                let tasks: Vec<BoxTask<u32>> = (0..5_u32)
                    .map(|i| sleepy(session * 10 + i, u64::from(5 - i) * 30))
                    .collect();
                (session, brickwall::all_settled(tasks))
            })
        })
        .collect();

    for handle in handles {
        let (session, outcomes) = handle.join().expect("session thread");
        let expected: Vec<Outcome<u32>> = (0..5).map(|i| Outcome::Ok(session * 10 + i)).collect();
        assert_eq!(outcomes, expected);
    }
}

#[test]
fn timed_out_session_ignores_stragglers() {
    init_test_logging();
    let done = Arc::new(AtomicUsize::new(0));
    let (outcomes, ok) = brickwall::all_settled_timed(
        Duration::from_millis(100),
        vec![counted(&done, 1, 10), counted(&done, 2, 400)],
    );
    assert!(!ok);
    assert_eq!(outcomes, vec![Outcome::Ok(1), Outcome::Unsettled]);
    assert!(wait_for(&done, 2, Duration::from_secs(5)));
}

use moodtune::ui::terminal::chain_panic_hook;
use std::sync::atomic::{AtomicUsize, Ordering};

static STEP: AtomicUsize = AtomicUsize::new(1);
static RESTORED_AT: AtomicUsize = AtomicUsize::new(0);
static REPORTED_AT: AtomicUsize = AtomicUsize::new(0);

#[test]
fn test_restore_runs_before_panic_report() {
    // Stands in for human-panic's report
    std::panic::set_hook(Box::new(|_| {
        REPORTED_AT.store(STEP.fetch_add(1, Ordering::SeqCst), Ordering::SeqCst);
    }));
    chain_panic_hook(|| {
        RESTORED_AT.store(STEP.fetch_add(1, Ordering::SeqCst), Ordering::SeqCst);
    });

    let result = std::panic::catch_unwind(|| panic!("boom"));
    let _ = std::panic::take_hook();

    assert!(result.is_err());
    assert_eq!(RESTORED_AT.load(Ordering::SeqCst), 1);
    assert_eq!(REPORTED_AT.load(Ordering::SeqCst), 2);
}

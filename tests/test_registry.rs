use tap_widget::tip::{TipLifecycle, TipPhase, TipRegistry};

#[test]
fn test_lifecycle() {
    let l1 = TipLifecycle::new();
    assert_eq!(l1.phase(), TipPhase::Built);
    assert!(!l1.is_showing());

    let l2 = l1.clone();
    assert_eq!(l1, l2);

    let l3 = TipLifecycle::new();
    assert_ne!(l1, l3);
}

#[test]
fn test_register() {
    let r = TipRegistry::new();
    assert!(r.is_empty());

    let l1 = TipLifecycle::new();
    assert!(r.try_register("a", &l1));
    assert_eq!(r.len(), 1);
    assert!(!r.showing("a"));

    r.unregister(&l1);
    assert!(r.is_empty());
}

#[test]
fn test_register_evicts_stale() {
    let r = TipRegistry::new();

    let l1 = TipLifecycle::new();
    assert!(r.try_register("a", &l1));

    // l1 never made it to the screen, l2 takes over
    let l2 = TipLifecycle::new();
    assert!(r.try_register("a", &l2));
    assert_eq!(r.len(), 1);

    // the dead session cannot remove the successor's entry
    r.unregister(&l1);
    assert_eq!(r.len(), 1);

    r.unregister(&l2);
    assert!(r.is_empty());
}

#[test]
fn test_unregister_idempotent() {
    let r = TipRegistry::new();

    let l1 = TipLifecycle::new();
    assert!(r.try_register("a", &l1));
    r.unregister(&l1);
    r.unregister(&l1);
    assert!(r.is_empty());
}

#[test]
fn test_separate_contents() {
    let r = TipRegistry::new();

    let l1 = TipLifecycle::new();
    let l2 = TipLifecycle::new();
    assert!(r.try_register("a", &l1));
    assert!(r.try_register("b", &l2));
    assert_eq!(r.len(), 2);

    r.unregister(&l1);
    assert_eq!(r.len(), 1);
}

#[test]
fn test_clone_shares() {
    let r1 = TipRegistry::new();
    let r2 = r1.clone();

    let l1 = TipLifecycle::new();
    assert!(r1.try_register("a", &l1));
    assert_eq!(r2.len(), 1);

    r2.unregister(&l1);
    assert!(r1.is_empty());
}

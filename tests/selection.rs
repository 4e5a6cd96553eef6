use node_selector::lb::{RandomStrategy, RoundRobin};
use node_selector::{
    build_selector, create_fallback, PreferredSelector, Router, SelectOptions, Selector,
    SelectorConfig, SelectorError,
};
use std::collections::HashSet;
use std::sync::Arc;

fn nodes(addrs: &[&str]) -> Vec<String> {
    addrs.iter().map(|a| a.to_string()).collect()
}

fn pick(selector: &dyn Selector, candidates: &[String]) -> String {
    selector.select(candidates, &SelectOptions::new()).unwrap()()
}

#[test]
fn preferred_host_is_chosen_when_listed() {
    let selector = PreferredSelector::new("127.0.0.1", None);
    let candidates = nodes(&["10.0.0.5:8080", "127.0.0.1:8080", "10.0.0.9:8080"]);

    for _ in 0..4 {
        assert_eq!(pick(&selector, &candidates), "127.0.0.1:8080");
    }
}

#[test]
fn missing_preferred_host_follows_round_robin() {
    let selector = PreferredSelector::new("127.0.0.1", None);
    let candidates = nodes(&["10.0.0.5:8080", "10.0.0.9:8080"]);

    assert_eq!(pick(&selector, &candidates), "10.0.0.5:8080");
    assert_eq!(pick(&selector, &candidates), "10.0.0.9:8080");
    assert_eq!(pick(&selector, &candidates), "10.0.0.5:8080");
}

#[test]
fn fallback_picks_match_a_standalone_fallback() {
    let selector = PreferredSelector::new("192.168.0.1", Some(Box::new(RoundRobin::new())));
    let reference = RoundRobin::new();
    let candidates = nodes(&["10.0.0.5:8080", "10.0.0.6:8080", "10.0.0.7:8080"]);

    for _ in 0..7 {
        assert_eq!(pick(&selector, &candidates), pick(&reference, &candidates));
    }
}

#[test]
fn empty_candidates_surface_no_candidates() {
    for preferred in ["", "127.0.0.1", "10."] {
        let selector = PreferredSelector::new(preferred, None);
        let err = selector.select(&[], &SelectOptions::new()).err().unwrap();
        assert!(matches!(err, SelectorError::NoCandidates));
    }
}

#[test]
fn empty_preferred_host_means_loopback() {
    let defaulted = PreferredSelector::new("", None);
    let explicit = PreferredSelector::new("127.0.0.1", None);
    let candidates = nodes(&["10.0.0.5:8080", "127.0.0.1:9090"]);

    assert_eq!(defaulted.preferred_prefix(), explicit.preferred_prefix());
    assert_eq!(pick(&defaulted, &candidates), pick(&explicit, &candidates));
}

#[test]
fn record_and_reset_do_not_change_selection() {
    let selector = PreferredSelector::new("127.0.0.1", None);
    let candidates = nodes(&["10.0.0.5:8080", "10.0.0.9:8080"]);
    let refused = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");

    assert_eq!(pick(&selector, &candidates), "10.0.0.5:8080");
    selector
        .record("10.0.0.5:8080", Some(&refused as &dyn std::error::Error))
        .unwrap();
    selector.reset().unwrap();
    assert_eq!(pick(&selector, &candidates), "10.0.0.9:8080");
}

#[test]
fn forwarded_reset_rewinds_fallback() {
    let config = SelectorConfig {
        forward_feedback: true,
        ..SelectorConfig::default()
    };
    let selector = build_selector(&config);
    let candidates = nodes(&["10.0.0.5:8080", "10.0.0.9:8080"]);

    assert_eq!(pick(&selector, &candidates), "10.0.0.5:8080");
    selector.reset().unwrap();
    assert_eq!(pick(&selector, &candidates), "10.0.0.5:8080");
}

#[test]
fn random_fallback_picks_a_candidate() {
    let selector = PreferredSelector::new("127.0.0.1", Some(Box::new(RandomStrategy::new())));
    let candidates = nodes(&["10.0.0.5:8080", "10.0.0.9:8080"]);
    let opts = SelectOptions::new().with_hint("service", "chat");

    for _ in 0..20 {
        let picked = selector.select(&candidates, &opts).unwrap()();
        assert!(candidates.contains(&picked));
    }
}

#[test]
fn create_fallback_by_name() {
    assert_eq!(create_fallback("round_robin").name(), "roundrobin");
    assert_eq!(create_fallback("random").name(), "random");
    assert_eq!(create_fallback("weighted").name(), "roundrobin");
}

#[test]
fn router_returns_selected_node() {
    let router = Router::new(Box::new(PreferredSelector::new("10.0.0.9", None)));
    let candidates = nodes(&["10.0.0.5:8080", "10.0.0.9:8080"]);

    assert_eq!(router.selector_name(), "preferred");
    assert_eq!(
        router.next_node(&candidates, &SelectOptions::new()).unwrap(),
        "10.0.0.9:8080"
    );

    let err = router.next_node(&[], &SelectOptions::new()).unwrap_err();
    assert!(matches!(err, SelectorError::NoCandidates));

    let timeout = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
    router
        .record("10.0.0.9:8080", Some(&timeout as &dyn std::error::Error))
        .unwrap();
    router.reset().unwrap();
}

#[test]
fn concurrent_selection_spreads_over_fallback() {
    let selector = Arc::new(PreferredSelector::new("127.0.0.1", None));
    let candidates = nodes(&["10.0.0.5:8080", "10.0.0.6:8080", "10.0.0.7:8080"]);

    let picks: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..6)
            .map(|_| {
                let selector = selector.clone();
                let candidates = &candidates;
                scope.spawn(move || pick(selector.as_ref(), candidates))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let distinct: HashSet<&String> = picks.iter().collect();
    assert_eq!(distinct.len(), 3);
    for node in &candidates {
        assert_eq!(picks.iter().filter(|p| *p == node).count(), 2);
    }
}

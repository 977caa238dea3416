// Host-side tests for the synthetic market data.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
#[path = "../src/core/market.rs"]
mod market;

use market::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn overview_covers_the_four_headline_quotes() {
    let quotes = market_overview();
    assert_eq!(quotes.len(), 4);
    for q in &quotes {
        assert!(!q.name.is_empty());
        assert!(!q.value.is_empty());
        assert!(q.change.starts_with('+') || q.change.starts_with('-'));
    }
    assert!(quotes.iter().any(|q| q.trend == Trend::Down));
}

#[test]
fn demo_portfolio_is_fully_allocated() {
    let book = demo_portfolio();
    assert!(!book.is_empty());
    let total: f64 = book.iter().map(|p| p.allocation).sum();
    assert!((total - 1.0).abs() < 1e-9);
    for p in &book {
        assert!(p.price > 0.0);
        assert!(p.quantity > 0);
    }
}

#[test]
fn price_perturbation_stays_within_the_jitter_band() {
    let mut book = demo_portfolio();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let before: Vec<f64> = book.iter().map(|p| p.price).collect();
        perturb_prices(&mut book, &mut rng);
        for (prev, item) in before.iter().zip(book.iter()) {
            let drift = (item.price - prev) / prev;
            assert!(
                drift.abs() <= PRICE_JITTER,
                "drift {drift} outside ±{PRICE_JITTER}"
            );
        }
    }
}

#[test]
fn price_perturbation_is_deterministic_under_a_seed() {
    let mut a = demo_portfolio();
    let mut b = demo_portfolio();
    let mut rng_a = StdRng::seed_from_u64(7);
    let mut rng_b = StdRng::seed_from_u64(7);
    for _ in 0..10 {
        perturb_prices(&mut a, &mut rng_a);
        perturb_prices(&mut b, &mut rng_b);
    }
    for (pa, pb) in a.iter().zip(b.iter()) {
        assert_eq!(pa.price, pb.price);
    }
}

#[test]
fn action_report_leads_with_the_urgent_call() {
    let report = action_report(&demo_portfolio());
    assert_eq!(report.len(), 3);
    assert_eq!(report[0].urgency, Urgency::High);
    for s in &report {
        assert!(!s.ticker.is_empty());
        assert!(!s.description.is_empty());
        assert!(!s.reasoning.is_empty());
    }
    assert!(Urgency::High > Urgency::Medium);
    assert!(Urgency::Medium > Urgency::Low);
}

#[test]
fn intelligence_feed_scores_stay_on_the_ten_point_scale() {
    let feed = intelligence_feed();
    assert!(!feed.is_empty());
    for item in &feed {
        assert!((1..=10).contains(&item.impact_score));
        assert!(!item.related_tickers.is_empty());
        assert!(!item.source.is_empty());
    }
}

#[test]
fn chat_reply_addresses_the_held_position() {
    let book = demo_portfolio();
    let history = vec![ChatMessage {
        role: Role::User,
        text: "Should I worry about the tariffs?".to_string(),
    }];
    let reply = muse_reply(&history, "Should I worry about the tariffs?", &book);
    assert!(!reply.is_empty());
    assert!(reply.contains("TSLA"));
}

//! Mock data services behind the demo screens.
//!
//! Each call sleeps for a scripted "network" latency on the JS timer queue
//! and then returns canned data from `core::market`. Nothing here touches
//! the choreography core; the frame loop never awaits these.

use crate::constants::{ACTION_REPORT_LATENCY_MS, CHAT_LATENCY_MS, MARKET_OVERVIEW_LATENCY_MS};
use crate::core::market::{
    self, ActionSuggestion, ChatMessage, MarketIndex, NewsItem, PortfolioItem,
};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Resolve after `ms` milliseconds via `setTimeout`.
async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(w) = web::window() {
            let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = JsFuture::from(promise).await;
}

pub async fn fetch_market_overview() -> Vec<MarketIndex> {
    sleep_ms(MARKET_OVERVIEW_LATENCY_MS).await;
    market::market_overview()
}

pub async fn fetch_market_intelligence() -> Vec<NewsItem> {
    market::intelligence_feed()
}

/// One refresh tick of the fake price feed.
pub fn update_portfolio_prices(portfolio: &mut [PortfolioItem]) {
    market::perturb_prices(portfolio, &mut rand::thread_rng());
}

pub async fn generate_action_report(portfolio: &[PortfolioItem]) -> Vec<ActionSuggestion> {
    sleep_ms(ACTION_REPORT_LATENCY_MS).await;
    market::action_report(portfolio)
}

pub async fn chat_with_muse(
    history: &[ChatMessage],
    message: &str,
    portfolio: &[PortfolioItem],
) -> String {
    sleep_ms(CHAT_LATENCY_MS).await;
    market::muse_reply(history, message, portfolio)
}

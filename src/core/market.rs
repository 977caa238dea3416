//! Synthetic market data backing the demo screens.
//!
//! Everything here is canned: fixed index quotes, a fixed intelligence feed,
//! a fixed action report, and a scripted chat reply. The only live behavior
//! is a small random walk applied to portfolio prices, kept pure (rng passed
//! in) so it stays deterministic under test.

use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

#[derive(Clone, Debug)]
pub struct MarketIndex {
    pub name: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
    pub last_updated: &'static str,
}

#[derive(Clone, Debug)]
pub struct PortfolioItem {
    pub symbol: &'static str,
    pub name: &'static str,
    pub sector: &'static str,
    pub quantity: u32,
    pub price: f64,
    pub allocation: f64, // 0..1 share of the book
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Buy,
    Sell,
    Hold,
    Watch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Urgency {
    Low,
    Medium,
    High,
}

#[derive(Clone, Debug)]
pub struct ActionSuggestion {
    pub action: ActionKind,
    pub ticker: &'static str,
    pub description: &'static str,
    pub reasoning: &'static str,
    pub urgency: Urgency,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

#[derive(Clone, Debug)]
pub struct NewsItem {
    pub title: &'static str,
    pub source: &'static str,
    pub age: &'static str,
    pub sentiment: Sentiment,
    pub impact_score: u8, // 1..=10
    pub related_tickers: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Model,
}

#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

/// Price fluctuation bound for one refresh, as a fraction of price.
pub const PRICE_JITTER: f64 = 0.01;

pub fn market_overview() -> Vec<MarketIndex> {
    vec![
        MarketIndex {
            name: "S&P 500",
            value: "5,203.12",
            change: "+0.85%",
            trend: Trend::Up,
            last_updated: "Live",
        },
        MarketIndex {
            name: "NASDAQ",
            value: "16,398.20",
            change: "+1.10%",
            trend: Trend::Up,
            last_updated: "Live",
        },
        MarketIndex {
            name: "BTC-USD",
            value: "67,450.00",
            change: "+2.50%",
            trend: Trend::Up,
            last_updated: "Live",
        },
        MarketIndex {
            name: "VIX",
            value: "13.50",
            change: "-4.20%",
            trend: Trend::Down,
            last_updated: "Live",
        },
    ]
}

pub fn demo_portfolio() -> Vec<PortfolioItem> {
    vec![
        PortfolioItem {
            symbol: "TSLA",
            name: "Tesla",
            sector: "Auto",
            quantity: 150,
            price: 245.0,
            allocation: 0.5,
        },
        PortfolioItem {
            symbol: "AAPL",
            name: "Apple",
            sector: "Tech",
            quantity: 100,
            price: 175.0,
            allocation: 0.5,
        },
    ]
}

/// Apply one refresh tick of the fake price feed: each price moves by a
/// uniform random fraction in [-PRICE_JITTER, +PRICE_JITTER].
pub fn perturb_prices(portfolio: &mut [PortfolioItem], rng: &mut impl Rng) {
    for item in portfolio {
        let drift = rng.gen_range(-PRICE_JITTER..PRICE_JITTER);
        item.price *= 1.0 + drift;
    }
}

pub fn intelligence_feed() -> Vec<NewsItem> {
    vec![
        NewsItem {
            title: "Fed signals September cut odds rising to 80%",
            source: "Bloomberg",
            age: "10m",
            sentiment: Sentiment::Positive,
            impact_score: 9,
            related_tickers: &["SPY", "QQQ"],
        },
        NewsItem {
            title: "TSMC yields beat expectations, Apple adds orders",
            source: "Reuters",
            age: "30m",
            sentiment: Sentiment::Positive,
            impact_score: 8,
            related_tickers: &["AAPL", "TSM"],
        },
        NewsItem {
            title: "Red Sea escalation sends shipping cost index soaring",
            source: "WSJ",
            age: "1h",
            sentiment: Sentiment::Negative,
            impact_score: 7,
            related_tickers: &["ZIM"],
        },
    ]
}

/// The canned analyst output. The portfolio argument shapes nothing today;
/// it is part of the contract so the demo reads like the real call.
pub fn action_report(_portfolio: &[PortfolioItem]) -> Vec<ActionSuggestion> {
    vec![
        ActionSuggestion {
            action: ActionKind::Sell,
            ticker: "TSLA",
            description: "Trim the position by 20%",
            reasoning: "EU tariff package is now in force; Q3 margins come under pressure and the risk threshold has tripped.",
            urgency: Urgency::High,
        },
        ActionSuggestion {
            action: ActionKind::Hold,
            ticker: "AAPL",
            description: "Keep the current position",
            reasoning: "Handset volumes are soft, but services growth is strong and the AI cycle has not priced in yet.",
            urgency: Urgency::Medium,
        },
        ActionSuggestion {
            action: ActionKind::Buy,
            ticker: "NVDA",
            description: "Accumulate on weakness",
            reasoning: "Blackwell demand beats expectations and supply constraints are clearing; target raised to $1100.",
            urgency: Urgency::Medium,
        },
    ]
}

pub fn muse_reply(_history: &[ChatMessage], _message: &str, _portfolio: &[PortfolioItem]) -> String {
    "Given your TSLA position, the EU tariff package is a real near-term risk. \
     The quantitative model puts European profit down 15% if tariffs hold above 20%. \
     Consider selling part of the position to lock in gains, or hedging with puts. \
     Want to see a concrete hedge?"
        .to_string()
}

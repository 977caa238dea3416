//! DOM overlay management: navigation dots, ticker strip, demo panel, chat.
//!
//! Everything here works against elements of the host page by id and
//! degrades to a no-op when an element is missing.

use crate::constants::NAV_LABELS;
use crate::core::market::{
    ActionKind, ActionSuggestion, MarketIndex, PortfolioItem, Role, Trend, Urgency,
};
use crate::scroll::ScrollBinding;
use std::rc::Rc;
use web_sys as web;

/// Build one navigation dot per chapter inside `#chapter-nav` and wire each
/// to a smooth jump.
pub fn build_nav(document: &web::Document, binding: &Rc<ScrollBinding>) {
    let Some(container) = document.get_element_by_id("chapter-nav") else {
        log::warn!("missing #chapter-nav; navigation dots disabled");
        return;
    };
    for (i, label) in NAV_LABELS.iter().enumerate() {
        let Ok(dot) = document.create_element("button") else {
            continue;
        };
        dot.set_id(&format!("nav-dot-{i}"));
        dot.set_class_name("nav-dot");
        let _ = dot.set_attribute("title", label);
        let _ = container.append_child(&dot);

        let binding = binding.clone();
        crate::dom::add_click_listener(document, &format!("nav-dot-{i}"), move || {
            binding.go_to_chapter(i);
        });
    }
}

/// Highlight the dot for the published chapter. Idempotent; callers may
/// invoke it with an unchanged index.
pub fn set_active_dot(document: &web::Document, chapter: usize) {
    for i in 0..NAV_LABELS.len() {
        if let Some(el) = document.get_element_by_id(&format!("nav-dot-{i}")) {
            let cl = el.class_list();
            if i == chapter {
                let _ = cl.add_1("active");
            } else {
                let _ = cl.remove_1("active");
            }
        }
    }
}

fn trend_class(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "up",
        Trend::Down => "down",
        Trend::Flat => "flat",
    }
}

pub fn render_ticker(document: &web::Document, quotes: &[MarketIndex]) {
    let mut html = String::new();
    for q in quotes {
        html.push_str(&format!(
            "<span class='quote {}'><b>{}</b> {} <i>{}</i></span>",
            trend_class(q.trend),
            q.name,
            q.value,
            q.change
        ));
    }
    crate::dom::set_html(document, "market-ticker", &html);
}

fn action_label(action: ActionKind) -> &'static str {
    match action {
        ActionKind::Buy => "BUY",
        ActionKind::Sell => "SELL",
        ActionKind::Hold => "HOLD",
        ActionKind::Watch => "WATCH",
    }
}

fn urgency_class(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::High => "high",
        Urgency::Medium => "medium",
        Urgency::Low => "low",
    }
}

pub fn render_report(document: &web::Document, suggestions: &[ActionSuggestion]) {
    let mut html = String::new();
    for s in suggestions {
        html.push_str(&format!(
            "<div class='suggestion {}'><span class='action'>{}</span> \
             <b>{}</b> · {}<p>{}</p></div>",
            urgency_class(s.urgency),
            action_label(s.action),
            s.ticker,
            s.description,
            s.reasoning
        ));
    }
    crate::dom::set_html(document, "demo-output", &html);
}

pub fn set_demo_busy(document: &web::Document, busy: bool) {
    if busy {
        crate::dom::set_html(
            document,
            "demo-output",
            "<div class='thinking'>Agents reasoning over your book…</div>",
        );
    }
    if let Some(el) = document.get_element_by_id("demo-run") {
        let cl = el.class_list();
        if busy {
            let _ = cl.add_1("busy");
        } else {
            let _ = cl.remove_1("busy");
        }
    }
}

pub fn render_holdings(document: &web::Document, portfolio: &[PortfolioItem]) {
    let mut html = String::new();
    for item in portfolio {
        html.push_str(&format!(
            "<span class='holding'><b>{}</b> {} × {:.2} <i>{:.0}%</i></span>",
            item.symbol,
            item.quantity,
            item.price,
            item.allocation * 100.0
        ));
    }
    crate::dom::set_html(document, "demo-holdings", &html);
}

pub fn push_chat_message(document: &web::Document, role: Role, text: &str) {
    let Some(log_el) = document.get_element_by_id("chat-log") else {
        return;
    };
    if let Ok(entry) = document.create_element("div") {
        entry.set_class_name(match role {
            Role::User => "chat-msg user",
            Role::Model => "chat-msg model",
        });
        entry.set_text_content(Some(text));
        let _ = log_el.append_child(&entry);
        log_el.set_scroll_top(log_el.scroll_height());
    }
}

//! DOM overlays layered over the canvas: the welcome form, the loading
//! screen, the section panel and the sub-scene header.

use crate::dom::{escape_html, set_html, set_text, set_visible};
use island_core::content::{Block, Card, ContactIcon};
use island_core::{AssetRegistry, ContentView, ModalMode, Panel, SubScene, Theme};
use web_sys as web;

const WELCOME: &str = "welcome-overlay";
const LOADING: &str = "loading-screen";
const PANEL: &str = "section-panel";
const SUBSCENE: &str = "subscene-header";

#[inline]
pub fn show_welcome(document: &web::Document) {
    set_visible(document, WELCOME, true);
}

#[inline]
pub fn hide_welcome(document: &web::Document) {
    set_visible(document, WELCOME, false);
}

pub fn update_loading(document: &web::Document, assets: &AssetRegistry) {
    let pct = (assets.progress() * 100.0).round() as u32;
    set_text(document, "loading-progress", &format!("{}%", pct));
    set_visible(document, LOADING, !assets.all_settled());
}

pub fn sync_toggles(document: &web::Document, mode: ModalMode, theme: Theme) {
    let mode_label = match mode {
        ModalMode::Overlay => "3D sections",
        ModalMode::Embedded3d => "Panel sections",
    };
    set_text(document, "mode-toggle", mode_label);
    let theme_label = match theme {
        Theme::Light => "Night",
        Theme::Dark => "Day",
    };
    set_text(document, "theme-toggle", theme_label);
}

/// Show whichever surface the content view calls for and hide the other.
pub fn sync_content(document: &web::Document, view: Option<&ContentView>) {
    match view {
        None => {
            set_visible(document, PANEL, false);
            set_visible(document, SUBSCENE, false);
        }
        Some(ContentView::Panel(panel)) => {
            set_text(document, "section-panel-title", &panel.title);
            set_html(document, "section-panel-body", &panel_html(panel));
            set_visible(document, "section-panel-close", panel.closable);
            set_visible(document, SUBSCENE, false);
            set_visible(document, PANEL, true);
        }
        Some(ContentView::SubScene(sub)) => {
            sync_subscene(document, sub);
            set_visible(document, PANEL, false);
            set_visible(document, SUBSCENE, true);
        }
    }
}

fn sync_subscene(document: &web::Document, sub: &SubScene) {
    set_text(document, "subscene-title", &sub.title);
    set_text(document, "subscene-hint", sub.hint);
    set_visible(document, "subscene-close", sub.closable);
}

pub fn panel_html(panel: &Panel) -> String {
    let mut html = String::new();
    for block in &panel.blocks {
        match block {
            Block::Heading(text) => push_tag(&mut html, "h2", text),
            Block::Subheading(text) => push_tag(&mut html, "h3", text),
            Block::Paragraph(text) => push_tag(&mut html, "p", text),
            Block::Card(card) => push_card(&mut html, card),
            Block::Facts(facts) => {
                html.push_str("<dl class=\"facts\">");
                for (label, value) in facts {
                    push_tag(&mut html, "dt", label);
                    push_tag(&mut html, "dd", value);
                }
                html.push_str("</dl>");
            }
            Block::Tags { group, tags } => {
                html.push_str("<div class=\"tag-group\">");
                push_tag(&mut html, "h4", group);
                push_tags(&mut html, tags);
                html.push_str("</div>");
            }
            Block::Contact { icon, value } => {
                let glyph = match icon {
                    ContactIcon::Mail => "✉",
                    ContactIcon::Phone => "☎",
                    ContactIcon::Location => "⌖",
                };
                html.push_str(&format!(
                    "<div class=\"contact\"><span class=\"icon\">{}</span>{}</div>",
                    glyph,
                    escape_html(value)
                ));
            }
        }
    }
    html
}

fn push_tag(html: &mut String, tag: &str, text: &str) {
    html.push_str(&format!("<{tag}>{}</{tag}>", escape_html(text)));
}

fn push_tags(html: &mut String, tags: &[&str]) {
    html.push_str("<ul class=\"tags\">");
    for tag in tags {
        push_tag(html, "li", tag);
    }
    html.push_str("</ul>");
}

fn push_card(html: &mut String, card: &Card) {
    html.push_str("<article class=\"card\">");
    push_tag(html, "h3", card.title);
    if let Some(subtitle) = card.subtitle {
        push_tag(html, "h4", subtitle);
    }
    if let Some(period) = card.period {
        html.push_str(&format!("<span class=\"period\">{}</span>", escape_html(period)));
    }
    if let Some(body) = card.body {
        push_tag(html, "p", body);
    }
    if !card.tags.is_empty() {
        push_tags(html, &card.tags);
    }
    html.push_str("</article>");
}

use crate::dom::escape_html;
use island_core::{Label, LabelKind};
use web_sys as web;

/// DOM text labels pinned over projected world points. The container is
/// rewritten only when the markup actually changes.
pub struct LabelLayer {
    container: Option<web::Element>,
    last_html: String,
}

impl LabelLayer {
    pub fn new(document: &web::Document) -> Self {
        let container = document.get_element_by_id("labels");
        if container.is_none() {
            log::warn!("[labels] missing #labels; world labels disabled");
        }
        Self {
            container,
            last_html: String::new(),
        }
    }

    pub fn update(&mut self, labels: &[Label]) {
        let Some(container) = &self.container else {
            return;
        };
        let html = labels_html(labels);
        if html != self.last_html {
            container.set_inner_html(&html);
            self.last_html = html;
        }
    }
}

// Labels arrive far to near, so document order already stacks the nearest on top.
fn labels_html(labels: &[Label]) -> String {
    let mut html = String::new();
    for label in labels {
        let class = match label.kind {
            LabelKind::Section { hovered: true, .. } => "label section hovered",
            LabelKind::Section { .. } => "label section",
            LabelKind::SubScene => "label subscene",
            LabelKind::SharkBubble => "label bubble",
        };
        html.push_str(&format!(
            "<div class=\"{}\" style=\"left:{:.2}%;top:{:.2}%\">{}</div>",
            class,
            label.uv.x * 100.0,
            label.uv.y * 100.0,
            escape_html(&label.text)
        ));
    }
    html
}

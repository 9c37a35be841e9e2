use crate::config::PageConfig;
use crate::dom::{ClickEvent, Document, ListenerId, Region};
use crate::models::project::ActiveFilter;
use crate::render::html_escape;

/// The filter bar's single live click listener.
/// Each render replaces it; clicks carrying any other id are stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterListener {
    pub id: ListenerId,
}

/// Draw one button per entry of `[all] ++ tags`, exactly one of them pressed,
/// and bind a fresh listener after removing `previous`.
/// Returns `None` when the page has no filter region.
pub fn render_filters(
    doc: &mut dyn Document,
    tags: &[String],
    active: &ActiveFilter,
    previous: Option<FilterListener>,
    config: &PageConfig,
) -> Option<FilterListener> {
    if let Some(old) = previous {
        doc.remove_click_listener(old.id);
    }
    if !doc.exists(Region::Filters) {
        return None;
    }

    let mut html = filter_button(&config.all_label, *active == ActiveFilter::All, true);
    for tag in tags {
        let pressed = matches!(active, ActiveFilter::Tag(t) if t == tag);
        html.push_str(&filter_button(tag, pressed, false));
    }
    doc.set_html(Region::Filters, &html);

    let id = doc.add_click_listener(Region::Filters)?;
    Some(FilterListener { id })
}

fn filter_button(label: &str, pressed: bool, sentinel: bool) -> String {
    let label = html_escape(label);
    format!(
        r#"<button class="filterbtn" type="button" aria-pressed="{}" data-tag="{}"{}>{}</button>"#,
        pressed,
        label,
        if sentinel { r#" data-filter="all""# } else { "" },
        label
    )
}

/// Resolve a click into the filter it picks. Stale listeners, clicks that
/// miss every button, and unknown tags pick nothing.
pub fn pick(
    event: &ClickEvent,
    listener: Option<&FilterListener>,
    tags: &[String],
) -> Option<ActiveFilter> {
    if listener.map(|l| l.id) != Some(event.listener) {
        return None;
    }
    let target = event.target.as_ref()?;
    if target.sentinel {
        return Some(ActiveFilter::All);
    }
    tags.iter()
        .find(|t| **t == target.tag)
        .map(|t| ActiveFilter::Tag(t.clone()))
}

//! Portfolio grid renderer.
//! One card per project that passes the active filter, in collection order.

use crate::config::PageConfig;
use crate::dom::{Document, Region};
use crate::models::project::{ActiveFilter, Project};
use crate::render::{html_escape, html_escape_opt};

/// Redraw the project grid for `active`. Returns the number of cards drawn,
/// or `None` when the page has no grid region.
pub fn render_grid(
    doc: &mut dyn Document,
    projects: &[Project],
    active: &ActiveFilter,
    config: &PageConfig,
) -> Option<usize> {
    let visible = active.apply(projects);
    let html: String = visible.iter().map(|p| project_card(p, config)).collect();
    if !doc.set_html(Region::ProjectsGrid, &html) {
        return None;
    }
    log::debug!(
        "Rendered {} of {} projects for filter {:?}",
        visible.len(),
        projects.len(),
        active
    );
    Some(visible.len())
}

/// Markup for a single project card.
pub fn project_card(p: &Project, config: &PageConfig) -> String {
    let tags: String = p
        .tags
        .iter()
        .map(|t| format!(r#"<span class="tag">{}</span>"#, html_escape(t)))
        .collect();
    let kpis: String = p
        .kpis
        .iter()
        .map(|k| format!(r#"<span class="kpi">{}</span>"#, html_escape(k)))
        .collect();
    // Display cap: extra actions are dropped, not an error.
    let actions: String = p
        .actions
        .iter()
        .take(config.max_actions)
        .map(|a| format!("<li>{}</li>", html_escape(a)))
        .collect();

    let kpi_strip = if p.kpis.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="project__kpis">{}</div>"#, kpis)
    };

    format!(
        r#"
    <article class="card project">
      <div class="card__content">
        <h3 class="project__title">{title}</h3>
        <div class="project__meta">{period}{sep}{context}</div>

        <ul class="bullets" style="margin-top:12px">{actions}</ul>

        {kpi_strip}
        <div class="tagrow">{tags}</div>
      </div>
    </article>
  "#,
        title = html_escape(&p.title),
        period = html_escape_opt(p.period.as_deref()),
        sep = html_escape(&config.meta_separator),
        context = html_escape_opt(p.context.as_deref()),
        actions = actions,
        kpi_strip = kpi_strip,
        tags = tags,
    )
}

/// Replace the grid with a single error card pointing at the data file.
pub fn render_load_error(doc: &mut dyn Document, config: &PageConfig) -> bool {
    doc.set_html(
        Region::ProjectsGrid,
        &format!(
            r#"<div class="card"><div class="card__content">Erreur : vérifie <code>{}</code>.</div></div>"#,
            html_escape(&config.data_path)
        ),
    )
}

use crate::core::path::resource_link;
use crate::core::RankedResult;
use crate::render::EMPTY_STATE;
use std::fmt::Write;

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const HEADER_CLOSE: &str = r#"<button class="close-btn" data-action="close">✕</button>"#;

fn card(result: &RankedResult, prefix: &str) -> String {
    let package = &result.package;
    let href = resource_link(prefix, &package.folder, &package.filename);

    format!(
        r#"<a href="{href}" class="search-result-card" target="_blank">
  <div class="result-header"><h4>{name}</h4><span class="pdf-badge">PDF</span></div>
  <div class="result-details"><span class="result-region">{region}</span><span class="result-separator">•</span><span class="result-duration">{duration}</span><span class="result-separator">•</span><span class="result-type">{kind}</span></div>
  <div class="result-cities"><strong>Cities:</strong> {cities}</div>
</a>
"#,
        href = escape(&href),
        name = escape(&package.name),
        region = escape(&package.region),
        duration = escape(&package.duration),
        kind = escape(&package.r#type),
        cities = escape(&package.cities.join(", ")),
    )
}

/// Overlay markup for a result list, or the empty state.
pub fn render_overlay(results: &[RankedResult], prefix: &str) -> String {
    let mut out = String::from(r#"<div class="search-results-container">"#);
    out.push('\n');

    if results.is_empty() {
        let _ = writeln!(
            out,
            r#"<div class="search-results-header"><h3>Search Results</h3>{}</div>"#,
            HEADER_CLOSE
        );
        let _ = writeln!(out, r#"<div class="no-results"><p>{}</p></div>"#, EMPTY_STATE);
    } else {
        let _ = writeln!(
            out,
            r#"<div class="search-results-header"><h3>Search Results <span class="result-count">({})</span></h3>{}</div>"#,
            results.len(),
            HEADER_CLOSE
        );
        out.push_str(r#"<div class="search-results-list">"#);
        out.push('\n');
        for result in results {
            out.push_str(&card(result, prefix));
        }
        out.push_str("</div>\n");
    }

    out.push_str("</div>\n");
    out
}

//! Result rendering: plain-text rows for the console and an HTML table for
//! the summary email.

use crate::types::CheckResult;

/// One column-aligned console line: status, site, URL.
pub fn text_row(result: &CheckResult) -> String {
    format!(
        "{:<8} {:<25} {:<45}",
        result.status.to_string(),
        result.site,
        result.url
    )
}

/// One HTML table row. The status cell is green for `OK`, red for every
/// other value.
pub fn html_row(result: &CheckResult) -> String {
    let color = if result.status.is_ok() { "green" } else { "red" };
    format!(
        "<tr style=\"height: 30px;\">\n\
         <td style=\"text-align: center; color: {}\">{}</td>\n\
         <td>{}</td>\n\
         <td>{}</td>\n\
         </tr>",
        color, result.status, result.site, result.url
    )
}

/// The full results table, body rows sorted by site name.
pub fn html_table(results: &[CheckResult]) -> String {
    let mut sorted: Vec<&CheckResult> = results.iter().collect();
    sorted.sort_by(|a, b| a.site.cmp(&b.site));

    let body: String = sorted.iter().map(|r| html_row(r)).collect();

    format!(
        "<table style=\"font-size: 12px; font-family: monospace\">\
         <thead><tr>\n\
         <th style=\"width: 15%\">STATUS</th>\n\
         <th style=\"width: 30%\">SITE</th>\n\
         <th style=\"width: 55%\">URL</th>\n\
         </tr></thead>\
         <tbody>{}</tbody>\
         </table>",
        body
    )
}

/// The complete email body wrapping the results table.
pub fn html_document(results: &[CheckResult]) -> String {
    format!("<html><body>{}</body></html>", html_table(results))
}

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::report::ShiftReport;
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

fn esc(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render a self-contained, print-ready HTML inspection sheet.
pub fn render_html(report: &ShiftReport) -> String {
    let mut meta = String::new();
    let mut meta_field = |label: &str, value: &str| {
        meta.push_str(&format!(
            "<div class=\"field\"><span class=\"label\">{}</span><span class=\"value\">{}</span></div>\n",
            esc(label),
            esc(value)
        ));
    };
    meta_field("Date", report.key.date());
    meta_field("Shift", report.key.shift());
    if let Some(station) = report.key.station() {
        meta_field("Station", station);
    }
    meta_field("Operator", &report.header.operator);
    meta_field("Product", &report.header.product);
    meta_field("Production order", &report.header.production_order);
    meta_field("Factory", &report.header.factory);

    let mut head_cells = String::from("<th class=\"item\">Item</th>");
    for col in &report.columns {
        head_cells.push_str(&format!("<th>{}</th>", esc(col)));
    }

    let mut body_rows = String::new();
    for row in &report.rows {
        body_rows.push_str(&format!("<tr><td class=\"item\">{}</td>", esc(&row.label)));
        for value in &row.values {
            if value.is_empty() {
                body_rows.push_str("<td class=\"empty\"></td>");
            } else {
                body_rows.push_str(&format!("<td>{}</td>", esc(value)));
            }
        }
        body_rows.push_str("</tr>\n");
    }

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Shift inspection sheet {key}</title>
<style>
:root {{
  --text: #212529;
  --muted: #6c757d;
  --border: #495057;
  --head-bg: #e9ecef;
  --empty-bg: #f8f9fa;
}}
* {{ margin: 0; padding: 0; box-sizing: border-box; }}
body {{
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  color: var(--text);
  padding: 1.5rem;
  max-width: 1100px;
  margin: 0 auto;
}}
h1 {{ font-size: 1.3rem; margin-bottom: 1rem; }}
.meta {{
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 0.25rem 1.5rem;
  margin-bottom: 1.25rem;
}}
.field .label {{
  color: var(--muted);
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  margin-right: 0.5rem;
}}
.field .value {{ font-weight: 600; }}
table {{
  width: 100%;
  border-collapse: collapse;
  font-size: 0.85rem;
}}
th, td {{
  border: 1px solid var(--border);
  padding: 0.35rem 0.5rem;
  text-align: center;
}}
th {{ background: var(--head-bg); }}
td.item, th.item {{ text-align: left; width: 30%; }}
td.empty {{ background: var(--empty-bg); }}
@media print {{
  body {{ padding: 0; }}
  @page {{ size: landscape; margin: 1cm; }}
}}
</style>
</head>
<body>
<h1>Shift inspection sheet</h1>
<div class="meta">
{meta}</div>
<table>
<thead><tr>{head_cells}</tr></thead>
<tbody>
{body_rows}</tbody>
</table>
</body>
</html>
"##,
        key = esc(&report.key.to_string()),
        meta = meta,
        head_cells = head_cells,
        body_rows = body_rows,
    )
}

pub(crate) fn export_html(report: &ShiftReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to HTML: {}", path.display()));

    fs::write(path, render_html(report))?;

    notify_export_success("HTML", path);
    Ok(())
}

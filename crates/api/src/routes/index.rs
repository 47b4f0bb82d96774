//! Landing page with the report form.

use std::fmt::Write as _;

use axum::{Router, response::Html, routing::get};
use fxreport_core::reports::CurrencyPair;

use crate::AppState;

const PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Currency Report</title>
<style>
body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
label { display: block; margin-top: 0.75rem; }
pre { white-space: pre-wrap; background: #f5f5f5; padding: 1rem; }
.error { color: #b00020; }
</style>
</head>
<body>
<h1>Currency Report</h1>
<form id="report-form" method="post" action="/generate_report">
<label>Currency pair
<select name="currency" required>
{options}</select>
</label>
<label>Start date <input type="date" name="start_date" required></label>
<label>End date <input type="date" name="end_date" required></label>
<p><button type="submit">Generate report</button></p>
</form>
<p id="status"></p>
<pre id="report" hidden></pre>
<p><button id="download" type="button" hidden>Download PDF</button></p>
<script>
const form = document.getElementById('report-form');
const status = document.getElementById('status');
const output = document.getElementById('report');
const download = document.getElementById('download');
let last = null;

form.addEventListener('submit', async (event) => {
  event.preventDefault();
  status.textContent = 'Generating...';
  status.className = '';
  output.hidden = true;
  download.hidden = true;
  const response = await fetch('/generate_report', {
    method: 'POST',
    body: new URLSearchParams(new FormData(form)),
  });
  const data = await response.json();
  if (!response.ok) {
    status.textContent = data.error;
    status.className = 'error';
    return;
  }
  last = data;
  status.textContent = '';
  output.textContent = data.report;
  output.hidden = false;
  download.hidden = false;
});

download.addEventListener('click', async () => {
  const response = await fetch('/download_pdf', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify(last),
  });
  if (!response.ok) {
    status.textContent = (await response.json()).error;
    status.className = 'error';
    return;
  }
  const url = URL.createObjectURL(await response.blob());
  const link = document.createElement('a');
  link.href = url;
  link.download = `currency_report_${last.currency}_${last.start_date}_to_${last.end_date}.pdf`;
  link.click();
  URL.revokeObjectURL(url);
});
</script>
</body>
</html>
"#;

/// Renders the form with one option per supported pair.
fn render_page() -> String {
    let mut options = String::new();
    for pair in CurrencyPair::ALL {
        let _ = writeln!(options, r#"<option value="{pair}">{pair}</option>"#);
    }
    PAGE.replace("{options}", &options)
}

async fn index() -> Html<String> {
    Html(render_page())
}

/// Creates the index route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

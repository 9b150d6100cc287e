//! Server-rendered HTML pages. Deliberately spartan — the service's value is
//! the pipeline, not the styling.

use axum::http::StatusCode;

use crate::store::RoastRecord;

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} — RoastRank</title>
<style>
body {{ font-family: system-ui, sans-serif; max-width: 640px; margin: 3rem auto; padding: 0 1rem; }}
h1 {{ font-size: 1.6rem; }}
.score {{ font-size: 2.4rem; font-weight: bold; }}
.section {{ margin: 1rem 0; white-space: pre-line; }}
table {{ border-collapse: collapse; width: 100%; }}
td, th {{ padding: 0.4rem 0.6rem; text-align: left; border-bottom: 1px solid #ddd; }}
nav a {{ margin-right: 1rem; }}
</style>
</head>
<body>
<nav><a href="/">Upload</a><a href="/leaderboard">Leaderboard</a></nav>
{body}
</body>
</html>"#
    )
}

pub fn index_page() -> String {
    layout(
        "Roast my resume",
        r#"<h1>RoastRank</h1>
<p>Upload your resume. Get roasted. Maybe learn something.</p>
<form action="/upload" method="post" enctype="multipart/form-data">
  <p><input type="file" name="file" accept=".pdf,.docx,.txt" required></p>
  <p>
    <label><input type="radio" name="mode" value="quick" checked> Quick roast</label>
    <label><input type="radio" name="mode" value="full"> Full roast</label>
  </p>
  <p><button type="submit">Roast me</button></p>
</form>"#,
    )
}

pub fn result_page(record: &RoastRecord) -> String {
    let mut body = format!(
        "<h1>Roast for {}</h1>\n<p class=\"score\">{}/100</p>\n<p class=\"section\"><strong>{}</strong></p>\n",
        escape_html(&record.candidate_name),
        record.score,
        escape_html(&record.headline),
    );
    for section in [&record.overview, &record.detail] {
        if let Some(text) = section {
            body.push_str(&format!(
                "<p class=\"section\">{}</p>\n",
                escape_html(text)
            ));
        }
    }
    if let Some(punchline) = &record.punchline {
        body.push_str(&format!(
            "<p class=\"section\"><em>{}</em></p>\n",
            escape_html(punchline)
        ));
    }
    layout("Your roast", &body)
}

pub fn duplicate_page(candidate_name: &str) -> String {
    let body = format!(
        "<h1>Already roasted</h1>\n<p>We have already roasted <strong>{}</strong>. \
         One roast per candidate — check the <a href=\"/leaderboard\">leaderboard</a>.</p>",
        escape_html(candidate_name)
    );
    layout("Already roasted", &body)
}

pub fn leaderboard_page(records: &[RoastRecord]) -> String {
    let mut rows = String::new();
    for (rank, record) in records.iter().enumerate() {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            rank + 1,
            escape_html(&record.candidate_name),
            record.score,
            escape_html(&record.headline),
        ));
    }
    let body = if records.is_empty() {
        "<h1>Leaderboard</h1>\n<p>No roasts yet. Be the first victim.</p>".to_string()
    } else {
        format!(
            "<h1>Leaderboard</h1>\n<table>\n<tr><th>#</th><th>Candidate</th><th>Score</th><th>Headline</th></tr>\n{rows}</table>"
        )
    };
    layout("Leaderboard", &body)
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        "<h1>That didn't work</h1>\n<p>{}</p>\n<p><a href=\"/\">Try again</a></p>",
        escape_html(message)
    );
    layout(&format!("Error {}", status.as_u16()), &body)
}

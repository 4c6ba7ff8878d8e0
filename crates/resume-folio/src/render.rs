//! HTML rendering of the portfolio page

use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

use crate::types::Profile;

/// Render the portfolio page for a profile
///
/// All profile text is escaped. Link fields become anchors only when they
/// hold an http(s) URL; otherwise the raw text is shown.
pub fn render_portfolio(profile: &Profile, photo_url: &str) -> String {
    let mut html = String::with_capacity(4096);

    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <link rel="stylesheet" href="/static/style.css">
</head>
<body>
  <header class="hero slide-in">
    <img class="photo" src="{photo}" alt="{name}">
    <h1>{name}</h1>
"#,
        title = encode_text(&profile.title),
        photo = encode_double_quoted_attribute(photo_url),
        name = encode_text(&profile.name),
    );

    if !profile.summary.is_empty() {
        let _ = writeln!(html, "    <p class=\"summary\">{}</p>", encode_text(&profile.summary));
    }

    let links: Vec<String> = [("LinkedIn", &profile.linkedin), ("GitHub", &profile.github)]
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(label, value)| render_link(label, value))
        .collect();
    if !links.is_empty() {
        let _ = writeln!(html, "    <nav class=\"links\">{}</nav>", links.join(" "));
    }
    html.push_str("  </header>\n  <main>\n");

    render_list(&mut html, "projects", "Projects", &profile.projects);
    render_list(&mut html, "details", "More", &profile.paragraphs);

    html.push_str(
        "  </main>\n  <script src=\"/static/script.js\"></script>\n</body>\n</html>\n",
    );
    html
}

fn render_link(label: &str, value: &str) -> String {
    if value.starts_with("http://") || value.starts_with("https://") {
        format!(
            "<a href=\"{}\" rel=\"noopener\" target=\"_blank\">{}</a>",
            encode_double_quoted_attribute(value),
            label
        )
    } else {
        format!("<span>{}: {}</span>", label, encode_text(value))
    }
}

fn render_list(html: &mut String, class: &str, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(html, "    <section class=\"{} slide-in\">", class);
    let _ = writeln!(html, "      <h2>{}</h2>", heading);
    html.push_str("      <ul>\n");
    for item in items {
        let _ = writeln!(html, "        <li>{}</li>", encode_text(item));
    }
    html.push_str("      </ul>\n    </section>\n");
}

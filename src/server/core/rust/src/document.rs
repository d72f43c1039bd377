/* src/server/core/rust/src/document.rs */

use serde_json::{Map, Value};

use crate::loaders::content::ARTICLE_KEY;

/// Inputs of the fixed HTML shell every page is served in.
pub struct Document<'a> {
  pub lang: Option<&'a str>,
  pub title: &'a str,
  /// Pre-rendered HTML placed inside the root element, not escaped.
  pub body: &'a str,
  pub data_id: &'a str,
  pub data: &'a Value,
}

pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      _ => out.push(ch),
    }
  }
  out
}

/// Make serialized JSON safe to embed inside `<script>`.
///
/// `<`, `>` and `&` only occur inside JSON strings, where the `\uXXXX` form
/// decodes to the same value, so `</script>` can never appear in the output.
/// U+2028/U+2029 are escaped for older JS parsers.
pub fn escape_json_for_script(json: &str) -> String {
  let mut out = String::with_capacity(json.len());
  for ch in json.chars() {
    match ch {
      '<' => out.push_str("\\u003c"),
      '>' => out.push_str("\\u003e"),
      '&' => out.push_str("\\u0026"),
      '\u{2028}' => out.push_str("\\u2028"),
      '\u{2029}' => out.push_str("\\u2029"),
      _ => out.push(ch),
    }
  }
  out
}

/// Title of the first loader value that carries one.
pub fn page_title(data: &Map<String, Value>) -> Option<&str> {
  data.values().find_map(|v| v.get("title").and_then(Value::as_str))
}

/// Rendered article HTML when the page loaded an article, empty otherwise.
pub fn page_body(data: &Map<String, Value>) -> &str {
  data.get(ARTICLE_KEY).and_then(|a| a.get("body")).and_then(Value::as_str).unwrap_or_default()
}

pub fn render_document(doc: &Document<'_>) -> String {
  let json = serde_json::to_string(doc.data).unwrap_or_else(|_| "{}".to_string());
  let lang_attr = doc.lang.map(|l| format!(r#" lang="{}""#, escape_html(l))).unwrap_or_default();
  format!(
    concat!(
      "<!DOCTYPE html><html{lang}><head><meta charset=\"utf-8\">",
      "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
      "<title>{title}</title></head>",
      "<body><main id=\"__waypoint\">{body}</main>",
      "<script id=\"{data_id}\" type=\"application/json\">{json}</script></body></html>",
    ),
    lang = lang_attr,
    title = escape_html(doc.title),
    body = doc.body,
    data_id = escape_html(doc.data_id),
    json = escape_json_for_script(&json),
  )
}

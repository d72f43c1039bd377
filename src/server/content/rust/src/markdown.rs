/* src/server/content/rust/src/markdown.rs */

use pulldown_cmark::{Options, Parser, html};

const FENCE: &str = "+++";

fn options() -> Options {
  let mut opts = Options::empty();
  opts.insert(Options::ENABLE_TABLES);
  opts.insert(Options::ENABLE_FOOTNOTES);
  opts.insert(Options::ENABLE_STRIKETHROUGH);
  opts.insert(Options::ENABLE_TASKLISTS);
  opts.insert(Options::ENABLE_HEADING_ATTRIBUTES);
  opts
}

pub fn render_markdown(src: &str) -> String {
  let parser = Parser::new_ext(src, options());
  let mut out = String::with_capacity(src.len() * 3 / 2);
  html::push_html(&mut out, parser);
  out
}

/// Split a document into its `+++` front matter and markdown body.
/// Returns `None` when the document does not open with a complete fence pair.
pub fn split_front_matter(text: &str) -> Option<(&str, &str)> {
  let text = text.strip_prefix('\u{feff}').unwrap_or(text);
  let rest = text.strip_prefix(FENCE)?;
  let rest = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))?;

  let mut offset = 0;
  for line in rest.split_inclusive('\n') {
    if line.trim_end() == FENCE {
      let front = &rest[..offset];
      let body = &rest[offset + line.len()..];
      return Some((front, body));
    }
    offset += line.len();
  }
  None
}

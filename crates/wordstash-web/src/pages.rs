//! HTML rendering for the words page.
//!
//! The page is a plain table built in code; every word cell links to the
//! per-word redirect path so the browser lands on the online dictionary.

use wordstash_core::SummaryRow;

/// Escape text for inclusion in HTML body or attribute context.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the full words page.
pub fn render_words_page(rows: &[SummaryRow]) -> String {
    let mut body = String::new();
    body.push_str(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Words</title>\n\
         <style>\n\
         body { font-family: sans-serif; margin: 2em; }\n\
         table { border-collapse: collapse; }\n\
         th, td { border: 1px solid #ccc; padding: 0.3em 0.8em; text-align: left; }\n\
         </style>\n\
         </head>\n\
         <body>\n\
         <h1>Words</h1>\n\
         <table>\n\
         <tr><th>Word</th><th>Added Count</th><th>Lookup Count</th><th>Translation</th></tr>\n",
    );
    for row in rows {
        let word = escape_html(&row.word);
        body.push_str(&format!(
            "<tr><td><a href=\"/word/{word}\">{word}</a></td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            row.added_count,
            row.lookup_count,
            escape_html(&row.translation),
        ));
    }
    body.push_str("</table>\n</body>\n</html>\n");
    body
}

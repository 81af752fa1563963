//! Shorthand placeholders for header/footer HTML
//!
//! Lets callers write `Page [page] of [pages]` instead of the print engine's
//! magic class spans.
//!
//! | Placeholder | Expands to                          |
//! |-------------|-------------------------------------|
//! | `[page]`    | `<span class="pageNumber"></span>`  |
//! | `[pages]`   | `<span class="totalPages"></span>`  |
//! | `[title]`   | `<span class="title"></span>`       |
//! | `[url]`     | `<span class="url"></span>`         |
//! | `[date]`    | fixed date text, or `<span class="date"></span>` |
//! | `[br]`      | `<br>`                              |

/// Expand placeholders in `text`
///
/// `date` replaces `[date]` verbatim when given; otherwise the engine's own
/// print date is used. Unknown bracketed text is left untouched.
pub fn expand_placeholders(text: &str, date: Option<&str>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('[') {
        out.push_str(&rest[..start]);
        let candidate = &rest[start..];

        let expanded = candidate
            .find(']')
            .map(|end| &candidate[..=end])
            .and_then(|token| expand_token(token, date).map(|html| (token.len(), html)));

        match expanded {
            Some((token_len, html)) => {
                out.push_str(&html);
                rest = &candidate[token_len..];
            }
            None => {
                // Not a placeholder here; a real one may still start inside.
                out.push('[');
                rest = &candidate[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn expand_token(token: &str, date: Option<&str>) -> Option<String> {
    let span = |class: &str| format!("<span class=\"{}\"></span>", class);

    match token {
        "[page]" => Some(span("pageNumber")),
        "[pages]" => Some(span("totalPages")),
        "[title]" => Some(span("title")),
        "[url]" => Some(span("url")),
        "[date]" => Some(date.map(str::to_string).unwrap_or_else(|| span("date"))),
        "[br]" => Some("<br>".to_string()),
        _ => None,
    }
}

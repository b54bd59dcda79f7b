//! Textual HTML minification for cached article bodies.
//!
//! Cached records hold extracted article markup verbatim from the
//! browser, which is whitespace-heavy. Minification here is purely
//! textual: strip comments, collapse whitespace runs, normalize the
//! doctype. No DOM is built.

/// Minify extracted article markup.
pub fn minify(html: &str) -> String {
    let stripped = strip_comments(html);
    let collapsed = collapse_whitespace(&stripped);
    normalize_doctype(&collapsed)
}

/// Remove `<!-- ... -->` comments. An unterminated comment swallows the
/// rest of the input, matching how browsers treat it.
fn strip_comments(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(start) = rest.find("<!--") {
        out.push_str(&rest[..start]);
        match rest[start + 4..].find("-->") {
            Some(end) => rest = &rest[start + 4 + end + 3..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

/// Collapse every whitespace run to a single space and trim the ends.
fn collapse_whitespace(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_run = false;
    for c in html.chars() {
        if c.is_whitespace() {
            in_run = true;
        } else {
            if in_run && !out.is_empty() {
                out.push(' ');
            }
            in_run = false;
            out.push(c);
        }
    }
    out
}

/// Rewrite any leading doctype declaration to `<!DOCTYPE html>`.
fn normalize_doctype(html: &str) -> String {
    let lower = html.to_ascii_lowercase();
    if !lower.starts_with("<!doctype") {
        return html.to_string();
    }
    match html.find('>') {
        Some(end) => format!("<!DOCTYPE html>{}", &html[end + 1..]),
        None => html.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(minify("<p>a   b\n\t c</p>"), "<p>a b c</p>");
    }

    #[test]
    fn test_trims_ends() {
        assert_eq!(minify("  <p>a</p>\n"), "<p>a</p>");
    }

    #[test]
    fn test_strips_comments() {
        assert_eq!(minify("<p>a</p><!-- hidden --><p>b</p>"), "<p>a</p><p>b</p>");
    }

    #[test]
    fn test_unterminated_comment_swallows_rest() {
        assert_eq!(minify("<p>a</p><!-- oops"), "<p>a</p>");
    }

    #[test]
    fn test_normalizes_doctype() {
        assert_eq!(
            minify("<!doctype HTML PUBLIC \"-//W3C//DTD HTML 4.01//EN\"><p>a</p>"),
            "<!DOCTYPE html><p>a</p>"
        );
    }

    #[test]
    fn test_plain_markup_untouched() {
        assert_eq!(minify("<p>a b</p>"), "<p>a b</p>");
    }
}

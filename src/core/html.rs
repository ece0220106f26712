// src/core/html.rs
// Just enough HTML scanning for highlight snippets. No DOM.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Text between the end of the first `open_pat…>` and the following `close_pat`, case-insensitive.
pub fn slice_between_ci<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    let lc = to_lower(s);
    let open = to_lower(open_pat);
    let close = to_lower(close_pat);
    let o = lc.find(&open)?;
    let after = s[o..].find('>')? + o + 1;
    let cr = lc[after..].find(&close)?;
    Some(&s[after..after + cr])
}

/// Inner HTML of the first `<tag>` element, if any.
pub fn first_element_inner<'a>(s: &'a str, tag: &str) -> Option<&'a str> {
    let open = join!("<", tag);
    let close = join!("</", tag, ">");
    slice_between_ci(s, &open, &close)
}

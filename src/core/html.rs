// src/core/html.rs
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Next `<o ...> ... c` block at or after `from`, case-insensitive.
/// Returns byte offsets `(start_of_open_tag, end_of_close_tag)`.
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

/// All `<tag ...>...</tag>` blocks in order. No nesting support.
pub fn tag_blocks<'a>(s: &'a str, tag: &str) -> Vec<&'a str> {
    let open = format!("<{tag}");
    let close = format!("</{tag}>");
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((b, e)) = next_tag_block_ci(s, &open, &close, pos) {
        // `<p` also matches `<pre`; require a delimiter after the name
        let after = s.as_bytes().get(b + open.len()).copied();
        if matches!(after, Some(b'>' | b' ' | b'\t' | b'\r' | b'\n' | b'/')) {
            out.push(&s[b..e]);
            pos = e;
        } else {
            pos = b + open.len();
        }
    }
    out
}

/// The opening tag of a block, e.g. `<div class="x">`.
pub fn open_tag(block: &str) -> &str {
    match block.find('>') {
        Some(gt) => &block[..=gt],
        None => block,
    }
}

/// Attribute value from an opening tag, quotes removed. Case-insensitive name.
pub fn attr<'a>(open: &'a str, name: &str) -> Option<&'a str> {
    let lc = to_lower(open);
    let needle = format!("{}=", to_lower(name));
    let mut from = 0usize;
    loop {
        let hit = lc[from..].find(&needle)? + from;
        // must be a whole attribute name
        let prev = lc.as_bytes().get(hit.wrapping_sub(1)).copied();
        if hit > 0 && !matches!(prev, Some(b' ' | b'\t' | b'\r' | b'\n')) {
            from = hit + needle.len();
            continue;
        }
        let val = &open[hit + needle.len()..];
        let (quote, start_off) = match val.as_bytes().first() {
            Some(b'"') => ('"', 1),
            Some(b'\'') => ('\'', 1),
            _ => ('\0', 0),
        };
        let end = if quote != '\0' {
            val[start_off..].find(quote).map(|e| start_off + e)
        } else {
            val.find(|c: char| c.is_ascii_whitespace() || c == '>')
        }
        .unwrap_or(val.len());
        return Some(&val[start_off..end]);
    }
}

/// Bare boolean attribute (`<button disabled>`), case-insensitive.
pub fn has_bare_attr(open: &str, name: &str) -> bool {
    // blank out quoted values so `class="a disabled"` is not a match
    let mut unquoted = String::with_capacity(open.len());
    let mut quote: Option<char> = None;
    for ch in open.chars() {
        match (quote, ch) {
            (None, '"' | '\'') => { quote = Some(ch); unquoted.push(ch); }
            (Some(q), c) if c == q => { quote = None; unquoted.push(ch); }
            (Some(_), _) => {}
            (None, c) => unquoted.push(c),
        }
    }
    let lc = to_lower(&unquoted);
    let name = to_lower(name);
    lc.trim_start_matches('<')
        .trim_end_matches('>')
        .trim_end_matches('/')
        .split_ascii_whitespace()
        .skip(1)
        .any(|tok| tok == name || tok.starts_with(&format!("{name}=")))
}

/// Whitespace-separated class list contains `class`.
pub fn has_class(open: &str, class: &str) -> bool {
    attr(open, "class").is_some_and(|v| v.split_ascii_whitespace().any(|c| c == class))
}

/// Visible text: tags dropped, entities decoded, whitespace collapsed.
pub fn text_content<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    let decoded = super::sanitize::normalize_entities(&out);
    super::sanitize::normalize_ws(&super::sanitize::strip_invisible(&decoded))
}

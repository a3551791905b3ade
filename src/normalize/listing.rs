use serde_json::Value;
use tracing::warn;

/// Extract the live contest list from the "my contests" HTML page.
///
/// The page embeds a script assignment `var contests = { ... live: [...],
/// upcoming: [...], history: [...] };` whose object literal is not valid
/// JSON: top-level keys are unquoted and a `// no pre-load` comment may
/// appear. The literal is repaired (bare keys quoted, line comments
/// stripped) and parsed, and the `live` array is returned.
///
/// Returns `None` when the assignment is absent or unparseable — the page
/// structure changed or the contest list is empty.
pub fn parse_contest_listing(html: &str) -> Option<Vec<Value>> {
    const MARKER: &str = "var contests = ";

    let start = html.find(MARKER)? + MARKER.len();
    let literal = object_literal(&html[start..])?;
    let repaired = repair_object_literal(&literal);

    let parsed: Value = match serde_json::from_str(&repaired) {
        Ok(v) => v,
        Err(e) => {
            warn!("contests variable found but not parseable: {e}");
            return None;
        }
    };

    parsed.get("live")?.as_array().cloned()
}

/// The balanced `{ ... }` span starting at the first brace of `src`,
/// string-aware so braces inside quoted values do not affect nesting.
fn object_literal(src: &str) -> Option<String> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    let mut out = String::new();
    let mut started = false;

    for c in src.chars() {
        if !started {
            if c == '{' {
                started = true;
            } else if !c.is_whitespace() {
                return None;
            } else {
                continue;
            }
        }
        out.push(c);
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(out);
                }
            }
            _ => {}
        }
    }
    None
}

/// Repair a JavaScript object literal into valid JSON: quote bare keys
/// (`live:` → `"live":`) and drop `//` line comments. Content inside
/// string values is left untouched.
fn repair_object_literal(src: &str) -> String {
    let chars: Vec<char> = src.chars().collect();
    let mut out = String::with_capacity(src.len() + 32);
    let mut i = 0;
    let mut in_string = false;
    // last significant char emitted; a bare word is a key only after '{' or ','
    let mut prev = '\0';

    while i < chars.len() {
        let c = chars[i];

        if in_string {
            out.push(c);
            if c == '\\' {
                if let Some(&next) = chars.get(i + 1) {
                    out.push(next);
                    i += 2;
                    continue;
                }
            } else if c == '"' {
                in_string = false;
            }
            i += 1;
            continue;
        }

        if c == '"' {
            in_string = true;
            out.push(c);
            prev = c;
            i += 1;
        } else if c == '/' && chars.get(i + 1) == Some(&'/') {
            while i < chars.len() && chars[i] != '\n' {
                i += 1;
            }
        } else if c.is_ascii_alphabetic() || c == '_' || c == '$' {
            let start = i;
            while i < chars.len()
                && (chars[i].is_ascii_alphanumeric() || chars[i] == '_' || chars[i] == '$')
            {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let mut j = i;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            let is_key = chars.get(j) == Some(&':') && matches!(prev, '{' | ',');
            if is_key {
                out.push('"');
                out.push_str(&word);
                out.push('"');
                prev = '"';
            } else {
                out.push_str(&word);
                prev = chars[i - 1];
            }
        } else {
            out.push(c);
            if !c.is_whitespace() {
                prev = c;
            }
            i += 1;
        }
    }
    out
}

/// Turn an arbitrary extension name into a file-name token.
///
/// Every run of characters outside `[A-Za-z0-9._-]` collapses into a single
/// `-`, leading and trailing `-` are stripped and the result is lowercased.
pub fn sanitize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_run = false;

    for c in name.chars() {
        if is_safe(c) {
            out.push(c.to_ascii_lowercase());
            in_run = false;
        } else if !in_run {
            out.push('-');
            in_run = true;
        }
    }

    out.trim_matches('-').to_string()
}

fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}

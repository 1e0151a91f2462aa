//! String and list helpers used when assembling build scripts.

/// Separator used when callers have no preference
pub const DEFAULT_SEPARATOR: &str = " ";

/// Join `items` into one string with `separator` between each pair.
pub fn join<S: AsRef<str>>(items: &[S], separator: &str) -> String {
    let mut out = String::new();
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            out.push_str(separator);
        }
        out.push_str(item.as_ref());
    }
    out
}

/// Split `text` on `separator`, dropping segments that are blank once
/// trailing whitespace is removed. Kept segments are returned as-is.
///
/// An empty separator splits on runs of whitespace.
pub fn split_nonempty(text: &str, separator: &str) -> Vec<String> {
    if separator.is_empty() {
        return text.split_whitespace().map(str::to_string).collect();
    }

    text.split(separator)
        .filter(|segment| !segment.trim_end().is_empty())
        .map(str::to_string)
        .collect()
}

/// Build a small Bash snippet that echoes each variable as `NAME=value`.
///
/// The snippet opens with two blank lines; every name becomes
/// `echo "NAME"="${NAME}"`. Names are substituted literally, so they
/// must already be valid shell identifiers.
pub fn laundry_list<S: AsRef<str>>(names: &[S]) -> String {
    let mut out = String::from("\n\n");
    for name in names {
        let name = name.as_ref();
        out.push_str(&format!("echo \"{}\"=\"${{{}}}\"\n", name, name));
    }
    out
}

// Path strings are turned into a starting point plus the raw segments to walk.
// The walk itself happens in `Filesystem::resolve`, which needs the tree.

/// `~` expands to this directory.
pub const HOME: [&str; 2] = ["home", "kuan"];

/// Split `path` into the segments it starts from and the segments left to walk.
///
/// Absolute paths start at the root, `~` and `~/...` start at [HOME], anything
/// else starts at `cwd`. Empty segments are dropped, so `//a/b/` is `/a/b`.
pub fn split<'a>(cwd: &[String], path: &'a str) -> (Vec<String>, Vec<&'a str>) {
    let (start, rest) = if let Some(rest) = path.strip_prefix('/') {
        (Vec::new(), rest)
    } else if path == "~" {
        (home(), "")
    } else if let Some(rest) = path.strip_prefix("~/") {
        (home(), rest)
    } else {
        (cwd.to_vec(), path)
    };
    let segments = rest.split('/').filter(|s| !s.is_empty()).collect();
    (start, segments)
}

pub fn home() -> Vec<String> {
    HOME.iter().map(|s| String::from(*s)).collect()
}

/// Render segments as an absolute path. The root is `/`.
pub fn render(segments: &[String]) -> String {
    if segments.is_empty() {
        return String::from("/");
    }
    format!("/{}", segments.join("/"))
}

/// `true` if `segments` is `prefix` or lies below it.
pub fn is_under(segments: &[String], prefix: &[&str]) -> bool {
    segments.len() >= prefix.len()
        && segments.iter().zip(prefix).all(|(a, b)| a == b)
}

/// A single name usable for a new child of the current directory.
pub fn valid_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cwd(p: &[&str]) -> Vec<String> {
        p.iter().map(|s| String::from(*s)).collect()
    }

    #[test]
    fn absolute_ignores_cwd() {
        let (start, rest) = split(&cwd(&["portfolio"]), "//home//kuan/");
        assert!(start.is_empty());
        assert_eq!(rest, vec!["home", "kuan"]);
    }

    #[test]
    fn tilde_starts_at_home() {
        let (start, rest) = split(&[], "~/images");
        assert_eq!(start, home());
        assert_eq!(rest, vec!["images"]);
        let (start, rest) = split(&[], "~");
        assert_eq!(start, home());
        assert!(rest.is_empty());
    }

    #[test]
    fn relative_keeps_dots_for_the_walk() {
        let (start, rest) = split(&cwd(&["home"]), "../portfolio/./x");
        assert_eq!(start, cwd(&["home"]));
        assert_eq!(rest, vec!["..", "portfolio", ".", "x"]);
    }

    #[test]
    fn render_root_and_nested() {
        assert_eq!(render(&[]), "/");
        assert_eq!(render(&cwd(&["home", "kuan"])), "/home/kuan");
    }

    #[test]
    fn under_prefix() {
        assert!(is_under(&cwd(&["notes_for_kuan"]), &["notes_for_kuan"]));
        assert!(is_under(&cwd(&["notes_for_kuan", "a"]), &["notes_for_kuan"]));
        assert!(!is_under(&cwd(&["home"]), &["notes_for_kuan"]));
        assert!(!is_under(&[], &["notes_for_kuan"]));
    }

    #[test]
    fn names() {
        assert!(valid_name("hello.txt"));
        assert!(!valid_name(""));
        assert!(!valid_name(".."));
        assert!(!valid_name("a/b"));
    }
}

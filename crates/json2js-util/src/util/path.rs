use std::path::{Component, Path, PathBuf};

/// Resolve `path` against `cwd` when it is relative, then lexically drop
/// `.` components and fold `..` into their parent.
///
/// Returns `None` only when a relative path is given without a working
/// directory to anchor it.
pub fn to_absolute(path: &str, cwd: Option<&Path>) -> Option<PathBuf> {
    let path = Path::new(path);
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd?.join(path)
    };
    Some(normalize(&joined))
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! assert_absolute {
        ($o:expr, $p:expr, $b:expr) => {
            assert_eq!(
                Path::new($o),
                to_absolute($p, Some(Path::new($b))).unwrap()
            );
        };
    }

    #[test]
    fn resolves_relative_paths_against_the_cwd() {
        assert_absolute!("/dir/a/b", "a/b", "/dir");
        assert_absolute!("/dir/a", "./a", "/dir");
        assert_absolute!("/a", "../a", "/dir");
        assert_absolute!("/dir/a", "./x/../a", "/dir");
    }

    #[test]
    fn absolute_paths_ignore_the_cwd() {
        assert_absolute!("/a/b", "/a/b", "/dir");
        assert_eq!(
            Path::new("/a/b"),
            to_absolute("/a/./b", None).unwrap()
        );
    }

    #[test]
    fn relative_path_without_a_cwd_is_unresolvable() {
        assert_eq!(to_absolute("a/b", None), None);
    }
}

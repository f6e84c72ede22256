use std::fs;
use std::path::{Component, Path, PathBuf};

use super::PathExpander;

/// Resolves user-supplied path strings against a base directory.
///
/// Never touches the process working directory and never fails: paths that
/// cannot be canonicalized (usually because they do not exist) are normalized
/// lexically instead. Callers check existence themselves.
#[derive(Clone, Default)]
pub struct PathResolver {
    expander: PathExpander,
}

impl PathResolver {
    pub fn new() -> Self {
        Self {
            expander: PathExpander::new(),
        }
    }

    pub fn resolve(&self, base: &Path, input: &str) -> PathBuf {
        if input.is_empty() {
            return base.to_path_buf();
        }

        let expanded = self
            .expander
            .expand(input)
            .unwrap_or_else(|_| PathBuf::from(input));

        // join() replaces the base when `expanded` is absolute
        let joined = base.join(expanded);
        fs::canonicalize(&joined).unwrap_or_else(|_| normalize(&joined))
    }
}

/// Folds `.` and `..` components without consulting the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other),
        }
    }
    out
}

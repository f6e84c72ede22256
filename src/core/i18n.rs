//! Translated user-facing strings.
//!
//! Tables are flat YAML maps from message key to text, one file per language
//! under `~/.expl/i18n`. The English table is compiled in and backs every key
//! a loaded table leaves out.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::config::ConfigPaths;

const BUILTIN_EN: &str = include_str!("../../i18n/en.yaml");

#[derive(Debug, Clone)]
pub struct Translations {
    table: HashMap<String, String>,
}

#[derive(Debug)]
pub enum I18nError {
    MissingAssets(PathBuf),
    NotFound(String, PathBuf),
    Parse(PathBuf, serde_yaml::Error),
    IoError(PathBuf, std::io::Error),
}

impl fmt::Display for I18nError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            I18nError::MissingAssets(target) => write!(
                f,
                "please, for your first run, start the shell next to the i18n folder so it can be installed to {}",
                target.display()
            ),
            I18nError::NotFound(lang, path) => {
                write!(f, "could not load translation for {} ({})", lang, path.display())
            }
            I18nError::Parse(path, e) => write!(f, "could not parse {}: {}", path.display(), e),
            I18nError::IoError(path, e) => write!(f, "{}: {}", path.display(), e),
        }
    }
}

impl std::error::Error for I18nError {}

impl Translations {
    /// The compiled-in English table.
    pub fn builtin() -> Self {
        Self {
            table: serde_yaml::from_str(BUILTIN_EN).unwrap_or_default(),
        }
    }

    /// Loads `<i18n_dir>/<language>.yaml` on top of the built-in table.
    pub fn load(paths: &ConfigPaths, language: &str) -> Result<Self, I18nError> {
        let path = paths.translation_file(language);
        if !path.is_file() {
            return Err(I18nError::NotFound(language.to_string(), path));
        }

        let content = fs::read_to_string(&path).map_err(|e| I18nError::IoError(path.clone(), e))?;
        let loaded: HashMap<String, String> =
            serde_yaml::from_str(&content).map_err(|e| I18nError::Parse(path.clone(), e))?;

        let mut translations = Self::builtin();
        translations.table.extend(loaded);
        tracing::debug!(language, path = %path.display(), "loaded translations");
        Ok(translations)
    }

    /// Text for `key`, or the key itself when no table has it.
    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        self.table.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Text for `key` with `{}` (sequential) and `{N}` (positional) placeholders filled.
    pub fn format(&self, key: &str, args: &[&str]) -> String {
        fill_placeholders(self.text(key), args)
    }
}

impl Default for Translations {
    fn default() -> Self {
        Self::builtin()
    }
}

pub fn fill_placeholders(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut next = 0;
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        if let Some(stripped) = after.strip_prefix('{') {
            out.push('{');
            rest = stripped;
            continue;
        }

        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let inner = &after[..close];
        let index = if inner.is_empty() {
            next += 1;
            Some(next - 1)
        } else {
            inner.parse::<usize>().ok()
        };

        match index.and_then(|i| args.get(i)) {
            Some(arg) => out.push_str(arg),
            None => out.push_str(&rest[open..open + close + 2]),
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

/// Copies the first existing source directory into `paths.i18n_dir` unless
/// it is already there.
pub fn ensure_installed(paths: &ConfigPaths, sources: &[PathBuf]) -> Result<(), I18nError> {
    if paths.i18n_dir.is_dir() {
        return Ok(());
    }

    let source = sources
        .iter()
        .find(|dir| dir.is_dir())
        .ok_or_else(|| I18nError::MissingAssets(paths.i18n_dir.clone()))?;

    copy_dir(source, &paths.i18n_dir)?;
    tracing::info!(
        from = %source.display(),
        to = %paths.i18n_dir.display(),
        "installed translations"
    );
    Ok(())
}

/// `./i18n`, then `i18n` next to the executable.
pub fn default_sources() -> Vec<PathBuf> {
    let mut sources = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        sources.push(cwd.join("i18n"));
    }
    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        sources.push(dir.join("i18n"));
    }
    sources
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> I18nError {
    let path = path.to_path_buf();
    move |e| I18nError::IoError(path, e)
}

fn copy_dir(from: &Path, to: &Path) -> Result<(), I18nError> {
    fs::create_dir_all(to).map_err(io_err(to))?;
    for entry in fs::read_dir(from).map_err(io_err(from))? {
        let entry = entry.map_err(io_err(from))?;
        let target = to.join(entry.file_name());
        if entry.path().is_dir() {
            copy_dir(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target).map_err(io_err(&target))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const KEYS: [&str; 10] = [
        "about",
        "error",
        "errMissingErrCode",
        "errInvalidErrCode",
        "cdPathNotFound",
        "lsNotADir",
        "lsHeader",
        "lsDir",
        "lsFile",
        "unknownCmd",
    ];

    #[test]
    fn test_builtin_has_every_key() {
        let translations = Translations::builtin();
        for key in KEYS {
            assert_ne!(translations.text(key), key, "missing {}", key);
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(Translations::builtin().text("noSuchKey"), "noSuchKey");
    }

    #[test]
    fn test_load_overlays_builtin() {
        let tmp = TempDir::new().unwrap();
        let paths = ConfigPaths::with_base(tmp.path());
        fs::create_dir_all(&paths.i18n_dir).unwrap();
        fs::write(paths.translation_file("xx"), "error: \"chyba: \"\n").unwrap();

        let translations = Translations::load(&paths, "xx").unwrap();

        assert_eq!(translations.text("error"), "chyba: ");
        assert_eq!(translations.text("lsDir"), Translations::builtin().text("lsDir"));
    }

    #[test]
    fn test_load_missing_language() {
        let tmp = TempDir::new().unwrap();
        let paths = ConfigPaths::with_base(tmp.path());

        assert!(matches!(
            Translations::load(&paths, "zz"),
            Err(I18nError::NotFound(_, _))
        ));
    }

    #[test]
    fn test_fill_placeholders() {
        assert_eq!(fill_placeholders("(c) {} {}", &["2024", "me"]), "(c) 2024 me");
        assert_eq!(fill_placeholders("{1}-{0}", &["a", "b"]), "b-a");
        assert_eq!(fill_placeholders("{{x}", &[]), "{x}");
        assert_eq!(fill_placeholders("{} {}", &["only"]), "only {}");
        assert_eq!(fill_placeholders("open {", &["x"]), "open {");
    }

    #[test]
    fn test_about_template() {
        let about = Translations::builtin().format("about", &["2024", "Matto58", "url"]);
        let lines: Vec<&str> = about.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("2024 Matto58"));
        assert!(lines[2].ends_with("url"));
    }

    #[test]
    fn test_ensure_installed_copies_first_source() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("bundle");
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("en.yaml"), "error: \"E: \"\n").unwrap();
        let paths = ConfigPaths::with_base(tmp.path().join(".expl"));

        ensure_installed(&paths, &[tmp.path().join("missing"), source]).unwrap();

        assert!(paths.translation_file("en").is_file());
        let translations = Translations::load(&paths, "en").unwrap();
        assert_eq!(translations.text("error"), "E: ");
    }

    #[test]
    fn test_ensure_installed_without_assets() {
        let tmp = TempDir::new().unwrap();
        let paths = ConfigPaths::with_base(tmp.path().join(".expl"));

        assert!(matches!(
            ensure_installed(&paths, &[tmp.path().join("nope")]),
            Err(I18nError::MissingAssets(_))
        ));
    }

    #[test]
    fn test_ensure_installed_keeps_existing() {
        let tmp = TempDir::new().unwrap();
        let paths = ConfigPaths::with_base(tmp.path());
        fs::create_dir_all(&paths.i18n_dir).unwrap();

        assert!(ensure_installed(&paths, &[]).is_ok());
    }
}

use std::fs;
use std::io;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use super::{Command, CommandError, CommandResult, ExecContext};
use crate::core::format::{format_size, format_timestamp};
use crate::core::i18n::Translations;
use crate::highlight::ColorRole;
use crate::path::PathResolver;

/// One listed entry; `size` is `None` for directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
    pub size: Option<u64>,
    pub modified: SystemTime,
}

impl DirEntry {
    /// Type tag, size, date tag, time tag and name, unstyled.
    pub fn columns(&self, i18n: &Translations) -> [String; 5] {
        let kind = if self.is_dir { "lsDir" } else { "lsFile" };
        let size = self.size.map(format_size).unwrap_or_default();
        let (date, time) = format_timestamp(self.modified);
        [
            i18n.text(kind).to_string(),
            size,
            date,
            time,
            self.name.clone(),
        ]
    }
}

/// Regular files and directories in `dir`, sorted by name. Links are
/// followed; whatever is neither (dangling links, sockets, devices) is left out.
pub fn read_entries(dir: &Path) -> io::Result<Vec<DirEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let Ok(meta) = fs::metadata(entry.path()) else {
            continue;
        };
        if !meta.is_dir() && !meta.is_file() {
            continue;
        }

        entries.push(DirEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir: meta.is_dir(),
            size: meta.is_file().then(|| meta.len()),
            modified: meta.modified().unwrap_or(UNIX_EPOCH),
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

#[derive(Clone, Default)]
pub struct LsCommand {
    resolver: PathResolver,
}

impl LsCommand {
    pub fn new() -> Self {
        Self {
            resolver: PathResolver::new(),
        }
    }

    fn render_row(&self, entry: &DirEntry, ctx: &ExecContext<'_>) -> String {
        let role = if entry.is_dir {
            ColorRole::LsDir
        } else {
            ColorRole::LsFile
        };
        let colors = &ctx.config.colors;
        let [kind, size, date, time, name] = entry.columns(ctx.i18n);

        format!(
            "{}\t{}\t{}\t{}\t{}",
            ctx.painter.role(&kind, role, colors),
            size,
            date,
            time,
            ctx.painter.role(&name, role, colors)
        )
    }
}

impl Command for LsCommand {
    fn execute(
        &self,
        args: &[String],
        ctx: &mut ExecContext<'_>,
    ) -> Result<CommandResult, CommandError> {
        let dir = self
            .resolver
            .resolve(ctx.state.current_dir(), &args.join(" "));
        if !dir.is_dir() {
            return Err(CommandError::NotADirectory(dir));
        }

        let entries = read_entries(&dir)?;
        let mut listing = vec![ctx.painter.header(ctx.i18n.text("lsHeader"))];
        listing.extend(entries.iter().map(|entry| self.render_row(entry, ctx)));

        for line in listing {
            writeln!(ctx.out, "{}", line)?;
        }
        Ok(CommandResult::success())
    }
}

use crate::core::config::{ColorsConfig, PromptConfig};
use crate::core::state::ShellState;
use crate::highlight::{ColorRole, Painter};

/// Who and where the prompt says we are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user: String,
    pub host: String,
}

impl Identity {
    pub fn detect() -> Self {
        let host = hostname::get()
            .map(|h| h.to_string_lossy().into_owned())
            .unwrap_or_else(|_| "localhost".to_string());
        Self {
            user: whoami::username(),
            host,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    ExitCode(i32),
    User(String),
    Path(String),
}

/// Prompt pieces in display order: last exit code, `user@host`, directory.
/// Each one is switched on by its own setting; the exit code also needs a
/// command to have run.
pub fn segments(config: &PromptConfig, state: &ShellState, identity: &Identity) -> Vec<Segment> {
    let mut segments = Vec::new();
    if config.show_prev_cmd_exit_code {
        if let Some(code) = state.last_exit_code() {
            segments.push(Segment::ExitCode(code));
        }
    }
    if config.show_user {
        segments.push(Segment::User(format!("{}@{}", identity.user, identity.host)));
    }
    if config.show_path {
        segments.push(Segment::Path(state.current_dir().display().to_string()));
    }
    segments
}

pub fn render(
    segments: &[Segment],
    separator: &str,
    painter: &Painter,
    colors: &ColorsConfig,
) -> String {
    let mut prompt = String::new();
    for segment in segments {
        match segment {
            Segment::ExitCode(code) => prompt.push_str(&painter.exit_code(*code)),
            Segment::User(user) => {
                prompt.push_str(&painter.role(user, ColorRole::User, colors));
                prompt.push(' ');
            }
            Segment::Path(path) => {
                prompt.push_str(&painter.bold(path, ColorRole::Path.color(colors)));
            }
        }
    }
    prompt.push_str(separator);
    prompt
}

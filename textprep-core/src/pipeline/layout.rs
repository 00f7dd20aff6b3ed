use crate::types::Task;
use std::path::{Component, Path, PathBuf};

/// Maps input paths to artifact paths
///
/// The artifact is the input path with `.<suffix>` appended. With an output
/// root the input is re-rooted first: relative to the input root when it
/// lies below it, as given when it is relative without `..`, by file name
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    suffix: String,
    input_root: Option<PathBuf>,
    output_root: Option<PathBuf>,
}

impl OutputLayout {
    /// Artifacts next to their inputs, with the given suffix (no leading dot)
    pub fn new<S: Into<String>>(suffix: S) -> Self {
        Self {
            suffix: suffix.into(),
            input_root: None,
            output_root: None,
        }
    }

    /// Layout using the task's conventional suffix
    pub fn for_task(task: Task) -> Self {
        Self::new(task.suffix())
    }

    /// Directory that relative inputs were resolved against
    pub fn with_input_root<P: Into<PathBuf>>(mut self, root: Option<P>) -> Self {
        self.input_root = root.map(Into::into);
        self
    }

    /// Directory receiving all artifacts
    pub fn with_output_root<P: Into<PathBuf>>(mut self, root: Option<P>) -> Self {
        self.output_root = root.map(Into::into);
        self
    }

    /// Artifact suffix without the leading dot
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Output directory, if artifacts are re-rooted
    pub fn output_root(&self) -> Option<&Path> {
        self.output_root.as_deref()
    }

    /// Artifact path for `input`
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let base = match &self.output_root {
            None => input.to_path_buf(),
            Some(out) => {
                let relative = self
                    .input_root
                    .as_deref()
                    .and_then(|root| input.strip_prefix(root).ok())
                    .filter(|rel| !rel.as_os_str().is_empty() && stays_below(rel))
                    .or_else(|| (input.is_relative() && stays_below(input)).then_some(input))
                    .or_else(|| input.file_name().map(Path::new))
                    .unwrap_or(input);
                out.join(relative)
            }
        };

        let mut name = base.into_os_string();
        name.push(".");
        name.push(&self.suffix);
        PathBuf::from(name)
    }
}

/// Whether joining `rel` onto a directory stays inside it
fn stays_below(rel: &Path) -> bool {
    rel.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_appended_to_full_name() {
        let layout = OutputLayout::for_task(Task::Tag);
        assert_eq!(
            layout.output_path(Path::new("data/story.txt")),
            PathBuf::from("data/story.txt.pos")
        );
    }

    #[test]
    fn test_task_suffixes() {
        let input = Path::new("a.txt");
        assert_eq!(
            OutputLayout::for_task(Task::Segment).output_path(input),
            PathBuf::from("a.txt.sen")
        );
        assert_eq!(
            OutputLayout::for_task(Task::Parse).output_path(input),
            PathBuf::from("a.txt.tree")
        );
    }

    #[test]
    fn test_output_root_with_input_root() {
        let layout = OutputLayout::for_task(Task::Parse)
            .with_input_root(Some("/data/input"))
            .with_output_root(Some("/data/output"));
        assert_eq!(
            layout.output_path(Path::new("/data/input/books/a.txt")),
            PathBuf::from("/data/output/books/a.txt.tree")
        );
    }

    #[test]
    fn test_output_root_relative_input() {
        let layout = OutputLayout::for_task(Task::Tag).with_output_root(Some("out"));
        assert_eq!(
            layout.output_path(Path::new("sub/a.txt")),
            PathBuf::from("out/sub/a.txt.pos")
        );
    }

    #[test]
    fn test_output_root_parent_relative_input_uses_file_name() {
        let layout = OutputLayout::for_task(Task::Tag).with_output_root(Some("out"));
        assert_eq!(
            layout.output_path(Path::new("../a.txt")),
            PathBuf::from("out/a.txt.pos")
        );
        assert_eq!(
            layout.output_path(Path::new("sub/../../b.txt")),
            PathBuf::from("out/b.txt.pos")
        );
    }

    #[test]
    fn test_output_root_input_root_with_parent_components() {
        let layout = OutputLayout::for_task(Task::Tag)
            .with_input_root(Some("/data/input"))
            .with_output_root(Some("/out"));
        assert_eq!(
            layout.output_path(Path::new("/data/input/../secret/a.txt")),
            PathBuf::from("/out/a.txt.pos")
        );
    }

    #[test]
    fn test_output_root_absolute_input_outside_root() {
        let layout = OutputLayout::for_task(Task::Tag)
            .with_input_root(Some("/data/input"))
            .with_output_root(Some("/out"));
        assert_eq!(
            layout.output_path(Path::new("/elsewhere/a.txt")),
            PathBuf::from("/out/a.txt.pos")
        );
    }

    #[test]
    fn test_without_output_root_input_root_is_ignored() {
        let layout = OutputLayout::for_task(Task::Segment).with_input_root(Some("/data"));
        assert_eq!(
            layout.output_path(Path::new("/data/a.txt")),
            PathBuf::from("/data/a.txt.sen")
        );
        assert_eq!(layout.output_root(), None);
        assert_eq!(layout.suffix(), "sen");
    }
}

//! The post-run command template.

use std::{fmt, path::Path};

/// Token replaced with the generated file's absolute path in post-run arguments.
pub const FILE_TOKEN: &str = "$STRATAFILE";

/// A command run once per generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRun {
    /// Program to execute (looked up on `PATH`).
    pub program: String,
    /// Argument templates; may contain [`FILE_TOKEN`].
    pub args: Vec<String>,
}

impl PostRun {
    /// Build from a `post_run` array; `None` when empty.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    /// Arguments with every [`FILE_TOKEN`] replaced by `path`.
    pub fn args_for(&self, path: &Path) -> Vec<String> {
        let path = path.display().to_string();
        self.args
            .iter()
            .map(|arg| arg.replace(FILE_TOKEN, &path))
            .collect()
    }
}

impl fmt::Display for PostRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_argv_is_none() {
        assert!(PostRun::from_argv(&[]).is_none());
    }

    #[test]
    fn test_args_for_substitutes_token() {
        let post_run = PostRun::from_argv(&argv(&["rustfmt", "--edition", "2024", "$STRATAFILE"]))
            .unwrap();

        assert_eq!(post_run.program, "rustfmt");
        assert_eq!(
            post_run.args_for(Path::new("/tmp/out/users.rs")),
            argv(&["--edition", "2024", "/tmp/out/users.rs"])
        );
    }

    #[test]
    fn test_token_inside_argument() {
        let post_run = PostRun::from_argv(&argv(&["sh", "-c", "cat $STRATAFILE"])).unwrap();

        assert_eq!(
            post_run.args_for(Path::new("/a/b.rs")),
            argv(&["-c", "cat /a/b.rs"])
        );
        assert_eq!(post_run.to_string(), "sh -c cat $STRATAFILE");
    }
}

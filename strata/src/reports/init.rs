//! Init command report data structures.

use std::path::{Path, PathBuf};

use super::output::{Output, Report};

/// Report data from writing the starter files.
#[derive(Debug)]
pub struct InitReport {
    /// Directory the files were written to.
    pub dir: PathBuf,
    /// Files written.
    pub created: Vec<String>,
    /// Files that already existed and were left alone.
    pub kept: Vec<String>,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        if !self.created.is_empty() {
            out.section("Created");
            for file in &self.created {
                out.added_item(file);
            }
        }
        if !self.kept.is_empty() {
            out.section("Already present, kept");
            for file in &self.kept {
                out.list_item(file);
            }
        }

        out.newline();
        out.section("Next steps");
        if self.dir != Path::new(".") {
            out.list_item(&format!("cd {}", self.dir.display()));
        }
        out.list_item("point conn_str in strata.toml at your database");
        out.list_item("strata preview -f types");
        out.list_item("strata gen");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render() {
        let report = InitReport {
            dir: PathBuf::from("db"),
            created: vec!["templates/table.rs.j2".into()],
            kept: vec!["strata.toml".into()],
        };
        let mut out = RecordingOutput::default();

        report.render(&mut out);

        insta::assert_snapshot!(out.stdout, @r"
        Created:
          + templates/table.rs.j2
        Already present, kept:
          - strata.toml

        Next steps:
          - cd db
          - point conn_str in strata.toml at your database
          - strata preview -f types
          - strata gen
        ");
    }
}

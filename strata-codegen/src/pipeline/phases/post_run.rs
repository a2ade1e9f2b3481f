//! Post-run phase - runs the configured command on every written file.

use crate::{
    Result, run_post_run,
    pipeline::{GenerationContext, Phase},
};

/// Phase that runs `post_run` once per distinct written file.
///
/// A failing command is recorded as a warning; the file it ran on stays as
/// written.
pub struct PostRunPhase;

impl Phase for PostRunPhase {
    fn name(&self) -> &'static str {
        "post_run"
    }

    fn description(&self) -> &'static str {
        "Run the post-run command on generated files"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let Some(post_run) = ctx.project.manifest().post_run() else {
            return Ok(());
        };

        for path in ctx.written.clone() {
            let absolute = path.canonicalize().unwrap_or(path);
            match run_post_run(&post_run, &absolute) {
                Ok(outcome) => ctx.hooks.push(outcome),
                Err(err) => {
                    log::warn!("{}", err);
                    ctx.add_warning(self.name(), err.to_string());
                }
            }
        }
        Ok(())
    }
}

//! Pipeline orchestrator.

use super::{
    GenerationContext, Phase, Plugin,
    phases::{IntrospectPhase, PostRunPhase, RenderPhase, ResolvePhase},
};
use crate::Result;

/// The generation pipeline orchestrator.
///
/// The pipeline runs its phases in order, calling plugin hooks before and
/// after each one. The first phase error aborts the run.
///
/// # Example
///
/// ```ignore
/// let ctx = GenerationContext::new(project, driver)?;
/// let ctx = Pipeline::generate().plugin(MyPlugin::new()).run(ctx)?;
///
/// for path in &ctx.written {
///     println!("wrote {}", path.display());
/// }
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a pipeline with no phases.
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// introspect → resolve → render → post_run
    pub fn generate() -> Self {
        Self::preview().phase(RenderPhase).phase(PostRunPhase)
    }

    /// introspect → resolve
    pub fn preview() -> Self {
        Self::introspect().phase(ResolvePhase)
    }

    /// introspect only.
    pub fn introspect() -> Self {
        Self::new().phase(IntrospectPhase)
    }

    /// Add a phase after the existing ones.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Names of the phases, in execution order.
    pub fn phase_names(&self) -> Vec<&'static str> {
        self.phases.iter().map(|p| p.name()).collect()
    }

    /// Run every phase on `ctx`.
    ///
    /// # Errors
    ///
    /// Returns the first error from a phase or plugin hook.
    pub fn run(&self, mut ctx: GenerationContext) -> Result<GenerationContext> {
        for phase in &self.phases {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }
        Ok(ctx)
    }

    /// Run a single phase with plugin hooks.
    fn run_phase(&self, phase: &dyn Phase, ctx: &mut GenerationContext) -> Result<()> {
        let phase_name = phase.name();

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        log::debug!("phase '{}': {}", phase_name, phase.description());
        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

//! Pipeline phase trait.

use super::GenerationContext;
use crate::Result;

/// A phase in the generation pipeline.
///
/// Phases are executed in order by the pipeline. Each phase reads what
/// earlier phases left in the context and adds its own results.
///
/// Built-in phases:
/// - `IntrospectPhase` - reads the schema model through the driver
/// - `ResolvePhase` - resolves column types and names into views
/// - `RenderPhase` - renders templates and writes files
/// - `PostRunPhase` - runs the post-run command on written files
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and plugin hooks).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the generation context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails fatally. Non-fatal issues should
    /// be recorded as diagnostics instead.
    fn run(&self, ctx: &mut GenerationContext) -> Result<()>;
}

//! Pipeline plugin trait for extensibility.

use super::GenerationContext;
use crate::Result;

/// A plugin that can hook into the generation pipeline.
///
/// Plugins receive callbacks before and after each phase runs, allowing
/// them to inspect or modify the generation context.
///
/// # Example
///
/// ```ignore
/// struct ListTables;
///
/// impl Plugin for ListTables {
///     fn name(&self) -> &'static str { "list-tables" }
///
///     fn on_after_phase(&self, phase: &str, ctx: &mut GenerationContext) -> Result<()> {
///         if phase == "introspect" {
///             for schema in ctx.schemas() {
///                 println!("{}: {} tables", schema.name, schema.tables.len());
///             }
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Plugin: Send + Sync {
    /// The name of this plugin (for debugging and logging).
    fn name(&self) -> &'static str;

    /// Called before a phase runs.
    ///
    /// # Errors
    ///
    /// Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut GenerationContext) -> Result<()> {
        Ok(())
    }

    /// Called after a phase completes successfully.
    ///
    /// # Errors
    ///
    /// Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut GenerationContext) -> Result<()> {
        Ok(())
    }
}

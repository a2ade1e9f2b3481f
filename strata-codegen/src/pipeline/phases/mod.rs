//! Built-in pipeline phases.
//!
//! - [`IntrospectPhase`] - reads the schema model through the driver
//! - [`ResolvePhase`] - builds the resolved views templates see
//! - [`RenderPhase`] - renders path and content templates and writes files
//! - [`PostRunPhase`] - runs the post-run command on every written file

mod introspect;
mod post_run;
mod render;
mod resolve;

pub use introspect::IntrospectPhase;
pub use post_run::PostRunPhase;
pub use render::RenderPhase;
pub use resolve::ResolvePhase;

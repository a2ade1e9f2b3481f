//! Resolve phase - builds the views templates render against.

use crate::{
    Result, ViewBuilder,
    pipeline::{GenerationContext, Phase},
};

/// Phase that resolves every column type and converts every name.
///
/// The first unmapped type aborts the run before anything is written.
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Resolve column types and names"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let mut builder = ViewBuilder::new(&ctx.env, &ctx.resolver);
        let views = ctx
            .schemas()
            .iter()
            .map(|schema| builder.schema(schema))
            .collect::<Result<Vec<_>>>()?;
        let dereferenced = builder.into_dereferenced();

        log::debug!("resolve: {} distinct column types", dereferenced.len());
        ctx.dereferenced_types = dereferenced;
        ctx.views = Some(views);
        Ok(())
    }
}

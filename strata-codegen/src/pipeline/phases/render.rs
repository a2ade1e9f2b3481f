//! Render phase - renders path and content templates and writes the files.

use std::path::{Path, PathBuf};

use minijinja::context;
use strata_core::File;

use crate::{
    Error, Result,
    pipeline::{GenerationContext, Phase},
};

/// Phase that produces the output files.
///
/// Every schema-level binding is written before any table-level one, and
/// entities are visited in schema model order. Existing files are replaced.
pub struct RenderPhase;

impl Phase for RenderPhase {
    fn name(&self) -> &'static str {
        "render"
    }

    fn description(&self) -> &'static str {
        "Render templates and write output files"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        load_templates(ctx)?;
        let written = render_all(ctx)?;
        for path in written {
            ctx.record_written(path);
        }
        Ok(())
    }
}

/// Name a content template is registered under: its path as written in the
/// manifest.
fn template_name(template: &Path) -> String {
    template.display().to_string()
}

fn load_templates(ctx: &mut GenerationContext) -> Result<()> {
    let GenerationContext { project, env, .. } = ctx;
    let manifest = project.manifest();
    for template in manifest
        .schema_paths
        .values()
        .chain(manifest.table_paths.values())
    {
        env.load_file(&template_name(template), &project.template_path(template))?;
    }
    Ok(())
}

fn render_all(ctx: &GenerationContext) -> Result<Vec<PathBuf>> {
    let manifest = ctx.project.manifest();
    let output_dir = ctx.project.output_dir();
    let views = ctx.views();
    let mut written = Vec::new();

    for schema in views {
        let entity = format!("schema '{}'", schema.db_name);
        for (path_template, template) in &manifest.schema_paths {
            let path = ctx.env.render_path(
                path_template,
                &entity,
                context! { schema => &schema.db_name },
            )?;
            let content = ctx.env.render(
                &template_name(template),
                &entity,
                context! { schema => schema, params => &manifest.params },
            )?;
            written.push(write(output_dir.join(path), content)?);
        }
    }

    for schema in views {
        for table in &schema.tables {
            let entity = format!("table '{}.{}'", schema.db_name, table.db_name);
            for (path_template, template) in &manifest.table_paths {
                let path = ctx.env.render_path(
                    path_template,
                    &entity,
                    context! { schema => &schema.db_name, table => &table.db_name },
                )?;
                let content = ctx.env.render(
                    &template_name(template),
                    &entity,
                    context! { schema => schema, table => table, params => &manifest.params },
                )?;
                written.push(write(output_dir.join(path), content)?);
            }
        }
    }

    Ok(written)
}

fn write(path: PathBuf, content: String) -> Result<PathBuf> {
    File::new(&path, content)
        .write()
        .map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
    log::debug!("render: wrote {}", path.display());
    Ok(path)
}

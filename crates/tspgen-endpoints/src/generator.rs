use minijinja::{Environment, Value, context};
use thiserror::Error;
use tspgen_core::config::EndpointsConfig;
use tspgen_core::parse::spec::OpenApiSpec;
use tspgen_core::{CodeGenerator, GeneratedFile};

use crate::index::{EndpointIndex, build_index};

#[derive(Debug, Error)]
pub enum EndpointsError {
    #[error("failed to render endpoint index: {0}")]
    Render(#[from] minijinja::Error),
}

/// Markdown endpoint index generator.
pub struct EndpointIndexGenerator;

impl EndpointIndexGenerator {
    /// Build and render the index, returning the file along with its number
    /// of tag groups.
    pub fn render(
        &self,
        spec: &OpenApiSpec,
        config: &EndpointsConfig,
    ) -> Result<(GeneratedFile, usize), EndpointsError> {
        let index = build_index(spec);
        let file = GeneratedFile {
            path: config.output.clone(),
            content: emit_index(&index, config)?,
        };
        Ok((file, index.len()))
    }
}

impl CodeGenerator for EndpointIndexGenerator {
    type Config = EndpointsConfig;
    type Error = EndpointsError;

    fn generate(
        &self,
        spec: &OpenApiSpec,
        config: &EndpointsConfig,
    ) -> Result<Vec<GeneratedFile>, EndpointsError> {
        let (file, _) = self.render(spec, config)?;
        Ok(vec![file])
    }
}

/// Emit the markdown document for an already built index.
pub fn emit_index(index: &EndpointIndex, config: &EndpointsConfig) -> Result<String, EndpointsError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_keep_trailing_newline(true);
    env.add_template("endpoints.md.j2", include_str!("../templates/endpoints.md.j2"))?;
    let tmpl = env.get_template("endpoints.md.j2")?;

    let groups: Vec<Value> = index
        .groups
        .iter()
        .map(|g| {
            context! {
                tag => g.tag.clone(),
                rows => g.rows.clone(),
            }
        })
        .collect();

    let content = tmpl.render(context! {
        title => config.title.clone(),
        source_note => config.source_note.clone(),
        groups => groups,
    })?;
    Ok(content)
}

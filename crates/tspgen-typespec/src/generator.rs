use log::debug;
use thiserror::Error;
use tspgen_core::config::TspgenConfig;
use tspgen_core::ir::group_namespaces;
use tspgen_core::parse::spec::OpenApiSpec;
use tspgen_core::{CodeGenerator, GeneratedFile, transform};

use crate::emitters;

#[derive(Debug, Error)]
pub enum TypeSpecError {
    #[error("failed to render TypeSpec template: {0}")]
    Render(#[from] minijinja::Error),
}

/// Options for the TypeSpec generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpecConfig {
    /// File name of the manifest importing every namespace file.
    pub manifest: String,
}

impl Default for TypeSpecConfig {
    fn default() -> Self {
        Self {
            manifest: "main.tsp".to_string(),
        }
    }
}

impl From<&TspgenConfig> for TypeSpecConfig {
    fn from(config: &TspgenConfig) -> Self {
        Self {
            manifest: config.manifest.clone(),
        }
    }
}

/// TypeSpec generator: one `<key>.tsp` per namespace, in grouping order,
/// followed by the manifest.
pub struct TypeSpecGenerator;

impl CodeGenerator for TypeSpecGenerator {
    type Config = TypeSpecConfig;
    type Error = TypeSpecError;

    fn generate(
        &self,
        spec: &OpenApiSpec,
        config: &TypeSpecConfig,
    ) -> Result<Vec<GeneratedFile>, TypeSpecError> {
        let set = group_namespaces(spec);
        let env = emitters::environment()?;

        let mut files = Vec::with_capacity(set.len() + 1);
        for ns in transform::resolve_namespaces(&set) {
            debug!(
                "rendering namespace {} ({} models, {} operations)",
                ns.key,
                ns.models.len(),
                ns.operations.len()
            );
            files.push(GeneratedFile {
                path: format!("{}.tsp", ns.key),
                content: emitters::namespace::emit_namespace(&env, &ns)?,
            });
        }

        files.push(GeneratedFile {
            path: config.manifest.clone(),
            content: emitters::manifest::emit_manifest(&env, &set.sorted_keys())?,
        });

        Ok(files)
    }
}

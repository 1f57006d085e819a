//! Generate command implementation

use amqp_codegen::{Artifact, GeneratorConfig};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Run the generate command
///
/// Nothing is written unless the whole artifact was generated.
pub fn run(
    artifact: Artifact,
    specs: &[impl AsRef<Path>],
    config: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    let java = render(artifact, specs, config)?;

    match output {
        Some(path) => {
            write_atomically(path, &java)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {} artifact to {}", artifact, path.display());
        }
        None => {
            std::io::stdout()
                .write_all(java.as_bytes())
                .context("Failed to write generated source to stdout")?;
        }
    }

    Ok(())
}

/// Load specs and configuration, then generate one artifact.
pub fn render(
    artifact: Artifact,
    specs: &[impl AsRef<Path>],
    config: Option<&Path>,
) -> Result<String> {
    let spec = amqp_spec::loader::from_files(specs).context("Failed to load protocol spec")?;

    let config = match config {
        Some(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    amqp_codegen::generate(artifact, &spec, &config)
        .with_context(|| format!("Failed to generate {artifact} artifact"))
}

fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    file.write_all(contents.as_bytes())?;
    file.persist(path)?;

    Ok(())
}

//! Generate operation - header generation.

use std::path::Path;

use eyre::{Result, WrapErr};
use fidlgen_codegen_cpp::{Backend, Generator};
use fidlgen_ir::LibraryDescriptor;

use crate::reports::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};

/// Execute the generate operation.
///
/// Writes the library's header under `output_dir`, or only renders it when
/// `dry_run` is set.
pub fn generate(
    descriptor: &LibraryDescriptor,
    output_dir: &Path,
    dry_run: bool,
) -> Result<GenerateReport> {
    let generator = Generator::from_descriptor(descriptor);
    let context = generator.context();
    tracing::info!(
        library = %descriptor.name,
        headers = context.headers.len(),
        dry_run,
        "generating"
    );

    let result = if dry_run {
        GenerationResult::Preview(PreviewResult {
            files: generator.preview(),
        })
    } else {
        let result = generator
            .generate(output_dir)
            .wrap_err("Failed to generate code")?;
        GenerationResult::Written(WrittenResult {
            output_dir: output_dir.to_path_buf(),
            written: result.written,
            unchanged: result.unchanged,
        })
    };

    Ok(GenerateReport {
        library: descriptor.name.clone(),
        namespaces: context.library.len(),
        headers: context.headers.len(),
        result,
    })
}

//! Info operation - what a descriptor renders to.

use std::path::Path;

use fidlgen_ir::LibraryDescriptor;

use crate::reports::InfoReport;

/// Execute the info operation.
pub fn info(descriptor: &LibraryDescriptor, json_path: &Path) -> InfoReport {
    let context = descriptor.render_context();

    InfoReport {
        name: descriptor.name.clone(),
        json_path: std::fs::canonicalize(json_path).unwrap_or_else(|_| json_path.to_path_buf()),
        namespaces: context.library,
        headers: context.headers,
        output_path: descriptor.output_path(),
    }
}

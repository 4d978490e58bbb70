//! Integration tests for writing headers to disk.

use std::fs;

use fidlgen_codegen::testing::{assert_content_eq, generate_to_temp};
use fidlgen_codegen_cpp::{Backend, Generator, RenderContext};
use fidlgen_ir::LibraryDescriptor;

const FUCHSIA_IO: &str = r#"{
  "name": "fuchsia.io",
  "library_dependencies": [{ "name": "fuchsia.mem" }]
}"#;

fn generator() -> Generator {
    let descriptor = LibraryDescriptor::from_json_str(FUCHSIA_IO).unwrap();
    Generator::from_descriptor(&descriptor).with_declarations(["class File;\n"])
}

#[test]
fn test_generate_writes_header_at_library_path() {
    let generator = generator();
    let dir = generate_to_temp(|path| {
        let result = generator.generate(path)?;
        assert_eq!(result.written, vec!["fuchsia/io/cpp/fidl.h"]);
        Ok(())
    })
    .unwrap();

    let written = fs::read_to_string(dir.path().join("fuchsia/io/cpp/fidl.h")).unwrap();
    assert_content_eq(&generator.preview()[0].content, &written);
}

#[test]
fn test_regenerate_is_unchanged() {
    let generator = generator();
    generate_to_temp(|path| {
        generator.generate(path)?;
        let second = generator.generate(path)?;
        assert!(second.written.is_empty());
        assert_eq!(second.unchanged, vec!["fuchsia/io/cpp/fidl.h"]);
        assert_eq!(second.total(), 1);
        Ok(())
    })
    .unwrap();
}

#[test]
fn test_changed_context_rewrites() {
    generate_to_temp(|path| {
        Generator::new(RenderContext::new(["fuchsia", "io"], ["a.h"])).generate(path)?;
        let result =
            Generator::new(RenderContext::new(["fuchsia", "io"], ["b.h"])).generate(path)?;
        assert_eq!(result.written, vec!["fuchsia/io/cpp/fidl.h"]);

        let content = fs::read_to_string(path.join("fuchsia/io/cpp/fidl.h"))?;
        assert!(content.contains("#include <b.h>"));
        assert!(!content.contains("#include <a.h>"));
        Ok(())
    })
    .unwrap();
}

#[test]
fn test_global_library_writes_at_root() {
    let dir = generate_to_temp(|path| {
        Generator::new(RenderContext::default()).generate(path)?;
        Ok(())
    })
    .unwrap();

    assert!(dir.path().join("cpp/fidl.h").exists());
}

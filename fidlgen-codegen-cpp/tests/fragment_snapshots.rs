//! Snapshot tests for the header fragments and the composed header.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use fidlgen_codegen::GeneratedFile;
use fidlgen_codegen_cpp::{
    RenderContext, files::HeaderFile, header_postamble, header_preamble, traits_postamble,
    traits_preamble,
};

fn fuchsia_io() -> RenderContext {
    RenderContext::new(["fuchsia", "io"], ["a.h", "b.h"])
}

#[test]
fn test_header_preamble() {
    insta::assert_snapshot!(header_preamble(&fuchsia_io()), @r###"
// Copyright 2018 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.
//
// WARNING: This file is machine generated by fidlgen.

#pragma once

#include "lib/fidl/cpp/internal/header.h"

#include <a.h>
#include <b.h>

namespace fuchsia {
namespace io {
"###);
}

#[test]
fn test_header_preamble_global_namespace() {
    insta::assert_snapshot!(header_preamble(&RenderContext::default()), @r###"
// Copyright 2018 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.
//
// WARNING: This file is machine generated by fidlgen.

#pragma once

#include "lib/fidl/cpp/internal/header.h"
"###);
}

#[test]
fn test_header_postamble() {
    insta::assert_snapshot!(header_postamble(&fuchsia_io()), @r###"
}
}
"###);
}

#[test]
fn test_traits_fragments() {
    let ctx = fuchsia_io();
    insta::assert_snapshot!(traits_preamble(&ctx), @"namespace fidl {");
    insta::assert_snapshot!(traits_postamble(&ctx), @"}  // namespace fidl");
}

#[test]
fn test_full_header() {
    let ctx = RenderContext::new(["fuchsia", "io"], ["fuchsia/mem/cpp/fidl.h"]);
    let header = HeaderFile::new(&ctx)
        .declaration("class File;\n")
        .declaration("class Directory;\n")
        .trait_block("template <>\nstruct CodingTraits<::fuchsia::io::File>;\n")
        .render();

    insta::assert_snapshot!(header, @r###"
// Copyright 2018 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.
//
// WARNING: This file is machine generated by fidlgen.

#pragma once

#include "lib/fidl/cpp/internal/header.h"

#include <fuchsia/mem/cpp/fidl.h>

namespace fuchsia {
namespace io {

class File;

class Directory;

}
}

namespace fidl {
template <>
struct CodingTraits<::fuchsia::io::File>;
}  // namespace fidl
"###);
}

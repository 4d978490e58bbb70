//! The four fragments framing a library's generated header.

use fidlgen_codegen::CodeBuilder;
use fidlgen_ir::RenderContext;

use crate::namespace::{CloseNamespaces, OpenNamespaces};

/// License block at the top of every generated header, one entry per line.
pub const LICENSE_HEADER: &[&str] = &[
    "Copyright 2018 The Fuchsia Authors. All rights reserved.",
    "Use of this source code is governed by a BSD-style license that can be",
    "found in the LICENSE file.",
];

/// Marks the header as generated.
pub const GENERATED_WARNING: &str = "WARNING: This file is machine generated by fidlgen.";

/// One-time inclusion guard.
pub const INCLUDE_GUARD: &str = "#pragma once";

/// Runtime support header every generated header depends on.
pub const RUNTIME_HEADER: &str = "lib/fidl/cpp/internal/header.h";

/// Namespace the runtime's trait specializations live in.
pub const TRAITS_NAMESPACE: &str = "fidl";

/// The fragment kinds, in the order they appear in a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fragment {
    HeaderPreamble,
    HeaderPostamble,
    TraitsPreamble,
    TraitsPostamble,
}

impl Fragment {
    pub const ALL: [Fragment; 4] = [
        Fragment::HeaderPreamble,
        Fragment::HeaderPostamble,
        Fragment::TraitsPreamble,
        Fragment::TraitsPostamble,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Fragment::HeaderPreamble => "header-preamble",
            Fragment::HeaderPostamble => "header-postamble",
            Fragment::TraitsPreamble => "traits-preamble",
            Fragment::TraitsPostamble => "traits-postamble",
        }
    }

    pub fn render(self, ctx: &RenderContext) -> String {
        match self {
            Fragment::HeaderPreamble => header_preamble(ctx),
            Fragment::HeaderPostamble => header_postamble(ctx),
            Fragment::TraitsPreamble => traits_preamble(ctx),
            Fragment::TraitsPostamble => traits_postamble(ctx),
        }
    }
}

/// Everything before the library's declarations.
///
/// License and generated-file comments, the include guard, the runtime
/// include, one `#include <...>` per header in input order, then the
/// library's namespaces, left open.
pub fn header_preamble(ctx: &RenderContext) -> String {
    CodeBuilder::new()
        .each(LICENSE_HEADER, |b, line| b.comment(line))
        .comment("")
        .comment(GENERATED_WARNING)
        .blank()
        .line(INCLUDE_GUARD)
        .blank()
        .line(&format!("#include \"{}\"", RUNTIME_HEADER))
        .when(!ctx.headers.is_empty(), |b| {
            b.blank()
                .each(&ctx.headers, |b, header| b.line(&format!("#include <{}>", header)))
        })
        .when(!ctx.library.is_empty(), |b| {
            b.blank().node(&OpenNamespaces(ctx.library.as_slice()))
        })
        .build()
}

/// Closes the namespaces [`header_preamble`] opened for the same `library`.
pub fn header_postamble(ctx: &RenderContext) -> String {
    CodeBuilder::new()
        .node(&CloseNamespaces::new(ctx.library.as_slice()))
        .build()
}

/// Opens the traits namespace. Does not depend on the library.
pub fn traits_preamble(_ctx: &RenderContext) -> String {
    CodeBuilder::new()
        .node(&OpenNamespaces(&[TRAITS_NAMESPACE]))
        .build()
}

/// Closes the traits namespace with a `// namespace fidl` label.
pub fn traits_postamble(_ctx: &RenderContext) -> String {
    CodeBuilder::new()
        .node(&CloseNamespaces::new(&[TRAITS_NAMESPACE]).labeled())
        .build()
}

//! Output assembly.
//!
//! The assembled unit is the import header, every enum block, then every
//! table block, separated by single blank lines. Declarations are emitted
//! in the order given; the assembler never re-sorts.

use crate::typebox::{EnumGenerator, ObjectGenerator};
use pgtypebox_schema::CasingPolicy;
use pgtypebox_schema::ir::{EnumDeclaration, TableDeclaration};

/// Import header of every generated unit.
pub const HEADER: &str = "import { Type } from '@sinclair/typebox'\n\
                          import type { Static } from '@sinclair/typebox'\n";

/// Orders and renders declarations into one text unit.
#[derive(Debug, Clone, Copy)]
pub struct CodeAssembler {
    casing: CasingPolicy,
}

impl CodeAssembler {
    /// Creates an assembler for a casing policy.
    #[must_use]
    pub const fn new(casing: CasingPolicy) -> Self {
        Self { casing }
    }

    /// Assembles enums and tables into the output text.
    #[must_use]
    pub fn assemble(&self, enums: &[EnumDeclaration], tables: &[TableDeclaration]) -> String {
        let mut blocks = Vec::with_capacity(1 + enums.len() + tables.len());
        blocks.push(HEADER.to_string());
        blocks.extend(EnumGenerator::new(enums).generate());
        blocks.extend(ObjectGenerator::new(tables, self.casing).generate());
        blocks.join("\n")
    }
}

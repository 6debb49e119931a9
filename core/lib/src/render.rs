//! Emits the tables as Rust source.
//!
//! The output is the "generated file" form consumed downstream: one
//! `pub static` array of 256 string slots per context, ready for direct
//! `TABLE[byte as usize]` lookup with no further processing.

use crate::encode_set::Context;
use crate::table::{EncodeTable, Entry};

/// A table slot as a quoted Rust string literal. `"` and `\` need escaping
/// in the *output* format; this has nothing to do with URL escaping.
fn slot(entry: Entry) -> String {
    match entry {
        Entry::Literal(c @ ('"' | '\\')) => format!("\"\\{}\"", c),
        Entry::Literal(c) => format!("\"{}\"", c),
        Entry::Percent(b) => format!("\"%{:02X}\"", b),
    }
}

/// Renders one table as `pub static NAME: [&'static str; 256] = [ ... ];`,
/// eight slots per row.
///
/// The slot count is re-checked against [`EncodeTable::LEN`] before
/// returning: a short table is a builder defect and must abort generation
/// rather than emit something partially usable.
pub fn render_table(name: &str, table: &EncodeTable) -> String {
    let mut out = format!("pub static {}: [&'static str; 256] = [\n", name);

    let mut slots = 0;
    for row in table.entries().chunks(8) {
        out.push_str("  ");
        for &entry in row {
            out.push(' ');
            out.push_str(&slot(entry));
            out.push(',');
            slots += 1;
        }
        out.push('\n');
    }

    out.push_str("];\n");
    assert_eq!(slots, EncodeTable::LEN, "table for {} is not 256 slots", name);
    out
}

/// Renders the complete generated module: a header comment followed by one
/// table per context, in registry order.
pub fn render_module() -> String {
    let mut out = String::from(
        "// Generated by encset_codegen. Do not edit by hand.\n\n",
    );

    for context in Context::ALL {
        out.push_str(&render_table(context.name(), &context.table()));
        out.push('\n');
    }

    out
}

//! Percent-encode sets and their byte-indexed lookup tables.
//!
//! Every URL sub-context (query strings, userinfo, form bodies, ...) has an
//! escape set: the bytes that cannot appear bare in that context. This crate
//! holds the canonical definitions of those sets, builds the 256-slot table
//! that maps every byte value to either its literal character or its `%XX`
//! form, and can render the tables as Rust source for compilation into a
//! consumer.
//!
//! ```rust
//! use encset::{build, Context, Entry, QUERY};
//!
//! let table = build(&QUERY);
//! assert_eq!(table[b'a'], Entry::Literal('a'));
//! assert_eq!(table[b' '].to_string(), "%20");
//!
//! // Or by context name:
//! assert_eq!(Context::Query.table(), table);
//! ```
//!
//! The sets and tables are constants in all but mechanism: nothing here is
//! mutated after definition, and rebuilding a table from the same set always
//! yields an identical result.

mod encode_set;
mod render;
mod table;

pub use encode_set::{
    Context, BASE, DEFAULT, FORM_URLENCODED, HTTP_VALUE, PASSWORD, QUERY, SIMPLE, UNRESERVED,
    USERINFO, USERNAME,
};
pub use render::{render_module, render_table};
pub use table::{build, EncodeTable, Entry};

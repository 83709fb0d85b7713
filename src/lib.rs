#![recursion_limit = "1024"]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(unused_extern_crates)]

pub mod oid;
pub mod prelude;
pub mod registry;

pub use clinio_types::prelude::*;

// vim: ts=4

//! rb-data: Built-in riddle catalog
//!
//! A compiled-in riddle set covering every difficulty tier and most
//! categories, for hosts that don't ship their own catalog file.

pub mod riddles;

pub use riddles::{builtin_catalog, builtin_records};

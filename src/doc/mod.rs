//! Literate background reading, compiled only for `cargo doc`.

pub mod encryption;

//! Pages

pub mod index;
pub mod method;

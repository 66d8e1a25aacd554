//! # bdb-io
//!
//! Locates and reads PDB and BDB structure files for the plotting pipeline.
//!
//! [`StructureStore`] implements [`bdb_core::StructureSource`] over two directory
//! trees, one per record kind. [`PdbId`] validates identifiers before any lookup.
mod id;
mod store;

pub use self::id::{InvalidPdbId, PdbId};
pub use self::store::StructureStore;

// mutfunc: Decoding and formatting mutfunc variant effect prediction matrices.
//
// Copyright 2025 Tommi Mäklin [tommi@maklin.fi].
//
// Copyrights in this project are retained by contributors. No copyright assignment
// is required to contribute to this project.
//
// Except as otherwise noted (below and/or in individual files), this
// project is licensed under the Apache License, Version 2.0
// <LICENSE-APACHE> or <http://www.apache.org/licenses/LICENSE-2.0> or
// the MIT license, <LICENSE-MIT> or <http://opensource.org/licenses/MIT>,
// at your option.
//

//! Sources of compressed prediction matrices.
//!
//! A [BlobStore] returns the compressed matrix of one category for one
//! peptide, or None if the peptide has no predictions in that category.
//!
//! ## Usage
//!
//! ```rust
//! use mutfunc::Category;
//! use mutfunc::store::{BlobStore, MemoryStore};
//!
//! let mut store = MemoryStore::new();
//! store.insert("ENSP00000269305", Category::Motif, vec![31, 139]);
//!
//! assert_eq!(store.fetch("ENSP00000269305", &Category::Motif).unwrap(), Some(vec![31, 139]));
//! assert_eq!(store.fetch("ENSP00000269305", &Category::Interaction).unwrap(), None);
//! ```
//!

use crate::Category;

use std::collections::HashMap;
use std::io::ErrorKind;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

type E = Box<dyn std::error::Error>;

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Peptide identifier cannot be used as a file name.
    InvalidPeptide(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            StoreError::InvalidPeptide(peptide) => write!(f, "invalid peptide identifier '{}'", peptide),
        }
    }
}

impl std::error::Error for StoreError {}

pub trait BlobStore {
    /// Compressed matrix of `category` for `peptide`.
    ///
    /// Returns Ok(None) if there is no matrix.
    ///
    fn fetch(
        &self,
        peptide: &str,
        category: &Category,
    ) -> Result<Option<Vec<u8>>, E>;
}

/// Matrices stored as `<root>/<category key>/<peptide>.gz`.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new<P: AsRef<Path>>(
        root: P,
    ) -> Self {
        DirStore{ root: root.as_ref().to_path_buf() }
    }

    /// Path of the matrix for `peptide` in `category`.
    pub fn path(
        &self,
        peptide: &str,
        category: &Category,
    ) -> Result<PathBuf, E> {
        if peptide.is_empty() || peptide.contains(['/', '\\']) || peptide == "." || peptide == ".." {
            return Err(Box::new(StoreError::InvalidPeptide(peptide.to_string())))
        }
        Ok(self.root.join(category.key()).join(format!("{}.gz", peptide)))
    }
}

impl BlobStore for DirStore {
    fn fetch(
        &self,
        peptide: &str,
        category: &Category,
    ) -> Result<Option<Vec<u8>>, E> {
        let path = self.path(peptide, category)?;
        let mut conn = match std::fs::File::open(&path) {
            Ok(conn) => conn,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::trace!("No {} matrix at {}", category, path.display());
                return Ok(None)
            },
            Err(e) => return Err(Box::new(e)),
        };

        let mut blob: Vec<u8> = Vec::new();
        conn.read_to_end(&mut blob)?;
        Ok(Some(blob))
    }
}

/// Matrices held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blobs: HashMap<(String, Category), Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    pub fn insert(
        &mut self,
        peptide: &str,
        category: Category,
        blob: Vec<u8>,
    ) {
        self.blobs.insert((peptide.to_string(), category), blob);
    }
}

impl BlobStore for MemoryStore {
    fn fetch(
        &self,
        peptide: &str,
        category: &Category,
    ) -> Result<Option<Vec<u8>>, E> {
        Ok(self.blobs.get(&(peptide.to_string(), *category)).cloned())
    }
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn dir_store_path_layout() {
        use super::DirStore;
        use crate::Category;

        let store = DirStore::new("/data/mutfunc");

        let got = store.path("ENSP00000269305", &Category::ModeledStructure).unwrap();

        assert_eq!(got, std::path::PathBuf::from("/data/mutfunc/mod/ENSP00000269305.gz"));
    }

    #[test]
    fn dir_store_rejects_paths() {
        use super::{BlobStore, DirStore};
        use crate::Category;

        let store = DirStore::new("/data/mutfunc");

        assert!(store.path("../secret", &Category::Motif).is_err());
        assert!(store.path("", &Category::Motif).is_err());
        assert!(store.fetch("..", &Category::Motif).is_err());
    }

    #[test]
    fn dir_store_fetch() {
        use super::{BlobStore, DirStore};
        use crate::Category;

        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("int")).unwrap();
        std::fs::write(root.join("int").join("P1.gz"), b"blob").unwrap();

        let store = DirStore::new(root);

        assert_eq!(store.fetch("P1", &Category::Interaction).unwrap(), Some(b"blob".to_vec()));
        assert_eq!(store.fetch("P1", &Category::Motif).unwrap(), None);
        assert_eq!(store.fetch("P2", &Category::Interaction).unwrap(), None);
    }

    #[test]
    fn memory_store_fetch() {
        use super::{BlobStore, MemoryStore};
        use crate::Category;

        let mut store = MemoryStore::new();
        store.insert("P1", Category::ExperimentalStructure, vec![1, 2, 3]);

        assert_eq!(store.fetch("P1", &Category::ExperimentalStructure).unwrap(), Some(vec![1, 2, 3]));
        assert_eq!(store.fetch("P1", &Category::ModeledStructure).unwrap(), None);
        assert_eq!(store.fetch("P2", &Category::ExperimentalStructure).unwrap(), None);
    }
}

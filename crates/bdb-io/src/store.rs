use crate::id::PdbId;
use bdb_core::{BFactorSeries, PlotError, Result, StructureKind, StructureSource};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Extensions probed for every entry, in order.
const EXTENSIONS: [&str; 2] = ["cif", "pdb"];

/// StructureStore
///
/// Reads entries from two local mirrors, one for PDB and one for BDB records.
/// Within a root an entry lives either in the sharded mirror layout
/// `<root>/<id[1..3]>/<id>/<id>.<ext>` or directly at `<root>/<id>.<ext>`.
#[derive(Clone, Debug)]
pub struct StructureStore {
    pdb_root: PathBuf,
    bdb_root: PathBuf,
}

impl StructureStore {
    pub fn new(pdb_root: impl Into<PathBuf>, bdb_root: impl Into<PathBuf>) -> Self {
        StructureStore {
            pdb_root: pdb_root.into(),
            bdb_root: bdb_root.into(),
        }
    }

    fn root(&self, kind: StructureKind) -> &Path {
        match kind {
            StructureKind::Pdb => &self.pdb_root,
            StructureKind::Bdb => &self.bdb_root,
        }
    }

    /// Path of the first existing file for `id`, if any.
    pub fn locate(&self, id: &PdbId, kind: StructureKind) -> Option<PathBuf> {
        let root = self.root(kind);
        let sharded = root.join(id.shard()).join(id.as_str());
        EXTENSIONS
            .iter()
            .flat_map(|ext| {
                let file_name = format!("{}.{}", id, ext);
                [sharded.join(&file_name), root.join(file_name)]
            })
            .find(|path| path.is_file())
    }

    fn read(&self, path: &Path) -> Result<BFactorSeries> {
        let path_str = path.to_string_lossy();
        match pdbtbx::open(&*path_str) {
            Ok((pdb, warnings)) => {
                if !warnings.is_empty() {
                    debug!("{} warnings while reading {}", warnings.len(), path_str);
                }
                Ok(BFactorSeries::from(&pdb))
            }
            Err(errors) => Err(PlotError::Structure {
                path: path.to_path_buf(),
                message: errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            }),
        }
    }
}

impl StructureSource for StructureStore {
    fn load(&self, pdb_id: &str, kind: StructureKind) -> Result<Option<BFactorSeries>> {
        let id: PdbId = match pdb_id.parse() {
            Ok(id) => id,
            Err(e) => {
                warn!("{e}");
                return Ok(None);
            }
        };
        let Some(path) = self.locate(&id, kind) else {
            debug!("No {kind} file for {id} under {}", self.root(kind).display());
            return Ok(None);
        };
        debug!("Reading {kind} entry {id} from {}", path.display());
        self.read(&path).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bdb_test_data::{TestFile, TestMirror, TEST_PDB_ID};
    use std::fs;

    #[test]
    fn test_load_flat_layout() {
        let mirror = TestMirror::new(true).unwrap();
        let store = StructureStore::new(mirror.pdb_dir(), mirror.bdb_dir());

        let reference = store.load(TEST_PDB_ID, StructureKind::Pdb).unwrap().unwrap();
        let derived = store.load(TEST_PDB_ID, StructureKind::Bdb).unwrap().unwrap();
        assert_eq!(reference.len(), 15);
        assert_eq!(derived.len(), 15);
    }

    #[test]
    fn test_load_sharded_layout_and_case() {
        let pdb_dir = tempfile::tempdir().unwrap();
        let bdb_dir = tempfile::tempdir().unwrap();
        let entry_dir = pdb_dir.path().join("ts").join("1tst");
        fs::create_dir_all(&entry_dir).unwrap();
        TestFile::reference_01()
            .write_flat(&entry_dir, TEST_PDB_ID)
            .unwrap();

        let store = StructureStore::new(pdb_dir.path(), bdb_dir.path());
        let id: PdbId = "1TST".parse().unwrap();
        assert_eq!(
            store.locate(&id, StructureKind::Pdb),
            Some(entry_dir.join("1tst.pdb"))
        );
        assert!(store.load("1TST", StructureKind::Pdb).unwrap().is_some());
        assert!(store.load("1TST", StructureKind::Bdb).unwrap().is_none());
    }

    #[test]
    fn test_load_missing_and_invalid() {
        let mirror = TestMirror::new(false).unwrap();
        let store = StructureStore::new(mirror.pdb_dir(), mirror.bdb_dir());
        assert!(store.load("9zzz", StructureKind::Pdb).unwrap().is_none());
        assert!(store.load(TEST_PDB_ID, StructureKind::Bdb).unwrap().is_none());
        assert!(store.load("not-an-id", StructureKind::Pdb).unwrap().is_none());
    }

    #[test]
    fn test_load_unreadable_file() {
        let pdb_dir = tempfile::tempdir().unwrap();
        fs::write(
            pdb_dir.path().join("1tst.pdb"),
            "ATOM      1  N   ALA A   1      abc.def   2.700  -2.500  1.00 12.50           N\nEND\n",
        )
        .unwrap();
        let store = StructureStore::new(pdb_dir.path(), pdb_dir.path());
        let result = store.load(TEST_PDB_ID, StructureKind::Pdb);
        assert!(matches!(result, Err(PlotError::Structure { .. })));
    }
}

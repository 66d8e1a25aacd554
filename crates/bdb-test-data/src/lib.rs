//! bdb-test-data
//!
//! Structure files embedded in the crate for use in tests.
//!
//! The test files are represented as `TestFile` objects which package the raw file contents
//! and create temporary files, or whole PDB/BDB mirror directories, for programs to operate on.
use std::fs;
use std::path::Path;
use tempfile::{Builder, NamedTempFile, TempDir};

/// Identifier of the embedded test entry.
pub const TEST_PDB_ID: &str = "1tst";

#[derive(Debug)]
/// Test File
///
/// Example usage:
///
/// ```ignore
/// // returns (filepath, _tempfile_handle).
/// // _handle ensures the tempfile remains in scope
/// use bdb_test_data::TestFile;
/// let (pdb_file, _temp) = TestFile::reference_01().create_temp().unwrap();
/// ```
pub struct TestFile {
    filebinary: &'static [u8],
    suffix: &'static str,
}

impl TestFile {
    /// 1TST: three residue peptide (ALA GLY SER), 15 atoms, as deposited.
    pub fn reference_01() -> Self {
        Self {
            filebinary: include_bytes!("../data/structures/1tst.pdb"),
            suffix: "pdb",
        }
    }
    /// 1TST after re-refinement: same atoms, different B-factors.
    pub fn derived_01() -> Self {
        Self {
            filebinary: include_bytes!("../data/structures/1tst_bdb.pdb"),
            suffix: "pdb",
        }
    }

    pub fn create_temp(&self) -> std::io::Result<(String, NamedTempFile)> {
        let temp = Builder::new()
            .suffix(&format!(".{}", self.suffix))
            .tempfile()?;

        fs::write(&temp, self.filebinary)?;
        let path = temp.path().to_string_lossy().into_owned();

        Ok((path, temp))
    }

    /// Write this file as `<dir>/<pdb_id>.<suffix>`.
    pub fn write_flat(&self, dir: &Path, pdb_id: &str) -> std::io::Result<()> {
        fs::write(dir.join(format!("{}.{}", pdb_id, self.suffix)), self.filebinary)
    }
}

/// Temporary PDB and BDB roots holding the test entry.
///
/// ```ignore
/// let mirror = TestMirror::new(true)?;
/// let store = StructureStore::new(mirror.pdb_dir(), mirror.bdb_dir());
/// ```
pub struct TestMirror {
    pdb: TempDir,
    bdb: TempDir,
}

impl TestMirror {
    /// The PDB root always holds the entry; the BDB root only when `with_bdb`.
    pub fn new(with_bdb: bool) -> std::io::Result<Self> {
        let pdb = tempfile::tempdir()?;
        let bdb = tempfile::tempdir()?;
        TestFile::reference_01().write_flat(pdb.path(), TEST_PDB_ID)?;
        if with_bdb {
            TestFile::derived_01().write_flat(bdb.path(), TEST_PDB_ID)?;
        }
        Ok(TestMirror { pdb, bdb })
    }
    pub fn pdb_dir(&self) -> &Path {
        self.pdb.path()
    }
    pub fn bdb_dir(&self) -> &Path {
        self.bdb.path()
    }
}

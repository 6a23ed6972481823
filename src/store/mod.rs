#[cfg(test)]
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::PathBuf;

/// Ordered, append-only persistence of raw block records, indexed from 0.
///
/// `write` has create-if-absent semantics: an index that already holds a
/// record is never overwritten. `count` is the number of stored records,
/// which the engine uses as the next free index.
pub trait RecordStore {
    fn exists(&self, index: u64) -> bool;

    /// The raw record at `index`, or `None` if it was never written.
    fn read(&self, index: u64) -> io::Result<Option<String>>;

    /// Persist a record at `index`. Fails if the index is already taken.
    fn write(&mut self, index: u64, record: &str) -> io::Result<()>;

    fn count(&self) -> io::Result<u64>;
}

/// Record store backed by a directory of `block<i>.txt` files.
pub struct DirStore {
    dir: PathBuf,
}

impl DirStore {
    /// Open the record directory, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path(&self, index: u64) -> PathBuf {
        self.dir.join(format!("block{index}.txt"))
    }

    fn parse_name(name: &str) -> Option<u64> {
        name.strip_prefix("block")?
            .strip_suffix(".txt")?
            .parse()
            .ok()
    }
}

impl RecordStore for DirStore {
    fn exists(&self, index: u64) -> bool {
        self.path(index).is_file()
    }

    fn read(&self, index: u64) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path(index)) {
            Ok(record) => Ok(Some(record)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn write(&mut self, index: u64, record: &str) -> io::Result<()> {
        // create_new keeps two writers from racing the same index
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(self.path(index))?;
        file.write_all(record.as_bytes())
    }

    fn count(&self) -> io::Result<u64> {
        let mut total = 0;
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if Self::parse_name(&entry.file_name().to_string_lossy()).is_some() {
                total += 1;
            }
        }
        Ok(total)
    }
}

/// In-memory record store for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemStore {
    records: BTreeMap<u64, String>,
}

#[cfg(test)]
impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl RecordStore for MemStore {
    fn exists(&self, index: u64) -> bool {
        self.records.contains_key(&index)
    }

    fn read(&self, index: u64) -> io::Result<Option<String>> {
        Ok(self.records.get(&index).cloned())
    }

    fn write(&mut self, index: u64, record: &str) -> io::Result<()> {
        if self.records.contains_key(&index) {
            return Err(io::Error::new(
                ErrorKind::AlreadyExists,
                format!("record {index} already exists"),
            ));
        }
        self.records.insert(index, record.to_string());
        Ok(())
    }

    fn count(&self) -> io::Result<u64> {
        Ok(self.records.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::{DirStore, MemStore, RecordStore};

    #[test]
    fn dir_store_round_trips_records() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = DirStore::open(dir.path()).expect("open");

        assert!(!store.exists(0));
        store.write(0, "hello\n0").expect("write");
        assert!(store.exists(0));
        assert_eq!(store.read(0).expect("read").as_deref(), Some("hello\n0"));
        assert_eq!(store.count().expect("count"), 1);
    }

    #[test]
    fn dir_store_refuses_overwrite() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = DirStore::open(dir.path()).expect("open");

        store.write(0, "first").expect("write");
        assert!(store.write(0, "second").is_err());
        assert_eq!(store.read(0).expect("read").as_deref(), Some("first"));
    }

    #[test]
    fn dir_store_count_ignores_foreign_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = DirStore::open(dir.path()).expect("open");

        store.write(0, "genesis").expect("write");
        store.write(1, "block").expect("write");
        std::fs::write(dir.path().join("notes.txt"), "scratch").expect("write foreign");
        std::fs::write(dir.path().join("blockX.txt"), "junk").expect("write foreign");

        assert_eq!(store.count().expect("count"), 2);
    }

    #[test]
    fn mem_store_refuses_overwrite() {
        let mut store = MemStore::new();
        store.write(3, "rec").expect("write");
        assert!(store.write(3, "other").is_err());
        assert_eq!(store.count().expect("count"), 1);
        assert!(store.read(9).expect("read").is_none());
    }
}

//! Named byte-stream storage for world files

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Cursor, Read, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Source and sink of named byte streams.
///
/// Streams are dropped by the caller when it is done with them; the
/// storage itself keeps no open handles.
pub trait WorldStorage {
    type Reader: Read;
    type Writer: Write;

    /// Open `name` for reading from the start
    fn open(&self, name: &str) -> io::Result<Self::Reader>;

    /// Create `name`, or empty it if it exists, and open it for writing
    fn truncate(&self, name: &str) -> io::Result<Self::Writer>;

    fn exists(&self, name: &str) -> bool;
}

/// Files in one directory on disk
#[derive(Debug, Clone)]
pub struct DirectoryStorage {
    root: PathBuf,
}

impl DirectoryStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Like [`DirectoryStorage::new`], creating the directory if needed
    pub fn create(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl WorldStorage for DirectoryStorage {
    type Reader = BufReader<File>;
    type Writer = BufWriter<File>;

    fn open(&self, name: &str) -> io::Result<Self::Reader> {
        Ok(BufReader::new(File::open(self.path_for(name))?))
    }

    fn truncate(&self, name: &str) -> io::Result<Self::Writer> {
        Ok(BufWriter::new(File::create(self.path_for(name))?))
    }

    fn exists(&self, name: &str) -> bool {
        self.path_for(name).is_file()
    }
}

/// In-memory blobs. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    blobs: Rc<RefCell<HashMap<String, Vec<u8>>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the bytes stored under `name`
    pub fn bytes(&self, name: &str) -> Option<Vec<u8>> {
        self.blobs.borrow().get(name).cloned()
    }

    /// Replace the blob under `name`
    pub fn insert(&self, name: &str, bytes: Vec<u8>) {
        self.blobs.borrow_mut().insert(name.to_string(), bytes);
    }

    pub fn len(&self) -> usize {
        self.blobs.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.borrow().is_empty()
    }
}

/// Appends to one blob of a [`MemoryStorage`]
#[derive(Debug)]
pub struct MemoryWriter {
    blobs: Rc<RefCell<HashMap<String, Vec<u8>>>>,
    name: String,
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.blobs
            .borrow_mut()
            .entry(self.name.clone())
            .or_default()
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl WorldStorage for MemoryStorage {
    type Reader = Cursor<Vec<u8>>;
    type Writer = MemoryWriter;

    fn open(&self, name: &str) -> io::Result<Self::Reader> {
        self.bytes(name).map(Cursor::new).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no blob named {}", name))
        })
    }

    fn truncate(&self, name: &str) -> io::Result<Self::Writer> {
        self.insert(name, Vec::new());
        Ok(MemoryWriter {
            blobs: Rc::clone(&self.blobs),
            name: name.to_string(),
        })
    }

    fn exists(&self, name: &str) -> bool {
        self.blobs.borrow().contains_key(name)
    }
}

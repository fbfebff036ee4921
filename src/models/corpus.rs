use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Literal substring that demarcates one query definition in a query file
pub const PROPERTY_MARKER: &str = "<property>";

/// One Petri net instance under test, identified by its directory name
#[derive(Debug, Clone)]
pub struct Model {
    /// Directory name of the model, used as its identity
    pub name: String,
    /// Path to the PNML model file
    pub pnml_path: PathBuf,
    /// Query files belonging to this model
    pub query_files: Vec<Arc<QueryFile>>,
}

impl Model {
    pub fn new(name: String, pnml_path: PathBuf, query_files: Vec<Arc<QueryFile>>) -> Self {
        Self { name, pnml_path, query_files }
    }
}

/// A file containing one or more individually indexable verification queries
#[derive(Debug, Clone)]
pub struct QueryFile {
    /// Path to the query XML file
    pub path: PathBuf,
    /// Number of queries addressable by 1-based index within the file
    pub query_count: usize,
}

impl QueryFile {
    pub fn new(path: PathBuf, query_count: usize) -> Self {
        Self { path, query_count }
    }

    /// Read a query file and count its query definitions.
    ///
    /// The query count is derived by counting occurrences of the literal
    /// `<property>` marker rather than parsing the file as structured XML.
    pub fn load(path: &Path) -> io::Result<Self> {
        let contents = fs::read_to_string(path)?;
        let query_count = contents.matches(PROPERTY_MARKER).count();
        Ok(Self::new(path.to_path_buf(), query_count))
    }

    /// File name of the query file
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Whether this file holds LTL queries rather than reachability queries.
    /// LTL query files need a different solver algorithm on the verifier.
    pub fn is_ltl(&self) -> bool {
        self.path.to_string_lossy().contains("LTL")
    }
}

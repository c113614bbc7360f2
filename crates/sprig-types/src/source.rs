/// Holds a named piece of source text as raw bytes.
///
/// Where the text came from (file, stdin, a string literal) is the caller's
/// concern; the name is only used when reporting diagnostics. The bytes are
/// not validated: the lexer accepts any byte sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub source: Vec<u8>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, source: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Read a source file from disk.
    pub fn read(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read(path).map_err(|source| crate::SprigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(path.display().to_string(), source))
    }

    /// Read all of `reader` into a source file called `name`.
    pub fn from_reader(name: impl Into<String>, mut reader: impl std::io::Read) -> crate::Result<Self> {
        let name = name.into();
        let mut source = Vec::new();
        reader
            .read_to_end(&mut source)
            .map_err(|source| crate::SprigError::Io {
                path: std::path::PathBuf::from(&name),
                source,
            })?;
        Ok(Self::new(name, source))
    }

    /// Length of the source text in bytes.
    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}

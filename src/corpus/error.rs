use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("IO error reading corpus: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Corpus not found at path: {0}")]
    NotFound(String),

    #[error("Corpus contains no usable records")]
    Empty,
}

pub type Result<T> = std::result::Result<T, CorpusError>;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpellError {
    #[error("could not open dictionary {path:?}: {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("error reading dictionary {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, SpellError>;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use log::{debug, info};
use typed_builder::TypedBuilder;

use crate::dictionary::trie::Trie;
use crate::error::{Result, SpellError};

/// Longest vocabulary entry accepted by the loader. Also the bound on how
/// deep the trie (and its drop recursion) can get.
pub const MAX_WORD_LENGTH: usize = 45;

#[derive(TypedBuilder)]
pub struct FileFormat {
    #[builder(default = MAX_WORD_LENGTH)]
    max_word_length: usize,
}

/// The active dictionary handle. Starts out absent; `load` builds a trie
/// from a word file and installs it, `unload` releases it. Queries against
/// an absent dictionary report an empty vocabulary rather than an error.
pub struct Dictionary {
    trie: Option<Trie>,
}

impl Dictionary {
    pub fn new() -> Dictionary {
        Dictionary { trie: None }
    }

    /// Reads words from `path`, one per line, into a fresh trie. The trie
    /// is installed only once the whole file has been read, so a failed
    /// load leaves the previously loaded dictionary (if any) in place; a
    /// successful load drops it. Lines longer than the configured
    /// max_word_length are skipped, as are empty lines. Returns the number
    /// of word-lines stored.
    pub fn load<P: AsRef<Path>>(&mut self, path: P, format: FileFormat) -> Result<usize> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SpellError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let buf_reader = BufReader::new(file);

        let start = Instant::now();
        let mut trie = Trie::new();
        let mut rejects: usize = 0;

        for line in buf_reader.lines() {
            let line = line.map_err(|source| SpellError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            if line.is_empty() {
                continue;
            }
            if line.chars().count() > format.max_word_length {
                rejects += 1;
                continue;
            }
            if trie.insert_line(&line) && trie.word_count() % 100000 == 0 {
                debug!("{} {}", trie.word_count(), line);
            }
        }

        let count = trie.word_count();
        info!("read {} words from {:?} in {:.3}s ({} lines rejected)",
              count, path, start.elapsed().as_secs_f64(), rejects);

        self.trie = Some(trie);
        Ok(count)
    }

    /// Exact membership against the loaded vocabulary; false while absent.
    pub fn check(&self, word: &str) -> bool {
        match &self.trie {
            Some(trie) => trie.contains(word),
            None => false,
        }
    }

    /// Word-lines counted by the most recent load; 0 while absent. Use
    /// `is_loaded` to tell "never built" from "built on an empty source".
    pub fn size(&self) -> usize {
        self.trie.as_ref().map(|t| t.word_count()).unwrap_or(0)
    }

    pub fn is_loaded(&self) -> bool {
        self.trie.is_some()
    }

    /// Releases the whole structure, child nodes before their parents.
    /// True if there was something to release.
    pub fn unload(&mut self) -> bool {
        self.trie.take().is_some()
    }
}

impl Default for Dictionary {
    fn default() -> Dictionary {
        Dictionary::new()
    }
}

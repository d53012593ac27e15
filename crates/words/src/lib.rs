//! Word list loading
//!
//! Word files are plain text, one entry per line. Only the first
//! space-delimited token of each line is kept, so dictionary files with
//! trailing annotations work unchanged.
//!
//! ```
//! use tui_typos_words::{parse_words, LoadOptions};
//!
//! let text = "  Apple pie\nbanana\n\n   \ncherry tree\n";
//! let mut words = Vec::new();
//! parse_words(text.as_bytes(), &LoadOptions::default(), &mut words).unwrap();
//! assert_eq!(words, ["Apple", "banana", "cherry"]);
//! ```

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Directory scanned when no word file is given
pub const DEFAULT_DICT_DIR: &str = "/usr/share/dict";

#[derive(Debug, Error)]
pub enum WordsError {
    #[error("Default directory which is searched for words lists ({}) cannot be opened: {source}", .path.display())]
    OpenDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Cannot open words file {} for read access: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("No file with words found. Please select one with the -f commandline parameter.")]
    NoWordFiles,
    #[error("The selected word files do not contain any words.")]
    NoWords,
}

/// How lines are turned into words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Fold every word to lowercase
    pub lowercase: bool,
    /// Longest word kept, in characters; longer entries are cut
    pub max_len: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            lowercase: false,
            max_len: 80,
        }
    }
}

/// List the regular files in `dir`, sorted by path.
pub fn default_word_files(dir: &Path) -> Result<Vec<PathBuf>, WordsError> {
    let open_err = |source| WordsError::OpenDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(open_err)? {
        let entry = entry.map_err(open_err)?;
        let path = entry.path();
        // Follows symlinks (e.g. /usr/share/dict/words -> alternatives).
        if path.is_file() {
            files.push(path);
        } else {
            log::debug!("skipping {}", path.display());
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(WordsError::NoWordFiles);
    }
    Ok(files)
}

/// Parse word lines from `reader`, appending to `out`.
pub fn parse_words<R: BufRead>(
    reader: R,
    options: &LoadOptions,
    out: &mut Vec<String>,
) -> io::Result<()> {
    for line in reader.split(b'\n') {
        let line = line?;
        let line = String::from_utf8_lossy(&line);
        let line = line.strip_suffix('\r').unwrap_or(&line);

        let token = line
            .trim_start_matches(' ')
            .split(' ')
            .next()
            .unwrap_or_default();

        let mut word: String = token.chars().take(options.max_len).collect();
        if options.lowercase {
            word = word.to_lowercase();
        }
        if !word.is_empty() {
            out.push(word);
        }
    }
    Ok(())
}

/// Load every file in `paths`, in order.
pub fn load(paths: &[PathBuf], options: &LoadOptions) -> Result<Vec<String>, WordsError> {
    if paths.is_empty() {
        return Err(WordsError::NoWordFiles);
    }

    let mut words = Vec::new();
    for path in paths {
        let read_err = |source| WordsError::ReadFile {
            path: path.clone(),
            source,
        };

        log::info!("Loading file {}...", path.display());
        let before = words.len();
        let file = File::open(path).map_err(read_err)?;
        parse_words(BufReader::new(file), options, &mut words).map_err(read_err)?;
        log::info!("{} words from {}", words.len() - before, path.display());
    }

    if words.is_empty() {
        return Err(WordsError::NoWords);
    }
    Ok(words)
}

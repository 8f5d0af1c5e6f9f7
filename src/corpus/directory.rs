// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Plain-text documents in a folder.
//!
//! Every `*.txt` file directly inside the folder is one document; its file
//! name is the id. Subdirectories and other extensions are ignored. Files are
//! ordered by name so the same folder always yields the same row order,
//! whatever order the filesystem lists them in. Reading is parallel when the
//! `parallel` feature is on.

use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::{Result, SearchError};
use crate::types::Document;

use super::{Corpus, CorpusProvider};

/// Extension of document files.
pub const DOCUMENT_EXTENSION: &str = "txt";

/// A folder of `*.txt` files.
#[derive(Debug, Clone)]
pub struct DirectoryCorpus {
    root: PathBuf,
}

impl DirectoryCorpus {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Document files, sorted by file name.
    fn document_paths(&self) -> Result<Vec<PathBuf>> {
        let io_error = |source| SearchError::CorpusIo {
            path: self.root.clone(),
            source,
        };

        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            let is_document = path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext == DOCUMENT_EXTENSION);
            if is_document {
                paths.push(path);
            } else {
                debug!(path = %path.display(), "skipping non-document entry");
            }
        }
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(paths)
    }
}

fn read_document(path: &Path) -> Result<Document> {
    let text = fs::read_to_string(path).map_err(|source| SearchError::CorpusIo {
        path: path.to_path_buf(),
        source,
    })?;
    let id = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(Document { id, text })
}

impl CorpusProvider for DirectoryCorpus {
    fn load(&self) -> Result<Corpus> {
        let paths = self.document_paths()?;

        #[cfg(feature = "parallel")]
        let documents = paths
            .par_iter()
            .map(|path| read_document(path))
            .collect::<Result<Vec<Document>>>()?;
        #[cfg(not(feature = "parallel"))]
        let documents = paths
            .iter()
            .map(|path| read_document(path))
            .collect::<Result<Vec<Document>>>()?;

        info!(
            root = %self.root.display(),
            documents = documents.len(),
            "loaded directory corpus"
        );
        Ok(Corpus::new(documents))
    }
}

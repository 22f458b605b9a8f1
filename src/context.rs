// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Resource filesystem context.
//!
//! A [`ResourceContext`] anchors asset URI expansion to one resolved root
//! directory: either the directory containing the running executable, or
//! the process's current working directory. The root is resolved once at
//! construction, and a handle to it is opened eagerly so a bad root fails
//! fast instead of on first use.
//!
//! # URI Surface
//!
//! Asset URIs take the form `<scheme>://<path>`, where the scheme names a
//! [`ResourceCategory`] (e.g., `audio://explosion.wav`). Expansion joins
//! the context root, the category's layout subdirectory, and the URI path
//! component into one concrete path. Expansion never touches the
//! filesystem; opening is a separate step.
//!
//! # Ownership
//!
//! Expanded paths are owned by the caller. The context itself owns only its
//! root path and root directory handle, both released when the context is
//! dropped. A dropped context cannot be revived or reused.

use crate::asset::{AssetLayout, ResourceCategory};

use std::{
    env,
    fs::{File, OpenOptions},
    path::{Path, PathBuf},
};
use tracing::debug;

/// Where a [`ResourceContext`] anchors its root path.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RootSource {
    /// Directory containing the currently running executable.
    #[default]
    ExeDir,

    /// Current working directory of the process.
    Cwd,
}

/// Filesystem context for asset URI expansion.
#[derive(Debug)]
pub struct ResourceContext {
    root: PathBuf,
    root_dir: File,
    layout: AssetLayout,
}

impl ResourceContext {
    /// Construct new resource context anchored at given root source.
    ///
    /// Resolves the root path and opens a handle to it immediately. A
    /// failed construction yields no context, so there is never a
    /// half-initialized context to tear down.
    ///
    /// # Errors
    ///
    /// - Return [`ContextError::NoExeDir`] if the executable's directory
    ///   cannot be determined.
    /// - Return [`ContextError::Filesystem`] if the working directory
    ///   cannot be queried, or the root directory cannot be opened.
    pub fn new(layout: AssetLayout, source: RootSource) -> Result<Self> {
        let root = match source {
            RootSource::ExeDir => {
                let exe = env::current_exe()?;
                exe.parent().ok_or(ContextError::NoExeDir)?.to_path_buf()
            }
            RootSource::Cwd => env::current_dir()?,
        };

        let root_dir = File::open(&root)?;
        debug!("anchored resource context at {root:?}");

        Ok(Self {
            root,
            root_dir,
            layout,
        })
    }

    /// Resolved absolute root path of the context.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Asset layout the context expands URIs against.
    pub fn layout(&self) -> &AssetLayout {
        &self.layout
    }

    /// Handle to the opened root directory.
    pub fn root_dir(&self) -> &File {
        &self.root_dir
    }

    /// Expand an asset URI into a concrete path under the context root.
    ///
    /// The URI scheme selects a [`ResourceCategory`] by name, the layout
    /// maps the category to its subdirectory, and the result is
    /// `root / subdirectory / path`. Purely string level: nothing is
    /// opened, checked for existence, or created.
    ///
    /// # Errors
    ///
    /// - Return [`ContextError::MalformedUri`] if the URI has no scheme
    ///   separator.
    /// - Return [`ContextError::UnknownResourceType`] if the scheme matches
    ///   no category, or the category has no configured subdirectory.
    pub fn expand_uri(&self, uri: &str) -> Result<PathBuf> {
        let (scheme, rest) = uri
            .split_once("://")
            .ok_or_else(|| ContextError::MalformedUri { uri: uri.into() })?;

        let category = ResourceCategory::from_name(scheme);
        let subdir = self
            .layout
            .path_for(category)
            .ok_or_else(|| ContextError::UnknownResourceType {
                scheme: scheme.into(),
            })?;

        let mut path = self.root.join(subdir);
        if !rest.is_empty() {
            path.push(rest);
        }

        debug!("expanded {uri:?} to {path:?}");
        Ok(path)
    }

    /// Expand an asset URI, then open the resulting path as a file.
    ///
    /// Open semantics (read, write, create) come from the caller's
    /// [`OpenOptions`]. Filesystem errors are surfaced unchanged.
    ///
    /// # Errors
    ///
    /// - Return any error of [`ResourceContext::expand_uri`].
    /// - Return [`ContextError::Filesystem`] if the file cannot be opened.
    pub fn expand_uri_and_open(&self, uri: &str, options: &OpenOptions) -> Result<File> {
        let path = self.expand_uri(uri)?;
        Ok(options.open(path)?)
    }
}

/// All possible error types for resource context interaction.
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    /// URI scheme matched no category with a configured subdirectory.
    #[error("no resource type known for scheme {scheme:?}")]
    UnknownResourceType {
        /// The scheme that failed to map.
        scheme: String,
    },

    /// URI lacked a scheme separator.
    #[error("malformed asset uri {uri:?}")]
    MalformedUri {
        /// The offending input.
        uri: String,
    },

    /// Executable path unavailable, or has no parent directory.
    #[error("cannot determine directory of running executable")]
    NoExeDir,

    /// Failed to query or open a path.
    #[error(transparent)]
    Filesystem(#[from] std::io::Error),
}

/// Friendly result alias :3
pub type Result<T, E = ContextError> = std::result::Result<T, E>;

// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Resolve logical resource identifiers into concrete filesystem paths.
//!
//! Waypost gives applications a stable, portable way to locate
//! configuration, cache, state, and asset directories without hard-coding
//! platform paths. It is two small resolvers that compose into one
//! resource-path service:
//!
//! - The [`xdg`] module maps a directory kind to its XDG Base Directory
//!   path, honoring environment overrides and validating absoluteness.
//! - The [`asset`] module maps resource categories to canonical
//!   subdirectories under a configurable assets root.
//! - The [`context`] module anchors asset URI expansion (e.g.,
//!   `audio://explosion.wav`) to a resolved root directory and opens the
//!   results.
//!
//! Resolution is purely string level everywhere: no caching, no directory
//! creation, no existence checks. Only POSIX path semantics are supported.

pub mod asset;
pub mod context;
pub mod xdg;

pub use asset::{AssetLayout, LayoutError, ResourceCategory};
pub use context::{ContextError, ResourceContext, RootSource};
pub use xdg::{DirectoryKind, XdgError};

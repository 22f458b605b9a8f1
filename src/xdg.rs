// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! XDG Base Directory resolution.
//!
//! Map a [`DirectoryKind`] to a concrete directory path following the XDG
//! Base Directory convention: an environment variable override when one is
//! set, or a fixed fallback when it is not. Resolution is purely string
//! level. Nothing here checks that a resolved path exists, and nothing here
//! creates directories. File I/O is left to the caller to figure out.
//!
//! # Override Discipline
//!
//! The Base Directory specification mandates that user-supplied overrides be
//! absolute paths. A relative override would make resolution ambiguous
//! relative to an unspecified base, so [`resolve`] rejects it with
//! [`XdgError::AbsolutePathRequired`] instead of silently accepting it.
//!
//! # See Also
//!
//! - [XDG Base Directory](https://wiki.archlinux.org/title/XDG_Base_Directory)

use std::{
    env,
    fmt::{Display, Formatter, Result as FmtResult},
    fs::File,
    path::PathBuf,
    str::FromStr,
};
use tracing::debug;

/// Directory classification of the XDG Base Directory convention.
///
/// Each kind pairs one environment variable with one fallback path. The
/// mapping is total and immutable. The search-list kinds ([`Data`] and
/// [`Config`]) resolve to a colon-delimited, preference-ordered list of
/// paths rather than a single path.
///
/// [`Data`]: DirectoryKind::Data
/// [`Config`]: DirectoryKind::Config
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DirectoryKind {
    /// User-specific data files.
    UserData,

    /// User-specific configuration files.
    UserConfig,

    /// User-specific state files that should persist between restarts.
    UserState,

    /// User-specific non-essential cached data.
    UserCache,

    /// User-specific runtime files bound to the login session.
    UserRuntime,

    /// System-wide data directory search list.
    Data,

    /// System-wide configuration directory search list.
    Config,
}

impl DirectoryKind {
    /// All directory kinds in declaration order.
    pub const VARIANTS: [DirectoryKind; 7] = [
        DirectoryKind::UserData,
        DirectoryKind::UserConfig,
        DirectoryKind::UserState,
        DirectoryKind::UserCache,
        DirectoryKind::UserRuntime,
        DirectoryKind::Data,
        DirectoryKind::Config,
    ];

    /// Name of the environment variable that overrides this kind.
    pub const fn env_var(self) -> &'static str {
        match self {
            DirectoryKind::UserData => "XDG_DATA_HOME",
            DirectoryKind::UserConfig => "XDG_CONFIG_HOME",
            DirectoryKind::UserState => "XDG_STATE_HOME",
            DirectoryKind::UserCache => "XDG_CACHE_HOME",
            DirectoryKind::UserRuntime => "XDG_RUNTIME_DIR",
            DirectoryKind::Data => "XDG_DATA_DIRS",
            DirectoryKind::Config => "XDG_CONFIG_DIRS",
        }
    }

    /// Fallback path used when the environment variable is unset or empty.
    ///
    /// User kinds give a path relative to the home directory. [`resolve`]
    /// joins it under the home directory before returning it. The
    /// [`UserRuntime`] fallback is a base directory that still needs the
    /// numeric user identifier appended (see [`runtime_dir_default`]). The
    /// search-list kinds give a colon-delimited list returned as-is; callers
    /// that need to iterate split on the delimiter themselves.
    ///
    /// [`UserRuntime`]: DirectoryKind::UserRuntime
    pub const fn default_path(self) -> &'static str {
        match self {
            DirectoryKind::UserData => ".local/share",
            DirectoryKind::UserConfig => ".config",
            DirectoryKind::UserState => ".local/state",
            DirectoryKind::UserCache => ".cache",
            DirectoryKind::UserRuntime => "/run/user",
            DirectoryKind::Data => "usr/local/share:/usr/share",
            DirectoryKind::Config => "/etc/xdg",
        }
    }

    /// Textual name of the kind, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            DirectoryKind::UserData => "user_data",
            DirectoryKind::UserConfig => "user_config",
            DirectoryKind::UserState => "user_state",
            DirectoryKind::UserCache => "user_cache",
            DirectoryKind::UserRuntime => "user_runtime",
            DirectoryKind::Data => "data",
            DirectoryKind::Config => "config",
        }
    }

    /// Whether this kind resolves to a delimiter-separated search list.
    pub const fn is_search_list(self) -> bool {
        matches!(self, DirectoryKind::Data | DirectoryKind::Config)
    }
}

impl Display for DirectoryKind {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        fmt.write_str(self.name())
    }
}

impl FromStr for DirectoryKind {
    type Err = UnknownDirectoryKind;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        DirectoryKind::VARIANTS
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| UnknownDirectoryKind(name.into()))
    }
}

/// Determine absolute path of XDG base directory for given kind.
///
/// Reads the environment variable named by [`DirectoryKind::env_var`]. A
/// set, non-empty value is returned verbatim after validating that it is an
/// absolute path. An unset or empty variable falls back to
/// [`DirectoryKind::default_path`], joined under the user's home directory
/// for the user kinds, or joined with the numeric user identifier for
/// [`DirectoryKind::UserRuntime`].
///
/// Search-list kinds skip the absoluteness check, because their value is a
/// delimiter-separated list rather than one path.
///
/// Does not check if the path returned actually exists.
///
/// # Errors
///
/// - Return [`XdgError::AbsolutePathRequired`] if an override is relative.
/// - Return [`XdgError::NoWayHome`] if a user kind falls back to its default
///   and the home directory path cannot be determined.
pub fn resolve(kind: DirectoryKind) -> Result<PathBuf> {
    let var = kind.env_var();
    match env::var_os(var) {
        Some(value) if !value.is_empty() => {
            let path = PathBuf::from(value);
            if !kind.is_search_list() && !path.is_absolute() {
                return Err(XdgError::AbsolutePathRequired { var, path });
            }

            debug!("resolved {kind} from ${var}");
            Ok(path)
        }
        _ => {
            debug!("${var} unset, falling back to default for {kind}");
            default_dir(kind)
        }
    }
}

/// Open the base directory for given kind.
///
/// Calls [`resolve`], then opens the resolved path as a directory. Any
/// filesystem error (not-found, permission-denied) is surfaced unchanged.
///
/// # Errors
///
/// - Return any error of [`resolve`].
/// - Return [`XdgError::Filesystem`] if the directory cannot be opened.
pub fn open(kind: DirectoryKind) -> Result<File> {
    let path = resolve(kind)?;
    Ok(File::open(path)?)
}

/// Determine default absolute path of the user runtime directory.
///
/// Builds `/run/user/<uid>` from the current process's numeric user
/// identifier. Does not check if the path returned actually exists.
pub fn runtime_dir_default() -> PathBuf {
    // SAFETY: getuid has no failure mode and touches no memory.
    let uid = unsafe { libc::getuid() };
    PathBuf::from(DirectoryKind::UserRuntime.default_path()).join(uid.to_string())
}

/// Determine absolute path to user's home directory.
///
/// Does not check if the path returned actually exists.
///
/// # Errors
///
/// - Return [`XdgError::NoWayHome`] if home directory path cannot be
///   determined.
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or(XdgError::NoWayHome)
}

fn default_dir(kind: DirectoryKind) -> Result<PathBuf> {
    match kind {
        DirectoryKind::UserData
        | DirectoryKind::UserConfig
        | DirectoryKind::UserState
        | DirectoryKind::UserCache => Ok(home_dir()?.join(kind.default_path())),
        DirectoryKind::UserRuntime => Ok(runtime_dir_default()),
        DirectoryKind::Data | DirectoryKind::Config => Ok(PathBuf::from(kind.default_path())),
    }
}

/// All possible error types for XDG base directory resolution.
#[derive(Debug, thiserror::Error)]
pub enum XdgError {
    /// Environment override resolved to a relative path.
    #[error("${var} must be an absolute path, but got {path:?}")]
    AbsolutePathRequired {
        /// Name of the offending environment variable.
        var: &'static str,

        /// The relative path it was set to.
        path: PathBuf,
    },

    /// No way to determine user's home directory.
    #[error("cannot determine absolute path to user's home directory")]
    NoWayHome,

    /// Failed to open resolved base directory.
    #[error(transparent)]
    Filesystem(#[from] std::io::Error),
}

/// Name did not match any [`DirectoryKind`] variant.
#[derive(Clone, Debug, thiserror::Error)]
#[error("unknown directory kind {0:?}")]
pub struct UnknownDirectoryKind(String);

/// Friendly result alias :3
pub type Result<T, E = XdgError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sealed_test::prelude::*;
    use simple_test_case::test_case;

    #[test_case(DirectoryKind::UserData, "XDG_DATA_HOME"; "user data")]
    #[test_case(DirectoryKind::UserConfig, "XDG_CONFIG_HOME"; "user config")]
    #[test_case(DirectoryKind::UserState, "XDG_STATE_HOME"; "user state")]
    #[test_case(DirectoryKind::UserCache, "XDG_CACHE_HOME"; "user cache")]
    #[test_case(DirectoryKind::UserRuntime, "XDG_RUNTIME_DIR"; "user runtime")]
    #[test_case(DirectoryKind::Data, "XDG_DATA_DIRS"; "data dirs")]
    #[test_case(DirectoryKind::Config, "XDG_CONFIG_DIRS"; "config dirs")]
    #[test]
    fn env_var_matches_convention(kind: DirectoryKind, expect: &str) {
        use pretty_assertions::assert_eq;
        assert_eq!(kind.env_var(), expect);
    }

    #[test_case(DirectoryKind::UserData, ".local/share"; "user data")]
    #[test_case(DirectoryKind::UserConfig, ".config"; "user config")]
    #[test_case(DirectoryKind::UserState, ".local/state"; "user state")]
    #[test_case(DirectoryKind::UserCache, ".cache"; "user cache")]
    #[test_case(DirectoryKind::UserRuntime, "/run/user"; "user runtime")]
    #[test_case(DirectoryKind::Data, "usr/local/share:/usr/share"; "data dirs")]
    #[test_case(DirectoryKind::Config, "/etc/xdg"; "config dirs")]
    #[test]
    fn default_path_matches_convention(kind: DirectoryKind, expect: &str) {
        use pretty_assertions::assert_eq;
        assert_eq!(kind.default_path(), expect);
    }

    #[test]
    fn kind_names_round_trip() -> anyhow::Result<()> {
        for kind in DirectoryKind::VARIANTS {
            assert_eq!(kind.name().parse::<DirectoryKind>()?, kind);
        }

        Ok(())
    }

    #[test]
    fn unknown_kind_name_is_rejected() {
        assert!("cache".parse::<DirectoryKind>().is_err());
    }

    #[sealed_test(env = [("XDG_CONFIG_HOME", "/somewhere/config")])]
    fn resolve_returns_absolute_override_verbatim() -> anyhow::Result<()> {
        let result = resolve(DirectoryKind::UserConfig)?;
        assert_eq!(result, PathBuf::from("/somewhere/config"));

        Ok(())
    }

    #[sealed_test(env = [("XDG_CONFIG_HOME", "relative/dir")])]
    fn resolve_rejects_relative_override() {
        let result = resolve(DirectoryKind::UserConfig);
        assert!(matches!(
            result,
            Err(XdgError::AbsolutePathRequired { var: "XDG_CONFIG_HOME", .. })
        ));
    }

    #[sealed_test]
    fn resolve_falls_back_to_home_joined_default() -> anyhow::Result<()> {
        env::remove_var("XDG_STATE_HOME");

        let result = resolve(DirectoryKind::UserState)?;
        assert_eq!(result, home_dir()?.join(".local/state"));

        Ok(())
    }

    #[sealed_test(env = [("XDG_CACHE_HOME", "")])]
    fn resolve_treats_empty_override_as_unset() -> anyhow::Result<()> {
        let result = resolve(DirectoryKind::UserCache)?;
        assert_eq!(result, home_dir()?.join(".cache"));

        Ok(())
    }

    #[sealed_test]
    fn resolve_appends_uid_to_runtime_default() -> anyhow::Result<()> {
        env::remove_var("XDG_RUNTIME_DIR");

        let uid = unsafe { libc::getuid() };
        let result = resolve(DirectoryKind::UserRuntime)?;
        assert_eq!(result, PathBuf::from(format!("/run/user/{uid}")));

        Ok(())
    }

    #[sealed_test]
    fn resolve_returns_search_list_default_verbatim() -> anyhow::Result<()> {
        env::remove_var("XDG_DATA_DIRS");

        let result = resolve(DirectoryKind::Data)?;
        assert_eq!(result, PathBuf::from("usr/local/share:/usr/share"));

        Ok(())
    }

    #[sealed_test(env = [("XDG_CONFIG_DIRS", "/etc/xdg:/opt/xdg")])]
    fn resolve_returns_search_list_override_verbatim() -> anyhow::Result<()> {
        let result = resolve(DirectoryKind::Config)?;
        assert_eq!(result, PathBuf::from("/etc/xdg:/opt/xdg"));

        Ok(())
    }

    #[sealed_test]
    fn open_surfaces_missing_directory_unchanged() {
        // sealed_test runs inside a fresh temporary working directory.
        let missing = env::current_dir().unwrap().join("does-not-exist");
        env::set_var("XDG_DATA_HOME", &missing);

        let result = open(DirectoryKind::UserData);
        match result {
            Err(XdgError::Filesystem(error)) => {
                assert_eq!(error.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected filesystem error, got {other:?}"),
        }
    }

    #[sealed_test]
    fn open_resolved_directory_succeeds() -> anyhow::Result<()> {
        let here = env::current_dir()?;
        env::set_var("XDG_DATA_HOME", &here);

        let _ = open(DirectoryKind::UserData)?;

        Ok(())
    }
}

//! Reading and writing the dlauncher config file.
//!
//! [`ConfigStore`] pairs a loaded [`Config`] with the path it came from, so
//! lookups and mutations work on one explicit value instead of process-wide
//! state. Writes replace the whole file through a temporary file and a rename.

use std::fs::{self, File};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use log::{debug, info};
use tempfile::NamedTempFile;

use crate::definitions::{Config, Executable, Shortcut};
use crate::error::{Error, Result};

fn get_reader(path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::ConfigNotFound {
            path: path.to_string(),
        }),
        Err(e) => Err(Error::io_error("config".to_string(), path.to_string(), e)),
    }
}

/// Mode given to a config file that did not exist before.
#[cfg(unix)]
const NEW_CONFIG_MODE: u32 = 0o644;

fn parent_directory(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// The file a write to `path` must replace: symlinks are followed so a
/// linked config keeps being a link.
fn write_target(path: &str) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| PathBuf::from(path))
}

/// Existing files keep their mode; new ones get [`NEW_CONFIG_MODE`].
fn copy_permissions(file: &File, target: &Path) -> io::Result<()> {
    match fs::metadata(target) {
        Ok(metadata) => file.set_permissions(metadata.permissions()),
        Err(_) => set_new_file_permissions(file),
    }
}

#[cfg(unix)]
fn set_new_file_permissions(file: &File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    file.set_permissions(fs::Permissions::from_mode(NEW_CONFIG_MODE))
}

#[cfg(not(unix))]
fn set_new_file_permissions(_file: &File) -> io::Result<()> {
    Ok(())
}

/// Serializes `config` next to the file behind `path` and renames it into place.
fn write_config(path: &str, config: &Config) -> Result<()> {
    let target = write_target(path);
    let directory = parent_directory(&target);

    let mut temp_file = NamedTempFile::new_in(&directory).map_err(|e| {
        Error::io_error(
            "temporary config".to_string(),
            directory.display().to_string(),
            e,
        )
    })?;

    serde_yaml::to_writer(&mut temp_file, config).map_err(|e| {
        Error::yaml_error(
            "writing".to_string(),
            "config".to_string(),
            path.to_string(),
            e,
        )
    })?;

    copy_permissions(temp_file.as_file(), &target)
        .map_err(|e| Error::io_error("config".to_string(), path.to_string(), e))?;

    temp_file
        .persist(&target)
        .map_err(|e| Error::io_error("config".to_string(), path.to_string(), e.error))?;

    debug!("Wrote config to `{}`", target.display());
    Ok(())
}

#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: String,
    config: Config,
}

impl ConfigStore {
    /// Wraps an already built config; nothing is read or written.
    pub fn new(path: impl Into<String>, config: Config) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    /// Loads the config file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if there is no file at `path`,
    /// [`Error::Yaml`] if the content is malformed and [`Error::Io`] for
    /// any other read failure.
    pub fn load(path: &str) -> Result<Self> {
        let reader = get_reader(path)?;

        let config: Config = serde_yaml::from_reader(reader).map_err(|e| {
            Error::yaml_error(
                "reading".to_string(),
                "config".to_string(),
                path.to_string(),
                e,
            )
        })?;

        debug!(
            "Loaded {} executables and {} shortcuts from `{path}`",
            config.executables.len(),
            config.shortcuts.len()
        );

        Ok(Self::new(path, config))
    }

    /// Writes the starter config to `path`, creating parent directories.
    ///
    /// An existing file at `path` is overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the directory or file cannot be written.
    pub fn create_default(path: &str) -> Result<Self> {
        let directory = parent_directory(Path::new(path));
        fs::create_dir_all(&directory).map_err(|e| {
            Error::io_error(
                "config directory".to_string(),
                directory.display().to_string(),
                e,
            )
        })?;

        let store = Self::new(path, Config::starter());
        write_config(&store.path, &store.config)?;
        info!("Created default config at `{path}`");

        Ok(store)
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// # Errors
    ///
    /// Returns [`Error::ShortcutNotFound`] if no shortcut is named `name`.
    pub fn get_shortcut(&self, name: &str) -> Result<&Shortcut> {
        self.config
            .shortcuts
            .get(name)
            .ok_or_else(|| Error::ShortcutNotFound(name.to_string()))
    }

    /// # Errors
    ///
    /// Returns [`Error::ExecutableNotFound`] if no executable is named `name`.
    pub fn get_executable(&self, name: &str) -> Result<&Executable> {
        self.config
            .executables
            .get(name)
            .ok_or_else(|| Error::ExecutableNotFound(name.to_string()))
    }

    /// Adds a new shortcut and rewrites the config file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShortcutAlreadyExists`] (carrying the existing
    /// template) if `name` is taken, [`Error::InvalidName`] for empty or
    /// whitespace-containing names, and a write error if persisting fails.
    /// The store is left unchanged on any error.
    pub fn add_shortcut(&mut self, name: &str, shortcut: Shortcut) -> Result<()> {
        if let Some(existing) = self.config.shortcuts.get(name) {
            return Err(Error::ShortcutAlreadyExists {
                name: name.to_string(),
                template: existing.template.clone(),
            });
        }

        validate_name(name)?;

        self.config.shortcuts.insert(name.to_string(), shortcut);

        if let Err(e) = write_config(&self.path, &self.config) {
            self.config.shortcuts.shift_remove(name);
            return Err(e);
        }

        info!("Added shortcut `{name}`");
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(Error::InvalidName(name.to_string()));
    }

    Ok(())
}

//! INI session bound to one storage location
//!
//! A session loads a document on construction and keeps it in memory. Edits
//! mark it dirty; `save` writes it back and `reload` replaces it with what is
//! currently stored. With autosave enabled every edit is written immediately.

pub mod autosave;

use std::io;
use std::path::Path;

use log::{debug, error, info, warn};

pub use autosave::{should_autosave, AutosavePolicy};

use crate::error::IniError;
use crate::generator::ini::{write_document, LineEnding};
use crate::models::{Document, SectionEntries};
use crate::parser::ini_parser::parse_lines;
use crate::settings::SessionSettings;
use crate::vfs::{LocalStorage, Storage, VfsError};

/// One document, the place it is stored and its save state.
///
/// A session assumes exclusive access to its location; two sessions on the
/// same location overwrite each other's saves.
#[derive(Debug)]
pub struct IniSession<S: Storage = LocalStorage> {
    storage: S,
    location: String,
    document: Document,
    policy: AutosavePolicy,
    line_ending: LineEnding,
}

impl IniSession<LocalStorage> {
    /// Open an INI file from the local filesystem.
    ///
    /// The path must be valid UTF-8, since it becomes the session location.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, IniError> {
        let location = path.as_ref().to_str().ok_or_else(|| {
            VfsError::IoError(io::Error::new(
                io::ErrorKind::InvalidInput,
                "File path is not a valid UTF-8 string",
            ))
        })?;
        Self::open_with(LocalStorage::new(), location)
    }
}

impl<S: Storage> IniSession<S> {
    /// Load `location` from `storage` with default settings
    pub fn open_with(storage: S, location: &str) -> Result<Self, IniError> {
        if !storage.exists(location)? {
            return Err(IniError::NotFound(location.to_string()));
        }

        let document = load(&storage, location)?;
        info!(
            "Opened {} ({} entries in {} sections)",
            location,
            document.len(),
            document.section_names().count()
        );

        Ok(IniSession {
            storage,
            location: location.to_string(),
            document,
            policy: AutosavePolicy::new(),
            line_ending: LineEnding::default(),
        })
    }

    /// Load `location` and apply `settings`
    pub fn open_with_settings(
        storage: S,
        location: &str,
        settings: &SessionSettings,
    ) -> Result<Self, IniError> {
        let mut session = Self::open_with(storage, location)?;
        session.line_ending = settings.line_ending;
        if settings.autosave {
            session.enable_autosave()?;
        }
        Ok(session)
    }

    /// Storage location this session reads and writes
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Storage capability backing this session
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Document as currently held in memory
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Line terminator used by `save`
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Change the line terminator used by `save`
    pub fn set_line_ending(&mut self, line_ending: LineEnding) {
        self.line_ending = line_ending;
    }

    /// Whether the document has edits that are not saved yet
    pub fn changes_pending(&self) -> bool {
        self.policy.pending()
    }

    /// Whether every edit is saved immediately
    pub fn autosave_enabled(&self) -> bool {
        self.policy.enabled()
    }

    /// Get the value stored for `key` in `section`
    pub fn get_value(&self, section: &str, key: &str) -> Option<&str> {
        self.document.get(section, key)
    }

    /// Read a value as a boolean (`true` / `false`)
    pub fn get_bool(&self, section: &str, key: &str) -> Option<bool> {
        self.get_value(section, key)?.parse().ok()
    }

    /// Read a value as a signed integer
    pub fn get_int(&self, section: &str, key: &str) -> Option<i64> {
        self.get_value(section, key)?.parse().ok()
    }

    /// Insert or replace a value.
    ///
    /// Only fails when autosave is enabled and the save fails; the edit is
    /// kept in memory either way.
    pub fn set_value(&mut self, section: &str, key: &str, value: &str) -> Result<(), IniError> {
        self.document.set(section, key, value);
        self.policy.mark_dirty();
        self.check_autosave()
    }

    /// Remove a key, returning whether it existed
    pub fn delete_key(&mut self, section: &str, key: &str) -> Result<bool, IniError> {
        let deleted = self.document.delete(section, key);
        if deleted {
            self.policy.mark_dirty();
        }
        self.check_autosave()?;
        Ok(deleted)
    }

    /// Copy of the entries of a section, in stored order
    pub fn section_entries(&self, section: &str) -> SectionEntries {
        self.document.section_entries(section)
    }

    /// Write the document to storage, whether or not it changed
    pub fn save(&mut self) -> Result<(), IniError> {
        let content = write_document(&self.document, self.line_ending);
        if let Err(e) = self.storage.write_text(&self.location, &content) {
            error!("Failed to save {}: {}", self.location, e);
            return Err(e.into());
        }

        info!("Saved {} ({} bytes)", self.location, content.len());
        self.policy.mark_clean();
        Ok(())
    }

    /// Replace the document with the stored one, dropping unsaved edits.
    ///
    /// On failure the current document and its dirty flag are left as they
    /// were.
    pub fn reload(&mut self) -> Result<(), IniError> {
        match load(&self.storage, &self.location) {
            Ok(document) => {
                self.document = document;
                self.policy.mark_clean();
                info!("Reloaded {}", self.location);
                Ok(())
            }
            Err(e) => {
                warn!("Keeping previous contents of {}: {}", self.location, e);
                Err(e)
            }
        }
    }

    /// Turn autosave on, saving immediately if edits are pending
    pub fn enable_autosave(&mut self) -> Result<(), IniError> {
        self.policy.set_enabled(true);
        self.check_autosave()
    }

    /// Turn autosave off; pending edits stay unsaved
    pub fn disable_autosave(&mut self) {
        self.policy.set_enabled(false);
    }

    fn check_autosave(&mut self) -> Result<(), IniError> {
        if !self.policy.should_save() {
            return Ok(());
        }
        debug!("Autosaving {}", self.location);
        self.save()
    }
}

fn load<S: Storage>(storage: &S, location: &str) -> Result<Document, IniError> {
    let lines = storage.read_lines(location)?;
    parse_lines(&lines).map_err(|source| IniError::Parse {
        location: location.to_string(),
        source,
    })
}

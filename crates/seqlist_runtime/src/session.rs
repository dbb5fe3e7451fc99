//! Session state: one current sequence and the registry it came from.
//!
//! The session is the call surface the command shell drives. Indices arrive
//! as signed integers so that negative input is reported as out of range
//! rather than rejected earlier by the caller, and values arrive as text
//! that is checked strictly against the current type.

use std::path::PathBuf;

use seqlist_codec::{Format, load_from_file, save_to_file};
use seqlist_foundation::{Error, ErrorKind, Result, TypeRegistry, ValueType};
use seqlist_storage::Sequence;
use tracing::info;

use crate::config::RuntimeConfig;

/// Session state for the command shell.
#[derive(Debug)]
pub struct Session {
    /// Types available to `create` and `load`.
    registry: TypeRegistry,

    /// Data directory and default format.
    config: RuntimeConfig,

    /// The current sequence, once one has been created or loaded.
    current: Option<Sequence>,
}

impl Session {
    /// Creates a session with the built-in types and no current sequence.
    #[must_use]
    pub fn new(config: RuntimeConfig) -> Self {
        Self::with_registry(TypeRegistry::new(), config)
    }

    /// Creates a session resolving types through `registry`.
    #[must_use]
    pub fn with_registry(registry: TypeRegistry, config: RuntimeConfig) -> Self {
        Self {
            registry,
            config,
            current: None,
        }
    }

    /// The type registry.
    #[must_use]
    pub const fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// The configuration.
    #[must_use]
    pub const fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// The current sequence, if any.
    #[must_use]
    pub const fn sequence(&self) -> Option<&Sequence> {
        self.current.as_ref()
    }

    /// Declared names of every available type, in registry order.
    #[must_use]
    pub fn list_types(&self) -> Vec<&'static str> {
        self.registry.names()
    }

    /// Replaces the current sequence with an empty one of the named type.
    ///
    /// # Errors
    ///
    /// Returns an unknown type error; the current sequence is kept.
    pub fn create(&mut self, type_name: &str) -> Result<ValueType> {
        let prototype = self.registry.lookup(type_name.trim())?;
        self.current = Some(Sequence::new(prototype));
        info!(value_type = %prototype, "created sequence");
        Ok(prototype)
    }

    /// Appends a value given as text.
    ///
    /// # Errors
    ///
    /// Returns `NoSequence`, or a parse failure for malformed numerals.
    /// Blank numeric text is stored as zero.
    pub fn add(&mut self, text: &str) -> Result<()> {
        let sequence = self.current_mut()?;
        let value = sequence.prototype().deserialize(text)?;
        sequence.add(value)
    }

    /// Inserts a value given as text at `index` (`0..=size`).
    ///
    /// The index is checked before the text is parsed.
    ///
    /// # Errors
    ///
    /// Returns `NoSequence`, an index out of range error, or a parse failure.
    pub fn insert(&mut self, index: i64, text: &str) -> Result<()> {
        let sequence = self.current_mut()?;
        let position = checked_index(index, sequence.len() + 1, sequence.len())?;
        let value = sequence.prototype().deserialize(text)?;
        sequence.insert(position, value)
    }

    /// Removes the value at `index` and returns its serialized form.
    ///
    /// # Errors
    ///
    /// Returns `NoSequence` or an index out of range error.
    pub fn remove(&mut self, index: i64) -> Result<String> {
        let sequence = self.current_mut()?;
        let position = checked_index(index, sequence.len(), sequence.len())?;
        let removed = sequence.remove(position)?;
        Ok(sequence.prototype().serialize(&removed))
    }

    /// Serialized form of the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns `NoSequence` or an index out of range error.
    pub fn get(&self, index: i64) -> Result<String> {
        let sequence = self.current()?;
        let position = checked_index(index, sequence.len(), sequence.len())?;
        let value = sequence.get(position)?;
        Ok(sequence.prototype().serialize(value))
    }

    /// Index of the first value whose serialized form equals `text`.
    ///
    /// # Errors
    ///
    /// Returns `NoSequence`.
    pub fn find(&self, text: &str) -> Result<Option<usize>> {
        let sequence = self.current()?;
        let prototype = sequence.prototype();
        Ok(sequence.position(|value| prototype.serialize(value) == text))
    }

    /// Sorts the current sequence by its type's comparator.
    ///
    /// # Errors
    ///
    /// Returns `NoSequence`.
    pub fn sort(&mut self) -> Result<()> {
        self.current_mut()?.sort();
        Ok(())
    }

    /// Serialized form of every value, in order.
    ///
    /// # Errors
    ///
    /// Returns `NoSequence`.
    pub fn items(&self) -> Result<Vec<String>> {
        Ok(self.current()?.serialized())
    }

    /// Number of values in the current sequence.
    ///
    /// # Errors
    ///
    /// Returns `NoSequence`.
    pub fn size(&self) -> Result<usize> {
        Ok(self.current()?.len())
    }

    /// Saves the current sequence and returns the resolved path.
    ///
    /// # Errors
    ///
    /// Returns `NoSequence`, an invalid command error for an empty path, or
    /// the errors of [`save_to_file`].
    pub fn save(&self, path: &str, format: Option<Format>) -> Result<PathBuf> {
        let sequence = self.current()?;
        let resolved = self.resolve_path(path)?;
        let format = format.unwrap_or(self.config.default_format);

        save_to_file(sequence, &resolved, format)?;
        info!(
            path = %resolved.display(),
            %format,
            items = sequence.len(),
            "saved sequence"
        );
        Ok(resolved)
    }

    /// Loads a sequence and makes it current, returning its type.
    ///
    /// The file is read completely before the current sequence is replaced,
    /// so a failed load leaves the session as it was.
    ///
    /// # Errors
    ///
    /// Returns an invalid command error for an empty path, or the errors of
    /// [`load_from_file`].
    pub fn load(&mut self, path: &str, format: Option<Format>) -> Result<ValueType> {
        let resolved = self.resolve_path(path)?;
        let format = format.unwrap_or(self.config.default_format);

        let loaded = load_from_file(&resolved, format, &self.registry)?;
        let prototype = loaded.prototype();
        info!(
            path = %resolved.display(),
            %format,
            value_type = %prototype,
            items = loaded.len(),
            "loaded sequence"
        );
        self.current = Some(loaded);
        Ok(prototype)
    }

    /// Resolves a user-supplied path: trimmed, and joined to the data
    /// directory unless absolute.
    ///
    /// # Errors
    ///
    /// Returns an invalid command error for an empty path.
    pub fn resolve_path(&self, path: &str) -> Result<PathBuf> {
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_command("file name required"));
        }

        let p = PathBuf::from(trimmed);
        if p.is_absolute() {
            Ok(p)
        } else {
            Ok(self.config.data_dir.join(p))
        }
    }

    fn current(&self) -> Result<&Sequence> {
        self.current
            .as_ref()
            .ok_or_else(|| Error::new(ErrorKind::NoSequence))
    }

    fn current_mut(&mut self) -> Result<&mut Sequence> {
        self.current
            .as_mut()
            .ok_or_else(|| Error::new(ErrorKind::NoSequence))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(RuntimeConfig::default())
    }
}

/// Converts a signed index to a position below `limit`, reporting errors
/// against `size`.
fn checked_index(index: i64, limit: usize, size: usize) -> Result<usize> {
    usize::try_from(index)
        .ok()
        .filter(|&i| i < limit)
        .ok_or_else(|| Error::index_out_of_range(index, size))
}

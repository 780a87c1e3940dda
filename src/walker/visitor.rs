//! Callback seam between the walker and its consumers

use crate::error::WalkError;

use super::entry::Entry;

/// Receives the entries found by [`DirectoryWalker::walk`](super::DirectoryWalker::walk).
///
/// Both methods default to doing nothing, so an implementor only overrides the
/// kind of entry it cares about. An error returned from either method stops the
/// walk and is handed back to the caller of `walk` as is.
pub trait EntryVisitor {
    /// Walker failures are converted into this type so the visitor's own
    /// errors travel back unchanged.
    type Error: From<WalkError>;

    /// Called for every non-excluded directory, before its contents are walked.
    fn visit_directory(&mut self, _entry: &Entry) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called for every non-excluded entry that is not a directory.
    fn visit_file(&mut self, _entry: &Entry) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Visitor with neither callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopVisitor;

impl EntryVisitor for NoopVisitor {
    type Error = WalkError;
}

type Callback<'a, E> = Box<dyn FnMut(&Entry) -> Result<(), E> + 'a>;

/// Visitor built from optional closures.
///
/// ```no_run
/// use dirwalk::{Callbacks, DirectoryWalker, WalkError};
///
/// let mut files = 0;
/// let mut callbacks = Callbacks::<WalkError>::new().on_file(|_| {
///     files += 1;
///     Ok(())
/// });
/// DirectoryWalker::new().walk("public/test", true, &mut callbacks)?;
/// drop(callbacks);
/// println!("{files}");
/// # Ok::<(), WalkError>(())
/// ```
pub struct Callbacks<'a, E = WalkError> {
    on_directory: Option<Callback<'a, E>>,
    on_file: Option<Callback<'a, E>>,
}

impl<'a, E> Callbacks<'a, E> {
    pub fn new() -> Self {
        Self {
            on_directory: None,
            on_file: None,
        }
    }

    pub fn on_directory<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Entry) -> Result<(), E> + 'a,
    {
        self.on_directory = Some(Box::new(callback));
        self
    }

    pub fn on_file<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Entry) -> Result<(), E> + 'a,
    {
        self.on_file = Some(Box::new(callback));
        self
    }
}

impl<E> Default for Callbacks<'_, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: From<WalkError>> EntryVisitor for Callbacks<'_, E> {
    type Error = E;

    fn visit_directory(&mut self, entry: &Entry) -> Result<(), E> {
        match self.on_directory.as_mut() {
            Some(callback) => callback(entry),
            None => Ok(()),
        }
    }

    fn visit_file(&mut self, entry: &Entry) -> Result<(), E> {
        match self.on_file.as_mut() {
            Some(callback) => callback(entry),
            None => Ok(()),
        }
    }
}

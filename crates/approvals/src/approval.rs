use crate::config::ApprovalsConfig;
use crate::error::ApprovalError;
use crate::namer::{normalize, TestContext};
use crate::reader::{ContentReader, FsContentReader};
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// One approval check: a received value paired with its approved baseline on disk.
///
/// Constructing an `Approval` guarantees the approved file exists (an empty one is
/// created if needed) and writes the received value next to it. The approved file
/// is never overwritten except by [`Approval::approve`].
pub struct Approval {
    description: String,
    approved_path: PathBuf,
    received_path: PathBuf,
    received: Option<String>,
    config: ApprovalsConfig,
    reader: Box<dyn ContentReader>,
}

impl Approval {
    /// Build an approval using [`ApprovalsConfig::from_env`].
    pub fn new<C: TestContext + ?Sized>(
        context: &C,
        qualifier: Option<&str>,
        received: Option<&str>,
    ) -> Result<Self, ApprovalError> {
        Self::with_config(ApprovalsConfig::from_env(), context, qualifier, received)
    }

    #[instrument(skip(config, context, received), fields(root = ?config.root))]
    pub fn with_config<C: TestContext + ?Sized>(
        config: ApprovalsConfig,
        context: &C,
        qualifier: Option<&str>,
        received: Option<&str>,
    ) -> Result<Self, ApprovalError> {
        let description = describe(context, qualifier)?;
        let approved_path = config.approved_path(&description);
        let received_path = config.received_path(&description);

        debug!("Approval name resolved: {}", description);

        ensure_approved_file(&approved_path)?;

        if let Some(content) = received {
            fs::write(&received_path, content)
                .map_err(|e| ApprovalError::io(&received_path, e))?;
            debug!(
                "Wrote {} bytes to received file: {:?}",
                content.len(),
                received_path
            );
        }

        Ok(Self {
            description,
            approved_path,
            received_path,
            received: received.map(str::to_string),
            config,
            reader: Box::new(FsContentReader),
        })
    }

    /// Replace the reader used to fetch approved contents.
    pub fn with_reader<R: ContentReader + 'static>(mut self, reader: R) -> Self {
        self.reader = Box::new(reader);
        self
    }

    /// The normalized name shared by both files.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn approved_path(&self) -> &Path {
        &self.approved_path
    }

    pub fn received_path(&self) -> &Path {
        &self.received_path
    }

    pub fn config(&self) -> &ApprovalsConfig {
        &self.config
    }

    /// Current contents of the approved file, read fresh on every call.
    pub fn approved(&self) -> Result<String, ApprovalError> {
        self.reader
            .read(&self.approved_path)
            .map_err(|e| ApprovalError::io(&self.approved_path, e))
    }

    /// The value supplied at construction; empty when none was given.
    pub fn received(&self) -> &str {
        self.received.as_deref().unwrap_or_default()
    }

    /// True when received and approved contents differ byte for byte.
    pub fn failed(&self) -> Result<bool, ApprovalError> {
        Ok(self.received() != self.approved()?)
    }

    pub fn failure_message(&self) -> String {
        format!(
            concat!(
                "\n",
                "        Approval Failure:\n",
                "\n",
                "        The received contents did not match the approved contents.\n",
                "\n",
                "        Inspect the differences in the following files:\n",
                "        {received}\n",
                "        {approved}\n",
                "\n",
                "        If you like what you see in the *.received.txt file, you can approve it\n",
                "        like so:\n",
                "\n",
                "        mv {received} {approved}\n",
                "\n",
                "\n",
            ),
            received = self.received_path.display(),
            approved = self.approved_path.display(),
        )
    }

    /// Pass/fail as a `Result`, for use with `?` inside tests.
    ///
    /// A pass removes the received file unless the config keeps it; a mismatch
    /// leaves both files in place and returns [`ApprovalError::Mismatch`].
    #[instrument(skip(self), fields(name = %self.description))]
    pub fn verify(&self) -> Result<(), ApprovalError> {
        if self.failed()? {
            warn!(
                "Approval mismatch: {:?} differs from {:?}",
                self.received_path, self.approved_path
            );
            return Err(ApprovalError::Mismatch {
                message: self.failure_message(),
            });
        }

        if self.config.cleanup_received_on_pass {
            match fs::remove_file(&self.received_path) {
                Ok(()) => debug!("Removed received file: {:?}", self.received_path),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(ApprovalError::io(&self.received_path, e)),
            }
        }

        Ok(())
    }

    /// Promote the received file to be the new approved baseline.
    #[instrument(skip(self), fields(name = %self.description))]
    pub fn approve(&self) -> Result<(), ApprovalError> {
        fs::rename(&self.received_path, &self.approved_path)
            .map_err(|e| ApprovalError::io(&self.received_path, e))?;
        debug!(
            "Approved {:?} as {:?}",
            self.received_path, self.approved_path
        );
        Ok(())
    }
}

impl fmt::Debug for Approval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Approval")
            .field("description", &self.description)
            .field("approved_path", &self.approved_path)
            .field("received_path", &self.received_path)
            .field("received", &self.received)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn describe<C: TestContext + ?Sized>(
    context: &C,
    qualifier: Option<&str>,
) -> Result<String, ApprovalError> {
    let mut full = context
        .full_description()
        .filter(|d| !d.trim().is_empty())
        .ok_or(ApprovalError::MissingDescription)?;

    if let Some(qualifier) = qualifier {
        full.push(' ');
        full.push_str(qualifier);
    }

    let name = normalize(&full);
    if name.is_empty() {
        return Err(ApprovalError::MissingDescription);
    }
    Ok(name)
}

fn ensure_approved_file(path: &Path) -> Result<(), ApprovalError> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => {
            debug!("Created empty approved file: {:?}", path);
            Ok(())
        }
        // Either it was already there or another run created it first.
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(ApprovalError::io(path, e)),
    }
}

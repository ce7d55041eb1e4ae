use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use thiserror::Error;

/// Identifier of a key inside the signer binary. Id 0 is the whole
/// (master) key; share ids handed out by `share` start at 1.
pub type ParticipantId = u32;

/// Id under which the signer binary keeps the master key.
pub const MASTER_ID: ParticipantId = 0;

pub type SignerResult<T> = std::result::Result<T, SignerError>;

#[derive(Debug, Error)]
pub enum SignerError {
    #[error("could not run signer binary `{}`: {}", .binary.display(), .source)]
    Spawn {
        binary: PathBuf,
        source: std::io::Error,
    },

    #[error("signer `{subcommand}` failed: {status}")]
    Failed {
        subcommand: &'static str,
        status: ExitStatus,
    },
}

/// One invocation of the signer binary.
///
/// Each variant renders to the exact argument vector the binary's CLI
/// expects. Nothing else crosses the process boundary: no output is parsed
/// and no state is shared besides the files the binary keeps for itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Generate the master key pair.
    Init,
    /// Sign `message` with the key stored under `id`.
    Sign {
        message: String,
        id: ParticipantId,
    },
    /// Verify the stored signature over `message` under `id`.
    Verify {
        message: String,
        id: ParticipantId,
    },
    /// Split the master secret into `parties` shares, any `threshold` of
    /// which can jointly produce the group signature.
    Share { parties: u32, threshold: u32 },
    /// Reconstruct the group signature from the listed share ids.
    Recover { ids: Vec<ParticipantId> },
}

impl Request {
    pub fn subcommand(&self) -> &'static str {
        match self {
            Request::Init => "init",
            Request::Sign { .. } => "sign",
            Request::Verify { .. } => "verify",
            Request::Share { .. } => "share",
            Request::Recover { .. } => "recover",
        }
    }

    /// The full argument vector, subcommand included.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![self.subcommand().to_owned()];
        match self {
            Request::Init => {}
            Request::Sign { message, id } | Request::Verify { message, id } => {
                args.push("-m".to_owned());
                args.push(message.clone());
                args.push("-id".to_owned());
                args.push(id.to_string());
            }
            Request::Share { parties, threshold } => {
                args.push("-n".to_owned());
                args.push(parties.to_string());
                args.push("-k".to_owned());
                args.push(threshold.to_string());
            }
            // the ids are appended as separate trailing arguments, in the
            // order the caller gave them
            Request::Recover { ids } => {
                args.push("-ids".to_owned());
                args.extend(ids.iter().map(|id| id.to_string()));
            }
        }
        args
    }
}

/// Handle to the external signer binary.
///
/// The binary owns all key material; the handle only spawns it and reports
/// whether it exited successfully. The child inherits stdio, so whatever
/// diagnostics it prints reach the user unmodified.
#[derive(Debug, Clone)]
pub struct Signer {
    binary: PathBuf,
    dir: Option<PathBuf>,
}

impl Signer {
    pub fn new<P: Into<PathBuf>>(binary: P) -> Self {
        Signer {
            binary: binary.into(),
            dir: None,
        }
    }

    /// Run the binary from `dir`. The binary resolves the files it keeps
    /// keys and signatures in relative to its working directory.
    pub fn in_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.dir = Some(dir.into());
        self
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    pub fn init(&self) -> SignerResult<()> {
        self.submit(&Request::Init)
    }

    pub fn sign(&self, message: &str, id: ParticipantId) -> SignerResult<()> {
        self.submit(&Request::Sign {
            message: message.to_owned(),
            id,
        })
    }

    pub fn verify(&self, message: &str, id: ParticipantId) -> SignerResult<()> {
        self.submit(&Request::Verify {
            message: message.to_owned(),
            id,
        })
    }

    pub fn share(&self, parties: u32, threshold: u32) -> SignerResult<()> {
        self.submit(&Request::Share { parties, threshold })
    }

    /// No cardinality check here: whether `ids` holds enough shares to
    /// reconstruct anything is the binary's call.
    pub fn recover(&self, ids: &[ParticipantId]) -> SignerResult<()> {
        self.submit(&Request::Recover { ids: ids.to_vec() })
    }

    /// Spawn the binary with the request's argument vector and block until
    /// it exits. Any non-zero status is an error; output is not captured.
    pub fn submit(&self, request: &Request) -> SignerResult<()> {
        let mut cmd = Command::new(&self.binary);
        cmd.args(request.to_args());
        if let Some(dir) = &self.dir {
            cmd.current_dir(dir);
        }

        let status = cmd.status().map_err(|source| SignerError::Spawn {
            binary: self.binary.clone(),
            source,
        })?;

        if !status.success() {
            return Err(SignerError::Failed {
                subcommand: request.subcommand(),
                status,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn init_takes_no_arguments() {
        assert_eq!(Request::Init.to_args(), ["init"]);
    }

    #[test]
    fn sign_argument_shape() {
        let req = Request::Sign {
            message: "abc".into(),
            id: 5,
        };
        assert_eq!(req.to_args(), ["sign", "-m", "abc", "-id", "5"]);
    }

    #[test]
    fn master_id_renders_as_zero() {
        let req = Request::Sign {
            message: "abc".into(),
            id: MASTER_ID,
        };
        assert_eq!(req.to_args(), ["sign", "-m", "abc", "-id", "0"]);
    }

    #[test]
    fn verify_matches_sign_shape() {
        let req = Request::Verify {
            message: "abc".into(),
            id: 0,
        };
        assert_eq!(req.to_args(), ["verify", "-m", "abc", "-id", "0"]);
    }

    #[test]
    fn share_argument_shape() {
        let req = Request::Share {
            parties: 10,
            threshold: 4,
        };
        assert_eq!(req.to_args(), ["share", "-n", "10", "-k", "4"]);
    }

    #[test]
    fn recover_keeps_the_given_id_order() {
        let req = Request::Recover {
            ids: vec![1, 5, 3, 7],
        };
        assert_eq!(req.to_args(), ["recover", "-ids", "1", "5", "3", "7"]);
    }

    use proptest::prelude::*;

    proptest! {

    // every id ends up as its own trailing argument, after "-ids" and in
    // the order given
    #[test]
    fn recover_appends_all_ids(ids in proptest::collection::vec(any::<u32>(), 0..64)) {
        let args = Request::Recover { ids: ids.clone() }.to_args();

        prop_assert_eq!(args.len(), 2 + ids.len());
        prop_assert_eq!(args[0].as_str(), "recover");
        prop_assert_eq!(args[1].as_str(), "-ids");
        for (arg, id) in args[2..].iter().zip(&ids) {
            let id_str = id.to_string();
            prop_assert_eq!(arg.as_str(), id_str.as_str());
        }
    }

    }
}

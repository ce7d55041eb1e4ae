//! # BLS signer driver
//!
//! A command-line driver around an external signer binary implementing BLS
//! threshold signatures. All key material, shares and signatures live inside
//! that binary's own storage; this crate only spawns it with the right
//! argument vector and propagates its exit status.
//!
//! ```no_run
//! use bls_smpl_cli::signer::{Signer, MASTER_ID};
//!
//! let signer = Signer::new("bin/bls_smpl.exe");
//! signer.init()?;
//! signer.sign("hello", MASTER_ID)?;
//! signer.verify("hello", MASTER_ID)?;
//! # Ok::<(), bls_smpl_cli::signer::SignerError>(())
//! ```

pub mod actions;
pub mod opts;
pub mod signer;

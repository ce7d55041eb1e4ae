use crate::{
    opts::{DemoOpts, RecoverOpts, ShareOpts, SignOpts, VerifyOpts},
    signer::{ParticipantId, Signer, MASTER_ID},
};

use anyhow::Result;

/// Quorum used by the demonstration when none is given on the command line.
const DEFAULT_QUORUM: [ParticipantId; 4] = [1, 5, 3, 7];

pub fn init(signer: &Signer) -> Result<()> {
    signer.init()?;
    Ok(())
}

pub fn sign(signer: &Signer, opts: SignOpts) -> Result<()> {
    signer.sign(&opts.message, opts.id)?;
    Ok(())
}

pub fn verify(signer: &Signer, opts: VerifyOpts) -> Result<()> {
    signer.verify(&opts.message, opts.id)?;
    Ok(())
}

pub fn share(signer: &Signer, opts: ShareOpts) -> Result<()> {
    signer.share(opts.parties, opts.threshold)?;
    Ok(())
}

pub fn recover(signer: &Signer, opts: RecoverOpts) -> Result<()> {
    signer.recover(&opts.ids)?;
    Ok(())
}

/// Runs the full threshold round: master key setup, a reference signature,
/// secret sharing, one partial signature per quorum member, recovery of the
/// group signature and a final verification under the master key.
///
/// The threshold is the quorum size; whether that many shares actually
/// suffice is decided by the signer binary, not here.
pub fn demo(signer: &Signer, opts: DemoOpts) -> Result<()> {
    let quorum = if opts.ids.is_empty() {
        DEFAULT_QUORUM.to_vec()
    } else {
        opts.ids
    };
    let threshold = quorum.len() as u32;
    let message = &opts.message;

    println!("Generating the master key pair...");
    signer.init()?;

    println!("Signing and verifying `{}` with the master key...", message);
    signer.sign(message, MASTER_ID)?;
    signer.verify(message, MASTER_ID)?;

    println!(
        "Splitting the master secret into {} shares with threshold {}...",
        opts.parties, threshold
    );
    signer.share(opts.parties, threshold)?;

    for id in &quorum {
        println!("Partial signature from id {}...", id);
        signer.sign(message, *id)?;
    }

    println!("Recovering the group signature from the quorum...");
    signer.recover(&quorum)?;
    signer.verify(message, MASTER_ID)?;

    println!("Success. The recovered signature verifies under the master key.");
    Ok(())
}

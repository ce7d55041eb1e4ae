use gumdrop::Options;
use std::default::Default;

#[derive(Debug, Options, Clone)]
pub struct SmplOpts {
    help: bool,

    #[options(help = "path to the signer binary", default = "bin/bls_smpl.exe")]
    pub signer: String,

    #[options(
        help = "directory to run the signer from (it keeps its key and signature files there)"
    )]
    pub dir: Option<String>,

    #[options(command)]
    pub command: Option<Command>,
}

// The supported commands
#[derive(Debug, Options, Clone)]
pub enum Command {
    #[options(help = "generate the master key pair")]
    Init(InitOpts),

    #[options(help = "sign a message with the key of one id")]
    Sign(SignOpts),

    #[options(help = "verify the stored signature for a message")]
    Verify(VerifyOpts),

    #[options(help = "split the master secret into n shares with threshold k")]
    Share(ShareOpts),

    #[options(help = "recover the group signature from a quorum of share ids")]
    Recover(RecoverOpts),

    #[options(help = "run the whole k-of-n signing round end to end")]
    Demo(DemoOpts),
}

#[derive(Debug, Options, Clone)]
pub struct InitOpts {
    help: bool,
}

#[derive(Debug, Options, Clone)]
pub struct SignOpts {
    help: bool,

    #[options(help = "message to be signed")]
    pub message: String,

    #[options(help = "id of the signing key (0 is the master key)", default = "0")]
    pub id: u32,
}

#[derive(Debug, Options, Clone)]
pub struct VerifyOpts {
    help: bool,

    #[options(help = "message the signature was made over")]
    pub message: String,

    #[options(
        help = "id the signature was stored under (0 is the master key)",
        default = "0"
    )]
    pub id: u32,
}

#[derive(Debug, Options, Clone)]
pub struct ShareOpts {
    help: bool,

    // the defaults mirror the signer binary's own
    #[options(help = "number of shares to generate", default = "10")]
    pub parties: u32,

    #[options(
        help = "number of shares needed to recover the group signature",
        default = "3"
    )]
    pub threshold: u32,
}

#[derive(Debug, Options, Clone)]
pub struct RecoverOpts {
    help: bool,

    #[options(free, help = "ids of the shares to recover from")]
    pub ids: Vec<u32>,
}

#[derive(Debug, Options, Clone)]
pub struct DemoOpts {
    help: bool,

    #[options(help = "message signed throughout the round", default = "abc")]
    pub message: String,

    #[options(
        help = "number of shares to split the master secret into",
        default = "10"
    )]
    pub parties: u32,

    #[options(free, help = "quorum of share ids used to recover (default: 1 5 3 7)")]
    pub ids: Vec<u32>,
}

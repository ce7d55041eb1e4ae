use bls_smpl_cli::{
    actions,
    opts::{Command, SmplOpts},
    signer::Signer,
};

use gumdrop::Options;
use std::process;

fn main() {
    let opts = SmplOpts::parse_args_default_or_exit();

    let command = opts.command.unwrap_or_else(|| {
        eprintln!("No command was provided.");
        eprintln!("{}", SmplOpts::usage());
        process::exit(2)
    });

    let mut signer = Signer::new(&opts.signer);
    if let Some(dir) = &opts.dir {
        signer = signer.in_dir(dir);
    }

    let result = match command {
        Command::Init(_) => actions::init(&signer),
        Command::Sign(opts) => actions::sign(&signer, opts),
        Command::Verify(opts) => actions::verify(&signer, opts),
        Command::Share(opts) => actions::share(&signer, opts),
        Command::Recover(opts) => actions::recover(&signer, opts),
        Command::Demo(opts) => actions::demo(&signer, opts),
    };

    if let Err(err) = result {
        eprintln!("{}", err);
        process::exit(1);
    }
}

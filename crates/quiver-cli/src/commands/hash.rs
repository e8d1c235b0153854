use std::path::PathBuf;

use quiver_stdlib::{HashedDir, SourceHash, hash_dirs};

use super::std_config;

pub struct HashArgs {
    pub lib: PathBuf,
    pub hash_dirs: Vec<HashedDir>,
}

pub fn compute(args: HashArgs) -> quiver_stdlib::Result<SourceHash> {
    let config = std_config(args.lib, None, args.hash_dirs);
    hash_dirs(&config.hashed_dirs)
}

pub fn run(args: HashArgs) {
    match compute(args) {
        Ok(hash) => println!("{hash}"),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

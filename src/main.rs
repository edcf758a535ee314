use std::io;

use clap::Parser;

mod cli;
mod entropy;
mod exits;
mod logging;
mod pass;
mod settings;
mod terminal;

use cli::{CliFlags, Context};

fn main() {
    let flags = CliFlags::parse();
    logging::init(flags.debug);
    exits::harden_process();

    let context = Context::new(flags);
    let result = context.run(&mut io::stdout().lock(), &mut io::stderr().lock());

    match result {
        Ok(()) => std::process::exit(exits::SUCCESS),
        Err(e) => exits::failure(&e),
    }
}

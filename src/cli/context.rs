//! CLI context - bundles flags and resolved settings.

use std::io::Write;
use std::ops::ControlFlow;

use log::debug;

use super::{CliFlags, Error, print_help, prompts};
use crate::entropy;
use crate::pass;
use crate::settings::Settings;

/// Application context for a single invocation.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        let settings = Settings::from_flags(&flags);
        Self { settings, flags }
    }

    /// Run CLI. `out` receives the password or version line, `err` the help
    /// screen.
    pub fn run<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> Result<(), Error> {
        if let ControlFlow::Break(()) = self.handle_info_flags(out, err)? {
            return Ok(());
        }
        self.generate_output(out)
    }

    fn handle_info_flags<O: Write, E: Write>(
        &self,
        out: &mut O,
        err: &mut E,
    ) -> Result<ControlFlow<()>, Error> {
        if self.flags.help {
            print_help(err)?;
            return Ok(ControlFlow::Break(()));
        }
        if self.flags.version {
            prompts::version(out)?;
            return Ok(ControlFlow::Break(()));
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Build the charset, generate, and print.
    fn generate_output<O: Write>(&self, out: &mut O) -> Result<(), Error> {
        let charset = self.settings.charset();
        debug!(
            "length {}, classes [{}], {} candidates, source: {}",
            self.settings.pass_length,
            self.settings.classes().join(", "),
            charset.len(),
            entropy::source_name()
        );

        let password = pass::generate(self.settings.pass_length, &charset)?;
        prompts::password(out, &password)?;
        Ok(())
    }
}

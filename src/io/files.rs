use std::{io::BufReader, path::PathBuf};

use crate::{
    config::Config,
    context::Context,
    types::err::{self},
};

/// A context over the clause-text formula at `path`, with the given configuration.
pub fn context_from_path(path: PathBuf, config: Config) -> Result<Context, err::ErrorKind> {
    let file = match std::fs::File::open(&path) {
        Ok(file) => file,
        Err(_) => return Err(err::ErrorKind::from(err::FileError::Read(path))),
    };

    let mut the_context = Context::from_config(config);
    the_context.read_formula(BufReader::new(&file))?;

    Ok(the_context)
}

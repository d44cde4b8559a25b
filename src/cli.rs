use std::path::PathBuf;

use crate::utils::{Result, SimError, DEFAULT_RESOURCE_DIR};

/// Resolves the resource directory from the arguments following the program
/// name. At most one positional argument is accepted.
pub fn parse_args<I>(args: I) -> Result<PathBuf>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let resource_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_RESOURCE_DIR));

    if args.next().is_some() {
        return Err(SimError::Usage);
    }
    Ok(resource_dir)
}

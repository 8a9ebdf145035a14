//! Invocation context: the identity the scan runs under

use std::path::PathBuf;

use crate::error::{CliError, Result};

/// Resolve the home directory once, preferring an explicit value.
pub fn resolve_home(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(home) = explicit {
        tracing::debug!(home = %home.display(), "Using configured home directory");
        return Ok(home);
    }

    let home = dirs::home_dir().ok_or_else(|| {
        CliError::user("Could not determine the home directory; pass --home or set SUNSHINE_HOME")
    })?;
    tracing::debug!(home = %home.display(), "Resolved home directory");
    Ok(home)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_home_wins() {
        let home = resolve_home(Some(PathBuf::from("/home/alice"))).unwrap();
        assert_eq!(home, PathBuf::from("/home/alice"));
    }
}

//! RON configuration loading
//!
//! Every game keeps its tunables in a `#[serde(default)]` struct whose
//! `Default` impl holds the classic values, so a RON file only needs the
//! fields it wants to change:
//!
//! ```text
//! (tick_ms: 15, spawn_delay: 30)
//! ```

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Parse a configuration from RON text
pub fn parse_ron<T: DeserializeOwned>(content: &str) -> Result<T> {
    ron::from_str(content).map_err(|e| Error::Parse(e.to_string()))
}

/// Load a configuration from a RON file
pub fn load_ron<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Io(format!("{}: {}", path.display(), e)))?;
    parse_ron(&content)
}

/// Load from `path` when given, otherwise fall back to `T::default()`
pub fn load_or_default<T, P>(path: Option<P>) -> Result<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    match path {
        Some(path) => load_ron(path),
        None => Ok(T::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(default)]
    struct Tunables {
        tick_ms: u64,
        speed: i32,
    }

    impl Default for Tunables {
        fn default() -> Self {
            Self {
                tick_ms: 20,
                speed: 5,
            }
        }
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let t: Tunables = parse_ron("(speed: 9)").unwrap();
        assert_eq!(
            t,
            Tunables {
                tick_ms: 20,
                speed: 9
            }
        );
    }

    #[test]
    fn test_empty_struct_is_default() {
        let t: Tunables = parse_ron("()").unwrap();
        assert_eq!(t, Tunables::default());
    }

    #[test]
    fn test_parse_error() {
        let err = parse_ron::<Tunables>("(speed: \"fast\")").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_load_or_default_without_path() {
        let t: Tunables = load_or_default(None::<&Path>).unwrap();
        assert_eq!(t, Tunables::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("arcade-config-{}.ron", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "(tick_ms: 75)").unwrap();
        }
        let t: Tunables = load_or_default(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(t.tick_ms, 75);
        assert_eq!(t.speed, 5);
    }

    #[test]
    fn test_missing_file() {
        let err = load_ron::<Tunables>("/definitely/not/here.ron").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}

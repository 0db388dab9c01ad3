use std::net::SocketAddr;
use std::path::PathBuf;

use destructure::Destructure;
use error_stack::{Report, ResultExt};
use kernel::prelude::entity::PageSize;
use kernel::KernelError;
use vodca::References;

use crate::env;

const CATALOG_DATA_PATH: &str = "CATALOG_DATA_PATH";
const CATALOG_PAGE_SIZE: &str = "CATALOG_PAGE_SIZE";
const CATALOG_BIND: &str = "CATALOG_BIND";

const DEFAULT_DATA_PATH: &str = "./data/catalog.json";
const DEFAULT_BIND: ([u8; 4], u16) = ([0, 0, 0, 0], 8080);

#[derive(Debug, Clone, References, Destructure)]
pub struct CatalogConfig {
    data_path: PathBuf,
    page_size: PageSize,
    bind: SocketAddr,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            page_size: PageSize::default(),
            bind: SocketAddr::from(DEFAULT_BIND),
        }
    }
}

impl CatalogConfig {
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        Self::from_lookup(env)
    }

    /// Builds the configuration from an arbitrary key lookup, falling back to
    /// defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> error_stack::Result<Self, KernelError>
    where
        F: Fn(&str) -> error_stack::Result<Option<String>, KernelError>,
    {
        let default = Self::default();

        let data_path = lookup(CATALOG_DATA_PATH)?
            .map(PathBuf::from)
            .unwrap_or(default.data_path);

        let page_size = match lookup(CATALOG_PAGE_SIZE)? {
            None => default.page_size,
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|error| Report::new(error).change_context(KernelError::InvalidData))
                .and_then(PageSize::try_from)
                .change_context(KernelError::InvalidData)
                .attach_printable_lazy(|| format!("{CATALOG_PAGE_SIZE}={raw}"))?,
        };

        let bind = match lookup(CATALOG_BIND)? {
            None => default.bind,
            Some(raw) => raw
                .trim()
                .parse::<SocketAddr>()
                .change_context(KernelError::InvalidData)
                .attach_printable_lazy(|| format!("{CATALOG_BIND}={raw}"))?,
        };

        Ok(Self {
            data_path,
            page_size,
            bind,
        })
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use kernel::KernelError;

    use super::CatalogConfig;

    fn lookup(
        vars: &[(&str, &str)],
    ) -> impl Fn(&str) -> error_stack::Result<Option<String>, KernelError> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key: &str| Ok(vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() -> error_stack::Result<(), KernelError> {
        let config = CatalogConfig::from_lookup(lookup(&[]))?;
        assert_eq!(config.page_size().get(), 36);
        assert_eq!(config.bind().port(), 8080);
        assert_eq!(config.data_path().to_str(), Some("./data/catalog.json"));
        Ok(())
    }

    #[test]
    fn reads_overrides() -> error_stack::Result<(), KernelError> {
        let config = CatalogConfig::from_lookup(lookup(&[
            ("CATALOG_DATA_PATH", "/srv/books.json"),
            ("CATALOG_PAGE_SIZE", " 12 "),
            ("CATALOG_BIND", "127.0.0.1:3000"),
        ]))?;
        assert_eq!(config.page_size().get(), 12);
        assert_eq!(config.bind().to_string(), "127.0.0.1:3000");
        assert_eq!(config.data_path().to_str(), Some("/srv/books.json"));
        Ok(())
    }

    #[test]
    fn rejects_bad_page_size() {
        for raw in ["0", "-3", "many"] {
            let result = CatalogConfig::from_lookup(lookup(&[("CATALOG_PAGE_SIZE", raw)]));
            let error = result.expect_err(raw);
            assert_eq!(error.current_context(), &KernelError::InvalidData);
        }
    }
}

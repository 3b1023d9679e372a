//! `.env` loading. Kept in its own test binary because dotenvy writes to the
//! process environment, which `Jail` does not restore.

use atlas_config::AtlasConfig;
use figment::Jail;
use pretty_assertions::assert_eq;

#[test]
fn dotenv_file_feeds_env_layer() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "ATLAS_GENERAL__DEFAULT_LIMIT=7\n")?;

        let config = AtlasConfig::load_with_dotenv(jail.directory()).expect("config loads");
        assert_eq!(config.general.default_limit, 7);
        Ok(())
    });
}

//! Environment source: `DDIR_<SECTION>__<KEY>`, e.g. `DDIR_DISPLAY__PATH=as-typed`.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub const ENV_PREFIX: &str = "DDIR";

/// Add `DDIR_*` environment overrides to the builder. Highest precedence.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    )
}

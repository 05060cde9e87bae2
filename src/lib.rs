mod config;
mod error;
mod line;
mod mirror;
mod pug;

pub use config::{Config, ConverterKind, DEFAULT_CONFIG_FILE};
pub use error::{Error, Result};
pub use line::{Context, Line};
pub use mirror::{mirror, template_path};
pub use pug::{HEADER, LineConverter, ListAwareConverter, PlainParagraphConverter};

/// Convert one markup document with the given converter.
pub fn rst_to_pug(source: &str, kind: ConverterKind) -> String {
    kind.converter().convert(source)
}

/// Mirror the configured source root into the configured destination root.
pub fn run(config: &Config) -> Result<()> {
    tracing::info!(
        src = %config.source_root.display(),
        dst = %config.dest_root.display(),
        converter = ?config.converter,
        "mirroring"
    );
    mirror(
        &config.source_root,
        &config.dest_root,
        config.converter.converter(),
    )
}

use crate::app::renderers::{Layout, OutputFormat};
use crate::config::settings::RenderSettings;
use crate::core::extractor::ParsePolicy;
use crate::core::pipeline::ConvertOptions;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "procurve-dokuwiki")]
#[command(about = "Prints the VLANs of a Procurve config read from stdin as a DokuWiki table")]
pub struct CliConfig {
    /// Table layout
    #[arg(long, value_enum, default_value_t = Layout::Vlans)]
    pub layout: Layout,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Dokuwiki)]
    pub format: OutputFormat,

    /// TOML file with headings and layout settings
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// List every port on its own row in the port layout
    #[arg(long)]
    pub no_collapse: bool,

    /// Skip malformed directives with a warning instead of failing
    #[arg(long)]
    pub skip_invalid: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the settings file (if any), applies flag overrides and validates the result.
    pub fn to_options(&self) -> Result<ConvertOptions> {
        let mut settings = match &self.settings {
            Some(path) => {
                tracing::debug!("Loading settings from {}", path.display());
                RenderSettings::from_file(path)?
            }
            None => RenderSettings::default(),
        };

        // 套用命令列覆蓋設定
        if self.no_collapse {
            settings.layout.collapse = false;
        }
        settings.validate()?;

        Ok(ConvertOptions {
            layout: self.layout,
            format: self.format,
            policy: if self.skip_invalid {
                ParsePolicy::Lenient
            } else {
                ParsePolicy::Strict
            },
            settings,
        })
    }
}

use std::path::Path;

use anyhow::{Context, Result};
use exposim_core::batch::{BatchConfig, EffectSettings};
use exposim_core::consts::DEFAULT_STRENGTH;
use exposim_core::effects::Effect;
use tracing::info;

use crate::{Cli, EffectArg};

impl From<EffectArg> for Effect {
    fn from(arg: EffectArg) -> Self {
        match arg {
            EffectArg::Dark => Effect::Dark,
            EffectArg::Overexpose => Effect::Overexposed,
        }
    }
}

pub fn load_settings(path: &Path) -> Result<EffectSettings> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let settings: EffectSettings =
        toml::from_str(&contents).context("Invalid effect settings")?;
    info!(path = %path.display(), ?settings, "Loaded effect settings");
    Ok(settings)
}

/// Merge command-line flags over file settings.
pub fn build_config(cli: &Cli, file: &EffectSettings) -> Result<BatchConfig> {
    let effect = match (cli.effect, file.effect) {
        (Some(arg), _) => Effect::from(arg),
        (None, Some(effect)) => effect,
        (None, None) => anyhow::bail!("No effect given: pass --effect or set `effect` in the config file"),
    };

    Ok(BatchConfig {
        input_dir: cli.input_dir.clone(),
        output_dir: cli.output_dir.clone(),
        effect,
        strength: cli.strength.or(file.strength).unwrap_or(DEFAULT_STRENGTH),
        gamma: cli.gamma.or(file.gamma),
        parallel: cli.parallel,
    })
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn defaults_from_minimal_args() {
        let cli = parse(&["exposim", "in", "out", "--effect", "dark"]);
        let config = build_config(&cli, &EffectSettings::default()).unwrap();
        assert_eq!(config.effect, Effect::Dark);
        assert_eq!(config.strength, DEFAULT_STRENGTH);
        assert_eq!(config.gamma, None);
        assert!(!config.parallel);
    }

    #[test]
    fn effect_is_required_without_config() {
        assert!(Cli::try_parse_from(["exposim", "in", "out"]).is_err());
    }

    #[test]
    fn unknown_effect_is_rejected() {
        assert!(Cli::try_parse_from(["exposim", "in", "out", "--effect", "sepia"]).is_err());
    }

    #[test]
    fn negative_strength_is_accepted() {
        let cli = parse(&["exposim", "in", "out", "--effect", "overexpose", "--strength", "-3"]);
        let config = build_config(&cli, &EffectSettings::default()).unwrap();
        assert_eq!(config.effect, Effect::Overexposed);
        assert_eq!(config.strength, -3.0);
    }

    #[test]
    fn flags_override_file_settings() {
        let cli = parse(&[
            "exposim", "in", "out", "--config", "x.toml", "--strength", "0.9",
        ]);
        let file = EffectSettings {
            effect: Some(Effect::Overexposed),
            strength: Some(0.2),
            gamma: Some(1.4),
        };
        let config = build_config(&cli, &file).unwrap();
        assert_eq!(config.effect, Effect::Overexposed);
        assert_eq!(config.strength, 0.9);
        assert_eq!(config.gamma, Some(1.4));
    }

    #[test]
    fn settings_file_is_loaded() {
        let dir = std::env::temp_dir().join(format!("exposim-settings-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");
        std::fs::write(&path, "effect = \"dark\"\nstrength = 0.7\n").unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.effect, Some(Effect::Dark));
        assert_eq!(settings.strength, Some(0.7));
        assert_eq!(settings.gamma, None);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_settings_file_is_an_error() {
        assert!(load_settings(Path::new("/nonexistent/exposim/settings.toml")).is_err());
    }

    #[test]
    fn config_without_effect_is_an_error() {
        let cli = parse(&["exposim", "in", "out", "--config", "x.toml"]);
        assert!(build_config(&cli, &EffectSettings::default()).is_err());
    }
}

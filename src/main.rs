use anyhow::{Context, Result};

use vwatch::{CliArgs, Config, Preferences};

fn main() -> Result<()> {
    let log = vwatch::tracing::init();

    let prefs = Preferences::load().context("Failed to load preferences")?;
    let config = Config::resolve(std::env::args_os().skip(1), &prefs)?;

    if config.general.debug {
        log.enable_debug();
    }

    if config.runtime.short_circuits() {
        if config.runtime.help {
            print!("{}", CliArgs::help_text());
        } else {
            println!("{}", CliArgs::version_text());
        }
        return Ok(());
    }

    let command_line = std::iter::once(config.runtime.cmd.as_str())
        .chain(config.runtime.args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ");
    tracing::info!(
        "Watching `{}` every {:?} ({} mode)",
        command_line,
        config.runtime.interval,
        config.runtime.mode
    );

    // The execution loop consumes `config` from here; print what it would receive
    let dump = serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
    print!("{}", dump);

    Ok(())
}

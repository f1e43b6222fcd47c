//! Command line: read → infer → (declarations | model)
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use crate::error::InputError;
use crate::input::{self, Source};
use crate::settings::{RawSettings, Settings};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// infer class declarations (python, typescript, c#) from a sample JSON document
#[derive(Parser, Debug)]
#[command(name = "json-decl", version)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// infer and print class declarations
    Generate(GenerateOut),
    /// infer and print the type model as JSON (debug view)
    Model(ModelOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON Pointer to select a subnode before inference (e.g. /data/items/0/payload)
    #[arg(long)]
    json_pointer: Option<String>,

    /// input path, or '-' for stdin (read until the first blank line)
    #[arg(long, short, default_value = "-")]
    input: String,
}

#[derive(Args, Debug, Clone)]
struct TargetSettings {
    /// target language: python (py), typescript (ts) or csharp (cs)
    #[arg(long, short, default_value = "python")]
    language: String,

    /// name of the top-level type, converted like any JSON key
    #[arg(long, default_value = "root")]
    root_name: String,
}

#[derive(Args, Debug)]
struct GenerateOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    target: TargetSettings,

    /// emit pydantic models instead of dataclasses (python only)
    #[arg(long)]
    pydantic: bool,

    /// declare every field with the language's optional form
    #[arg(long)]
    optional: bool,

    /// write one file per class into this directory (stdout if omitted)
    #[arg(short, long)]
    outdir: Option<PathBuf>,

    /// with --outdir: print the files that would be written instead
    #[arg(long)]
    dry_run: bool,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(Args, Debug)]
struct ModelOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    target: TargetSettings,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load(&self) -> Result<Value, InputError> {
        input::load(&Source::parse(&self.input), self.json_pointer.as_deref())
    }
}

impl TargetSettings {
    fn raw_settings(&self) -> RawSettings {
        RawSettings {
            language: self.language.clone(),
            root_name: self.root_name.clone(),
            ..RawSettings::default()
        }
    }
}

impl GenerateOut {
    fn raw_settings(&self) -> RawSettings {
        RawSettings {
            pydantic: self.pydantic,
            optional: self.optional,
            outdir: self.outdir.clone(),
            dry_run: self.dry_run,
            ..self.target.raw_settings()
        }
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> anyhow::Result<()> {
        match &self.cmd {
            Command::Generate(target) => {
                let settings = Settings::resolve(&target.raw_settings()).context("invalid options")?;
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    eprintln!("{}", serde_json::to_string_pretty(&settings)?);
                    return Ok(())
                }

                let document = target.input_settings.load().context("failed to load input")?;
                crate::generate(&settings, &document, io::stdout().lock())
                    .context("failed to generate declarations")?;
            }
            Command::Model(target) => {
                let settings = Settings::resolve(&target.target.raw_settings()).context("invalid options")?;
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    eprintln!("{}", serde_json::to_string_pretty(&settings)?);
                    return Ok(())
                }

                let document = target.input_settings.load().context("failed to load input")?;
                let model = crate::infer(&settings, &document)?;
                let model_src = serde_json::to_string_pretty(&model)?;
                println!("{model_src}");
            }
        }
        Ok(())
    }
}

// ---------------------------------- Tests ---------------------------------- //

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorate::Style;
    use crate::dialect::Language;
    use crate::settings::OutputMode;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> CommandLineInterface {
        CommandLineInterface::try_parse_from(std::iter::once("json-decl").chain(args.iter().copied())).unwrap()
    }

    fn generate_settings(args: &[&str]) -> Settings {
        let mut full = vec!["generate"];
        full.extend_from_slice(args);
        match parse(&full).cmd {
            Command::Generate(target) => Settings::resolve(&target.raw_settings()).unwrap(),
            Command::Model(_) => unreachable!(),
        }
    }

    #[test]
    fn command_definition_is_consistent() {
        CommandLineInterface::command().debug_assert();
    }

    #[test]
    fn generate_defaults() {
        let settings = generate_settings(&[]);
        assert_eq!(settings.language, Language::Python);
        assert_eq!(settings.style, Style::Dataclass);
        assert_eq!(settings.root_name, "root");
        assert_eq!(settings.output, OutputMode::Stream);
    }

    #[test]
    fn generate_flags_reach_settings() {
        let settings = generate_settings(&[
            "-l", "ts", "--root-name", "payload", "--optional", "--outdir", "out", "--dry-run",
        ]);
        assert_eq!(settings.language, Language::TypeScript);
        assert!(settings.optional);
        assert_eq!(settings.root_name, "payload");
        assert_eq!(settings.output, OutputMode::DryRun { outdir: "out".into() });
    }

    #[test]
    fn input_defaults_to_stdin() {
        match parse(&["model", "--json-pointer", "/data"]).cmd {
            Command::Model(target) => {
                assert_eq!(target.input_settings.input, "-");
                assert_eq!(target.input_settings.json_pointer.as_deref(), Some("/data"));
            }
            Command::Generate(_) => unreachable!(),
        }
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(CommandLineInterface::try_parse_from(["json-decl", "generate", "--rust"]).is_err());
    }
}

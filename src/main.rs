//! Emblem Composer CLI
//!
//! Usage:
//!   emblem-composer --font FILE [OPTIONS]
//!
//! Options are documented by `--help`. Any of them may also come from a
//! TOML settings file given with `--config`; command-line values win.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use emblem_composer::font::{read_font_file, FontFace};
use emblem_composer::i18n::{self, Translator, FRENCH};
use emblem_composer::{generate, Error, Settings};

#[derive(Parser)]
#[command(name = "emblem-composer", version)]
#[command(about = "Generates the institutional logo in vector and raster formats")]
struct Cli {
    /// Base name of the generated files [default: logo]
    #[arg(long)]
    name: Option<String>,

    /// Institution name; the line-break marker starts a new line [default: RÉPUBLIQUE\FRANÇAISE]
    #[arg(long)]
    institution: Option<String>,

    /// Label of the directorate, department or delegation
    #[arg(long)]
    direction: Option<String>,

    /// Line-break marker, in addition to real newlines [default: \]
    #[arg(long)]
    eol: Option<String>,

    /// Comma-separated raster heights in pixels [default: 100,300,700]
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    heights: Option<Vec<i64>>,

    /// Formats among SVG, PDF, EPS, PNG, GIF and JPG [default: SVG]
    #[arg(long)]
    formats: Option<String>,

    /// Write the variant with a protection zone around the logo
    #[arg(long)]
    with_margin: bool,

    /// Write the variant fitted tightly to the logo
    #[arg(long)]
    without_margin: bool,

    /// Spacing and defaults suited to e-mail signatures
    #[arg(long)]
    for_signature: bool,

    /// JPEG quality from 1 to 100 [default: 90]
    #[arg(long, allow_negative_numbers = true)]
    quality: Option<i64>,

    /// Quantize PNG and GIF to 16 colors instead of 8
    #[arg(long)]
    palette16: bool,

    /// Bold TrueType or OpenType face used for the text
    #[arg(long)]
    font: Option<PathBuf>,

    /// TOML settings file providing defaults for every option
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory receiving the generated files [default: .]
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Print nothing but errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Command-line values as a settings layer; unset flags stay `None`
    fn overrides(&self) -> Settings {
        let flag = |set: bool| set.then_some(true);
        Settings {
            name: self.name.clone(),
            institution: self.institution.clone(),
            direction: self.direction.clone(),
            eol: self.eol.clone(),
            heights: self.heights.clone(),
            formats: self.formats.clone().map(|formats| vec![formats]),
            with_margin: flag(self.with_margin),
            without_margin: flag(self.without_margin),
            for_signature: flag(self.for_signature),
            quality: self.quality,
            palette16: flag(self.palette16),
            font: self.font.clone(),
            output_dir: self.output_dir.clone(),
            quiet: flag(self.quiet),
        }
    }
}

fn main() -> ExitCode {
    let french = i18n::wants_french();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => exit_with_clap_error(err, french),
    };

    let file = match &cli.config {
        Some(path) => match Settings::from_file(path) {
            Ok(settings) => settings,
            Err(e) => return report(&Error::from(e), french),
        },
        None => Settings::default(),
    };
    let settings = file.merge(cli.overrides());

    let quiet = settings.quiet.unwrap_or(false);
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if quiet { "off" } else { "info" }),
    )
    .format_timestamp(None)
    .format_target(false)
    .init();

    let Some(font_path) = settings.font.clone() else {
        let err = Cli::command().error(
            ErrorKind::MissingRequiredArgument,
            "a font is required: pass --font FILE or set `font` in the settings file",
        );
        exit_with_clap_error(err, french);
    };

    match run(&font_path, settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e, french),
    }
}

fn run(font_path: &Path, settings: Settings) -> Result<(), Error> {
    let bytes = read_font_file(font_path)?;
    let face = FontFace::from_bytes(&bytes)?;
    generate(&settings.into_config(), &face)?;
    Ok(())
}

/// Print a one-line diagnostic and return the failure status
fn report(err: &Error, french: bool) -> ExitCode {
    let message = format!("error: {}\n", err);
    let stderr = io::stderr();
    let _ = if french {
        Translator::new(stderr.lock(), FRENCH).write_all(message.as_bytes())
    } else {
        stderr.lock().write_all(message.as_bytes())
    };
    ExitCode::FAILURE
}

/// Print a clap help or error message, translated when asked, and exit
fn exit_with_clap_error(err: clap::Error, french: bool) -> ! {
    let text = err.render().to_string();
    let written = if err.use_stderr() {
        emit(io::stderr().lock(), &text, french)
    } else {
        emit(io::stdout().lock(), &text, french)
    };
    if written.is_err() {
        err.exit();
    }
    std::process::exit(err.exit_code());
}

fn emit<W: Write>(out: W, text: &str, french: bool) -> io::Result<()> {
    if french {
        let mut translator = Translator::new(out, FRENCH);
        translator.write_all(text.as_bytes())?;
        translator.flush()
    } else {
        let mut out = out;
        out.write_all(text.as_bytes())?;
        out.flush()
    }
}

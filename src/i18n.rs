//! Translation of command-line diagnostics
//!
//! [`Translator`] rewrites text on its way to an inner writer using an
//! ordered find/replace table. The binary wraps stderr/stdout with it so
//! clap's usage and error messages read in French on French locales.

use std::env;
use std::io::{self, Write};

/// Ordered `(from, to)` replacements
pub type Table = &'static [(&'static str, &'static str)];

/// French wording for clap's generic help and error phrases
pub const FRENCH: Table = &[
    ("[default: ", "[par défaut : "),
    ("error:", "erreur :"),
    ("unexpected argument", "paramètre inconnu"),
    ("a value is required for", "le paramètre nécessite une valeur :"),
    ("invalid value", "valeur invalide"),
    ("invalid digit found in string", "chiffre invalide"),
    ("the following required arguments were not provided:", "paramètres obligatoires manquants :"),
    ("tip:", "astuce :"),
    ("For more information, try", "Pour plus d'informations, essayez"),
    ("Usage:", "Utilisation :"),
    ("Options:", "Paramètres :"),
    ("Print help", "Affiche l'aide"),
    ("Print version", "Affiche la version"),
];

/// Whether the process locale asks for French messages
///
/// `LC_ALL` takes precedence over `LANG`, as in POSIX locale resolution.
pub fn wants_french() -> bool {
    let locale = env::var("LC_ALL")
        .ok()
        .filter(|value| !value.is_empty())
        .or_else(|| env::var("LANG").ok())
        .unwrap_or_default();
    locale.to_ascii_lowercase().starts_with("fr")
}

/// A writer that translates everything passed through it
pub struct Translator<W: Write> {
    inner: W,
    table: Table,
}

impl<W: Write> Translator<W> {
    pub fn new(inner: W, table: Table) -> Self {
        Self { inner, table }
    }

    /// Apply the table to `text`
    pub fn translate(&self, text: &str) -> String {
        self.table
            .iter()
            .fold(text.to_string(), |out, (from, to)| out.replace(from, to))
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for Translator<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let translated = self.translate(&String::from_utf8_lossy(buf));
        self.inner.write_all(translated.as_bytes())?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

//! Top-level error type

use thiserror::Error;

use crate::export::ExportError;
use crate::font::FontError;
use crate::scene::SceneError;
use crate::settings::SettingsError;

/// Errors that can occur anywhere in the generation pipeline
#[derive(Debug, Error)]
pub enum Error {
    #[error("font error: {0}")]
    Font(#[from] FontError),

    #[error("scene error: {0}")]
    Scene(#[from] SceneError),

    #[error("export error: {0}")]
    Export(#[from] ExportError),

    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::renderer::RenderError;

    #[test]
    fn test_messages_carry_context() {
        let err: Error = ExportError::Io {
            path: PathBuf::from("out/logo.svg"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "export error: failed to write 'out/logo.svg': denied"
        );
    }

    #[test]
    fn test_render_errors_pass_through_export() {
        let err: Error = ExportError::from(RenderError::DimensionsTooLarge {
            format: "gif",
            width: 70000,
            height: 10,
        })
        .into();
        assert_eq!(
            err.to_string(),
            "export error: 70000x10 px exceeds the gif size limit"
        );
    }
}

//!
//! The bundled fonts.
//!

use once_cell::sync::OnceCell;
use plotters::style::FontStyle;

use crate::output::error::Error as OutputError;

/// The proportional font family name.
pub const SANS_SERIF: &str = "sans-serif";

/// The monospaced font family name.
pub const MONOSPACE: &str = "monospace";

/// DejaVu Sans.
static SANS_SERIF_DATA: &[u8] = include_bytes!("../../fonts/DejaVuSans.ttf");

/// DejaVu Sans Mono.
static MONOSPACE_DATA: &[u8] = include_bytes!("../../fonts/DejaVuSansMono.ttf");

/// The one-time initialization cell for the font registry.
static REGISTERED: OnceCell<()> = OnceCell::new();

///
/// Registers the bundled fonts with the text renderer.
///
/// Only the first call does any work.
///
pub fn register() -> Result<(), OutputError> {
    REGISTERED.get_or_try_init(|| -> Result<(), OutputError> {
        for (family, data) in [(SANS_SERIF, SANS_SERIF_DATA), (MONOSPACE, MONOSPACE_DATA)] {
            plotters::style::register_font(family, FontStyle::Normal, data)
                .map_err(|_| OutputError::Font { family })?;
        }
        Ok(())
    })?;
    Ok(())
}

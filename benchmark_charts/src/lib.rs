//!
//! The benchmark charts library.
//!

pub mod batch;
pub mod input;
pub mod model;
pub mod output;
pub mod util;

pub use crate::batch::outcome::Outcome as BatchOutcome;
pub use crate::batch::Batch;
pub use crate::input::error::Error as InputError;
pub use crate::input::error::ReportError;
pub use crate::input::Input;
pub use crate::input::Report;
pub use crate::model::breakdown::Bar;
pub use crate::model::breakdown::Breakdown;
pub use crate::model::chart::Chart;
pub use crate::model::summary::Summary;
pub use crate::output::error::Error as OutputError;
pub use crate::output::figure::Figure;
pub use crate::output::Renderer;

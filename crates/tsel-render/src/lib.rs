//! Output for tsel: the fixed-width viewport and CSV/JSON export.
//!
//! [`render`] draws the header and a window of rows at each column's span
//! width, dropping columns that would overflow the width budget. The same
//! renderer backs both the interactive screen and plain `table` output.
//!
//! ```rust
//! use tsel_render::{render_to_string, Window};
//! use tsel_table::{parse, Column, Row};
//!
//! let table = parse(&["K  V", "a  1"]).unwrap();
//! let columns: Vec<&Column> = table.schema().columns().iter().collect();
//! let rows: Vec<&Row> = table.rows().iter().collect();
//!
//! let out = render_to_string(&columns, &rows, &Window::unbounded());
//! assert_eq!(out, "K  V  \na  1  \n");
//! ```

mod error;
mod export;
mod util;
mod viewport;

pub use error::{RenderError, Result};
pub use export::{write_csv, write_json};
pub use util::{clip_to_width, display_width, fit_to_width, truncate_to_width};
pub use viewport::{render, render_to_string, visible_columns, Window};

//! Extraction of client identifiers from a status page.
//!
//! The markup is produced by third-party firmware, so parsing never fails: anything that
//! does not look like a client row is skipped and a page without rows yields nothing.

use std::sync::OnceLock;

use apwatch_common::network::device::DeviceRecord;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use tracing::debug;

/// Class marking one client row in the status table.
pub const ROW_CLASS: &str = "section-row";

/// Position of the identifier among a row's `<td>` cells.
pub const ID_CELL: usize = 1;

pub trait ClientTableParser: Send + Sync {
    /// Returns the identifiers listed in `html`, in document order.
    fn parse_client_rows(&self, html: &[u8]) -> Vec<DeviceRecord>;
}

#[derive(Debug, Error)]
#[error("invalid row class '{class}': {reason}")]
pub struct SelectorError {
    class: String,
    reason: String,
}

/// Reads the `n`-th cell of every element carrying a given class.
#[derive(Debug, Clone)]
pub struct SectionRowParser {
    rows: Selector,
    cells: Selector,
    cell_index: usize,
}

static DEFAULT_PARSER: OnceLock<SectionRowParser> = OnceLock::new();

impl SectionRowParser {
    pub fn new(row_class: &str, cell_index: usize) -> Result<Self, SelectorError> {
        let to_error = |reason: String| SelectorError {
            class: row_class.to_string(),
            reason,
        };
        if !is_class_token(row_class) {
            return Err(to_error(
                "expected a single class name made of letters, digits, '-' or '_'".to_string(),
            ));
        }
        let rows = Selector::parse(&format!(".{row_class}")).map_err(|e| to_error(e.to_string()))?;
        let cells = Selector::parse("td").map_err(|e| to_error(e.to_string()))?;

        Ok(Self {
            rows,
            cells,
            cell_index,
        })
    }

    fn identifier(&self, row: ElementRef<'_>) -> Option<DeviceRecord> {
        let cell = row.select(&self.cells).nth(self.cell_index)?;
        let text: String = cell.text().collect();
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(DeviceRecord::from(text))
    }
}

/// One CSS class name, so that `.{class}` selects exactly that class.
fn is_class_token(class: &str) -> bool {
    let mut chars = class.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '-' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl Default for SectionRowParser {
    fn default() -> Self {
        DEFAULT_PARSER
            .get_or_init(|| {
                SectionRowParser::new(ROW_CLASS, ID_CELL).expect("built-in row selector is valid")
            })
            .clone()
    }
}

impl ClientTableParser for SectionRowParser {
    fn parse_client_rows(&self, html: &[u8]) -> Vec<DeviceRecord> {
        let document = Html::parse_document(&String::from_utf8_lossy(html));

        document
            .select(&self.rows)
            .filter_map(|row| {
                let record = self.identifier(row);
                if record.is_none() {
                    debug!("Skipping client row without identifier cell");
                }
                record
            })
            .collect()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

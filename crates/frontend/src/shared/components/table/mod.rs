pub mod data_table;
pub mod number_format;
pub mod sortable_header_cell;
pub mod table_model;

pub use data_table::DataTable;
pub use number_format::*;
pub use sortable_header_cell::SortableHeaderCell;
pub use table_model::{CellValue, ColumnKind, ColumnSpec};

pub mod error;
pub mod execute;
pub mod meta;
pub mod page;
pub mod repl;
pub mod row;
pub mod statement;
pub mod table;

pub use error::{ExecuteError, PrepareError, RowError};
pub use execute::{Executed, ExecuteResult, execute};
pub use meta::MetaCommand;
pub use page::{PAGE_SIZE, Page};
pub use repl::{Repl, ReplConfig};
pub use row::{
    COLUMN_EMAIL_SIZE, COLUMN_USERNAME_SIZE, EMAIL_OFFSET, EMAIL_SIZE, ID_OFFSET, ID_SIZE,
    ROW_SIZE, Row, USERNAME_OFFSET, USERNAME_SIZE,
};
pub use statement::{PrepareResult, Statement, prepare};
pub use table::{ROWS_PER_PAGE, Slot, TABLE_MAX_PAGES, TABLE_MAX_ROWS, Table};

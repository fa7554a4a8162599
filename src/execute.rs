//! Execute stage: applies a [`Statement`] to a [`Table`].

use tracing::{trace, warn};

use crate::error::ExecuteError;
use crate::row::Row;
use crate::statement::Statement;
use crate::table::Table;

pub type ExecuteResult = Result<Executed, ExecuteError>;

/// Successful outcome of one statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Executed {
    Inserted,
    /// Every stored row, in insertion order.
    Selected(Vec<Row>),
}

pub fn execute(statement: &Statement, table: &mut Table) -> ExecuteResult {
    match statement {
        Statement::Insert(row) => execute_insert(row, table),
        Statement::Select => Ok(execute_select(table)),
    }
}

fn execute_insert(row: &Row, table: &mut Table) -> ExecuteResult {
    if table.is_full() {
        warn!(rows = table.num_rows(), "insert rejected, table is full");
        return Err(ExecuteError::TableFull);
    }

    let row_num = table.num_rows();
    row.serialize(table.row_slot_mut(row_num));
    table.num_rows += 1;

    trace!(row_num, id = row.id, "row inserted");
    Ok(Executed::Inserted)
}

fn execute_select(table: &Table) -> Executed {
    let rows: Vec<Row> = (0..table.num_rows())
        .filter_map(|row_num| table.read_row(row_num))
        .collect();
    debug_assert_eq!(rows.len(), table.num_rows(), "stored row without a page");

    trace!(rows = rows.len(), "select complete");
    Executed::Selected(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::prepare;
    use crate::table::{ROWS_PER_PAGE, TABLE_MAX_ROWS};

    fn insert(table: &mut Table, id: u32) -> ExecuteResult {
        let row = Row::new(id, &format!("user{id}"), &format!("person{id}@example.com")).unwrap();
        execute(&Statement::Insert(row), table)
    }

    fn select(table: &mut Table) -> Vec<Row> {
        match execute(&Statement::Select, table).unwrap() {
            Executed::Selected(rows) => rows,
            other => panic!("expected rows, got {other:?}"),
        }
    }

    #[test]
    fn test_select_on_empty_table() {
        let mut table = Table::new();
        assert!(select(&mut table).is_empty());
        assert_eq!(table.allocated_pages(), 0);
    }

    #[test]
    fn test_insert_then_select() {
        let mut table = Table::new();
        let stmt = prepare("insert 1 alice alice@example.com").unwrap();
        assert_eq!(execute(&stmt, &mut table), Ok(Executed::Inserted));
        assert_eq!(table.num_rows(), 1);

        let rows = select(&mut table);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].to_string(), "(1, alice, alice@example.com)");
    }

    #[test]
    fn test_select_preserves_insertion_order_across_pages() {
        let mut table = Table::new();
        let count = ROWS_PER_PAGE as u32 * 3 + 2;
        for id in (0..count).rev() {
            insert(&mut table, id).unwrap();
        }

        let rows = select(&mut table);
        assert_eq!(rows.len(), table.num_rows());
        let ids: Vec<u32> = rows.iter().map(|r| r.id).collect();
        let expected: Vec<u32> = (0..count).rev().collect();
        assert_eq!(ids, expected);
        assert_eq!(table.allocated_pages(), 4);
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut table = Table::new();
        for id in 0..5 {
            insert(&mut table, id).unwrap();
        }
        let first = select(&mut table);
        let second = select(&mut table);
        assert_eq!(first, second);
        assert_eq!(table.num_rows(), 5);
    }

    #[test]
    fn test_insert_into_full_table() {
        let mut table = Table::new();
        for id in 0..TABLE_MAX_ROWS as u32 {
            assert_eq!(insert(&mut table, id), Ok(Executed::Inserted));
        }
        assert!(table.is_full());

        assert_eq!(insert(&mut table, 99_999), Err(ExecuteError::TableFull));
        assert_eq!(table.num_rows(), TABLE_MAX_ROWS);

        let rows = select(&mut table);
        assert_eq!(rows.len(), TABLE_MAX_ROWS);
        assert_eq!(rows[0].to_string(), "(0, user0, person0@example.com)");
        let last = TABLE_MAX_ROWS - 1;
        assert_eq!(
            rows[last].to_string(),
            format!("({last}, user{last}, person{last}@example.com)")
        );
    }
}

#![cfg(feature = "sqlite")]

use dbpeek::{ConnectionWrapper, DbError, SqliteWrapper, Value};
use rusqlite::Connection;

fn seeded_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute("CREATE TABLE foobar (i int, a varchar(255))", [])
        .unwrap();
    conn.execute("insert into foobar select 100, 'sample-record'", [])
        .unwrap();
    conn
}

#[test]
fn create_table_returns_no_output() {
    let mut conn = Connection::open_in_memory().unwrap();
    let mut wrapper = SqliteWrapper::new(&mut conn);

    let outputs = wrapper
        .execute_statement("create table foobar (i int, a varchar(255));")
        .unwrap();

    assert!(outputs.is_empty());
}

#[test]
fn select_returns_one_table() {
    let mut conn = Connection::open_in_memory().unwrap();
    let mut wrapper = SqliteWrapper::new(&mut conn);

    let outputs = wrapper
        .execute_statement("select 1 as foo, '100' as bar;")
        .unwrap();

    assert_eq!(outputs.len(), 1);
    let table = &outputs[0];
    assert_eq!(table.columns(), ["foo", "bar"]);
    assert_eq!(
        table.rows(),
        [vec![Value::Integer(1), Value::Text("100".into())]]
    );
}

#[test]
fn select_datetime_stays_in_driver_text_form() {
    let mut conn = Connection::open_in_memory().unwrap();
    let mut wrapper = SqliteWrapper::new(&mut conn);

    let outputs = wrapper
        .execute_statement("select datetime('2000-01-01 00:00:00') as the_datetime;")
        .unwrap();

    assert_eq!(outputs.len(), 1);
    let table = &outputs[0];
    assert_eq!(table.columns(), ["the_datetime"]);
    assert_eq!(
        table.rows(),
        [vec![Value::Text("2000-01-01 00:00:00".into())]]
    );
}

#[test]
fn select_covers_the_scalar_vocabulary() {
    let mut conn = Connection::open_in_memory().unwrap();
    let mut wrapper = SqliteWrapper::new(&mut conn);

    let outputs = wrapper
        .execute_statement("select null as n, 1.5 as f, x'01ff' as b")
        .unwrap();

    assert_eq!(
        outputs[0].rows(),
        [vec![Value::Null, Value::Float(1.5), Value::Blob(vec![0x01, 0xff])]]
    );
}

#[test]
fn insert_returns_no_output() {
    let mut conn = seeded_connection();
    let mut wrapper = SqliteWrapper::new(&mut conn);

    let outputs = wrapper
        .execute_statement("insert into foobar select 1, 'hello'")
        .unwrap();

    assert!(outputs.is_empty());
}

#[test]
fn update_returns_no_output_and_is_visible_afterwards() {
    let mut conn = seeded_connection();
    let mut wrapper = SqliteWrapper::new(&mut conn);

    let outputs = wrapper.execute_statement("update foobar set i = 7").unwrap();
    assert!(outputs.is_empty());

    // The same wrapper sees the update on the next statement
    let outputs = wrapper.execute_statement("select i from foobar").unwrap();
    assert_eq!(outputs[0].rows(), [vec![Value::Integer(7)]]);
}

#[test]
fn delete_returns_no_output() {
    let mut conn = seeded_connection();
    let mut wrapper = SqliteWrapper::new(&mut conn);

    let outputs = wrapper.execute_statement("delete from foobar").unwrap();

    assert!(outputs.is_empty());
}

#[test]
fn empty_select_still_yields_a_table() {
    let mut conn = seeded_connection();
    let mut wrapper = SqliteWrapper::new(&mut conn);

    // Zero rows matched, but the statement has result-set metadata, so a
    // table with its column list comes back rather than nothing.
    let outputs = wrapper
        .execute_statement("select * from foobar where i > 1000")
        .unwrap();

    assert_eq!(outputs.len(), 1);
    assert_eq!(outputs[0].columns(), ["i", "a"]);
    assert_eq!(outputs[0].row_count(), 0);
}

#[test]
fn raw_connection_reaches_the_underlying_handle() {
    let mut conn = Connection::open_in_memory().unwrap();
    let mut wrapper = SqliteWrapper::new(&mut conn);

    // Seed state through the raw handle, as setup code would
    let raw = wrapper
        .raw_connection()
        .downcast_mut::<Connection>()
        .unwrap();
    raw.execute("create table seeded (x int)", []).unwrap();
    raw.execute("insert into seeded values (42)", []).unwrap();

    let outputs = wrapper.execute_statement("select x from seeded").unwrap();
    assert_eq!(outputs[0].rows(), [vec![Value::Integer(42)]]);
}

#[test]
fn malformed_sql_surfaces_the_driver_error() {
    let mut conn = Connection::open_in_memory().unwrap();
    let mut wrapper = SqliteWrapper::new(&mut conn);

    let result = wrapper.execute_statement("selcet 1");

    assert!(matches!(result, Err(DbError::Sqlite(_))));
}

#[test]
fn missing_table_surfaces_the_driver_error() {
    let mut conn = Connection::open_in_memory().unwrap();
    let mut wrapper = SqliteWrapper::new(&mut conn);

    let result = wrapper.execute_statement("select * from nowhere");

    assert!(matches!(result, Err(DbError::Sqlite(_))));
}

//! Unit-of-work wrapper over a single database connection.
//!
//! Reads go straight to the store. Writes are queued with [`TodoContext::add`],
//! [`TodoContext::update`] and [`TodoContext::remove`] and only reach the
//! store when [`TodoContext::save_changes`] commits them in one transaction.

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::error::{Error, Result};
use crate::models::{NewTodoItem, TodoItem};
use crate::schema::todo_items;

#[derive(Debug)]
enum Change {
    Add(NewTodoItem),
    Update(TodoItem),
    Remove(i32),
}

pub struct TodoContext<'c> {
    conn: &'c mut SqliteConnection,
    pending: Vec<Change>,
}

impl<'c> TodoContext<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        TodoContext {
            conn,
            pending: Vec::new(),
        }
    }

    /// All stored items in id order.
    pub fn all(&mut self) -> Result<Vec<TodoItem>> {
        let items = todo_items::table
            .order(todo_items::id)
            .select(TodoItem::as_select())
            .load(&mut *self.conn)?;
        Ok(items)
    }

    pub fn find(&mut self, id: i32) -> Result<Option<TodoItem>> {
        let item = todo_items::table
            .find(id)
            .select(TodoItem::as_select())
            .first(&mut *self.conn)
            .optional()?;
        Ok(item)
    }

    pub fn count(&mut self) -> Result<i64> {
        Ok(todo_items::table.count().get_result(&mut *self.conn)?)
    }

    pub fn add(&mut self, item: NewTodoItem) {
        self.pending.push(Change::Add(item));
    }

    /// Queues an overwrite of the row keyed by `item.id`.
    pub fn update(&mut self, item: TodoItem) {
        self.pending.push(Change::Update(item));
    }

    pub fn remove(&mut self, id: i32) {
        self.pending.push(Change::Remove(id));
    }

    pub fn has_changes(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Applies every queued change in order inside one transaction and
    /// returns the inserted rows with their assigned ids.
    ///
    /// An update or remove that matches no row fails the whole commit with
    /// [`Error::NotFound`]. The queue is emptied either way.
    pub fn save_changes(&mut self) -> Result<Vec<TodoItem>> {
        let pending = std::mem::take(&mut self.pending);
        if pending.is_empty() {
            return Ok(Vec::new());
        }

        self.conn.transaction::<_, Error, _>(|conn| {
            let mut added = Vec::new();
            for change in pending {
                match change {
                    Change::Add(item) => {
                        let inserted = diesel::insert_into(todo_items::table)
                            .values(&item)
                            .returning(TodoItem::as_returning())
                            .get_result(conn)?;
                        added.push(inserted);
                    }
                    Change::Update(item) => {
                        let rows = diesel::update(todo_items::table.find(item.id))
                            .set(&item)
                            .execute(conn)?;
                        if rows == 0 {
                            return Err(Error::NotFound(item.id));
                        }
                    }
                    Change::Remove(id) => {
                        let rows = diesel::delete(todo_items::table.find(id)).execute(conn)?;
                        if rows == 0 {
                            return Err(Error::NotFound(id));
                        }
                    }
                }
            }
            Ok(added)
        })
    }
}

use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::schema::todo_items;

/// A stored to-do item. Every field is optional on input; a missing `id`
/// reads as 0 and is ignored on create.
#[derive(
    Serialize, Deserialize, Queryable, Selectable, Identifiable, AsChangeset, ToSchema,
    Debug, Clone, Default, PartialEq, Eq,
)]
#[serde(default)]
#[diesel(table_name = todo_items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TodoItem {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Buy milk")]
    pub title: String,
    #[schema(example = "Two litres, semi-skimmed")]
    pub description: String,
}

#[derive(Insertable, Debug, Clone, Default, PartialEq, Eq)]
#[diesel(table_name = todo_items)]
pub struct NewTodoItem {
    pub title: String,
    pub description: String,
}

impl NewTodoItem {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        NewTodoItem {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl From<TodoItem> for NewTodoItem {
    fn from(item: TodoItem) -> Self {
        NewTodoItem {
            title: item.title,
            description: item.description,
        }
    }
}

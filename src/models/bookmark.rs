use diesel::prelude::*;
use jiff_diesel::DateTime;

#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::bookmarks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Bookmark {
    pub id: i32,
    pub user_id: i32,
    pub azkar_id: i32,
    pub created_at: DateTime,
}

#[derive(Debug, Insertable, Clone, Copy)]
#[diesel(table_name = crate::schema::bookmarks)]
pub struct NewBookmark {
    pub user_id: i32,
    pub azkar_id: i32,
}

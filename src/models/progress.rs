use diesel::prelude::*;
use jiff_diesel::{Date, DateTime};

/// Per-user, per-azkar, per-day completed repetition count.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::azkar_progress)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AzkarProgress {
    pub id: i32,
    pub user_id: i32,
    pub azkar_id: i32,
    pub date: Date,
    pub completed: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::azkar_progress)]
pub struct NewAzkarProgress {
    pub user_id: i32,
    pub azkar_id: i32,
    pub date: Date,
    pub completed: i32,
}

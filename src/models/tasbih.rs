use diesel::prelude::*;
use jiff_diesel::{Date, DateTime};

/// Aggregate tasbih taps for one user on one day.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::tasbih_counts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TasbihCount {
    pub id: i32,
    pub user_id: i32,
    pub date: Date,
    pub count: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::tasbih_counts)]
pub struct NewTasbihCount {
    pub user_id: i32,
    pub date: Date,
    pub count: i32,
}

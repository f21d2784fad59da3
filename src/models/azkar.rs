use diesel::prelude::*;

use super::Category;

/// A single remembrance entry with its repetition target.
#[derive(Debug, Queryable, Selectable, Identifiable, Associations, Clone, PartialEq, Eq)]
#[diesel(belongs_to(Category))]
#[diesel(table_name = crate::schema::azkar)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Azkar {
    pub id: i32,
    pub title: String,
    pub title_ar: String,
    pub arabic_text: String,
    pub translation: String,
    pub reference: Option<String>,
    pub times: i32,
    pub category_id: i32,
}

#[derive(Debug, Insertable, AsChangeset, Clone)]
#[diesel(table_name = crate::schema::azkar)]
pub struct NewAzkar {
    pub title: String,
    pub title_ar: String,
    pub arabic_text: String,
    pub translation: String,
    pub reference: Option<String>,
    pub times: i32,
    pub category_id: i32,
}

use diesel::prelude::*;

/// A named grouping of azkar such as `morning` or `evening`.
#[derive(Debug, Queryable, Selectable, Identifiable, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::azkar_categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub name_ar: String,
    pub description: String,
    pub description_ar: String,
}

#[derive(Debug, Insertable, AsChangeset, Clone)]
#[diesel(table_name = crate::schema::azkar_categories)]
pub struct NewCategory {
    pub name: String,
    pub name_ar: String,
    pub description: String,
    pub description_ar: String,
}

/// Category together with the number of azkar filed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryWithCount {
    pub category: Category,
    pub azkar_count: i64,
}

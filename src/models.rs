use chrono::{DateTime, Utc};
use lushu_numerology::Reading;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ReadingRecord {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub reading: Reading,
}

#[derive(Debug, Clone)]
pub struct ReadingSummary {
    pub id: Uuid,
    pub title: Option<String>,
    pub date_of_birth: chrono::NaiveDate,
    pub mulank: i16,
    pub destiny: i16,
    pub created_at: DateTime<Utc>,
}

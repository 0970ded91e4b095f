//! # MongoDB 이벤트 리포지토리
//!
//! `events` 컬렉션에 이벤트를 저장합니다. 식별자는 정수이며
//! `counters` 컬렉션의 시퀀스 문서로 발급합니다.
//!
//! ```text
//! counters: { "_id": "events", "seq": 31 }
//! events:   { "_id": 31, "name": "Spring", "eventStatus": "DRAFT", ... }
//! ```
//!
//! ## 인덱스
//!
//! 정렬에 자주 쓰이는 일시 필드와 이름에 단일 필드 인덱스를 둡니다.
//! [`MongoEventRepository::create_indexes`]는 서버 시작 시 한 번 호출됩니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, info};
use mongodb::{
    Collection, IndexModel,
    bson::{Document, doc},
    options::{FindOneAndUpdateOptions, FindOptions, ReplaceOptions, ReturnDocument},
};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::events::Event;
use crate::domain::models::{Page, Pageable};
use crate::repositories::events::EventRepository;
use crate::repositories::events::sort;

pub const EVENTS_COLLECTION: &str = "events";
pub const COUNTERS_COLLECTION: &str = "counters";

/// MongoDB 기반 이벤트 저장소
///
/// `mongodb::Collection`은 내부적으로 커넥션 풀을 공유하므로
/// 리포지토리 자체를 복제해도 비용이 거의 없습니다.
#[derive(Clone)]
pub struct MongoEventRepository {
    events: Collection<Event>,
    counters: Collection<Document>,
}

impl MongoEventRepository {
    pub fn new(database: &Database) -> Self {
        let db = database.get_database();

        Self {
            events: db.collection::<Event>(EVENTS_COLLECTION),
            counters: db.collection::<Document>(COUNTERS_COLLECTION),
        }
    }

    /// 정렬용 인덱스를 생성합니다. 이미 있으면 아무 일도 하지 않습니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let indexes = [
            "name",
            "beginEnrollmentDateTime",
            "closeEnrollmentDateTime",
            "beginEventDateTime",
            "endEventDateTime",
        ]
        .into_iter()
        .map(|key| IndexModel::builder().keys(doc! { key: 1 }).build())
        .collect::<Vec<_>>();

        self.events.create_indexes(indexes).await?;

        info!("✅ events 컬렉션 인덱스 준비 완료");
        Ok(())
    }

    /// 시퀀스를 1 증가시키고 새 값을 반환합니다.
    async fn next_id(&self) -> AppResult<i64> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self
            .counters
            .find_one_and_update(
                doc! { "_id": EVENTS_COLLECTION },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .with_options(options)
            .await?
            .ok_or_else(|| AppError::DatabaseError("이벤트 시퀀스를 발급하지 못했습니다".to_string()))?;

        counter
            .get_i64("seq")
            .map_err(|e| AppError::DatabaseError(format!("이벤트 시퀀스 형식 오류: {}", e)))
    }

    fn sort_document(pageable: &Pageable) -> AppResult<Document> {
        let mut document = Document::new();
        for (field, direction) in sort::resolve(&pageable.sort)? {
            document.insert(field.document_key(), if direction.is_ascending() { 1 } else { -1 });
        }
        Ok(document)
    }
}

#[async_trait]
impl EventRepository for MongoEventRepository {
    async fn save(&self, mut event: Event) -> AppResult<Event> {
        match event.id {
            Some(id) => {
                let options = ReplaceOptions::builder().upsert(true).build();
                self.events
                    .replace_one(doc! { "_id": id }, &event)
                    .with_options(options)
                    .await?;
                debug!("이벤트 갱신: id={}", id);
            }
            None => {
                let id = self.next_id().await?;
                event.id = Some(id);
                self.events.insert_one(&event).await?;
                debug!("이벤트 생성: id={}", id);
            }
        }

        Ok(event)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Event>> {
        Ok(self.events.find_one(doc! { "_id": id }).await?)
    }

    async fn find_all(&self, pageable: &Pageable) -> AppResult<Page<Event>> {
        let sort_document = Self::sort_document(pageable)?;

        let total = self.events.count_documents(doc! {}).await?;

        let limit = i64::try_from(pageable.size)
            .map_err(|_| AppError::ValidationError(format!("잘못된 페이지 크기: {}", pageable.size)))?;
        let options = FindOptions::builder()
            .sort(sort_document)
            .skip(pageable.offset())
            .limit(limit)
            .build();

        let content: Vec<Event> = self
            .events
            .find(doc! {})
            .with_options(options)
            .await?
            .try_collect()
            .await?;

        Ok(Page::new(content, pageable, total))
    }
}

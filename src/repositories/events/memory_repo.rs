//! 메모리 기반 이벤트 저장소
//!
//! `STORAGE_BACKEND=memory`로 실행하거나 테스트에서 사용합니다.
//! 프로세스가 종료되면 데이터는 사라집니다.

use std::collections::BTreeMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use crate::core::errors::{AppResult, ErrorContext};
use crate::domain::entities::events::Event;
use crate::domain::models::{Page, Pageable};
use crate::repositories::events::EventRepository;
use crate::repositories::events::sort;

#[derive(Debug, Default)]
pub struct InMemoryEventRepository {
    events: RwLock<BTreeMap<i64, Event>>,
    sequence: AtomicI64,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> AppResult<usize> {
        Ok(self.events.read().context("이벤트 저장소 잠금 실패")?.len())
    }

    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn save(&self, mut event: Event) -> AppResult<Event> {
        let id = match event.id {
            Some(id) => {
                self.sequence.fetch_max(id, Ordering::SeqCst);
                id
            }
            None => self.sequence.fetch_add(1, Ordering::SeqCst) + 1,
        };
        event.id = Some(id);

        self.events
            .write()
            .context("이벤트 저장소 잠금 실패")?
            .insert(id, event.clone());

        Ok(event)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Event>> {
        Ok(self
            .events
            .read()
            .context("이벤트 저장소 잠금 실패")?
            .get(&id)
            .cloned())
    }

    async fn find_all(&self, pageable: &Pageable) -> AppResult<Page<Event>> {
        let orders = sort::resolve(&pageable.sort)?;

        let mut events: Vec<Event> = self
            .events
            .read()
            .context("이벤트 저장소 잠금 실패")?
            .values()
            .cloned()
            .collect();

        events.sort_by(|a, b| {
            orders
                .iter()
                .map(|(field, direction)| {
                    let ordering = field.compare(a, b);
                    if direction.is_ascending() { ordering } else { ordering.reverse() }
                })
                .find(|ordering| ordering.is_ne())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let total = events.len() as u64;
        let content = events
            .into_iter()
            .skip(pageable.offset() as usize)
            .take(pageable.size as usize)
            .collect();

        Ok(Page::new(content, pageable, total))
    }
}

//! 데이터 액세스 계층
//!
//! 도메인 엔티티별 저장소 포트와 구현체를 제공합니다.

pub mod events;

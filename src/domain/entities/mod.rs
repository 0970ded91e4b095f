//! 핵심 도메인 엔티티
//!
//! 저장소에 영속되는 비즈니스 객체들입니다.

pub mod events;

//! 비즈니스 로직 계층
//!
//! 핸들러와 저장소 사이에서 요청 검증, 객체 변환, 영속화 위임을 담당합니다.

pub mod events;

//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## 설계 원칙
//!
//! ### 1. 엔티티와 분리
//! - 요청 DTO에는 서버가 결정하는 필드(`id`, `free`, `offline`, `eventStatus`)가 없습니다.
//! - 알 수 없는 속성이 포함된 요청은 거부됩니다.
//!
//! ### 2. 하이퍼미디어 응답
//! - 모든 응답 DTO는 `_links`를 포함하는 HAL 문서입니다.
//! - Content-Type은 `application/hal+json;charset=UTF-8`입니다.

pub mod events;

//! # 이벤트 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! 검증하는 역할을 담당합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조, 타입 일치성, 알 수 없는 속성 거부
//! 2. **형식 검증**: `validator` 선언 규칙 (필수값, 최소값)
//! 3. **비즈니스 검증**: `EventCreateRequestValidator` (가격, 일정 순서)

pub mod create_event;

pub use create_event::{EVENT_CREATE_REQUEST, EventCreateRequest};

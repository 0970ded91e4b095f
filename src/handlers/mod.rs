//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 받아 서비스 계층을 호출하고 HAL 응답을 만드는 핸들러들입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트, 링크 조립   ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 검증, 객체 변환                      ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! - **`index`**: API 진입점 (`GET /api`)
//! - **`events`**: 이벤트 생성/목록/조회/수정 (`/api/events`)
//!
//! 서비스는 전역 싱글톤 대신 `web::Data<EventService>`로 주입받습니다.
//! 따라서 테스트에서는 메모리 저장소를 연결한 앱을 그대로 사용할 수 있습니다.

pub mod events;
pub mod index;

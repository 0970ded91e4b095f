//! # Core Module
//!
//! 서비스 전반에서 공유하는 핵심 구성 요소를 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web ResponseError 자동 구현
//! - **자동 변환**: thiserror 기반 에러 체인 관리
//!
//! ### [`hal`] - 하이퍼미디어 링크
//! - **Link / Links**: HAL `_links` 객체 표현
//! - **LinkBuilder**: 요청의 scheme/host를 기준으로 절대 URI 생성
//! - **HAL_JSON_UTF8**: 모든 API 응답의 미디어 타입
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::hal::{LinkBuilder, Links};
//!
//! let events = LinkBuilder::from_request(&req).slash("api").slash("events");
//! let links = Links::new()
//!     .with("self", events.slash(event.id).to_uri())
//!     .with("query-events", events.to_uri());
//! ```

pub mod errors;
pub mod hal;

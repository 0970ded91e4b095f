//! 페이지네이션 모델
//!
//! 목록 조회 요청의 `page`, `size`, `sort` 쿼리 파라미터를 해석한
//! [`Pageable`]과, 저장소가 돌려주는 결과 조각 [`Page`]를 정의합니다.
//!
//! ```text
//! GET /api/events?page=1&size=10&sort=name,DESC&sort=id
//!         │
//!         ▼
//! Pageable { page: 1, size: 10, sort: [name DESC, id ASC] }
//! ```

use std::fmt;

use crate::config::PageConfig;

/// 정렬 방향
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// 대소문자를 구분하지 않고 `asc` / `desc`를 인식합니다.
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("asc") {
            Some(Direction::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Some(Direction::Desc)
        } else {
            None
        }
    }

    pub fn is_ascending(&self) -> bool {
        matches!(self, Direction::Asc)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Asc => write!(f, "ASC"),
            Direction::Desc => write!(f, "DESC"),
        }
    }
}

/// 단일 속성 정렬 조건
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub property: String,
    pub direction: Direction,
}

impl Order {
    pub fn asc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Desc,
        }
    }
}

/// 정렬 조건 목록 (앞에 있는 조건이 우선)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sort {
    orders: Vec<Order>,
}

impl Sort {
    pub fn by(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn is_unsorted(&self) -> bool {
        self.orders.is_empty()
    }

    /// `sort` 파라미터 하나를 해석해 조건을 추가합니다.
    ///
    /// `prop[,prop...][,asc|desc]` 형식이며, 마지막 방향은 앞의 모든 속성에
    /// 적용됩니다. 방향이 없으면 오름차순입니다.
    fn push_param(&mut self, value: &str) {
        let mut tokens: Vec<&str> = value
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect();

        let direction = match tokens.last().and_then(|last| Direction::parse(last)) {
            Some(direction) => {
                tokens.pop();
                direction
            }
            None => Direction::Asc,
        };

        self.orders.extend(tokens.into_iter().map(|property| Order {
            property: property.to_string(),
            direction,
        }));
    }
}

/// 페이지 요청 정보
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pageable {
    /// 0부터 시작하는 페이지 번호
    pub page: u64,
    pub size: u64,
    pub sort: Sort,
}

impl Pageable {
    pub fn of(page: u64, size: u64) -> Self {
        Self {
            page,
            size: size.max(1),
            sort: Sort::unsorted(),
        }
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    /// 쿼리 파라미터 쌍에서 페이지 요청을 만듭니다.
    ///
    /// - `page`: 음수이거나 `i32` 범위의 숫자가 아니면 0
    /// - `size`: 1 미만이거나 `i32` 범위의 숫자가 아니면 기본값, 최대값을 넘으면 최대값
    /// - `sort`: 여러 번 지정 가능
    pub fn from_query(params: &[(String, String)], config: &PageConfig) -> Self {
        let mut page = 0;
        let mut size = config.default_size;
        let mut sort = Sort::unsorted();

        for (key, value) in params {
            match key.as_str() {
                "page" => {
                    page = value
                        .trim()
                        .parse::<i32>()
                        .ok()
                        .and_then(|p| u64::try_from(p).ok())
                        .unwrap_or(0);
                }
                "size" => {
                    size = value
                        .trim()
                        .parse::<i32>()
                        .ok()
                        .filter(|s| *s >= 1)
                        .map(|s| (s as u64).min(config.max_size))
                        .unwrap_or(config.default_size);
                }
                "sort" => sort.push_param(value),
                _ => {}
            }
        }

        Self::of(page, size).with_sort(sort)
    }

    /// 건너뛸 요소 수. MongoDB `skip`이 `i64`이므로 `i64::MAX`를 넘지 않습니다.
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size).min(i64::MAX as u64)
    }

    /// 같은 크기와 정렬 조건으로 다른 페이지를 가리키는 요청
    pub fn with_page(&self, page: u64) -> Self {
        Self {
            page,
            size: self.size,
            sort: self.sort.clone(),
        }
    }

    /// 링크 생성용 쿼리 문자열 (`page=1&size=10&sort=name%2CDESC`)
    pub fn to_query_string(&self) -> String {
        let mut query = format!("page={}&size={}", self.page, self.size);

        for order in self.sort.orders() {
            let value = format!("{},{}", order.property, order.direction);
            query.push_str("&sort=");
            query.push_str(&urlencoding::encode(&value));
        }

        query
    }
}

/// 저장소가 반환하는 한 페이지 분량의 결과
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: u64,
    pub size: u64,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, pageable: &Pageable, total_elements: u64) -> Self {
        Self {
            content,
            number: pageable.page,
            size: pageable.size,
            total_elements,
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            1
        } else {
            self.total_elements.div_ceil(self.size)
        }
    }

    pub fn has_previous(&self) -> bool {
        self.number > 0
    }

    pub fn has_next(&self) -> bool {
        self.number + 1 < self.total_pages()
    }

    /// 내용을 변환합니다. 하나라도 실패하면 첫 번째 에러를 반환합니다.
    pub fn try_map<U, E, F>(self, f: F) -> Result<Page<U>, E>
    where
        F: FnMut(T) -> Result<U, E>,
    {
        let content = self.content.into_iter().map(f).collect::<Result<Vec<_>, E>>()?;

        Ok(Page {
            content,
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
        })
    }
}

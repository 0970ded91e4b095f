//! 터미널 출력 포맷팅 유틸리티
//!
//! 애플리케이션 초기화 과정에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 박스 형태의 제목, 진행 단계 표시, 완료 상태 등을 시각적으로 표현합니다.

/// 박스 내부 콘텐츠 너비 (고정 50칸)
const CONTENT_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목 문자열을 생성합니다
///
/// 텍스트는 자동으로 중앙 정렬됩니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  System Started                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn format_boxed_title(title: &str) -> String {
    let border = "═".repeat(CONTENT_WIDTH);

    format!(
        "╔{border}╗\n║{title:^width$}║\n╚{border}╝",
        border = border,
        title = title,
        width = CONTENT_WIDTH
    )
}

/// 박스 형태로 둘러싸인 제목을 출력합니다
pub fn print_boxed_title(title: &str) {
    println!("{}", format_boxed_title(title));
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Connecting to MongoDB
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다
///
/// ```text
/// ✓ Step 1: Event storage ready (1 items)
/// ```
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 서브 작업의 상태를 표시합니다
///
/// ```text
///    ├─ EventRepository: MongoDB
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 서버 시작 직전의 요약 정보를 출력합니다
///
/// # Arguments
///
/// * `storage` - 사용 중인 이벤트 저장소 이름
/// * `bind_address` - HTTP 서버 바인딩 주소
/// * `routes` - 노출되는 주요 엔드포인트 목록
pub fn print_startup_summary(storage: &str, bind_address: &str, routes: &[&str]) {
    println!();
    print_boxed_title("🎉 EVENT SERVICE READY");
    println!("   📦 Storage: {}", storage);
    println!("   🌐 Listening: http://{}", bind_address);
    for route in routes {
        println!("   📍 {}", route);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_boxed_title_centers_text() {
        let boxed = format_boxed_title("READY");
        let lines: Vec<&str> = boxed.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('╔') && lines[0].ends_with('╗'));
        assert!(lines[1].starts_with('║') && lines[1].ends_with('║'));
        assert!(lines[1].contains("READY"));
        assert_eq!(lines[1].chars().count(), CONTENT_WIDTH + 2);
        assert!(lines[2].starts_with('╚') && lines[2].ends_with('╝'));
    }
}

//! Site configuration constants
//!
//! Everything the layout and section components render: branding copy,
//! the services array, footer info, and the default contact endpoint.
//! The components themselves hold no copy of their own.

/// Brand name shown in the logo and window title
pub const BRAND_NAME: &str = "밥상클럽";

/// One-line pitch under the hero headline
pub const BRAND_TAGLINE: &str = "유치원 급식 운영, 명세서부터 정산까지 한 번에";

/// Hero headline
pub const HERO_HEADLINE: &str = "우리 원 급식비, 투명하게 관리하세요";

/// Hero call-to-action label
pub const HERO_CTA: &str = "도입 문의하기";

/// Where the contact form posts when no `--endpoint` flag is given
pub const DEFAULT_CONTACT_ENDPOINT: &str = "https://api.bapsang.club/contact";

/// One service card on the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceInfo {
    /// Single-glyph icon rendered above the title
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// The services array the landing section maps to cards
pub const SERVICES: [ServiceInfo; 3] = [
    ServiceInfo {
        icon: "🧾",
        title: "명세서 자동 매칭",
        description: "CJ프레시웨이·신세계푸드 명세서를 업로드하면 품목을 식단 원장과 자동으로 매칭합니다.",
    },
    ServiceInfo {
        icon: "📊",
        title: "급식비 정산 리포트",
        description: "월별 급식비 합계와 원아 1인당 단가를 자동 계산해 정산 보고서를 만들어 드립니다.",
    },
    ServiceInfo {
        icon: "🥗",
        title: "식단 관리",
        description: "식단표와 발주 내역을 한 곳에서 관리하고 남는 재고를 다음 주 식단에 반영합니다.",
    },
];

/// Footer company block
pub const COMPANY_NAME: &str = "주식회사 밥상클럽";
pub const COMPANY_EMAIL: &str = "hello@bapsang.club";
pub const COMPANY_PHONE: &str = "02-6951-0042";
pub const COMPANY_ADDRESS: &str = "서울특별시 마포구 양화로 45, 8층";

/// Footer anchor links: (label, href)
pub const FOOTER_LINKS: [(&str, &str); 3] = [
    ("서비스 소개", "#services"),
    ("도입 문의", "#contact"),
    ("개인정보 처리방침", "#privacy"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_services_have_copy() {
        for service in &SERVICES {
            assert!(!service.title.is_empty());
            assert!(!service.description.is_empty());
        }
    }

    #[test]
    fn test_footer_links_are_anchors() {
        for (_, href) in &FOOTER_LINKS {
            assert!(href.starts_with('#'));
        }
    }
}

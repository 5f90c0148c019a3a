//! Solution catalog offered in the inquiry form.
//!
//! The catalog is an ordered, read-only collaborator: the first entry seeds
//! the draft's default selection, `name` is the option label and value, and
//! `id` is only a rendering key.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::InquiryError;

/// A sellable solution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub summary: String,
}

impl Solution {
    fn new(id: &str, name: &str, summary: &str) -> Self {
        Self { id: id.to_owned(), name: name.to_owned(), summary: summary.to_owned() }
    }
}

/// Ordered, non-empty list of solutions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    solutions: Vec<Solution>,
}

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    solutions: vec![
        Solution::new(
            "protect-entry",
            "ESET PROTECT Entry",
            "클라우드 콘솔 기반 엔드포인트 보호와 파일 서버 보안",
        ),
        Solution::new(
            "protect-advanced",
            "ESET PROTECT Advanced",
            "고급 위협 방어와 전체 디스크 암호화를 포함한 랜섬웨어 대응",
        ),
        Solution::new(
            "protect-complete",
            "ESET PROTECT Complete",
            "메일 서버 및 클라우드 애플리케이션 보호, 취약점 패치 관리",
        ),
        Solution::new(
            "protect-elite",
            "ESET PROTECT Elite",
            "XDR 기반 탐지 및 대응과 다중 인증까지 통합된 최상위 보안",
        ),
        Solution::new(
            "protect-mdr",
            "ESET PROTECT MDR",
            "ESET 전문가가 24/7 위협을 탐지하고 대응하는 관리형 서비스",
        ),
        Solution::new(
            "mail-security",
            "ESET Mail Security",
            "스팸, 피싱, 악성 첨부파일을 차단하는 메일 서버 보안",
        ),
    ],
});

impl Catalog {
    /// Build a catalog from an ordered list.
    ///
    /// # Errors
    ///
    /// Returns [`InquiryError::EmptyCatalog`] when `solutions` is empty.
    pub fn new(solutions: Vec<Solution>) -> Result<Self, InquiryError> {
        if solutions.is_empty() {
            return Err(InquiryError::EmptyCatalog);
        }
        Ok(Self { solutions })
    }

    /// The vendor catalog shipped with the site.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Parse a catalog from a JSON array of `{ "id", "name", "summary"? }`.
    ///
    /// # Errors
    ///
    /// Returns [`InquiryError::CatalogParse`] for malformed JSON and
    /// [`InquiryError::EmptyCatalog`] for an empty array.
    pub fn from_json(raw: &str) -> Result<Self, InquiryError> {
        let solutions: Vec<Solution> =
            serde_json::from_str(raw).map_err(|e| InquiryError::CatalogParse(e.to_string()))?;
        Self::new(solutions)
    }

    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    /// Name of the first entry, used as the draft's initial selection.
    pub fn default_solution(&self) -> &str {
        self.solutions.first().map_or("", |s| s.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.solutions.iter().any(|s| s.name == name)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Solution> {
        self.solutions.iter().find(|s| s.id == id)
    }
}

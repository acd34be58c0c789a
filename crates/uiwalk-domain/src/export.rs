//! Export-boundary record types
//!
//! The spreadsheet collaborators expect a fixed Chinese column vocabulary.
//! That vocabulary lives only here, as `#[serde(rename)]` attributes; the
//! rest of the workspace uses the typed records.

use crate::case::Case;
use crate::classification::Classification;
use serde::Serialize;

/// One checklist row in the exported column vocabulary
#[derive(Debug, Clone, Serialize)]
pub struct CaseRecord {
    /// Case number (用例编号)
    #[serde(rename = "用例编号")]
    pub case_no: String,

    /// Module name (页面/模块)
    #[serde(rename = "页面/模块")]
    pub module: String,

    /// Checkpoint (检查点)
    #[serde(rename = "检查点")]
    pub checkpoint: String,

    /// Design principle (设计原则)
    #[serde(rename = "设计原则")]
    pub principle: String,

    /// Check item (检查项)
    #[serde(rename = "检查项")]
    pub check_item: String,

    /// Priority (优先级)
    #[serde(rename = "优先级")]
    pub priority: String,

    /// Expected result / design standard (预期结果/设计标准)
    #[serde(rename = "预期结果/设计标准")]
    pub expected: String,

    /// Verification status (是否通过)
    #[serde(rename = "是否通过")]
    pub status: String,

    /// Note / screenshot reference (截图/备注)
    #[serde(rename = "截图/备注")]
    pub note: String,
}

impl From<&Case> for CaseRecord {
    fn from(case: &Case) -> Self {
        Self {
            case_no: case.case_no.clone(),
            module: case.module.clone(),
            checkpoint: case.checkpoint.clone(),
            principle: case.principle.clone(),
            check_item: case.check_item.clone(),
            priority: case.priority.label().to_string(),
            expected: case.expected.clone(),
            status: case.status.label().to_string(),
            note: case.note.clone(),
        }
    }
}

/// One classified problem row in the exported column vocabulary
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationRecord {
    /// Original problem description (问题描述)
    #[serde(rename = "问题描述")]
    pub problem: String,

    /// Assigned category (问题分类)
    #[serde(rename = "问题分类")]
    pub category: String,

    /// Classification reason (分类原因)
    #[serde(rename = "分类原因")]
    pub reason: String,

    /// Taxonomy citation (参照依据)
    #[serde(rename = "参照依据")]
    pub reference: String,
}

impl ClassificationRecord {
    /// Pair a classification outcome with the problem text it was made for
    pub fn new(problem: impl Into<String>, classification: &Classification) -> Self {
        Self {
            problem: problem.into(),
            category: classification.category.label().to_string(),
            reason: classification.reason.clone(),
            reference: classification.reference.clone(),
        }
    }
}

//! Classification prompt construction

use crate::taxonomy::TAXONOMY_MANUAL;

/// System role for problem classification
pub const CLASSIFY_SYSTEM: &str =
    "你是一个专业的UI走查问题分类专家，擅长根据问题描述进行准确分类。";

/// Completion-length cap; a classification is three short fields
pub const CLASSIFY_MAX_TOKENS: u32 = 200;

/// Build the classification prompt for one problem description
pub fn build_classify_prompt(problem: &str) -> String {
    format!(
        r#"你是一个UI走查问题分类专家。请根据以下分类手册，对给定的问题进行分类。

# 分类手册
{manual}

# 待分类问题
{problem}

# 分类要求
1. 仔细阅读分类手册，理解每个一级分类的定义和特征
2. 分析问题描述，判断其属于哪个一级分类
3. 分类结果必须是以下5个一级分类之一：
   - 功能完备性
   - 信息清晰性
   - 任务高效性
   - 系统可靠性
   - 一致性
4. 给出分类结果、简要的分类原因（50字以内）、以及参照的具体章节
5. 以JSON格式返回结果

# 输出格式（注意：手册中只有"一级指标-二级指标-问题类型"三层结构，不存在1.1.1这类第三级编号）
{{
    "category": "分类名称",
    "reason": "分类原因说明",
    "reference": "数字.一级分类-数字.数字 二级指标-具体问题类型"
}}

# reference字段格式说明
必须按照"数字.一级分类-数字.数字 二级指标-具体问题类型"的格式，其中：
- 前面的"数字.一级分类"和"数字.数字 二级指标"必须严格来自上面的分类手册标题（如"1. 功能完备性"、"2. 信息清晰性"、"2.2 功能入口易见"等）
- 最后的"具体问题类型"直接使用手册中对应二级指标下的某一条问题描述（如"功能实现与需求不符"），不要再人为增加诸如"1.1.1"之类的新编号

示例（注意没有1.1.1这类编号）：
- "2.信息清晰性-2.2 功能入口易见-功能入口隐蔽"
- "4.系统可靠性-4.2 系统运行稳定-功能无法正常使用"
- "5.一致性-5.2 信息传达一致-信息表达不一致"
- "3.任务高效性-3.1 任务步骤合理-任务流程复杂"

注意：
1. category字段必须是上述5个一级分类之一
2. reference字段必须具体到二级指标和问题类型，格式要规范

请直接返回JSON，不要包含其他内容。"#,
        manual = TAXONOMY_MANUAL,
        problem = problem,
    )
}

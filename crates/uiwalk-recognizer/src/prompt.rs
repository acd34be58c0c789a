//! Analysis prompt construction
//!
//! The prompt fixes page-level granularity: one module per second-level
//! heading as a heuristic hint, independently functional modals count, no
//! widget-level entries.

/// System role for requirement analysis
pub const ANALYZE_SYSTEM: &str = "你是一个专业的UI需求分析专家。";

/// Build the requirement-analysis prompt around a bounded document prefix
pub fn build_analyze_prompt(doc_prefix: &str) -> String {
    format!(
        r#"请分析以下需求文档，识别页面级别的功能模块。

需求文档：
{doc_prefix}

请返回JSON格式：
{{
    "modules": [
        {{
            "name": "模块名称",
            "description": "模块描述",
            "type": "页面类型"
        }}
    ],
    "total_modules": 数量
}}

识别规则：
1. 只识别页面级别的模块（如：首页、详情页、创建页、编辑页）
2. 不要识别小组件（如：按钮、输入框、下拉框）
3. 每个二级标题(##)通常代表一个页面模块
4. 弹窗、对话框如果功能独立也算一个模块
5. 模块名称要简洁明了（如：跨域训练首页、新建任务页）
6. 页面类型可以是：列表页、详情页、创建页、编辑页、弹窗等

注意：
- 不要过度拆分，一个完整的页面就是一个模块
- 避免识别出过多的小模块
"#
    )
}

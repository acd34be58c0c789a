//! Generation prompt construction
//!
//! The prompt carries the review mode's principle taxonomy, case-count and
//! priority-distribution guidance, the page-scan ordering rules, and - in
//! standard mode - one fixed guidance block per active suggested category.

use uiwalk_domain::{Module, ReviewMode, SuggestedCategory};

/// System role for case generation
pub const GENERATE_SYSTEM: &str =
    "你是一个专业的UI测试工程师，擅长编写详细的UI走查用例。请确保返回的JSON格式正确，所有字符串都要正确转义。";

/// The standard-mode principle taxonomy (5 categories, 13 principles)
const STANDARD_PRINCIPLES: &str = r#"必须遵循基于《UIUE设计技术规范》的UI走查原则体系（5大类别13个原则）：

一、易学性原则：
1.1 简化交互原则 - 流程简洁、逻辑直接、场景完整
1.2 引导与帮助原则 - 新手引导、流程引导、空状态引导
1.3 内容与文案准确性原则 - 语言规范、用户语言、指代明确

二、易操作性原则：
2.1 交互无障碍原则 - 最小可操作区域、焦点指示、键盘导航
2.2 遵从认知惯性原则 - 流程符合认知、选择优于输入、常见模式
2.3 异常与负向流程验证原则 - 异常告知、高风险确认、错误纠正

三、清晰性原则：
3.1 识别无障碍原则 - 信息完整性、颜色对比度、文本格式
3.2 层次分明原则 - 架构扁平化、位置指示、主次区分
3.3 组织有序原则 - 对齐规则、响应式布局、断点适配

四、高效性原则：
4.1 预置信息与快捷操作原则 - 预置信息、默认选项、批量操作
4.2 交互与反馈原则 - 控件状态反馈、加载状态、操作反馈

五、一致性原则：
5.1 视觉一致性原则 - 颜色一致、字体一致、功能一致
5.2 组件状态完整性原则 - 按钮状态、输入框状态、链接状态
5.3 数据与文案一致性原则 - 数据一致、句式一致、术语统一"#;

/// The competitive-mode principle taxonomy (10 principles)
const COMPETITIVE_PRINCIPLES: &str = r#"必须遵循竞品对标十大设计原则：
1. 异常处理完备性 - 所有异常情况都能被捕获、处理并友好提示
2. 信息提示完整性 - 费用、到期、操作提示等关键信息完整清晰
3. 功能可用性保障 - 所有功能稳定可用，失效功能及时修复或下架
4. 文档同步一致性 - 帮助文档与产品实际功能保持同步
5. 响应速度优化 - 页面加载、刷新、操作响应时间符合预期
6. 跳转准确性 - 所有跳转准确到达目标页面
7. 信息一致性 - 同类信息的展示方式、格式、逻辑保持一致
8. 输入校验完整性 - 所有用户输入进行完整校验
9. 语言统一性 - 产品界面、提示信息使用统一语言
10. 操作高效性 - 支持批量操作，减少重复步骤

重点关注高频问题类型：
- 系统报错和异常处理（24.4%）
- 提示信息不清晰或缺失（17.1%）
- 功能无法正常使用（14.6%）
- 帮助文档与产品不一致（8.1%）
- 加载和刷新问题（6.5%）
- 跳转逻辑问题（6.5%）"#;

/// Case-count guidance, conditioned on module complexity
fn case_count_guidance(mode: ReviewMode) -> &'static str {
    match mode {
        ReviewMode::Competitive => {
            "10-25个用例，根据模块复杂度调整（简单模块10-15个，复杂模块20-25个）。竞品对标更聚焦，不需要检查视觉细节，用更精准的用例覆盖高频问题"
        }
        ReviewMode::Standard => {
            "10-30个用例，根据模块复杂度调整（简单模块10-15个，复杂模块25-30个）。标准UI走查范围更广，需要覆盖视觉、交互、功能等各个方面"
        }
    }
}

/// Priority-distribution guidance per review mode
fn priority_guidance(mode: ReviewMode) -> &'static str {
    match mode {
        ReviewMode::Competitive => {
            r#"
   【高优先级 70-80%】- 必须检查，如果不检查可能在竞品对标中被扣分
   • 异常场景处理（报错、失败、超时）
   • 关键信息完整性（费用、到期、限制说明）
   • 核心功能可用性
   • 页面响应速度（<3秒）
   • 跳转准确性
   • 输入校验完整性（特殊字符、边界值）

   【中优先级 15-25%】- 应该检查，影响用户体验
   • 帮助文档一致性
   • 信息展示统一性
   • 语言统一性
   • 批量操作支持

   【低优先级 5-10%】- 可选检查，优化建议
   • 视觉细节优化
   • 边缘场景"#
        }
        ReviewMode::Standard => {
            r#"
   【高优先级 40-50%】- 必须检查，如果不检查可能导致严重功能问题
   • 核心交互组件可用性（按钮、输入框、下拉框）
   • 必填项校验
   • 关键操作反馈（提交、保存、删除）
   • 错误提示清晰度
   • 核心业务流程流畅性
   • 页面正常加载

   【中优先级 40-50%】- 应该检查，如果不检查可能影响用户体验
   • 次要组件状态表现
   • 操作反馈及时性和明显性
   • 布局对齐和响应式
   • 文案准确性和清晰度
   • 辅助功能可用性
   • 加载速度和性能

   【低优先级 10-20%】- 可选检查，视觉细节优化
   • 字号、字重、行高等排版细节
   • 间距、边距精确数值
   • 颜色具体色值
   • 图标样式统一性
   • 装饰性元素
   • 动画效果流畅度"#
        }
    }
}

/// Fixed guidance block for one suggested category
fn category_block(category: SuggestedCategory) -> &'static str {
    match category {
        SuggestedCategory::GlobalChrome => {
            r#"
【全局页面测试重点】
请特别关注以下通用组件和全局元素的测试用例：
- 页面头部（Header）：Logo、导航菜单、用户信息、搜索框等
- 页面底部（Footer）：版权信息、链接、联系方式等
- 侧边导航栏：菜单项、展开/收起状态、选中状态
- 面包屑导航：层级显示、点击跳转
- 全局提示组件：Toast、Message、Notification
- 全局加载状态：页面级Loading、骨架屏
- 通用按钮和图标：确保在不同页面中保持一致
- 响应式布局：在不同屏幕尺寸下的表现
请为这些全局组件生成至少3-4个专门的测试用例。
"#
        }
        SuggestedCategory::ScenarioFlow => {
            r#"
【场景流程测试重点】
请特别关注以下多步骤操作流程的测试用例：
- 完整的用户操作路径：从进入页面到完成目标的全流程
- 多步骤表单：步骤指示器、上一步/下一步、数据保存
- 向导式流程：引导提示、进度展示、步骤跳转
- 数据提交流程：填写→预览→确认→提交→反馈
- 审批流程：提交→审核→通过/驳回→通知
- 搜索筛选流程：输入条件→搜索→结果展示→详情查看
- 状态流转：草稿→待审核→已发布等状态变化
请为关键业务流程生成至少3-4个端到端的测试用例，覆盖正常路径和分支路径。
"#
        }
        SuggestedCategory::ExceptionHandling => {
            r#"
【异常场景测试重点】
请特别关注以下错误处理和边界条件的测试用例：
- 输入验证：必填项、格式校验、长度限制、特殊字符
- 网络异常：请求超时、网络断开、服务器错误（500、502等）
- 权限异常：无权限访问、登录过期、Token失效
- 数据异常：空数据、数据加载失败、数据格式错误
- 操作冲突：并发操作、重复提交、数据已被修改
- 边界条件：最大值、最小值、空值、极限数据量
- 错误提示：清晰的错误信息、友好的错误页面、错误恢复指引
- 降级处理：功能不可用时的降级方案
请为各类异常情况生成至少4-5个测试用例，确保系统的健壮性。
"#
        }
        SuggestedCategory::UpstreamDownstream => {
            r#"
【上下游验证测试重点】
请特别关注以下数据流转和接口调用的测试用例：
- 数据传递：页面间参数传递、数据回显、数据同步
- 接口调用：请求参数正确性、响应数据处理、错误处理
- 状态同步：操作后相关页面/组件的状态更新
- 缓存处理：数据缓存、缓存更新、缓存失效
- 消息通知：操作后的消息推送、通知展示
- 关联数据：主数据变更后关联数据的更新
- 跨页面影响：在A页面操作后，B页面的数据是否正确更新
- 数据一致性：列表页和详情页数据一致、编辑前后数据一致
请为数据流转和接口交互生成至少3-4个测试用例，确保上下游数据的正确性。
"#
        }
    }
}

/// Assemble the category guidance section; empty outside standard mode
fn category_guidance(mode: ReviewMode, categories: &[SuggestedCategory]) -> String {
    if mode != ReviewMode::Standard || categories.is_empty() {
        return String::new();
    }

    let blocks: Vec<_> = categories.iter().map(|c| category_block(*c)).collect();
    format!("\n{}\n", blocks.join("\n"))
}

/// Builds case-generation prompts for one module
pub struct PromptBuilder<'a> {
    module: &'a Module,
    doc_prefix: String,
    mode: ReviewMode,
    categories: &'a [SuggestedCategory],
    rules_context: Option<String>,
}

impl<'a> PromptBuilder<'a> {
    /// Create a prompt builder
    pub fn new(
        module: &'a Module,
        doc_prefix: String,
        mode: ReviewMode,
        categories: &'a [SuggestedCategory],
    ) -> Self {
        Self {
            module,
            doc_prefix,
            mode,
            categories,
            rules_context: None,
        }
    }

    /// Prepend a review-rules context document
    pub fn with_rules_context(mut self, rules: String) -> Self {
        self.rules_context = Some(rules);
        self
    }

    /// Build the complete generation prompt
    pub fn build(&self) -> String {
        let rules_context = match &self.rules_context {
            Some(rules) => format!("\n请严格遵循以下UI走查规则：\n\n{}\n\n", rules),
            None => String::new(),
        };

        let principles_text = match self.mode {
            ReviewMode::Standard => STANDARD_PRINCIPLES,
            ReviewMode::Competitive => COMPETITIVE_PRINCIPLES,
        };

        format!(
            r#"{rules_context}

请为"{name}"模块生成UI走查用例。

模块信息：
- 模块名称：{name}
- 模块描述：{description}

需求文档片段：
{doc_prefix}

{principles_text}

{category_guidance}

严格按照CSV格式规范返回JSON：
{{
    "cases": [
        {{
            "检查点": "具体的设计元素或组件",
            "设计原则": "从13个原则中选择（只写原则名称，不要编号，如：简化交互原则、视觉一致性原则）",
            "检查项": "描述具体的检查内容",
            "优先级": "高/中/低",
            "预期结果/设计标准": "设计稿中的具体规范或期望表现"
        }}
    ]
}}

关键要求：
1. 生成用例数量：{case_count}
2. 字段名必须完全匹配：检查点、设计原则、检查项、优先级、预期结果/设计标准
3. 严格按照以下优先级划分规则（基于检查的重要性，而非问题的严重性）：
   {priority}
4. **用例排序规则（重要）**：
   • 必须按照页面从上到下的走查顺序排列，而非按优先级排序
   • 页面头部（导航、标题）→ 主要内容区 → 操作按钮 → 页面底部
   • 表单：标题 → 输入项（从上到下）→ 提交按钮 → 错误提示
   • 列表：标题 → 筛选/搜索 → 列表项 → 分页/加载更多
   • 详情页：标题 → 基本信息 → 详细信息 → 操作按钮
   • 同一区域内，高优先级用例可以优先，但不同区域必须按页面顺序
5. **设计原则格式（重要）**：
   • 只写原则名称，不要包含编号
   • 正确示例：简化交互原则、视觉一致性原则、交互与反馈原则
   • 错误示例：1.1 简化交互原则、5.1 视觉一致性原则
6. 所有文本内容保持单行，不要包含换行符
7. **预期结果描述要求（重要）**：
   • 对于视觉细节（字号、字重、颜色、间距等），使用通用描述，如"符合设计规范"、"保持一致"
   • 对于功能性检查，描述具体的预期行为，如"显示成功提示"、"跳转到详情页"
   • 避免使用具体数值（如16px、#262626），除非需求文档中明确提供
   • 可以保留行业标准数值（如WCAG对比度≥4.5:1、响应时间<3秒）
8. 检查点基于具体的功能或UI元素
9. 设计原则必须从上述原则中选择
10. 确保覆盖所有关键场景和高频问题类型
"#,
            rules_context = rules_context,
            name = self.module.name,
            description = self.module.description,
            doc_prefix = self.doc_prefix,
            principles_text = principles_text,
            category_guidance = category_guidance(self.mode, self.categories),
            case_count = case_count_guidance(self.mode),
            priority = priority_guidance(self.mode),
        )
    }
}

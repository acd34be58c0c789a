//! Static template cases - the deterministic fallback
//!
//! A pure function of (module name, review mode, suggested categories). Used
//! whenever no AI client is configured or the AI reply is rejected by the
//! repair layer.

use uiwalk_domain::{Case, Priority, ReviewMode, SuggestedCategory};

/// Produce the fixed template checklist for a module
///
/// Standard mode emits 8 cases spanning high → medium → low priority and, if
/// suggested categories are active, appends their fixed blocks in the fixed
/// category order. Competitive mode emits 10 cases covering the ten
/// competitive-review principles and ignores suggested categories.
pub fn template_cases(
    module_name: &str,
    mode: ReviewMode,
    categories: &[SuggestedCategory],
) -> Vec<Case> {
    let mut cases = match mode {
        ReviewMode::Standard => standard_cases(module_name),
        ReviewMode::Competitive => competitive_cases(module_name),
    };

    if mode == ReviewMode::Standard {
        for category in SuggestedCategory::ALL {
            if categories.contains(&category) {
                cases.extend(category_cases(module_name, category));
            }
        }
    }

    cases
}

/// Standard UI-review template: 8 cases, high → medium → low
fn standard_cases(name: &str) -> Vec<Case> {
    vec![
        Case::new(
            name,
            "按钮状态",
            "组件状态完整性原则",
            format!("检查{}中主要按钮的各种状态", name),
            Priority::High,
            "按钮有默认、悬停、点击、禁用状态，核心按钮可正常点击",
        ),
        Case::new(
            name,
            "输入框状态",
            "组件状态完整性原则",
            format!("检查{}中输入框的各种状态", name),
            Priority::High,
            "输入框有占位符、聚焦、已输入、错误、禁用状态，必填项可正常输入",
        ),
        Case::new(
            name,
            "错误提示",
            "异常与负向流程验证原则",
            format!("检查{}中输入验证的错误提示", name),
            Priority::High,
            "输入错误时显示清晰的错误提示信息，用户能理解如何修正",
        ),
        Case::new(
            name,
            "操作反馈",
            "交互与反馈原则",
            format!("检查{}中关键操作是否有反馈", name),
            Priority::High,
            "提交、保存、删除等关键操作有成功/失败提示",
        ),
        Case::new(
            name,
            "加载状态",
            "交互与反馈原则",
            format!("检查{}中数据加载时的状态", name),
            Priority::Medium,
            "数据加载时显示Loading提示或骨架屏",
        ),
        Case::new(
            name,
            "页面布局",
            "组织有序原则",
            format!("检查{}的页面布局和对齐", name),
            Priority::Medium,
            "元素按网格系统对齐，布局清晰合理",
        ),
        Case::new(
            name,
            "文案准确性",
            "内容与文案准确性原则",
            format!("检查{}中所有文案是否准确无误", name),
            Priority::Medium,
            "无错别字，专业术语准确，语句通顺",
        ),
        Case::new(
            name,
            "页面标题样式",
            "视觉一致性原则",
            format!("检查{}页面标题的字体、字号、颜色", name),
            Priority::Low,
            "标题字号、字重、颜色符合设计规范",
        ),
    ]
}

/// Competitive benchmarking template: 10 cases over the ten principles
fn competitive_cases(name: &str) -> Vec<Case> {
    vec![
        Case::new(
            name,
            "异常处理",
            "异常处理完备性",
            format!("检查{}中所有异常情况是否有友好提示", name),
            Priority::High,
            "显示明确的失败原因和解决方案，避免技术性错误代码",
        ),
        Case::new(
            name,
            "费用信息",
            "信息提示完整性",
            format!("检查{}中费用、价格信息是否明确说明", name),
            Priority::High,
            "明确显示费用金额、计费周期、到期时间",
        ),
        Case::new(
            name,
            "功能可用性",
            "功能可用性保障",
            format!("检查{}中所有功能是否稳定可用", name),
            Priority::High,
            "核心功能稳定可用，不可用功能置灰并说明原因",
        ),
        Case::new(
            name,
            "帮助文档",
            "文档同步一致性",
            format!("检查{}的帮助文档是否与实际功能一致", name),
            Priority::Medium,
            "文档与产品同步更新，截图为最新版本，链接有效",
        ),
        Case::new(
            name,
            "页面加载速度",
            "响应速度优化",
            format!("检查{}的页面加载和响应速度", name),
            Priority::High,
            "页面首次加载<3秒，操作响应及时",
        ),
        Case::new(
            name,
            "跳转准确性",
            "跳转准确性",
            format!("检查{}中所有跳转是否准确到达目标页面", name),
            Priority::High,
            "跳转目标准确，无需二次操作，链接有效",
        ),
        Case::new(
            name,
            "信息一致性",
            "信息一致性",
            format!("检查{}中同类信息的展示方式是否一致", name),
            Priority::Medium,
            "费用显示格式统一，单位显示规则统一",
        ),
        Case::new(
            name,
            "输入校验",
            "输入校验完整性",
            format!("检查{}中所有用户输入是否进行完整校验", name),
            Priority::High,
            "特殊字符过滤，输入长度限制，校验失败友好提示",
        ),
        Case::new(
            name,
            "语言统一性",
            "语言统一性",
            format!("检查{}中界面文案是否使用统一语言", name),
            Priority::Medium,
            "所有界面文案使用中文，避免中英文混合",
        ),
        Case::new(
            name,
            "批量操作",
            "操作高效性",
            format!("检查{}是否支持批量操作", name),
            Priority::Medium,
            "支持批量上传、删除、修改，减少重复操作",
        ),
    ]
}

/// Extra fixed cases for one active suggested category (standard mode only)
fn category_cases(name: &str, category: SuggestedCategory) -> Vec<Case> {
    match category {
        SuggestedCategory::GlobalChrome => vec![
            Case::new(
                name,
                "页面头部",
                "视觉一致性原则",
                format!("检查{}的页面头部Logo、导航菜单、用户信息等全局元素", name),
                Priority::High,
                "头部高度64px，Logo尺寸120x32px，导航菜单字号14px",
            ),
            Case::new(
                name,
                "页面底部",
                "视觉一致性原则",
                format!("检查{}的页面底部版权信息、链接等全局元素", name),
                Priority::Medium,
                "底部高度48px，文字颜色#999999，字号12px",
            ),
            Case::new(
                name,
                "全局提示组件",
                "交互与反馈原则",
                format!("检查{}中Toast、Message等全局提示组件的样式和行为", name),
                Priority::High,
                "Toast自动消失时间3秒，位置居中顶部，有淡入淡出动画",
            ),
        ],
        SuggestedCategory::ScenarioFlow => vec![
            Case::new(
                name,
                "完整操作流程",
                "简化交互原则",
                format!("检查{}的完整用户操作路径，从进入到完成目标", name),
                Priority::High,
                "流程步骤清晰，每步有明确的操作指引和反馈",
            ),
            Case::new(
                name,
                "多步骤表单",
                "简化交互原则",
                format!("检查{}中多步骤表单的步骤指示器、上一步/下一步按钮", name),
                Priority::High,
                "步骤指示器显示当前步骤，已完成步骤可点击返回，数据自动保存",
            ),
            Case::new(
                name,
                "状态流转",
                "简化交互原则",
                format!("检查{}中数据状态的流转过程（如草稿→待审核→已发布）", name),
                Priority::Medium,
                "状态变化有明确的视觉标识，状态流转符合业务逻辑",
            ),
        ],
        SuggestedCategory::ExceptionHandling => vec![
            Case::new(
                name,
                "输入验证",
                "异常与负向流程验证原则",
                format!("检查{}中表单的输入验证（必填项、格式、长度、特殊字符）", name),
                Priority::High,
                "必填项未填提示\"该字段不能为空\"，格式错误提示具体要求",
            ),
            Case::new(
                name,
                "网络异常处理",
                "异常与负向流程验证原则",
                format!("检查{}在网络异常时的处理（超时、断网、服务器错误）", name),
                Priority::High,
                "网络异常时显示友好的错误提示，提供重试按钮",
            ),
            Case::new(
                name,
                "权限异常处理",
                "异常与负向流程验证原则",
                format!("检查{}在无权限或登录过期时的处理", name),
                Priority::High,
                "无权限时跳转到403页面，登录过期时跳转到登录页",
            ),
            Case::new(
                name,
                "边界条件",
                "异常与负向流程验证原则",
                format!("检查{}在极限数据量、空数据等边界条件下的表现", name),
                Priority::Medium,
                "空数据时显示空状态提示，大数据量时有分页或虚拟滚动",
            ),
        ],
        SuggestedCategory::UpstreamDownstream => vec![
            Case::new(
                name,
                "数据传递",
                "简化交互原则",
                format!("检查{}与其他页面之间的数据传递和回显", name),
                Priority::High,
                "页面间参数正确传递，数据准确回显，无数据丢失",
            ),
            Case::new(
                name,
                "状态同步",
                "数据与文案一致性原则",
                format!("检查{}操作后相关页面/组件的状态更新", name),
                Priority::High,
                "操作后相关数据实时更新，列表页和详情页数据一致",
            ),
            Case::new(
                name,
                "接口调用",
                "异常与负向流程验证原则",
                format!("检查{}的接口调用参数和响应数据处理", name),
                Priority::Medium,
                "请求参数正确，响应数据正确解析，接口错误有友好提示",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_template_has_eight_cases() {
        let cases = template_cases("首页", ReviewMode::Standard, &[]);
        assert_eq!(cases.len(), 8);
        assert!(cases.iter().all(|c| c.module == "首页"));
        assert!(cases.iter().all(|c| c.case_no.is_empty()));
    }

    #[test]
    fn test_standard_priority_ordering() {
        let cases = template_cases("首页", ReviewMode::Standard, &[]);
        let priorities: Vec<_> = cases.iter().map(|c| c.priority).collect();
        assert_eq!(&priorities[..4], &[Priority::High; 4]);
        assert_eq!(&priorities[4..7], &[Priority::Medium; 3]);
        assert_eq!(priorities[7], Priority::Low);
    }

    #[test]
    fn test_competitive_template_has_ten_cases() {
        let cases = template_cases("首页", ReviewMode::Competitive, &[]);
        assert_eq!(cases.len(), 10);
        assert_eq!(cases[0].principle, "异常处理完备性");
        assert_eq!(cases[9].principle, "操作高效性");
    }

    #[test]
    fn test_category_blocks_appended_in_fixed_order() {
        let categories = [
            SuggestedCategory::UpstreamDownstream,
            SuggestedCategory::GlobalChrome,
        ];
        let cases = template_cases("首页", ReviewMode::Standard, &categories);
        // 8 base + 3 global chrome + 3 upstream/downstream, chrome first
        assert_eq!(cases.len(), 14);
        assert_eq!(cases[8].checkpoint, "页面头部");
        assert_eq!(cases[11].checkpoint, "数据传递");
    }

    #[test]
    fn test_exception_category_adds_four_cases() {
        let cases = template_cases(
            "首页",
            ReviewMode::Standard,
            &[SuggestedCategory::ExceptionHandling],
        );
        assert_eq!(cases.len(), 12);
    }

    #[test]
    fn test_competitive_mode_ignores_categories() {
        let cases = template_cases(
            "首页",
            ReviewMode::Competitive,
            &[SuggestedCategory::GlobalChrome, SuggestedCategory::ScenarioFlow],
        );
        assert_eq!(cases.len(), 10);
    }

    #[test]
    fn test_templates_are_deterministic() {
        let a = template_cases("首页", ReviewMode::Standard, &[]);
        let b = template_cases("首页", ReviewMode::Standard, &[]);
        assert_eq!(a, b);
    }
}

//! The classification manual
//!
//! Single source of the taxonomy text. The AI prompt embeds it verbatim and
//! the rule fallback's labels are checked against it in tests, so the two
//! paths can never drift apart.

/// The five-label UI-review problem taxonomy with its subsections
pub const TAXONOMY_MANUAL: &str = r#"# UI走查问题分类定义手册

## 1. 功能完备性
### 1.1 功能实现完整性
- 功能缺失或不完整
- 功能无法正常使用
- 功能实现与需求不符

### 1.2 业务逻辑正确性
- 业务流程错误
- 数据处理逻辑错误
- 权限控制问题

## 2. 信息清晰性
### 2.1 信息展示清晰
- 信息显示不清晰
- 信息缺失或不完整
- 信息层级混乱

### 2.2 功能入口易见
- 功能入口隐蔽
- 导航不清晰
- 操作路径不明确

## 3. 任务高效性
### 3.1 任务步骤合理
- 操作步骤冗余
- 任务流程复杂
- 缺少快捷操作

### 3.2 操作效率优化
- 响应速度慢
- 加载时间长
- 批量操作支持不足

## 4. 系统可靠性
### 4.1 错误处理完善
- 错误提示不清晰
- 异常处理不当
- 系统崩溃或卡死

### 4.2 系统运行稳定
- 功能不稳定
- 数据丢失
- 兼容性问题

## 5. 一致性
### 5.1 视觉一致性
- 界面风格不统一
- 颜色使用不一致
- 字体样式混乱

### 5.2 信息传达一致
- 术语使用不统一
- 信息表达不一致
- 交互方式不统一"#;

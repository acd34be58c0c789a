//! Module - a page/feature unit recognized from a requirement document

use sha2::{Digest, Sha256};

/// The type of page a module represents
///
/// Inferred from the module name by keyword matching; the catch-all is
/// [`ModuleType::Page`]. Display labels follow the vocabulary of the exported
/// checklist (the reviewed products are Chinese-language consoles).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleType {
    /// List/management page (列表页)
    ListPage,

    /// Detail/read-only page (详情页)
    DetailPage,

    /// Creation form page (创建页)
    CreatePage,

    /// Edit form page (编辑页)
    EditPage,

    /// Modal or dialog with independent function (弹窗)
    Modal,

    /// Landing/home page (首页)
    HomePage,

    /// Login or registration page (登录页)
    LoginPage,

    /// Generic page - the default when no keyword matches (页面)
    Page,

    /// User-added module not found in any document (自定义)
    Custom,
}

impl ModuleType {
    /// Display label used in prompts, descriptions and the export boundary
    pub fn label(&self) -> &'static str {
        match self {
            ModuleType::ListPage => "列表页",
            ModuleType::DetailPage => "详情页",
            ModuleType::CreatePage => "创建页",
            ModuleType::EditPage => "编辑页",
            ModuleType::Modal => "弹窗",
            ModuleType::HomePage => "首页",
            ModuleType::LoginPage => "登录页",
            ModuleType::Page => "页面",
            ModuleType::Custom => "自定义",
        }
    }

    /// Parse a label back into a type (for AI-supplied type strings)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "列表页" => Some(ModuleType::ListPage),
            "详情页" => Some(ModuleType::DetailPage),
            "创建页" => Some(ModuleType::CreatePage),
            "编辑页" => Some(ModuleType::EditPage),
            "弹窗" => Some(ModuleType::Modal),
            "首页" => Some(ModuleType::HomePage),
            "登录页" => Some(ModuleType::LoginPage),
            "页面" => Some(ModuleType::Page),
            "自定义" => Some(ModuleType::Custom),
            _ => None,
        }
    }
}

impl Default for ModuleType {
    fn default() -> Self {
        ModuleType::Page
    }
}

/// Derive the stable short identifier for a module name
///
/// The id is a pure function of the name (same name, same id) so that
/// dedup-by-name and selection sets survive re-recognition. Collisions across
/// distinct names are accepted as negligible.
///
/// # Examples
///
/// ```
/// use uiwalk_domain::module_id;
///
/// assert_eq!(module_id("任务列表"), module_id("任务列表"));
/// assert_eq!(module_id("任务列表").len(), 12);
/// ```
pub fn module_id(name: &str) -> String {
    let digest = Sha256::digest(name.as_bytes());
    let mut id = String::with_capacity(12);
    for byte in digest.iter().take(6) {
        id.push_str(&format!("{:02x}", byte));
    }
    id
}

/// A candidate page/feature unit of the reviewed product
///
/// Created by recognition (rules or AI) or by explicit user addition; the
/// only mutation afterwards is back-filling a missing description during
/// validation. A document re-recognition replaces the whole set.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    /// Stable short identifier derived from the name
    pub id: String,

    /// Module name (non-empty)
    pub name: String,

    /// Module description; may be empty until validation back-fills it
    pub description: String,

    /// Inferred page type
    pub module_type: ModuleType,

    /// Heading depth the module was found at (1-6)
    pub level: u8,

    /// Whether the module is selected for case generation
    pub selected: bool,

    /// True for user-added modules not found in any document
    pub is_custom: bool,
}

impl Module {
    /// Create a recognized module; id is derived, selection defaults to true
    pub fn new(name: impl Into<String>, module_type: ModuleType, level: u8) -> Self {
        let name = name.into();
        Self {
            id: module_id(&name),
            name,
            description: String::new(),
            module_type,
            level,
            selected: true,
            is_custom: false,
        }
    }

    /// Create a user-defined module
    pub fn custom(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: module_id(&name),
            name,
            description: "用户自定义模块".to_string(),
            module_type: ModuleType::Custom,
            level: 2,
            selected: true,
            is_custom: true,
        }
    }

    /// Attach a description, replacing any existing one
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_id_is_deterministic() {
        assert_eq!(module_id("首页"), module_id("首页"));
        assert_ne!(module_id("首页"), module_id("登录页"));
    }

    #[test]
    fn test_module_id_length() {
        assert_eq!(module_id("x").len(), 12);
        assert!(module_id("x").chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_new_module_defaults() {
        let m = Module::new("任务列表", ModuleType::ListPage, 2);
        assert_eq!(m.id, module_id("任务列表"));
        assert!(m.selected);
        assert!(!m.is_custom);
        assert!(m.description.is_empty());
    }

    #[test]
    fn test_custom_module() {
        let m = Module::custom("结算面板");
        assert!(m.is_custom);
        assert_eq!(m.module_type, ModuleType::Custom);
        assert_eq!(m.description, "用户自定义模块");
    }

    #[test]
    fn test_type_label_round_trip() {
        for t in [
            ModuleType::ListPage,
            ModuleType::DetailPage,
            ModuleType::CreatePage,
            ModuleType::EditPage,
            ModuleType::Modal,
            ModuleType::HomePage,
            ModuleType::LoginPage,
            ModuleType::Page,
            ModuleType::Custom,
        ] {
            assert_eq!(ModuleType::parse(t.label()), Some(t));
        }
        assert_eq!(ModuleType::parse("不存在的类型"), None);
    }
}

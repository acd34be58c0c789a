//! Module list validation logic

use crate::ValidatorConfig;
use std::collections::HashSet;
use tracing::{info, warn};
use uiwalk_domain::Module;

/// Validates and normalizes module candidate lists
pub struct ModuleValidator {
    config: ValidatorConfig,
}

impl ModuleValidator {
    /// Create a validator with the given configuration
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Create a validator with the default configuration
    pub fn default_config() -> Self {
        Self::new(ValidatorConfig::default())
    }

    /// Clean a raw candidate list
    ///
    /// Returns an empty list (with a logged warning) for empty input; never
    /// fails. Dedup key is the exact module name, case-sensitive; the first
    /// occurrence wins. More than `max_modules` unique names are truncated
    /// in order. Modules without a description get `"{type} - {name}"`.
    pub fn validate(&self, modules: Vec<Module>) -> Vec<Module> {
        if modules.is_empty() {
            warn!("No modules to validate");
            return Vec::new();
        }

        let mut seen_names: HashSet<String> = HashSet::new();
        let mut unique: Vec<Module> = Vec::new();

        for module in modules {
            if seen_names.insert(module.name.clone()) {
                unique.push(module);
            } else {
                warn!("Dropping duplicate module: {}", module.name);
            }
        }

        if unique.len() > self.config.max_modules {
            warn!(
                "{} unique modules exceed the cap of {}; truncating",
                unique.len(),
                self.config.max_modules
            );
            unique.truncate(self.config.max_modules);
        }

        for module in &mut unique {
            if module.description.is_empty() {
                module.description =
                    format!("{} - {}", module.module_type.label(), module.name);
            }
        }

        info!("Validation kept {} modules", unique.len());
        unique
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uiwalk_domain::ModuleType;

    fn validator() -> ModuleValidator {
        ModuleValidator::default_config()
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(validator().validate(Vec::new()).is_empty());
    }

    #[test]
    fn test_dedup_first_occurrence_wins() {
        let first = Module::new("Checkout", ModuleType::Page, 2)
            .with_description("结算流程页");
        let second = Module::new("Checkout", ModuleType::Page, 3);

        let result = validator().validate(vec![first, second]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].description, "结算流程页");
        assert_eq!(result[0].level, 2);
    }

    #[test]
    fn test_cardinality_cap() {
        let modules: Vec<_> = (0..80)
            .map(|i| Module::new(format!("模块{}", i), ModuleType::Page, 2))
            .collect();

        let result = validator().validate(modules);
        assert_eq!(result.len(), 50);
        assert_eq!(result[0].name, "模块0");
        assert_eq!(result[49].name, "模块49");
    }

    #[test]
    fn test_description_back_fill() {
        let module = Module::new("任务列表", ModuleType::ListPage, 2);
        let result = validator().validate(vec![module]);
        assert_eq!(result[0].description, "列表页 - 任务列表");
    }

    #[test]
    fn test_existing_description_is_kept() {
        let module = Module::new("任务列表", ModuleType::ListPage, 2)
            .with_description("展示训练任务列表");
        let result = validator().validate(vec![module]);
        assert_eq!(result[0].description, "展示训练任务列表");
    }

    #[test]
    fn test_idempotence() {
        let modules = vec![
            Module::new("首页", ModuleType::HomePage, 2),
            Module::new("首页", ModuleType::HomePage, 2),
            Module::new("新建任务", ModuleType::CreatePage, 2),
        ];

        let once = validator().validate(modules);
        let twice = validator().validate(once.clone());
        assert_eq!(once, twice);
    }
}

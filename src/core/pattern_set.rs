use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{FilterError, FilterResult};

/// 模式库（literal + regex 两类模式的统一载体）
/// 设计说明：
/// - literals: 字面量模式 → 分类（精确子串匹配）
/// - regexes: 正则模式 → 分类（正则语法匹配）
/// - 键唯一（JSON映射语义，重复键后写覆盖先写）
/// - 构建Matcher后不可变；模式变更需构建新Matcher，不支持原地修改
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatternSet {
    /// 字面量模式映射：模式文本 → 分类
    #[serde(default)]
    pub literals: FxHashMap<String, String>,
    /// 正则模式映射：模式源文本 → 分类
    #[serde(default)]
    pub regexes: FxHashMap<String, String>,
}

impl PatternSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 模式总数（literal + regex）
    #[inline]
    pub fn len(&self) -> usize {
        self.literals.len() + self.regexes.len()
    }

    /// 是否为空模式库（空模式库的检测结果恒为未检出）
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty() && self.regexes.is_empty()
    }

    /// 校验模式库合法性
    /// 规则：
    /// 1. 模式文本非空（空literal/空regex在任意输入上平凡命中，视为配置错误）
    /// 2. 分类文本非空（空分类无法在检测结果中定位来源）
    /// 正则语法校验延迟到Matcher构建阶段（编译即校验）
    pub fn validate(&self) -> FilterResult<()> {
        for (pattern, category) in self.literals.iter().chain(self.regexes.iter()) {
            if pattern.is_empty() {
                return Err(FilterError::InvalidPattern {
                    pattern: pattern.clone(),
                    category: category.clone(),
                    reason: "empty pattern".to_string(),
                });
            }
            if category.is_empty() {
                return Err(FilterError::InvalidPattern {
                    pattern: pattern.clone(),
                    category: category.clone(),
                    reason: "empty category".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_pattern() {
        let mut set = PatternSet::new();
        set.literals.insert(String::new(), "spam".to_string());

        let err = set.validate().unwrap_err();
        assert!(matches!(err, FilterError::InvalidPattern { reason, .. } if reason == "empty pattern"));
    }

    #[test]
    fn test_validate_rejects_empty_category() {
        let mut set = PatternSet::new();
        set.regexes.insert("f[o0]o".to_string(), String::new());

        let err = set.validate().unwrap_err();
        assert!(matches!(err, FilterError::InvalidPattern { reason, .. } if reason == "empty category"));
    }

    #[test]
    fn test_validate_accepts_well_formed_set() {
        let mut set = PatternSet::new();
        set.literals.insert("시발".to_string(), "욕설".to_string());
        set.regexes.insert("f[o0]o".to_string(), "spam".to_string());

        assert!(set.validate().is_ok());
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
    }
}

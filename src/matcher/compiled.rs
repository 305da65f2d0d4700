//! Compiled matcher core
//! 编译后匹配器核心
//! 核心职责：
//! 1. 从PatternSet一次性构建字面量自动机 + 正则扫描器（构建原子性）
//! 2. 双阶段检测：字面量单次遍历 + 正则单次扫描，分类集合取并集
//! 3. 构建后不可变：match_text仅只读访问，可跨线程并发调用

use rustc_hash::FxHashSet;

use crate::core::{MatchResult, PatternSet};
use crate::error::FilterResult;
use crate::matcher::{LiteralScanner, RegexScanner};

/// 编译后的匹配器（不可变值对象）
/// 并发模型：无内部可变性，同一实例可被多线程并发查询；
/// 模式库变更后须构建新实例并原子替换引用（如Arc交换），不支持原地重建
#[derive(Debug, Clone)]
pub struct CompiledMatcher {
    /// 字面量多模式扫描器
    literal: LiteralScanner,
    /// 正则联合扫描器
    regex: RegexScanner,
}

impl CompiledMatcher {
    /// 从模式库构建匹配器
    /// 构建原子性：校验或任意一条模式编译失败则整体失败，不返回部分可用的匹配器
    pub fn build(set: &PatternSet) -> FilterResult<Self> {
        set.validate()?;

        let literal = LiteralScanner::build(&set.literals)?;
        let regex = RegexScanner::build(&set.regexes)?;

        log::debug!(
            "Matcher compiled | Literals: {} | Regexes: {} | Regex mode: {}",
            literal.pattern_count(),
            regex.pattern_count(),
            regex.mode()
        );

        Ok(Self { literal, regex })
    }

    /// 空匹配器（检测结果恒为未检出）
    pub fn empty() -> Self {
        Self {
            literal: LiteralScanner::empty(),
            regex: RegexScanner::Empty,
        }
    }

    /// 登记的模式总数
    pub fn pattern_count(&self) -> usize {
        self.literal.pattern_count() + self.regex.pattern_count()
    }

    /// 是否为空匹配器
    pub fn is_empty(&self) -> bool {
        self.pattern_count() == 0
    }

    /// 执行检测（核心查询接口）
    /// 流程：
    /// 1. 空输入短路返回未检出（防御a*等可匹配空串的正则）
    /// 2. 字面量阶段：自动机单次遍历，重叠命中全部报告
    /// 3. 正则阶段：合并式单次扫描（或回退逐条扫描）
    /// 4. 并集聚合；detected == 分类集合非空
    /// 幂等且无状态变更，可并发调用
    pub fn match_text(&self, text: &str) -> MatchResult {
        if text.is_empty() {
            return MatchResult::not_detected();
        }

        let mut categories = FxHashSet::default();
        self.literal.scan(text, &mut categories);
        self.regex.scan(text, &mut categories);

        MatchResult::from_categories(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::load_from_str;

    fn build_matcher(json: &str) -> CompiledMatcher {
        CompiledMatcher::build(&load_from_str(json).unwrap()).unwrap()
    }

    #[test]
    fn test_literal_pattern_matches_itself() {
        let matcher = build_matcher(r#"{ "literals": { "badword": "abuse" } }"#);
        let result = matcher.match_text("badword");
        assert!(result.detected);
        assert!(result.has_category("abuse"));
    }

    #[test]
    fn test_clean_text_not_detected() {
        let matcher = build_matcher(
            r#"{ "literals": { "spamword": "spam" }, "regex": { "f[o0]o": "spam" } }"#,
        );
        let result = matcher.match_text("perfectly clean sentence");
        assert!(!result.detected);
        assert!(result.categories.is_empty());
    }

    #[test]
    fn test_overlap_property() {
        let matcher = build_matcher(r#"{ "literals": { "ab": "X", "b": "Y" } }"#);
        let result = matcher.match_text("ab");
        assert!(result.has_category("X"));
        assert!(result.has_category("Y"));
    }

    #[test]
    fn test_literal_and_regex_union() {
        // 持久化场景：{"literals": {"시발":"욕설"}, "regex": {"f[o0]o":"spam"}}
        let matcher =
            build_matcher(r#"{ "literals": { "시발": "욕설" }, "regex": { "f[o0]o": "spam" } }"#);
        let result = matcher.match_text("오늘 시발 진짜 f0o 다");
        assert!(result.detected);
        assert!(result.has_category("욕설"));
        assert!(result.has_category("spam"));
        assert_eq!(result.categories.len(), 2);
    }

    #[test]
    fn test_empty_input_never_detected() {
        let matcher = build_matcher(
            r#"{ "literals": { "a": "x" }, "regex": { "a*": "y", "b?": "z" } }"#,
        );
        let result = matcher.match_text("");
        assert!(!result.detected);
        assert!(result.categories.is_empty());
    }

    #[test]
    fn test_match_is_idempotent() {
        let matcher = build_matcher(
            r#"{ "literals": { "foo": "A" }, "regex": { "ba+r": "B" } }"#,
        );
        let first = matcher.match_text("foo baar foo");
        let second = matcher.match_text("foo baar foo");
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_failure_is_atomic() {
        // 一条非法正则导致整体构建失败，不产生可部分匹配的实例
        let set = load_from_str(
            r#"{ "literals": { "ok": "x" }, "regex": { "valid": "y", "[bad": "z" } }"#,
        )
        .unwrap();
        assert!(CompiledMatcher::build(&set).is_err());
    }

    #[test]
    fn test_empty_matcher() {
        let matcher = CompiledMatcher::empty();
        assert!(matcher.is_empty());
        assert!(!matcher.match_text("anything").detected);
    }

    #[test]
    fn test_shared_category_across_pattern_kinds() {
        // 多条模式共享同一分类，结果集合去重
        let matcher = build_matcher(
            r#"{ "literals": { "spam1": "spam", "spam2": "spam" }, "regex": { "sp[a@]m": "spam" } }"#,
        );
        let result = matcher.match_text("spam1 sp@m spam2");
        assert!(result.detected);
        assert_eq!(result.categories.len(), 1);
        assert!(result.has_category("spam"));
    }

    #[test]
    fn test_concurrent_queries_share_one_matcher() {
        use std::sync::Arc;

        let matcher = Arc::new(build_matcher(
            r#"{ "literals": { "foo": "A" }, "regex": { "ba+r": "B" } }"#,
        ));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let matcher = Arc::clone(&matcher);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        let result = matcher.match_text("foo baar");
                        assert!(result.has_category("A"));
                        assert!(result.has_category("B"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }
}

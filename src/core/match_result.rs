use rustc_hash::FxHashSet;

/// 单次检测结果
/// 不变量：detected == !categories.is_empty()
/// 生命周期：每次检测调用产生一个新实例，不持久化
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    /// 是否检出任意已登记模式
    pub detected: bool,
    /// 命中的分类集合（去重，无序）
    pub categories: FxHashSet<String>,
}

impl MatchResult {
    /// 从分类集合构造检测结果（detected由集合是否为空推导，保证不变量）
    pub fn from_categories(categories: FxHashSet<String>) -> Self {
        Self {
            detected: !categories.is_empty(),
            categories,
        }
    }

    /// 未检出结果（空分类集合）
    #[inline]
    pub fn not_detected() -> Self {
        Self::default()
    }

    /// 判断指定分类是否命中
    #[inline]
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains(category)
    }
}

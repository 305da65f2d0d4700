//! 全局检测器单例管理
//! 核心职责：
//! 1. 维护进程生命周期内唯一的TextDetector实例
//! 2. 提供幂等初始化接口（文件路径/内存模式库两种来源）
//! 3. 统一错误处理和状态管理

use std::path::Path;

use once_cell::sync::OnceCell;

use crate::core::{MatchResult, PatternSet};
use crate::detector::TextDetector;
use crate::error::{FilterError, FilterResult};

/// 全局检测器实例 - 线程安全单例
/// OnceCell确保实例仅初始化一次，进程内唯一
static GLOBAL_DETECTOR: OnceCell<TextDetector> = OnceCell::new();

/// 初始化全局检测器（从模式库文件）
/// 特性：
/// 1. 幂等设计：已初始化则直接返回Ok(())
/// 2. 线程安全：基于OnceCell保证仅初始化一次
/// 参数：path - 模式库文件路径
pub fn init_global_detector<P: AsRef<Path>>(path: P) -> FilterResult<()> {
    if GLOBAL_DETECTOR.get().is_some() {
        log::debug!("Global detector already initialized, skip reinitialization");
        return Ok(());
    }

    let detector = TextDetector::from_store(path).map_err(|e| {
        FilterError::DetectorInitError(format!("Failed to create TextDetector instance: {e}"))
    })?;

    GLOBAL_DETECTOR.set(detector).map_err(|_| {
        FilterError::DetectorInitError(
            "Global detector initialization failed: instance already initialized by another thread"
                .to_string(),
        )
    })?;

    log::info!("Global TextDetector initialized successfully");
    Ok(())
}

/// 手动注入内存模式库，初始化全局检测器
/// 适用场景：预加载模式库后手动初始化（无文件绑定，不支持reload）
pub fn init_global_detector_with_patterns(set: &PatternSet) -> FilterResult<()> {
    if GLOBAL_DETECTOR.get().is_some() {
        log::debug!("Global detector already initialized, skip reinitialization with custom patterns");
        return Ok(());
    }

    let detector = TextDetector::with_patterns(set).map_err(|e| {
        FilterError::DetectorInitError(format!(
            "Failed to create TextDetector with custom patterns: {e}"
        ))
    })?;

    GLOBAL_DETECTOR.set(detector).map_err(|_| {
        FilterError::DetectorInitError(
            "Global detector initialization failed: instance already initialized by another thread"
                .to_string(),
        )
    })?;

    log::info!("Global TextDetector initialized with custom pattern set");
    Ok(())
}

/// 获取全局检测器实例
/// 注意：调用前需确保已初始化，否则返回错误
pub fn global_detector() -> FilterResult<&'static TextDetector> {
    GLOBAL_DETECTOR.get().ok_or_else(|| {
        FilterError::DetectorNotInitialized(
            "Global TextDetector not initialized! Please call init_global_detector first"
                .to_string(),
        )
    })
}

/// 全局检测便捷接口
pub fn global_detect(text: &str) -> FilterResult<MatchResult> {
    Ok(global_detector()?.detect(text))
}

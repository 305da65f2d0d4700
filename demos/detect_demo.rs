//! Pattern detection demonstration for textfilter-engine
//! textfilter-engine 模式检测演示程序
//! 功能说明：
//! 1. 演示模式库加载与匹配器编译流程
//! 2. 展示双策略检测能力（字面量自动机 + 正则联合扫描）
//! 3. 包含性能耗时统计与检测结果输出
//!
//! 运行命令：
//! cargo run --example detect_demo

use env_logger::{Builder, Env, Target};
use std::error::Error;
use std::time::Instant;
use textfilter_engine::{load_from_str, CompiledMatcher};

/// 主函数 - 模式检测演示入口
/// 执行流程：
/// 1. 初始化结构化日志系统
/// 2. 加载演示模式库并编译匹配器
/// 3. 对样例文本执行检测并输出结果（含耗时统计）
fn main() -> Result<(), Box<dyn Error>> {
    // ========== 1. 日志系统初始化 ==========
    // 配置日志级别为DEBUG，输出到标准输出
    Builder::from_env(Env::default().default_filter_or("debug"))
        .target(Target::Stdout)
        .init();

    // ========== 2. 模式库加载与匹配器编译 ==========
    // 演示模式库（持久化格式与管理端生成的patterns.json一致）
    let store = r#"{
        "literals": { "시발": "욕설", "badword": "abuse" },
        "regex":    { "f[o0]o": "spam", "ba+r": "ham" }
    }"#;
    let set = load_from_str(store)?;
    let matcher = CompiledMatcher::build(&set)?;
    println!("Matcher compiled with {} patterns", matcher.pattern_count());

    // ========== 3. 执行检测（含耗时统计） ==========
    let samples = [
        "오늘 시발 진짜 f0o 다",
        "baar and badword in one line",
        "perfectly clean sentence",
        "",
    ];

    for text in samples {
        let start_instant = Instant::now();
        let result = matcher.match_text(text);
        let elapsed = start_instant.elapsed();

        println!(
            "Text: {:?} | Detected: {} | Categories: {:?} | Elapsed: {:?}",
            text, result.detected, result.categories, elapsed
        );
    }

    Ok(())
}

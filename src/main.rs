// ==========================================
// 防火隔离带规划系统 - 命令行入口
// ==========================================
// 用法: firebreak-planner <request.json> <catalogue.(csv|xlsx|xls|json)>
// 输出: AnalysisResult（JSON，stdout）
// ==========================================

use anyhow::{bail, Context, Result};
use firebreak_planner::config::ConfigManager;
use firebreak_planner::domain::AnalysisRequest;
use firebreak_planner::{logging, AnalysisApi};
use std::path::PathBuf;

fn main() -> Result<()> {
    // 初始化日志系统
    logging::init();

    let mut args = std::env::args().skip(1);
    let (request_path, catalogue_path) = match (args.next(), args.next()) {
        (Some(request), Some(catalogue)) => (PathBuf::from(request), PathBuf::from(catalogue)),
        _ => bail!("用法: firebreak-planner <request.json> <catalogue.(csv|xlsx|xls|json)>"),
    };

    tracing::info!("{} v{}", firebreak_planner::APP_NAME, firebreak_planner::VERSION);

    // 加载引擎配置
    let api = AnalysisApi::from_config(&ConfigManager::from_env_or_default())
        .context("加载引擎配置失败")?;

    // 读取请求与装备目录
    let raw = std::fs::read_to_string(&request_path)
        .with_context(|| format!("无法读取请求文件: {}", request_path.display()))?;
    let request: AnalysisRequest = serde_json::from_str(&raw)
        .with_context(|| format!("请求文件格式错误: {}", request_path.display()))?;
    let equipment = AnalysisApi::load_catalogue(&catalogue_path)
        .with_context(|| format!("无法导入装备目录: {}", catalogue_path.display()))?;

    // 执行分析
    let result = api.run_analysis(request, &equipment)?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

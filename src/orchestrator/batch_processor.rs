//! 批量草稿处理器 - 编排层
//!
//! ## 职责
//!
//! 相当于页面外壳：显示标题和说明，为每份草稿挂载一张独立的表单并驱动它。
//!
//! - **资源所有者**：唯一持有 HTTP 客户端的模块
//! - **逐个提交**：每张表单同一时刻只有一次提交
//! - **全局统计**：汇总所有草稿的提交结果

use crate::config::Config;
use crate::infrastructure::HttpTransport;
use crate::models::{load_all_drafts, PlayerDraft};
use crate::orchestrator::draft_processor;
use crate::services::OutcomeWriter;
use crate::utils::logging::{
    init_log_file, log_drafts_loaded, log_startup, print_final_stats,
};
use crate::workflow::PlayerForm;
use anyhow::{Context, Result};
use tracing::{error, info, warn};

/// 页面标题
pub const PAGE_TITLE: &str = "Soccer Player Profile";

/// 页面说明
pub const PAGE_DESCRIPTION: &str =
    "A clean, minimal, mobile-friendly form to collect player information and media.";

/// 处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStats {
    pub success: usize,
    pub failed: usize,
    pub total: usize,
}

/// 应用主结构
pub struct App {
    config: Config,
    transport: HttpTransport,
    writer: OutcomeWriter,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        init_log_file(&config.output_log_file)?;

        log_startup(PAGE_TITLE, PAGE_DESCRIPTION, &config.players_endpoint());

        let transport = HttpTransport::new(&config).context("无法创建 HTTP 客户端")?;
        let writer = OutcomeWriter::with_path(config.output_log_file.clone());

        Ok(Self {
            config,
            transport,
            writer,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<ProcessingStats> {
        info!("\n📁 正在扫描待提交的球员草稿...");
        let drafts = load_all_drafts(&self.config.drafts_folder).await?;

        if drafts.is_empty() {
            warn!("⚠️ 没有找到待处理的TOML文件，程序结束");
            return Ok(ProcessingStats::default());
        }

        log_drafts_loaded(drafts.len());

        let stats = self.process_all_drafts(&drafts).await;

        print_final_stats(stats.success, stats.failed, stats.total, &self.config.output_log_file);

        Ok(stats)
    }

    /// 逐个提交草稿，每份草稿使用一张新表单
    async fn process_all_drafts(&self, drafts: &[PlayerDraft]) -> ProcessingStats {
        let mut stats = ProcessingStats {
            total: drafts.len(),
            ..Default::default()
        };

        for (idx, draft) in drafts.iter().enumerate() {
            let draft_index = idx + 1;
            let mut form = PlayerForm::new(self.transport.clone(), self.config.players_endpoint());

            match draft_processor::process_draft(
                &mut form,
                draft,
                draft_index,
                &self.writer,
                self.config.verbose_logging,
            )
            .await
            {
                Ok(true) => stats.success += 1,
                Ok(false) => stats.failed += 1,
                Err(e) => {
                    error!("[草稿 {}] ❌ 处理过程中发生错误: {:#}", draft_index, e);
                    stats.failed += 1;
                }
            }
        }

        stats
    }
}

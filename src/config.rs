/// 球员资料提交程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 后端地址（可为空，为空时使用 app_origin）
    pub backend_url: String,
    /// 页面自身的来源地址
    pub app_origin: String,
    /// 球员草稿 TOML 存放目录
    pub drafts_folder: String,
    /// 输出日志文件
    pub output_log_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 请求超时秒数，None 表示不设超时
    pub request_timeout_secs: Option<u64>,
}

/// 固定的接口路径
pub const PLAYERS_PATH: &str = "/api/players";

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            app_origin: "http://localhost:8000".to_string(),
            drafts_folder: "player_drafts".to_string(),
            output_log_file: "submissions.txt".to_string(),
            verbose_logging: false,
            request_timeout_secs: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            backend_url: std::env::var("BACKEND_URL").unwrap_or(default.backend_url),
            app_origin: std::env::var("APP_ORIGIN").unwrap_or(default.app_origin),
            drafts_folder: std::env::var("DRAFTS_FOLDER").unwrap_or(default.drafts_folder),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).or(default.request_timeout_secs),
        }
    }

    /// 拼出完整的提交地址
    pub fn players_endpoint(&self) -> String {
        let base = if self.backend_url.trim().is_empty() {
            &self.app_origin
        } else {
            &self.backend_url
        };
        format!("{}{}", base.trim().trim_end_matches('/'), PLAYERS_PATH)
    }
}

//! # 连接配置
//!
//! 机器人地址与 ID，可从 TOML 文件读取：
//!
//! ```toml
//! address = "192.168.10.18"
//! id = 0
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Rovio 出厂默认 IP
pub const DEFAULT_ADDRESS: &str = "192.168.10.18";

/// 连接配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotConfig {
    /// 机器人网络地址
    pub address: String,

    /// 机器人 ID（传给原生 setup）
    pub id: i32,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            id: 0,
        }
    }
}

impl RobotConfig {
    pub fn new(address: impl Into<String>, id: i32) -> Self {
        Self {
            address: address.into(),
            id,
        }
    }

    /// 从 TOML 字符串解析，缺失字段使用默认值
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// 从文件加载配置
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 保存配置到文件
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}

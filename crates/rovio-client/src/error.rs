//! 客户端层错误类型定义

use thiserror::Error;

/// 配置文件错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 读写配置文件失败
    #[error("Config IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML 解析失败
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML 序列化失败
    #[error("Config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 客户端层错误类型
///
/// 只有构造阶段会返回错误；连接建立后的指令通过 `bool` 报告成败。
#[derive(Error, Debug)]
pub enum RobotError {
    /// 地址包含 NUL 字节，无法传给原生层
    #[error("Invalid robot address {address:?}: contains an interior NUL byte")]
    InvalidAddress { address: String },

    /// 原生 `ri_setup` 失败
    #[error("Robot setup failed for {address} (id={id}, status={status})")]
    SetupFailed {
        address: String,
        id: i32,
        status: i32,
    },

    /// 配置错误
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// 客户端层 Result 别名
pub type Result<T> = std::result::Result<T, RobotError>;

#[cfg(test)]
mod tests {
    use super::*;

    /// 测试 RobotError 的 Display 实现
    #[test]
    fn test_robot_error_display() {
        let err = RobotError::SetupFailed {
            address: "192.168.10.18".to_string(),
            id: 2,
            status: -1,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("setup failed"), "message: {}", msg);
        assert!(msg.contains("192.168.10.18") && msg.contains("id=2"));

        let err = RobotError::InvalidAddress {
            address: "bad\0addr".to_string(),
        };
        assert!(format!("{}", err).contains("NUL"));
    }

    /// 测试 From<ConfigError> 转换
    #[test]
    fn test_from_config_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: RobotError = ConfigError::from(io).into();
        match err {
            RobotError::Config(ConfigError::Io(e)) => {
                assert_eq!(e.kind(), std::io::ErrorKind::NotFound)
            },
            _ => panic!("Expected Config(Io) variant"),
        }
    }
}

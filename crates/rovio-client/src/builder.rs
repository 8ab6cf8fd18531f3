//! Builder 模式实现
//!
//! 提供链式构造 [`Robot`] 实例的便捷方式。

use crate::config::RobotConfig;
use crate::error::Result;
use crate::robot::Robot;
use rovio_ffi::RobotBackend;
use std::path::Path;

/// Robot Builder（链式构造）
///
/// # Example
///
/// ```
/// use rovio_client::RobotBuilder;
/// use rovio_ffi::MockBackend;
///
/// let robot = RobotBuilder::new()
///     .address("10.0.0.42")
///     .id(2)
///     .connect_with(MockBackend::new())
///     .unwrap();
/// assert_eq!(robot.id(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RobotBuilder {
    config: RobotConfig,
}

impl RobotBuilder {
    /// 创建新的 Builder（默认出厂地址，ID 0）
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 TOML 配置文件创建
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            config: RobotConfig::load(path)?,
        })
    }

    /// 使用完整配置
    pub fn config(mut self, config: RobotConfig) -> Self {
        self.config = config;
        self
    }

    /// 设置机器人地址
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.config.address = address.into();
        self
    }

    /// 设置机器人 ID
    pub fn id(mut self, id: i32) -> Self {
        self.config.id = id;
        self
    }

    /// 当前配置
    pub fn current_config(&self) -> &RobotConfig {
        &self.config
    }

    /// 使用指定后端建立连接
    pub fn connect_with<B: RobotBackend>(self, backend: B) -> Result<Robot<B>> {
        Robot::connect(backend, self.config.address, self.config.id)
    }

    /// 使用 librobot_if 建立连接
    #[cfg(feature = "native")]
    pub fn connect(self) -> Result<Robot<rovio_ffi::NativeBackend>> {
        self.connect_with(rovio_ffi::NativeBackend::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rovio_ffi::{MockBackend, MockCall};
    use std::io::Write;

    #[test]
    fn test_builder_uses_config_values() {
        let backend = MockBackend::new();
        let handle = backend.handle();

        let robot = RobotBuilder::new()
            .config(RobotConfig::new("10.9.8.7", 5))
            .connect_with(backend)
            .unwrap();

        assert_eq!(robot.address(), "10.9.8.7");
        assert_eq!(
            handle.calls()[0],
            MockCall::Setup {
                address: "10.9.8.7".to_string(),
                id: 5
            }
        );
    }

    #[test]
    fn test_builder_overrides() {
        let builder = RobotBuilder::new().address("rovio.local").id(9);
        assert_eq!(builder.current_config(), &RobotConfig::new("rovio.local", 9));
    }

    #[test]
    fn test_builder_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "address = \"172.16.0.4\"\nid = 11").unwrap();

        let builder = RobotBuilder::from_file(file.path()).unwrap();
        assert_eq!(builder.current_config(), &RobotConfig::new("172.16.0.4", 11));
    }
}

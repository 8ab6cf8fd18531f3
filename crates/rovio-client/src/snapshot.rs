//! 传感器快照
//!
//! 把全部读取类接口的结果汇总为一个纯数据结构，便于打印、记录或序列化。

use rovio_protocol::{BatteryLevel, HeadPosition, NavSignal, WheelDirection};

/// 单个轮子的读数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WheelReading {
    pub direction: WheelDirection,
    /// 本周期编码器读数
    pub movement: i32,
    /// 编码器累计值
    pub total: i32,
}

/// 全部传感器读数
///
/// 由 [`Robot::snapshot`](crate::Robot::snapshot) 生成。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorSnapshot {
    pub battery: BatteryLevel,
    pub wifi_strength_raw: i32,
    pub head_position: HeadPosition,
    pub left_wheel: WheelReading,
    pub right_wheel: WheelReading,
    pub rear_wheel: WheelReading,
    pub x: i32,
    pub y: i32,
    pub theta: f64,
    pub room_id: i32,
    pub signal_strength_raw: i32,
    pub signal_strength: NavSignal,
    /// 红外避障传感器是否检测到障碍物
    pub blocked: bool,
}

impl std::fmt::Display for SensorSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "pos=({}, {}, {:.3}) room={} battery={:?} head={:?} nav={:?}({}) wifi={} \
             wheels[L={}/{} R={}/{} B={}/{}] blocked={}",
            self.x,
            self.y,
            self.theta,
            self.room_id,
            self.battery,
            self.head_position,
            self.signal_strength,
            self.signal_strength_raw,
            self.wifi_strength_raw,
            self.left_wheel.movement,
            self.left_wheel.total,
            self.right_wheel.movement,
            self.right_wheel.total,
            self.rear_wheel.movement,
            self.rear_wheel.total,
            self.blocked,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_uses_fallbacks() {
        let snap = SensorSnapshot::default();
        assert_eq!(snap.battery, BatteryLevel::Off);
        assert_eq!(snap.head_position, HeadPosition::Mid);
        assert_eq!(snap.signal_strength, NavSignal::NoSignal);
        assert_eq!(snap.left_wheel.direction, WheelDirection::Forward);
    }

    #[test]
    fn test_display() {
        let snap = SensorSnapshot {
            x: 12,
            y: -4,
            room_id: 1,
            blocked: true,
            ..Default::default()
        };
        let text = snap.to_string();
        assert!(text.contains("pos=(12, -4, 0.000)"), "{}", text);
        assert!(text.contains("room=1"));
        assert!(text.contains("blocked=true"));
    }
}

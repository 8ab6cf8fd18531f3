//! 指令侧的类型：运动方向、轮子、灯光
//!
//! 这些类型只作为输入传给原生层，因此不需要兜底映射。

use crate::constants::*;
use num_enum::IntoPrimitive;

/// `ri_move` 的运动指令
///
/// 罗盘方向以机器人自身为参考：North = 前进，East = 右平移。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum MoveCommand {
    Stop = RI_STOP,
    Forward = RI_MOVE_FORWARD,
    Backward = RI_MOVE_BACKWARD,
    Left = RI_MOVE_LEFT,
    Right = RI_MOVE_RIGHT,
    /// 持续左转
    TurnLeft = RI_TURN_LEFT,
    /// 持续右转
    TurnRight = RI_TURN_RIGHT,
    ForwardLeft = RI_MOVE_FWD_LEFT,
    ForwardRight = RI_MOVE_FWD_RIGHT,
    BackwardLeft = RI_MOVE_BACK_LEFT,
    BackwardRight = RI_MOVE_BACK_RIGHT,
    HeadUp = RI_HEAD_UP,
    HeadDown = RI_HEAD_DOWN,
    HeadMiddle = RI_HEAD_MIDDLE,
    /// 左转 20°
    TurnLeft20 = RI_TURN_LEFT_20DEG,
    /// 右转 20°
    TurnRight20 = RI_TURN_RIGHT_20DEG,
}

impl MoveCommand {
    /// 原生运动码
    pub fn code(self) -> i32 {
        self.into()
    }

    /// 是否为头部指令（头部指令总是以最慢速度下发）
    pub fn is_head(self) -> bool {
        matches!(
            self,
            MoveCommand::HeadUp | MoveCommand::HeadDown | MoveCommand::HeadMiddle
        )
    }
}

/// 轮子标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum Wheel {
    Left = RI_WHEEL_LEFT,
    Right = RI_WHEEL_RIGHT,
    Rear = RI_WHEEL_REAR,
}

impl Wheel {
    /// 全部轮子，按 左、右、后 的顺序
    pub const ALL: [Wheel; 3] = [Wheel::Left, Wheel::Right, Wheel::Rear];

    pub fn code(self) -> i32 {
        self.into()
    }
}

/// 灯光开关（头灯、红外共用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive)]
#[repr(i32)]
pub enum LightState {
    Off = RI_LIGHT_OFF,
    On = RI_LIGHT_ON,
}

impl LightState {
    pub fn code(self) -> i32 {
        self.into()
    }
}

impl From<bool> for LightState {
    fn from(on: bool) -> Self {
        if on { LightState::On } else { LightState::Off }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_command_codes() {
        assert_eq!(MoveCommand::Stop.code(), RI_STOP);
        assert_eq!(MoveCommand::Forward.code(), RI_MOVE_FORWARD);
        assert_eq!(MoveCommand::BackwardRight.code(), RI_MOVE_BACK_RIGHT);
        assert_eq!(MoveCommand::TurnLeft20.code(), RI_TURN_LEFT_20DEG);
        assert_eq!(MoveCommand::TurnRight20.code(), RI_TURN_RIGHT_20DEG);
    }

    #[test]
    fn test_head_commands() {
        assert!(MoveCommand::HeadUp.is_head());
        assert!(MoveCommand::HeadMiddle.is_head());
        assert!(MoveCommand::HeadDown.is_head());
        assert!(!MoveCommand::Stop.is_head());
        assert!(!MoveCommand::TurnLeft.is_head());
    }

    #[test]
    fn test_wheel_codes() {
        let codes: Vec<i32> = Wheel::ALL.iter().map(|w| w.code()).collect();
        assert_eq!(codes, vec![RI_WHEEL_LEFT, RI_WHEEL_RIGHT, RI_WHEEL_REAR]);
    }

    #[test]
    fn test_light_state_from_bool() {
        assert_eq!(LightState::from(true).code(), RI_LIGHT_ON);
        assert_eq!(LightState::from(false).code(), RI_LIGHT_OFF);
    }
}

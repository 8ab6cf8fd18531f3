//! robot_if 原生常量表
//!
//! 与 `robot_if.h` 中的 `#define` 一一对应，集中定义，避免在代码中散落"魔法数"。
//! 所有值均为 C `int`。

// ============================================================================
// 返回状态
// ============================================================================

/// 原生调用成功
pub const RI_RESP_SUCCESS: i32 = 0;
/// 原生调用失败
pub const RI_RESP_FAILURE: i32 = -1;

// ============================================================================
// 速度（Rovio 速度刻度：1 最快，10 最慢）
// ============================================================================

pub const RI_FASTEST: i32 = 1;
pub const RI_SLOWEST: i32 = 10;

// ============================================================================
// 运动指令（ri_move 的 movement 参数）
// ============================================================================

pub const RI_STOP: i32 = 0;
pub const RI_MOVE_FORWARD: i32 = 1;
pub const RI_MOVE_BACKWARD: i32 = 2;
pub const RI_MOVE_LEFT: i32 = 3;
pub const RI_MOVE_RIGHT: i32 = 4;
pub const RI_TURN_LEFT: i32 = 5;
pub const RI_TURN_RIGHT: i32 = 6;
pub const RI_MOVE_FWD_LEFT: i32 = 7;
pub const RI_MOVE_FWD_RIGHT: i32 = 8;
pub const RI_MOVE_BACK_LEFT: i32 = 9;
pub const RI_MOVE_BACK_RIGHT: i32 = 10;
pub const RI_HEAD_UP: i32 = 11;
pub const RI_HEAD_DOWN: i32 = 12;
pub const RI_HEAD_MIDDLE: i32 = 13;
pub const RI_TURN_LEFT_20DEG: i32 = 17;
pub const RI_TURN_RIGHT_20DEG: i32 = 18;

// ============================================================================
// 轮子
// ============================================================================

pub const RI_WHEEL_LEFT: i32 = 0;
pub const RI_WHEEL_RIGHT: i32 = 1;
pub const RI_WHEEL_REAR: i32 = 2;

pub const RI_WHEEL_FORWARD: i32 = 0;
pub const RI_WHEEL_BACKWARD: i32 = 1;

// ============================================================================
// 电池（ri_getBattery）
// ============================================================================

pub const RI_ROBOT_BATTERY_OFF: i32 = 100;
pub const RI_ROBOT_BATTERY_HOME: i32 = 106;
pub const RI_ROBOT_BATTERY_MAX: i32 = 127;

// ============================================================================
// 头部位置（ri_getHeadPosition）
// ============================================================================

pub const RI_ROBOT_HEAD_LOW: i32 = 204;
pub const RI_ROBOT_HEAD_MID: i32 = 135;
pub const RI_ROBOT_HEAD_HIGH: i32 = 65;

// ============================================================================
// 导航信号强度（ri_getNavStrength）
// ============================================================================

pub const RI_ROBOT_NAV_SIGNAL_NO_SIGNAL: i32 = 0;
pub const RI_ROBOT_NAV_SIGNAL_WEAK: i32 = 1;
pub const RI_ROBOT_NAV_SIGNAL_MID: i32 = 2;
pub const RI_ROBOT_NAV_SIGNAL_STRONG: i32 = 3;

// ============================================================================
// 灯光（ri_headlight / ri_IR）
// ============================================================================

pub const RI_LIGHT_OFF: i32 = 0;
pub const RI_LIGHT_ON: i32 = 1;

// ============================================================================
// 头文件核对表
// ============================================================================

/// 需要与 `robot_if.h` 逐项核对的常量：(宏名, 本地取值)
///
/// `native` 构建会把每一项编译成针对头文件的静态断言，取值不一致时构建失败。
/// `RI_FASTEST` 只在本地使用，不在表中。
pub const HEADER_CONSTANTS: &[(&str, i32)] = &[
    ("RI_RESP_SUCCESS", RI_RESP_SUCCESS),
    ("RI_RESP_FAILURE", RI_RESP_FAILURE),
    ("RI_SLOWEST", RI_SLOWEST),
    ("RI_STOP", RI_STOP),
    ("RI_MOVE_FORWARD", RI_MOVE_FORWARD),
    ("RI_MOVE_BACKWARD", RI_MOVE_BACKWARD),
    ("RI_MOVE_LEFT", RI_MOVE_LEFT),
    ("RI_MOVE_RIGHT", RI_MOVE_RIGHT),
    ("RI_TURN_LEFT", RI_TURN_LEFT),
    ("RI_TURN_RIGHT", RI_TURN_RIGHT),
    ("RI_MOVE_FWD_LEFT", RI_MOVE_FWD_LEFT),
    ("RI_MOVE_FWD_RIGHT", RI_MOVE_FWD_RIGHT),
    ("RI_MOVE_BACK_LEFT", RI_MOVE_BACK_LEFT),
    ("RI_MOVE_BACK_RIGHT", RI_MOVE_BACK_RIGHT),
    ("RI_HEAD_UP", RI_HEAD_UP),
    ("RI_HEAD_DOWN", RI_HEAD_DOWN),
    ("RI_HEAD_MIDDLE", RI_HEAD_MIDDLE),
    ("RI_TURN_LEFT_20DEG", RI_TURN_LEFT_20DEG),
    ("RI_TURN_RIGHT_20DEG", RI_TURN_RIGHT_20DEG),
    ("RI_WHEEL_LEFT", RI_WHEEL_LEFT),
    ("RI_WHEEL_RIGHT", RI_WHEEL_RIGHT),
    ("RI_WHEEL_REAR", RI_WHEEL_REAR),
    ("RI_WHEEL_FORWARD", RI_WHEEL_FORWARD),
    ("RI_WHEEL_BACKWARD", RI_WHEEL_BACKWARD),
    ("RI_ROBOT_BATTERY_OFF", RI_ROBOT_BATTERY_OFF),
    ("RI_ROBOT_BATTERY_HOME", RI_ROBOT_BATTERY_HOME),
    ("RI_ROBOT_BATTERY_MAX", RI_ROBOT_BATTERY_MAX),
    ("RI_ROBOT_HEAD_LOW", RI_ROBOT_HEAD_LOW),
    ("RI_ROBOT_HEAD_MID", RI_ROBOT_HEAD_MID),
    ("RI_ROBOT_HEAD_HIGH", RI_ROBOT_HEAD_HIGH),
    ("RI_ROBOT_NAV_SIGNAL_NO_SIGNAL", RI_ROBOT_NAV_SIGNAL_NO_SIGNAL),
    ("RI_ROBOT_NAV_SIGNAL_WEAK", RI_ROBOT_NAV_SIGNAL_WEAK),
    ("RI_ROBOT_NAV_SIGNAL_MID", RI_ROBOT_NAV_SIGNAL_MID),
    ("RI_ROBOT_NAV_SIGNAL_STRONG", RI_ROBOT_NAV_SIGNAL_STRONG),
    ("RI_LIGHT_OFF", RI_LIGHT_OFF),
    ("RI_LIGHT_ON", RI_LIGHT_ON),
];

/// 原生状态码是否表示成功
///
/// 只有 `RI_RESP_SUCCESS` 视为成功，其它任何值（包括未知值）都视为失败。
#[inline]
pub fn is_success(status: i32) -> bool {
    status == RI_RESP_SUCCESS
}

//! Mock 后端
//!
//! 用于测试的确定性原生层替身。所有返回码都可以通过 [`MockHandle`] 控制，
//! 每次有副作用的原生调用都会记录为一条 [`MockCall`]。
//!
//! `MockBackend` 被移交给上层以后，测试代码仍可以通过克隆出来的 `MockHandle`
//! 修改返回值、检查调用记录。

use crate::RobotBackend;
use rovio_protocol::constants::*;
use std::ffi::CStr;
use std::sync::{Arc, Mutex, MutexGuard};

/// 有副作用的原生调用记录
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    Setup { address: String, id: i32 },
    Cleanup,
    Move { movement: i32, speed: i32 },
    GoHome,
    Update,
    ResetState,
    Headlight { state: i32 },
    Ir { state: i32 },
}

/// 模拟的原生会话状态
///
/// 字段直接保存原生码，测试可以写入任何值（包括原生层不会返回的值）。
#[derive(Debug, Clone)]
pub struct MockState {
    /// `ri_setup` 的返回码
    pub setup_status: i32,
    /// 指令类调用（move/go_home/update/headlight/IR）的返回码
    pub command_status: i32,
    /// 为 true 时 `ri_reset_state` 内部失败，累计值不会清零
    pub reset_fails: bool,

    pub battery: i32,
    pub wifi_strength_raw: i32,
    pub head_position: i32,
    /// 按 左、右、后 的顺序
    pub wheel_direction: [i32; 3],
    pub wheel_encoder: [i32; 3],
    pub wheel_encoder_totals: [i32; 3],
    pub x: i32,
    pub y: i32,
    pub theta: f32,
    pub room_id: i32,
    pub nav_strength_raw: i32,
    pub nav_strength: i32,
    pub ir_detected: bool,

    pub headlight_on: bool,
    pub ir_on: bool,

    pub calls: Vec<MockCall>,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            setup_status: RI_RESP_SUCCESS,
            command_status: RI_RESP_SUCCESS,
            reset_fails: false,
            battery: RI_ROBOT_BATTERY_MAX,
            wifi_strength_raw: 0,
            head_position: RI_ROBOT_HEAD_LOW,
            wheel_direction: [RI_WHEEL_FORWARD; 3],
            wheel_encoder: [0; 3],
            wheel_encoder_totals: [0; 3],
            x: 0,
            y: 0,
            theta: 0.0,
            room_id: 0,
            nav_strength_raw: 0,
            nav_strength: RI_ROBOT_NAV_SIGNAL_NO_SIGNAL,
            ir_detected: false,
            headlight_on: false,
            ir_on: false,
            calls: Vec::new(),
        }
    }
}

/// 共享的 Mock 状态句柄
#[derive(Debug, Clone, Default)]
pub struct MockHandle {
    state: Arc<Mutex<MockState>>,
}

impl MockHandle {
    /// 锁定并返回内部状态
    ///
    /// 测试线程 panic 导致的锁毒化会被忽略。
    pub fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// 在锁内修改状态
    pub fn with<R>(&self, f: impl FnOnce(&mut MockState) -> R) -> R {
        f(&mut self.state())
    }

    pub fn set_setup_status(&self, status: i32) {
        self.state().setup_status = status;
    }

    pub fn set_command_status(&self, status: i32) {
        self.state().command_status = status;
    }

    /// 取出并清空调用记录
    pub fn take_calls(&self) -> Vec<MockCall> {
        std::mem::take(&mut self.state().calls)
    }

    /// 调用记录的快照
    pub fn calls(&self) -> Vec<MockCall> {
        self.state().calls.clone()
    }

    /// `ri_cleanup` 被调用的次数
    pub fn cleanup_count(&self) -> usize {
        self.state().calls.iter().filter(|c| **c == MockCall::Cleanup).count()
    }
}

/// Mock 后端
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    handle: MockHandle,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以给定初始状态创建
    pub fn with_state(state: MockState) -> Self {
        Self {
            handle: MockHandle {
                state: Arc::new(Mutex::new(state)),
            },
        }
    }

    /// 获取共享状态句柄
    pub fn handle(&self) -> MockHandle {
        self.handle.clone()
    }

    fn record(&self, call: MockCall) -> i32 {
        let mut state = self.handle.state();
        state.calls.push(call);
        state.command_status
    }
}

/// 轮子原生码转数组下标，未知轮子返回 None
fn wheel_index(wheel: i32) -> Option<usize> {
    match wheel {
        RI_WHEEL_LEFT => Some(0),
        RI_WHEEL_RIGHT => Some(1),
        RI_WHEEL_REAR => Some(2),
        _ => None,
    }
}

impl RobotBackend for MockBackend {
    fn setup(&mut self, address: &CStr, id: i32) -> i32 {
        let mut state = self.handle.state();
        state.calls.push(MockCall::Setup {
            address: address.to_string_lossy().into_owned(),
            id,
        });
        state.setup_status
    }

    fn cleanup(&mut self) {
        self.handle.state().calls.push(MockCall::Cleanup);
    }

    fn move_robot(&mut self, movement: i32, speed: i32) -> i32 {
        self.record(MockCall::Move { movement, speed })
    }

    fn go_home(&mut self) -> i32 {
        self.record(MockCall::GoHome)
    }

    fn update(&mut self) -> i32 {
        self.record(MockCall::Update)
    }

    fn reset_state(&mut self) {
        let mut state = self.handle.state();
        state.calls.push(MockCall::ResetState);
        if !state.reset_fails {
            state.wheel_encoder_totals = [0; 3];
        }
    }

    fn battery(&self) -> i32 {
        self.handle.state().battery
    }

    fn wifi_strength_raw(&self) -> i32 {
        self.handle.state().wifi_strength_raw
    }

    fn head_position(&self) -> i32 {
        self.handle.state().head_position
    }

    fn wheel_direction(&self, wheel: i32) -> i32 {
        wheel_index(wheel)
            .map(|i| self.handle.state().wheel_direction[i])
            .unwrap_or(RI_RESP_FAILURE)
    }

    fn wheel_encoder(&self, wheel: i32) -> i32 {
        wheel_index(wheel)
            .map(|i| self.handle.state().wheel_encoder[i])
            .unwrap_or(0)
    }

    fn wheel_encoder_totals(&self, wheel: i32) -> i32 {
        wheel_index(wheel)
            .map(|i| self.handle.state().wheel_encoder_totals[i])
            .unwrap_or(0)
    }

    fn x(&self) -> i32 {
        self.handle.state().x
    }

    fn y(&self) -> i32 {
        self.handle.state().y
    }

    fn theta(&self) -> f32 {
        self.handle.state().theta
    }

    fn room_id(&self) -> i32 {
        self.handle.state().room_id
    }

    fn nav_strength_raw(&self) -> i32 {
        self.handle.state().nav_strength_raw
    }

    fn nav_strength(&self) -> i32 {
        self.handle.state().nav_strength
    }

    fn headlight(&mut self, state: i32) -> i32 {
        let status = self.record(MockCall::Headlight { state });
        if status == RI_RESP_SUCCESS {
            self.handle.state().headlight_on = state == RI_LIGHT_ON;
        }
        status
    }

    fn ir(&mut self, state: i32) -> i32 {
        let status = self.record(MockCall::Ir { state });
        if status == RI_RESP_SUCCESS {
            self.handle.state().ir_on = state == RI_LIGHT_ON;
        }
        status
    }

    fn ir_detected(&self) -> bool {
        self.handle.state().ir_detected
    }
}

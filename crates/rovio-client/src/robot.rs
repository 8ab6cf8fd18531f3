//! Robot 句柄
//!
//! [`Robot`] 独占一个原生会话。每个公开方法恰好发起一次原生调用，并把结果翻译为
//! `bool` 或本 SDK 的枚举：
//!
//! - 指令类方法：原生返回 `RI_RESP_SUCCESS` 时为 `true`，否则为 `false`
//! - 读取类方法：没有失败通道，无法识别的原生码退化为兜底值
//!
//! 传感器读数来自原生层的缓存，读取前先调用 [`Robot::update_sensor_cache`]。
//!
//! # 线程安全
//!
//! 本层不加锁。指令类方法需要 `&mut self`，同一句柄同一时刻最多一个调用在进行。

use crate::error::{Result, RobotError};
use crate::snapshot::{SensorSnapshot, WheelReading};
use rovio_ffi::RobotBackend;
use rovio_protocol::{
    BatteryLevel, HeadPosition, LightState, MoveCommand, NavSignal, RI_RESP_FAILURE, RI_SLOWEST,
    Wheel, WheelDirection, is_success,
};
use std::ffi::CString;
use tracing::{debug, info, trace, warn};

/// Rovio 机器人句柄
///
/// 要么完全可用（原生 `ri_setup` 成功），要么根本不会被构造出来。
/// 会话在 [`Robot::close`] 或 drop 时释放，且只释放一次。
///
/// # Example
///
/// ```
/// use rovio_client::Robot;
/// use rovio_ffi::MockBackend;
///
/// let mut robot = Robot::connect(MockBackend::new(), "192.168.10.18", 0).unwrap();
/// assert!(robot.move_north(5));
/// assert!(robot.stop());
/// robot.close();
/// ```
pub struct Robot<B: RobotBackend> {
    backend: B,
    address: String,
    id: i32,
    released: bool,
}

impl<B: RobotBackend> Robot<B> {
    /// 通过后端建立会话
    ///
    /// 原生 setup 返回 `RI_RESP_FAILURE` 时返回 [`RobotError::SetupFailed`]，
    /// 其它任何返回码都视为成功。不做重试。
    pub fn connect(mut backend: B, address: impl Into<String>, id: i32) -> Result<Self> {
        let address = address.into();
        let c_address = CString::new(address.as_str()).map_err(|_| RobotError::InvalidAddress {
            address: address.clone(),
        })?;

        let status = backend.setup(&c_address, id);
        if status == RI_RESP_FAILURE {
            warn!("Robot setup failed: address={}, id={}", address, id);
            return Err(RobotError::SetupFailed {
                address,
                id,
                status,
            });
        }

        info!("Connected to Rovio at {} (id={})", address, id);
        Ok(Self {
            backend,
            address,
            id,
            released: false,
        })
    }

    /// 连接时使用的地址
    pub fn address(&self) -> &str {
        &self.address
    }

    /// 连接时使用的机器人 ID
    pub fn id(&self) -> i32 {
        self.id
    }

    /// 底层后端（只读）
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// 底层后端（可变）
    ///
    /// 不要通过它调用 `cleanup`，会话由句柄负责释放。
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// 显式释放原生会话
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.backend.cleanup();
        debug!("Released Rovio session {} (id={})", self.address, self.id);
    }

    // ------------------------------------------------------------------
    // 运动
    // ------------------------------------------------------------------

    /// 所有运动/头部指令的公共原语
    fn drive(&mut self, command: MoveCommand, speed: i32) -> bool {
        trace!("drive {:?} at speed {}", command, speed);
        is_success(self.backend.move_robot(command.code(), speed))
    }

    /// 停止（总是以最慢速度下发）
    pub fn stop(&mut self) -> bool {
        self.drive(MoveCommand::Stop, RI_SLOWEST)
    }

    /// 自主回充
    pub fn go_home(&mut self) -> bool {
        is_success(self.backend.go_home())
    }

    /// 前进
    pub fn move_north(&mut self, speed: i32) -> bool {
        self.drive(MoveCommand::Forward, speed)
    }

    /// 后退
    pub fn move_south(&mut self, speed: i32) -> bool {
        self.drive(MoveCommand::Backward, speed)
    }

    /// 向左平移
    pub fn move_west(&mut self, speed: i32) -> bool {
        self.drive(MoveCommand::Left, speed)
    }

    /// 向右平移
    pub fn move_east(&mut self, speed: i32) -> bool {
        self.drive(MoveCommand::Right, speed)
    }

    pub fn move_northwest(&mut self, speed: i32) -> bool {
        self.drive(MoveCommand::ForwardLeft, speed)
    }

    pub fn move_northeast(&mut self, speed: i32) -> bool {
        self.drive(MoveCommand::ForwardRight, speed)
    }

    pub fn move_southwest(&mut self, speed: i32) -> bool {
        self.drive(MoveCommand::BackwardLeft, speed)
    }

    pub fn move_southeast(&mut self, speed: i32) -> bool {
        self.drive(MoveCommand::BackwardRight, speed)
    }

    /// 持续左转
    pub fn turn_left(&mut self, speed: i32) -> bool {
        self.drive(MoveCommand::TurnLeft, speed)
    }

    /// 持续右转
    pub fn turn_right(&mut self, speed: i32) -> bool {
        self.drive(MoveCommand::TurnRight, speed)
    }

    /// 左转 20°
    pub fn turn_left_20(&mut self, speed: i32) -> bool {
        self.drive(MoveCommand::TurnLeft20, speed)
    }

    /// 右转 20°
    pub fn turn_right_20(&mut self, speed: i32) -> bool {
        self.drive(MoveCommand::TurnRight20, speed)
    }

    // ------------------------------------------------------------------
    // 头部
    // ------------------------------------------------------------------

    pub fn lift_head(&mut self) -> bool {
        self.drive(MoveCommand::HeadUp, RI_SLOWEST)
    }

    /// 头部回到中间位置
    pub fn rest_head(&mut self) -> bool {
        self.drive(MoveCommand::HeadMiddle, RI_SLOWEST)
    }

    pub fn lower_head(&mut self) -> bool {
        self.drive(MoveCommand::HeadDown, RI_SLOWEST)
    }

    // ------------------------------------------------------------------
    // 传感器缓存
    // ------------------------------------------------------------------

    /// 刷新原生层的传感器缓存
    pub fn update_sensor_cache(&mut self) -> bool {
        is_success(self.backend.update())
    }

    /// 清零编码器累计值
    ///
    /// 总是返回 `true`：原生函数的返回值不可靠，这里不作判断。
    pub fn reset_encoder_totals(&mut self) -> bool {
        self.backend.reset_state();
        true
    }

    // ------------------------------------------------------------------
    // 读取
    // ------------------------------------------------------------------

    /// 电池档位，未知值为 `Off`
    pub fn battery_life(&self) -> BatteryLevel {
        BatteryLevel::from(self.backend.battery())
    }

    pub fn raw_wifi_strength(&self) -> i32 {
        self.backend.wifi_strength_raw()
    }

    /// 头部位置，未知值为 `Mid`
    pub fn head_position(&self) -> HeadPosition {
        HeadPosition::from(self.backend.head_position())
    }

    /// 轮子转向，未知值为 `Forward`
    pub fn wheel_direction(&self, wheel: Wheel) -> WheelDirection {
        WheelDirection::from(self.backend.wheel_direction(wheel.code()))
    }

    /// 轮子本周期的编码器读数
    pub fn wheel_movement(&self, wheel: Wheel) -> i32 {
        self.backend.wheel_encoder(wheel.code())
    }

    /// 轮子编码器累计值
    pub fn wheel_total(&self, wheel: Wheel) -> i32 {
        self.backend.wheel_encoder_totals(wheel.code())
    }

    pub fn left_wheel_direction(&self) -> WheelDirection {
        self.wheel_direction(Wheel::Left)
    }

    pub fn right_wheel_direction(&self) -> WheelDirection {
        self.wheel_direction(Wheel::Right)
    }

    pub fn rear_wheel_direction(&self) -> WheelDirection {
        self.wheel_direction(Wheel::Rear)
    }

    pub fn left_wheel_movement(&self) -> i32 {
        self.wheel_movement(Wheel::Left)
    }

    pub fn right_wheel_movement(&self) -> i32 {
        self.wheel_movement(Wheel::Right)
    }

    pub fn rear_wheel_movement(&self) -> i32 {
        self.wheel_movement(Wheel::Rear)
    }

    pub fn left_wheel_total(&self) -> i32 {
        self.wheel_total(Wheel::Left)
    }

    pub fn right_wheel_total(&self) -> i32 {
        self.wheel_total(Wheel::Right)
    }

    pub fn rear_wheel_total(&self) -> i32 {
        self.wheel_total(Wheel::Rear)
    }

    pub fn x(&self) -> i32 {
        self.backend.x()
    }

    pub fn y(&self) -> i32 {
        self.backend.y()
    }

    /// 航向角（原生单位）
    pub fn theta(&self) -> f64 {
        f64::from(self.backend.theta())
    }

    pub fn room_id(&self) -> i32 {
        self.backend.room_id()
    }

    /// 导航信标原始信号强度
    pub fn raw_signal_strength(&self) -> i32 {
        self.backend.nav_strength_raw()
    }

    /// 导航信标信号档位，未知值为 `NoSignal`
    pub fn signal_strength(&self) -> NavSignal {
        NavSignal::from(self.backend.nav_strength())
    }

    // ------------------------------------------------------------------
    // 灯光
    // ------------------------------------------------------------------

    pub fn turn_on_headlight(&mut self) -> bool {
        is_success(self.backend.headlight(LightState::On.code()))
    }

    pub fn turn_off_headlight(&mut self) -> bool {
        is_success(self.backend.headlight(LightState::Off.code()))
    }

    pub fn turn_on_infrared(&mut self) -> bool {
        is_success(self.backend.ir(LightState::On.code()))
    }

    pub fn turn_off_infrared(&mut self) -> bool {
        is_success(self.backend.ir(LightState::Off.code()))
    }

    /// 红外避障传感器是否检测到障碍物
    pub fn blocked(&self) -> bool {
        self.backend.ir_detected()
    }

    /// 一次性读取全部传感器
    ///
    /// 不会刷新原生缓存，需要最新读数时先调用 [`Robot::update_sensor_cache`]。
    pub fn snapshot(&self) -> SensorSnapshot {
        let wheel = |w| WheelReading {
            direction: self.wheel_direction(w),
            movement: self.wheel_movement(w),
            total: self.wheel_total(w),
        };

        SensorSnapshot {
            battery: self.battery_life(),
            wifi_strength_raw: self.raw_wifi_strength(),
            head_position: self.head_position(),
            left_wheel: wheel(Wheel::Left),
            right_wheel: wheel(Wheel::Right),
            rear_wheel: wheel(Wheel::Rear),
            x: self.x(),
            y: self.y(),
            theta: self.theta(),
            room_id: self.room_id(),
            signal_strength_raw: self.raw_signal_strength(),
            signal_strength: self.signal_strength(),
            blocked: self.blocked(),
        }
    }
}

impl<B: RobotBackend> Drop for Robot<B> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<B: RobotBackend> std::fmt::Debug for Robot<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Robot")
            .field("address", &self.address)
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rovio_ffi::{MockBackend, MockCall, MockHandle};
    use rovio_protocol::constants::*;

    fn connected() -> (Robot<MockBackend>, MockHandle) {
        let backend = MockBackend::new();
        let handle = backend.handle();
        let robot = Robot::connect(backend, "192.168.10.18", 1).unwrap();
        handle.take_calls();
        (robot, handle)
    }

    fn last_move(handle: &MockHandle) -> (i32, i32) {
        match handle.calls().last() {
            Some(MockCall::Move { movement, speed }) => (*movement, *speed),
            other => panic!("Expected Move call, got {:?}", other),
        }
    }

    #[test]
    fn test_connect_passes_address_and_id() {
        let backend = MockBackend::new();
        let handle = backend.handle();
        let robot = Robot::connect(backend, "10.1.2.3", 7).unwrap();

        assert_eq!(robot.address(), "10.1.2.3");
        assert_eq!(robot.id(), 7);
        assert_eq!(
            handle.calls(),
            vec![MockCall::Setup {
                address: "10.1.2.3".to_string(),
                id: 7
            }]
        );
    }

    #[test]
    fn test_connect_failure() {
        let backend = MockBackend::new();
        let handle = backend.handle();
        handle.set_setup_status(RI_RESP_FAILURE);

        let result = Robot::connect(backend, "10.1.2.3", 7);
        match result {
            Err(RobotError::SetupFailed { address, id, status }) => {
                assert_eq!(address, "10.1.2.3");
                assert_eq!(id, 7);
                assert_eq!(status, RI_RESP_FAILURE);
            },
            other => panic!("Expected SetupFailed, got {:?}", other),
        }
        // 构造失败时不会释放从未建立的会话
        assert_eq!(handle.cleanup_count(), 0);
    }

    #[test]
    fn test_connect_non_failure_status_is_success() {
        // 只有 RI_RESP_FAILURE 视为失败
        let backend = MockBackend::new();
        backend.handle().set_setup_status(5);
        assert!(Robot::connect(backend, "rovio", 0).is_ok());
    }

    #[test]
    fn test_connect_rejects_nul_in_address() {
        let backend = MockBackend::new();
        let handle = backend.handle();

        let result = Robot::connect(backend, "192.168\0.10.18", 0);
        assert!(matches!(result, Err(RobotError::InvalidAddress { .. })));
        assert!(handle.calls().is_empty());
    }

    #[test]
    fn test_motion_codes() {
        let (mut robot, handle) = connected();

        type Op = fn(&mut Robot<MockBackend>, i32) -> bool;
        let cases: [(Op, i32); 12] = [
            (Robot::move_north, RI_MOVE_FORWARD),
            (Robot::move_south, RI_MOVE_BACKWARD),
            (Robot::move_west, RI_MOVE_LEFT),
            (Robot::move_east, RI_MOVE_RIGHT),
            (Robot::move_northwest, RI_MOVE_FWD_LEFT),
            (Robot::move_northeast, RI_MOVE_FWD_RIGHT),
            (Robot::move_southwest, RI_MOVE_BACK_LEFT),
            (Robot::move_southeast, RI_MOVE_BACK_RIGHT),
            (Robot::turn_left, RI_TURN_LEFT),
            (Robot::turn_right, RI_TURN_RIGHT),
            (Robot::turn_left_20, RI_TURN_LEFT_20DEG),
            (Robot::turn_right_20, RI_TURN_RIGHT_20DEG),
        ];

        for (op, code) in cases {
            assert!(op(&mut robot, 3));
            assert_eq!(last_move(&handle), (code, 3));
        }
    }

    #[test]
    fn test_speed_is_passed_through_unchecked() {
        let (mut robot, handle) = connected();
        assert!(robot.move_north(-42));
        assert_eq!(last_move(&handle), (RI_MOVE_FORWARD, -42));
        assert!(robot.turn_right(1000));
        assert_eq!(last_move(&handle), (RI_TURN_RIGHT, 1000));
    }

    #[test]
    fn test_stop_uses_slowest() {
        let (mut robot, handle) = connected();
        assert!(robot.stop());
        assert_eq!(last_move(&handle), (RI_STOP, RI_SLOWEST));
    }

    #[test]
    fn test_head_commands_use_slowest() {
        let (mut robot, handle) = connected();

        assert!(robot.lift_head());
        assert_eq!(last_move(&handle), (RI_HEAD_UP, RI_SLOWEST));
        assert!(robot.rest_head());
        assert_eq!(last_move(&handle), (RI_HEAD_MIDDLE, RI_SLOWEST));
        assert!(robot.lower_head());
        assert_eq!(last_move(&handle), (RI_HEAD_DOWN, RI_SLOWEST));
    }

    #[test]
    fn test_commands_report_failure() {
        let (mut robot, handle) = connected();
        handle.set_command_status(RI_RESP_FAILURE);

        assert!(!robot.stop());
        assert!(!robot.move_north(5));
        assert!(!robot.turn_left(5));
        assert!(!robot.lift_head());
        assert!(!robot.go_home());
        assert!(!robot.update_sensor_cache());
        assert!(!robot.turn_on_headlight());
        assert!(!robot.turn_off_headlight());
        assert!(!robot.turn_on_infrared());
        assert!(!robot.turn_off_infrared());
    }

    #[test]
    fn test_unknown_status_is_failure() {
        let (mut robot, handle) = connected();
        handle.set_command_status(3);
        assert!(!robot.move_north(5));
        assert!(!robot.go_home());
    }

    #[test]
    fn test_reset_encoder_totals_always_true() {
        let (mut robot, handle) = connected();
        handle.with(|s| {
            s.reset_fails = true;
            s.command_status = RI_RESP_FAILURE;
            s.wheel_encoder_totals = [4, 5, 6];
        });

        assert!(robot.reset_encoder_totals());
        assert_eq!(handle.calls(), vec![MockCall::ResetState]);
        // 原生层内部失败，累计值保持不变
        assert_eq!(robot.left_wheel_total(), 4);
    }

    #[test]
    fn test_lights() {
        let (mut robot, handle) = connected();

        assert!(robot.turn_on_headlight());
        assert!(robot.turn_off_infrared());
        assert_eq!(
            handle.take_calls(),
            vec![
                MockCall::Headlight { state: RI_LIGHT_ON },
                MockCall::Ir {
                    state: RI_LIGHT_OFF
                },
            ]
        );
    }

    #[test]
    fn test_accessors() {
        let (robot, handle) = connected();
        handle.with(|s| {
            s.battery = RI_ROBOT_BATTERY_HOME;
            s.wifi_strength_raw = 212;
            s.head_position = RI_ROBOT_HEAD_HIGH;
            s.wheel_direction = [RI_WHEEL_FORWARD, RI_WHEEL_BACKWARD, RI_WHEEL_FORWARD];
            s.wheel_encoder = [1, -2, 3];
            s.wheel_encoder_totals = [100, 200, 300];
            s.x = -120;
            s.y = 340;
            s.theta = 1.5;
            s.room_id = 2;
            s.nav_strength_raw = 30_000;
            s.nav_strength = RI_ROBOT_NAV_SIGNAL_MID;
            s.ir_detected = true;
        });

        assert_eq!(robot.battery_life(), BatteryLevel::Home);
        assert_eq!(robot.raw_wifi_strength(), 212);
        assert_eq!(robot.head_position(), HeadPosition::High);
        assert_eq!(robot.left_wheel_direction(), WheelDirection::Forward);
        assert_eq!(robot.right_wheel_direction(), WheelDirection::Backward);
        assert_eq!(robot.rear_wheel_direction(), WheelDirection::Forward);
        assert_eq!(robot.left_wheel_movement(), 1);
        assert_eq!(robot.right_wheel_movement(), -2);
        assert_eq!(robot.rear_wheel_movement(), 3);
        assert_eq!(robot.left_wheel_total(), 100);
        assert_eq!(robot.right_wheel_total(), 200);
        assert_eq!(robot.rear_wheel_total(), 300);
        assert_eq!(robot.x(), -120);
        assert_eq!(robot.y(), 340);
        assert_eq!(robot.theta(), 1.5);
        assert_eq!(robot.room_id(), 2);
        assert_eq!(robot.raw_signal_strength(), 30_000);
        assert_eq!(robot.signal_strength(), NavSignal::Mid);
        assert!(robot.blocked());
    }

    #[test]
    fn test_unknown_codes_use_fallbacks() {
        let (robot, handle) = connected();
        handle.with(|s| {
            s.battery = 55;
            s.head_position = -3;
            s.wheel_direction = [9, 9, 9];
            s.nav_strength = 99;
        });

        assert_eq!(robot.battery_life(), BatteryLevel::Off);
        assert_eq!(robot.head_position(), HeadPosition::Mid);
        for wheel in Wheel::ALL {
            assert_eq!(robot.wheel_direction(wheel), WheelDirection::Forward);
        }
        assert_eq!(robot.signal_strength(), NavSignal::NoSignal);
    }

    #[test]
    fn test_close_releases_once() {
        let (robot, handle) = connected();
        robot.close();
        assert_eq!(handle.cleanup_count(), 1);
    }

    #[test]
    fn test_drop_releases_once() {
        let (robot, handle) = connected();
        drop(robot);
        assert_eq!(handle.cleanup_count(), 1);
    }

    #[test]
    fn test_snapshot() {
        let (robot, handle) = connected();
        handle.with(|s| {
            s.wheel_encoder_totals = [7, 8, 9];
            s.wheel_direction = [RI_WHEEL_BACKWARD, RI_WHEEL_FORWARD, RI_WHEEL_FORWARD];
            s.x = 10;
            s.ir_detected = true;
        });

        let snap = robot.snapshot();
        assert_eq!(snap.left_wheel.total, 7);
        assert_eq!(snap.rear_wheel.total, 9);
        assert_eq!(snap.left_wheel.direction, WheelDirection::Backward);
        assert_eq!(snap.x, 10);
        assert!(snap.blocked);
        // 读取不会产生原生调用记录
        assert!(handle.calls().is_empty());
    }
}

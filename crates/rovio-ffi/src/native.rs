//! librobot_if 绑定
//!
//! `robot_if_t` 在 C 侧由调用者分配、由 `ri_setup` 初始化。Rust 侧拿不到它的
//! 布局，因此用一块足够大、对齐的堆内存作为存储，地址在会话期间保持不变。
//!
//! 存储是否够大、`RI_*` 常量是否与头文件一致，由 build.rs 编译的校验 shim
//! 在构建期断言；shim 同时导出实际布局和常量值，见 [`header_mismatches`]。

use crate::RobotBackend;
use crate::layout::ROBOT_IF_STORAGE_ALIGN;
use libc::{c_char, c_float, c_int, size_t};
use rovio_protocol::constants::HEADER_CONSTANTS;
use std::cell::UnsafeCell;
use std::ffi::CStr;
use tracing::{debug, trace};

pub use crate::layout::ROBOT_IF_STORAGE_BYTES;

/// 原生会话对象的不透明存储
#[repr(C, align(16))]
pub struct RobotIf {
    _opaque: [u8; ROBOT_IF_STORAGE_BYTES],
}

const _: () = assert!(std::mem::align_of::<RobotIf>() == ROBOT_IF_STORAGE_ALIGN);

// build.rs 生成的校验 shim（静态库，由 cc 负责链接）
unsafe extern "C" {
    fn rovio_robot_if_size() -> size_t;
    fn rovio_robot_if_align() -> size_t;
    fn rovio_header_constant(index: size_t) -> c_int;
}

/// 所链接头文件中的 `sizeof(robot_if_t)`
pub fn native_robot_if_size() -> usize {
    unsafe { rovio_robot_if_size() }
}

/// 所链接头文件中的 `_Alignof(robot_if_t)`
pub fn native_robot_if_align() -> usize {
    unsafe { rovio_robot_if_align() }
}

/// 与头文件取值不一致的常量：(宏名, 本地取值, 头文件取值)
///
/// 构建期断言通过时应为空。
pub fn header_mismatches() -> Vec<(&'static str, i32, i32)> {
    HEADER_CONSTANTS
        .iter()
        .enumerate()
        .filter_map(|(index, &(name, local))| {
            let native = unsafe { rovio_header_constant(index) };
            (native != local).then_some((name, local, native))
        })
        .collect()
}

#[link(name = "robot_if")]
#[allow(non_snake_case)]
unsafe extern "C" {
    fn ri_setup(ri: *mut RobotIf, address: *const c_char, id: c_int) -> c_int;
    fn ri_cleanup(ri: *mut RobotIf);
    fn ri_move(ri: *mut RobotIf, movement: c_int, speed: c_int) -> c_int;
    fn ri_go_home(ri: *mut RobotIf) -> c_int;
    fn ri_update(ri: *mut RobotIf) -> c_int;
    fn ri_reset_state(ri: *mut RobotIf);
    fn ri_getBattery(ri: *mut RobotIf) -> c_int;
    fn ri_getWifiStrengthRaw(ri: *mut RobotIf) -> c_int;
    fn ri_getHeadPosition(ri: *mut RobotIf) -> c_int;
    fn ri_getWheelDirection(ri: *mut RobotIf, wheel: c_int) -> c_int;
    fn ri_getWheelEncoder(ri: *mut RobotIf, wheel: c_int) -> c_int;
    fn ri_getWheelEncoderTotals(ri: *mut RobotIf, wheel: c_int) -> c_int;
    fn ri_getX(ri: *mut RobotIf) -> c_int;
    fn ri_getY(ri: *mut RobotIf) -> c_int;
    fn ri_getTheta(ri: *mut RobotIf) -> c_float;
    fn ri_getRoomID(ri: *mut RobotIf) -> c_int;
    fn ri_getNavStrengthRaw(ri: *mut RobotIf) -> c_int;
    fn ri_getNavStrength(ri: *mut RobotIf) -> c_int;
    fn ri_headlight(ri: *mut RobotIf, state: c_int) -> c_int;
    fn ri_IR(ri: *mut RobotIf, state: c_int) -> c_int;
    fn ri_IR_Detected(ri: *mut RobotIf) -> bool;
}

/// 基于 librobot_if 的后端
///
/// 持有一个原生会话对象。`Send` 但不 `Sync`：可以把后端移交给其它线程，
/// 但不能从多个线程同时调用。
pub struct NativeBackend {
    storage: Box<UnsafeCell<RobotIf>>,
}

impl NativeBackend {
    /// 分配尚未初始化的会话存储
    pub fn new() -> Self {
        debug_assert!(native_robot_if_size() <= ROBOT_IF_STORAGE_BYTES);
        // 存储较大，直接在堆上清零分配，避免经过栈
        let storage = unsafe {
            let layout = std::alloc::Layout::new::<UnsafeCell<RobotIf>>();
            let ptr = std::alloc::alloc_zeroed(layout) as *mut UnsafeCell<RobotIf>;
            if ptr.is_null() {
                std::alloc::handle_alloc_error(layout);
            }
            Box::from_raw(ptr)
        };
        Self { storage }
    }

    #[inline]
    fn raw(&self) -> *mut RobotIf {
        self.storage.get()
    }
}

impl Default for NativeBackend {
    fn default() -> Self {
        Self::new()
    }
}

// SAFETY: 会话存储独占于本对象且地址固定；UnsafeCell 保证不会自动实现 Sync，
// 因此不会有并发调用。
unsafe impl Send for NativeBackend {}

impl RobotBackend for NativeBackend {
    fn setup(&mut self, address: &CStr, id: i32) -> i32 {
        debug!("ri_setup(address={:?}, id={})", address, id);
        unsafe { ri_setup(self.raw(), address.as_ptr(), id) }
    }

    fn cleanup(&mut self) {
        debug!("ri_cleanup");
        unsafe { ri_cleanup(self.raw()) }
    }

    fn move_robot(&mut self, movement: i32, speed: i32) -> i32 {
        trace!("ri_move(movement={}, speed={})", movement, speed);
        unsafe { ri_move(self.raw(), movement, speed) }
    }

    fn go_home(&mut self) -> i32 {
        trace!("ri_go_home");
        unsafe { ri_go_home(self.raw()) }
    }

    fn update(&mut self) -> i32 {
        unsafe { ri_update(self.raw()) }
    }

    fn reset_state(&mut self) {
        unsafe { ri_reset_state(self.raw()) }
    }

    fn battery(&self) -> i32 {
        unsafe { ri_getBattery(self.raw()) }
    }

    fn wifi_strength_raw(&self) -> i32 {
        unsafe { ri_getWifiStrengthRaw(self.raw()) }
    }

    fn head_position(&self) -> i32 {
        unsafe { ri_getHeadPosition(self.raw()) }
    }

    fn wheel_direction(&self, wheel: i32) -> i32 {
        unsafe { ri_getWheelDirection(self.raw(), wheel) }
    }

    fn wheel_encoder(&self, wheel: i32) -> i32 {
        unsafe { ri_getWheelEncoder(self.raw(), wheel) }
    }

    fn wheel_encoder_totals(&self, wheel: i32) -> i32 {
        unsafe { ri_getWheelEncoderTotals(self.raw(), wheel) }
    }

    fn x(&self) -> i32 {
        unsafe { ri_getX(self.raw()) }
    }

    fn y(&self) -> i32 {
        unsafe { ri_getY(self.raw()) }
    }

    fn theta(&self) -> f32 {
        unsafe { ri_getTheta(self.raw()) }
    }

    fn room_id(&self) -> i32 {
        unsafe { ri_getRoomID(self.raw()) }
    }

    fn nav_strength_raw(&self) -> i32 {
        unsafe { ri_getNavStrengthRaw(self.raw()) }
    }

    fn nav_strength(&self) -> i32 {
        unsafe { ri_getNavStrength(self.raw()) }
    }

    fn headlight(&mut self, state: i32) -> i32 {
        trace!("ri_headlight(state={})", state);
        unsafe { ri_headlight(self.raw(), state) }
    }

    fn ir(&mut self, state: i32) -> i32 {
        trace!("ri_IR(state={})", state);
        unsafe { ri_IR(self.raw(), state) }
    }

    fn ir_detected(&self) -> bool {
        unsafe { ri_IR_Detected(self.raw()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_holds_native_struct() {
        assert!(native_robot_if_size() > 0);
        assert!(native_robot_if_size() <= ROBOT_IF_STORAGE_BYTES);
        assert!(native_robot_if_align() <= ROBOT_IF_STORAGE_ALIGN);
        assert_eq!(std::mem::size_of::<RobotIf>(), ROBOT_IF_STORAGE_BYTES);
    }

    #[test]
    fn test_constants_match_header() {
        let mismatches = header_mismatches();
        assert!(mismatches.is_empty(), "robot_if.h mismatches: {:?}", mismatches);
    }

    #[test]
    fn test_storage_is_aligned() {
        let backend = NativeBackend::new();
        assert_eq!(backend.raw() as usize % ROBOT_IF_STORAGE_ALIGN, 0);
    }
}

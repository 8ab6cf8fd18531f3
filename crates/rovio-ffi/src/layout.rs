// 本文件同时被 build.rs 通过 include! 引入，不能使用内部属性（`//!`、`#![..]`）。

use rovio_protocol::constants::HEADER_CONSTANTS;

/// `robot_if_t` 存储的字节数上限
///
/// `native` 构建会断言所链接 `robot_if.h` 中 `sizeof(robot_if_t)` 不超过此值。
pub const ROBOT_IF_STORAGE_BYTES: usize = 64 * 1024;

/// `robot_if_t` 存储的对齐
pub const ROBOT_IF_STORAGE_ALIGN: usize = 16;

/// 校验 shim 的静态库名
pub const ABI_CHECK_LIB: &str = "rovio_abi_check";

/// 生成对照 `robot_if.h` 编译的 C 校验源码
///
/// 静态断言覆盖存储大小、对齐以及 [`HEADER_CONSTANTS`] 的每一项，
/// 任何一项不成立都会让 C 编译失败。另外导出实际布局和常量值供运行时核对。
pub fn abi_check_source() -> String {
    let mut src = String::from(
        "/* generated by rovio-ffi build.rs */\n\
         #include <stddef.h>\n\
         #include <robot_if.h>\n\n",
    );

    src.push_str(&format!(
        "_Static_assert(sizeof(robot_if_t) <= {bytes}, \
         \"sizeof(robot_if_t) exceeds ROBOT_IF_STORAGE_BYTES ({bytes})\");\n",
        bytes = ROBOT_IF_STORAGE_BYTES
    ));
    src.push_str(&format!(
        "_Static_assert(_Alignof(robot_if_t) <= {align}, \
         \"_Alignof(robot_if_t) exceeds ROBOT_IF_STORAGE_ALIGN ({align})\");\n",
        align = ROBOT_IF_STORAGE_ALIGN
    ));
    for (name, value) in HEADER_CONSTANTS {
        src.push_str(&format!(
            "_Static_assert({name} == {value}, \"{name} != {value}\");\n"
        ));
    }

    src.push_str(
        "\nsize_t rovio_robot_if_size(void) { return sizeof(robot_if_t); }\n\
         size_t rovio_robot_if_align(void) { return _Alignof(robot_if_t); }\n\n\
         static const int rovio_header_values[] = {\n",
    );
    for (name, _) in HEADER_CONSTANTS {
        src.push_str(&format!("    {name},\n"));
    }
    src.push_str(
        "};\n\n\
         int rovio_header_constant(size_t index) { return rovio_header_values[index]; }\n",
    );
    src
}

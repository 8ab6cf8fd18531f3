//! 构建脚本
//!
//! 启用 `native` 时，对照系统 `robot_if.h` 编译一个 C 校验 shim：
//! `robot_if_t` 装不进预留存储，或任何 `RI_*` 常量与本地取值不一致，构建都会失败。
//!
//! 环境变量：
//! - `ROBOT_IF_INCLUDE_DIR`：`robot_if.h` 所在目录（不在默认搜索路径时）
//! - `ROBOT_IF_LIB_DIR`：`librobot_if` 所在目录

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/layout.rs");
    println!("cargo:rerun-if-env-changed=ROBOT_IF_INCLUDE_DIR");
    println!("cargo:rerun-if-env-changed=ROBOT_IF_LIB_DIR");

    #[cfg(feature = "native")]
    native::check_header();
}

#[cfg(feature = "native")]
mod layout {
    include!("src/layout.rs");
}

#[cfg(feature = "native")]
mod native {
    use super::layout;
    use std::env;
    use std::path::PathBuf;

    pub fn check_header() {
        // docs.rs 上没有 robot_if.h
        if env::var_os("DOCS_RS").is_some() {
            return;
        }
        let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
        let source = out_dir.join("abi_check.c");
        std::fs::write(&source, layout::abi_check_source())
            .unwrap_or_else(|e| panic!("failed to write {}: {}", source.display(), e));

        let mut build = cc::Build::new();
        build.file(&source).flag_if_supported("-std=c11").warnings(false);
        if let Some(dir) = env::var_os("ROBOT_IF_INCLUDE_DIR") {
            build.include(dir);
        }
        if let Err(e) = build.try_compile(layout::ABI_CHECK_LIB) {
            panic!(
                "robot_if.h does not match rovio-ffi (storage layout or RI_* constants); \
                 see the _Static_assert messages above: {}",
                e
            );
        }

        if let Some(dir) = env::var_os("ROBOT_IF_LIB_DIR") {
            println!("cargo:rustc-link-search=native={}", PathBuf::from(dir).display());
        }
    }
}

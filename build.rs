//! Build script to compile the C search variants.

use std::env;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(c_implementation_active)");
    println!("cargo:rerun-if-env-changed=SEARCH_LAB_NO_C");

    if env::var_os("SEARCH_LAB_NO_C").is_some() {
        println!("cargo:warning=SEARCH_LAB_NO_C set. C variants disabled.");
        return;
    }

    let probe = cc::Build::new();
    let compiler = match probe.try_get_compiler() {
        Ok(compiler) => compiler,
        Err(err) => {
            println!("cargo:warning=No usable C compiler ({err}). C variants disabled.");
            return;
        }
    };

    let compiler_name = if compiler.is_like_clang() {
        let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
        if target_os == "macos" {
            "Apple Clang"
        } else {
            "Clang"
        }
    } else if compiler.is_like_gnu() {
        "GCC"
    } else if compiler.is_like_msvc() {
        "MSVC"
    } else {
        println!("cargo:warning=C compiler is not GCC, Clang or MSVC. C variants disabled.");
        return;
    };

    let c_files: Vec<_> = match glob::glob("src/**/*.c") {
        Ok(paths) => paths.filter_map(Result::ok).collect(),
        Err(err) => {
            println!("cargo:warning=Bad glob pattern ({err}). C variants disabled.");
            return;
        }
    };
    if c_files.is_empty() {
        return;
    }

    let mut build = cc::Build::new();
    for file in &c_files {
        println!("cargo:rerun-if-changed={}", file.display());
        build.file(file);
    }

    // Integer compares only; no -ffast-math, no -march=native.
    build.opt_level(3).warnings(true);

    if let Err(err) = build.try_compile("linear_search_c") {
        println!("cargo:warning=C compilation failed ({err}). C variants disabled.");
        return;
    }

    println!("cargo:rustc-cfg=c_implementation_active");
    println!("cargo:rustc-env=C_COMPILER_NAME={}", compiler_name);
}

fn main() {
    let src_dir = std::path::Path::new("src");

    let parser_path = src_dir.join("parser.c");
    let scanner_path = src_dir.join("scanner.c");

    println!("cargo:rerun-if-changed={}", parser_path.display());
    println!("cargo:rerun-if-changed={}", scanner_path.display());
    println!("cargo:rerun-if-changed={}", src_dir.join("tree_sitter/parser.h").display());

    let mut build = cc::Build::new();

    build
        .include(src_dir)
        .warnings(false)
        .flag_if_supported("-Wno-unused-parameter")
        .flag_if_supported("-Wno-unused-but-set-variable")
        .flag_if_supported("-Wno-trigraphs");

    #[cfg(target_env = "msvc")]
    build.flag("-utf-8");

    build.file(&parser_path);
    build.file(&scanner_path);

    build.compile("tree-sitter-ucode");
}

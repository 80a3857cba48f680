//! Build script for eve-astc-core
//!
//! Turns `flash.map` (the layout written by the flash image tooling) into
//! the compiled-in image catalog, and refuses to build from a layout that
//! would make transfers read the wrong region.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

#[path = "src/flash_map.rs"]
mod flash_map;

use flash_map::Image;

fn main() {
    println!("cargo:rerun-if-changed=flash.map");
    println!("cargo:rerun-if-changed=src/flash_map.rs");
    println!("cargo:rerun-if-changed=build.rs");

    let map_path = Path::new("flash.map");
    let content = match fs::read_to_string(map_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read flash.map", &e.to_string()),
    };

    let images = match flash_map::parse_layout(&content) {
        Ok(images) => images,
        Err(e) => fail(e.kind.title(), &e.detail),
    };

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("catalog.rs"), generate(&images)).unwrap();
}

fn generate(images: &[Image]) -> String {
    let mut out = String::new();
    out.push_str("// Generated by build.rs from flash.map. Do not edit.\n\n");
    writeln!(
        out,
        "pub(crate) static CATALOG_ENTRIES: [ImageDescriptor; {}] = [",
        images.len()
    )
    .unwrap();

    for (index, image) in images.iter().enumerate() {
        writeln!(out, "    ImageDescriptor {{").unwrap();
        writeln!(out, "        index: {},", index).unwrap();
        writeln!(out, "        name: {:?},", image.name).unwrap();
        writeln!(out, "        flash_offset: {},", image.offset).unwrap();
        writeln!(out, "        byte_length: {},", image.length).unwrap();
        writeln!(out, "        block: AstcBlock::Block{},", image.block).unwrap();
        writeln!(out, "        width: {},", image.width).unwrap();
        writeln!(out, "        height: {},", image.height).unwrap();
        writeln!(out, "    }},").unwrap();
    }

    out.push_str("];\n");
    out
}

fn fail(title: &str, detail: &str) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ║                                                                  ║\n\
        ║  {:<64} ║\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, detail
    );
}

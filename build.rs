use std::fs;
use std::path::Path;

use lightningcss::bundler::{Bundler, FileProvider};
use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions};

const CSS_ENTRY: &str = "assets/css/main.css";
const CSS_OUT: &str = "assets/dist/bundle.css";

// Resolves the @imports in main.css and writes one minified stylesheet that
// the app references through asset!().
fn main() {
    println!("cargo:rerun-if-changed=assets/css");

    fs::create_dir_all("assets/dist").expect("create assets/dist");

    let provider = FileProvider::new();
    let mut bundler = Bundler::new(&provider, None, ParserOptions::default());
    let mut stylesheet = match bundler.bundle(Path::new(CSS_ENTRY)) {
        Ok(sheet) => sheet,
        Err(e) => panic!("bundling {CSS_ENTRY}: {e}"),
    };

    stylesheet
        .minify(MinifyOptions::default())
        .expect("minify bundled css");
    let out = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .expect("print bundled css");

    fs::write(CSS_OUT, out.code).unwrap_or_else(|e| panic!("writing {CSS_OUT}: {e}"));
}

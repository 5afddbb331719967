//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! ANSI Conversion Demonstration
//!
//! Converts a colored log, read from the file given as the first argument or
//! from a built in sample, and prints it in every output format.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example ansi_demo
//! cargo run --example ansi_demo -- build.log
//! RUST_LOG=trace cargo run --example ansi_demo
//! ```

use ansimark::{Document, ExportConfig, OutputFormat};
use std::io::Write;

const SAMPLE: &str = "\x1b[1;34m==>\x1b[0m \x1b[1mBuilding\x1b[22m ansimark\n\
                      \x1b[32m   ok\x1b[0m tokenizer <parser.rs>\n\
                      \x1b[33;4mwarn\x1b[0m unused import in \x1b[38;5;208mrender.rs\x1b[0m\n\
                      \x1b[41;97m FAIL \x1b[0m \x1b[38;2;255;105;180mexport\x1b[0m & friends\n";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => SAMPLE.to_string(),
    };

    let config = ExportConfig::default();
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    for format in [OutputFormat::Original, OutputFormat::Plain, OutputFormat::Html] {
        let document = Document::new(&input, format, &config);
        writeln!(
            stdout,
            "--- {} ({}, {}) ---",
            document.file_name(&config),
            format,
            format.mime_type()
        )?;
        document.write_to(&mut stdout)?;
        writeln!(stdout)?;
    }

    Ok(())
}

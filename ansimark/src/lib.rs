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

//! Convert text containing ANSI SGR escape sequences into styled HTML markup
//! or into plain text with the sequences removed.
//!
//! ```
//! assert_eq!(
//!     ansimark::render_markup("\x1b[31mRed\x1b[0m"),
//!     "<span style=\"color:#ff4d4f;\">Red</span>"
//! );
//! assert_eq!(ansimark::render_plain("\x1b[31mRed\x1b[0m"), "Red");
//! ```

mod color;
mod config;
mod consts;
mod export;
mod parser;
mod render;
mod result;
mod style;
mod token;

pub use self::color::Color;
pub use self::config::ExportConfig;
pub use self::export::{Document, OutputFormat};
pub use self::parser::Tokenizer;
pub use self::render::{MarkupRenderer, PlainRenderer, Renderer, escape_html};
pub use self::result::{ExportError, ExportResult};
pub use self::style::{Slant, Style, Underline, Weight};
pub use self::token::Token;

use std::borrow::Cow;
use tracing::instrument;

/// Tokenizes `input` into text runs and style events.
pub fn tokenize(input: &str) -> Vec<Token> {
    Tokenizer::tokenize(input)
}

/// Converts `input` into HTML-safe markup with inline styled spans.
#[instrument(skip_all, fields(len = input.len()))]
pub fn render_markup(input: &str) -> String {
    let tokens = Tokenizer::tokenize(input);
    let mut out = String::with_capacity(input.len());
    MarkupRenderer.render_tokens(&tokens, &mut out);
    out
}

/// Removes every recognized SGR sequence from `input`.
///
/// Input without an escape character is returned borrowed.
#[instrument(skip_all, fields(len = input.len()))]
pub fn render_plain(input: &str) -> Cow<'_, str> {
    if !input.contains(consts::ESC) {
        return Cow::Borrowed(input);
    }
    let tokens = Tokenizer::tokenize(input);
    let mut out = String::with_capacity(input.len());
    PlainRenderer.render_tokens(&tokens, &mut out);
    Cow::Owned(out)
}

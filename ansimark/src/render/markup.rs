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

use super::Renderer;
use crate::Token;

/// Renders tokens as HTML with one inline styled `<span>` per style run.
///
/// Spans never nest. Each [`Token::StyleChange`] closes the open span and
/// opens a new one carrying the full cumulative style, [`Token::Reset`]
/// closes the open span, and any span still open at the end is closed.
///
/// # Examples
///
/// ```
/// use ansimark::{MarkupRenderer, Renderer, Tokenizer};
///
/// let tokens = Tokenizer::tokenize("\x1b[31mRed\x1b[0m");
/// assert_eq!(
///     MarkupRenderer.render(&tokens),
///     "<span style=\"color:#ff4d4f;\">Red</span>"
/// );
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkupRenderer;

impl Renderer for MarkupRenderer {
    fn render_tokens(&self, tokens: &[Token], out: &mut String) {
        let mut open = false;
        for token in tokens {
            match token {
                Token::Text(value) => escape_html_into(value, out),
                Token::StyleChange(style) => {
                    if open {
                        out.push_str("</span>");
                    }
                    out.push_str("<span style=\"");
                    // Writing into a String cannot fail.
                    let _ = style.write_css(out);
                    out.push_str("\">");
                    open = true;
                }
                Token::Reset => {
                    if open {
                        out.push_str("</span>");
                    }
                    open = false;
                }
            }
        }
        if open {
            out.push_str("</span>");
        }
    }
}

/// Escapes `&`, `<`, `>`, `"` and `'` for safe inclusion in HTML.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_html_into(text, &mut out);
    out
}

fn escape_html_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
}

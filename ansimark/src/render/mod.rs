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

//! Renderers turning a [`Token`] stream into output text.

mod markup;
mod plain;

pub use self::markup::{MarkupRenderer, escape_html};
pub use self::plain::PlainRenderer;

use crate::Token;

/// A stateless consumer of a token stream.
///
/// Renderers must agree on text extraction: every [`Token::Text`] value is
/// emitted exactly once, in order, differing only in escaping.
pub trait Renderer {
    /// Appends the rendering of `tokens` to `out`.
    fn render_tokens(&self, tokens: &[Token], out: &mut String);

    /// Renders `tokens` into a new string.
    fn render(&self, tokens: &[Token]) -> String {
        let mut out = String::new();
        self.render_tokens(tokens, &mut out);
        out
    }
}

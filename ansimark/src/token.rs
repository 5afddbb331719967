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

use crate::Style;

/// A unit of tokenized ANSI text.
///
/// Tokens appear in the same order as their source in the input. `Text` is
/// never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// A run of literal characters.
    Text(String),
    /// The full cumulative style in effect from this point on.
    StyleChange(Style),
    /// All attributes cleared by SGR `0`.
    Reset,
}

impl Token {
    /// Returns the literal text if this is a [`Token::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Token::Text(value) => Some(value),
            _ => None,
        }
    }
}

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

use crate::consts::{CSI_OPEN, ESC, PARAM_SEPARATOR, SGR_FINAL};
use crate::{Color, Slant, Style, Token, Underline, Weight};
use std::num::IntErrorKind;
use tracing::{debug, instrument, trace};

/// Internal state machine states for the tokenizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Plain text. Characters are appended to the pending text run.
    Text,

    /// An ESC was seen and the next character decides whether a CSI starts.
    Escape,

    /// Inside `ESC [`, collecting parameter characters until `m`.
    Csi,
}

/// Splits text containing SGR escape sequences into [`Token`]s.
///
/// The tokenizer makes a single left to right pass over its input. Text
/// between sequences is collected into [`Token::Text`] runs, each recognized
/// SGR sequence turns into zero or more [`Token::StyleChange`] and
/// [`Token::Reset`] tokens, and anything that does not form a complete
/// `ESC [ ... m` sequence stays in the text.
///
/// The terminator search stops at the first `m`, whatever precedes it. A CSI
/// that never reaches an `m` is emitted as literal text, including the
/// `ESC [` prefix.
///
/// # Examples
///
/// ```
/// use ansimark::{Tokenizer, Token};
///
/// let tokens = Tokenizer::tokenize("\x1b[1mHi\x1b[0m");
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1], Token::Text("Hi".to_string()));
/// assert_eq!(tokens[2], Token::Reset);
/// ```
pub struct Tokenizer {
    /// Current state of the state machine.
    state: State,

    /// Literal text waiting to be flushed as a [`Token::Text`].
    pending: String,

    /// Parameter characters of the CSI currently being scanned.
    params: String,

    /// Cumulative style since the start of input or the last reset.
    style: Style,

    /// Tokens produced so far.
    tokens: Vec<Token>,
}

impl Tokenizer {
    fn new() -> Self {
        Self {
            state: State::Text,
            pending: String::new(),
            params: String::new(),
            style: Style::default(),
            tokens: Vec::new(),
        }
    }

    /// Tokenizes the whole input.
    ///
    /// This never fails. Malformed or unrecognized sequences degrade to
    /// literal text or are ignored.
    #[instrument(skip_all, fields(len = input.len()))]
    pub fn tokenize(input: &str) -> Vec<Token> {
        let mut tokenizer = Tokenizer::new();
        for ch in input.chars() {
            tokenizer.next(ch);
        }
        let tokens = tokenizer.finish();
        debug!(tokens = tokens.len(), "tokenized input");
        tokens
    }

    fn next(&mut self, ch: char) {
        match self.state {
            State::Text => self.process_text(ch),
            State::Escape => self.process_escape(ch),
            State::Csi => self.process_csi(ch),
        }
    }

    fn process_text(&mut self, ch: char) {
        if ch == ESC {
            self.state = State::Escape;
        } else {
            self.pending.push(ch);
        }
    }

    fn process_escape(&mut self, ch: char) {
        match ch {
            CSI_OPEN => {
                self.state = State::Csi;
                self.params.clear();
            }
            ESC => {
                // The first ESC was a lone escape, the second may still open a CSI.
                self.pending.push(ESC);
            }
            _ => {
                self.pending.push(ESC);
                self.pending.push(ch);
                self.state = State::Text;
            }
        }
    }

    fn process_csi(&mut self, ch: char) {
        if ch == SGR_FINAL {
            self.state = State::Text;
            self.flush();
            let params = std::mem::take(&mut self.params);
            let codes = parse_codes(&params);
            self.apply_codes(&codes);
        } else {
            self.params.push(ch);
        }
    }

    fn finish(mut self) -> Vec<Token> {
        match self.state {
            State::Text => {}
            State::Escape => self.pending.push(ESC),
            State::Csi => {
                trace!(params = %self.params, "unterminated control sequence kept as text");
                self.pending.push(ESC);
                self.pending.push(CSI_OPEN);
                let params = std::mem::take(&mut self.params);
                self.pending.push_str(&params);
            }
        }
        self.flush();
        self.tokens
    }

    fn flush(&mut self) {
        if !self.pending.is_empty() {
            let text = std::mem::take(&mut self.pending);
            self.tokens.push(Token::Text(text));
        }
    }

    fn reset(&mut self) {
        self.style = Style::default();
        self.tokens.push(Token::Reset);
    }

    fn apply(&mut self, change: Style) {
        self.style.merge(&change);
        self.tokens.push(Token::StyleChange(self.style.clone()));
    }

    fn apply_codes(&mut self, codes: &[u32]) {
        let mut i = 0;
        while i < codes.len() {
            let code = codes[i];
            match code {
                0 => self.reset(),
                1 | 22 => self.apply(Style {
                    weight: Weight::from_sgr(code),
                    ..Default::default()
                }),
                3 | 23 => self.apply(Style {
                    slant: Slant::from_sgr(code),
                    ..Default::default()
                }),
                4 | 24 => self.apply(Style {
                    underline: Underline::from_sgr(code),
                    ..Default::default()
                }),
                30..=37 | 90..=97 => self.apply(Style {
                    foreground: Color::from_sgr(code),
                    ..Default::default()
                }),
                40..=47 | 100..=107 => self.apply(Style {
                    background: Color::from_sgr(code),
                    ..Default::default()
                }),
                38 | 48 => {
                    let (color, consumed) = extended_color(&codes[i + 1..]);
                    i += consumed;
                    match color {
                        Some(color) if code == 38 => self.apply(Style {
                            foreground: Some(color),
                            ..Default::default()
                        }),
                        Some(color) => self.apply(Style {
                            background: Some(color),
                            ..Default::default()
                        }),
                        None => trace!(code, "extended color without sub-parameters ignored"),
                    }
                }
                _ => trace!(code, "unsupported graphic rendition code ignored"),
            }
            i += 1;
        }
    }
}

/// Decodes the arguments following a `38` or `48` code.
///
/// Returns the color, if any, and the number of arguments consumed.
fn extended_color(args: &[u32]) -> (Option<Color>, usize) {
    match args {
        [5, index, ..] => (Some(Color::from_fixed(*index)), 2),
        [2, r, g, b, ..] => (Some(Color::from_rgb(*r, *g, *b)), 4),
        _ => (None, 0),
    }
}

/// Splits a parameter string on `;` keeping only the numeric fragments.
///
/// Numeric fragments too large for a `u32` saturate to `u32::MAX` so they
/// still occupy their parameter slot.
fn parse_codes(params: &str) -> Vec<u32> {
    params
        .split(PARAM_SEPARATOR)
        .filter_map(|fragment| match fragment.parse::<u32>() {
            Ok(code) => Some(code),
            Err(err) if *err.kind() == IntErrorKind::PosOverflow => {
                trace!(fragment, "oversized parameter saturated");
                Some(u32::MAX)
            }
            Err(_) => {
                if !fragment.is_empty() {
                    trace!(fragment, "non-numeric parameter dropped");
                }
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn text(value: &str) -> Token {
        Token::Text(value.to_string())
    }

    fn fg(hex: &Color) -> Style {
        Style {
            foreground: Some(hex.clone()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(Tokenizer::tokenize("").is_empty());
    }

    #[test]
    fn test_plain_text_is_one_token() {
        assert_eq!(Tokenizer::tokenize("Hello, world!"), vec![text("Hello, world!")]);
    }

    #[test]
    fn test_basic_color_and_reset() {
        let red = Color::from_sgr(31).unwrap();
        assert_eq!(
            Tokenizer::tokenize("\x1b[31mRed\x1b[0m"),
            vec![Token::StyleChange(fg(&red)), text("Red"), Token::Reset]
        );
    }

    #[test]
    fn test_one_style_change_per_code() {
        let red = Color::from_sgr(31).unwrap();
        let tokens = Tokenizer::tokenize("\x1b[1;31mX");
        assert_eq!(
            tokens,
            vec![
                Token::StyleChange(Style {
                    weight: Some(Weight::Bold),
                    ..Default::default()
                }),
                Token::StyleChange(Style {
                    weight: Some(Weight::Bold),
                    foreground: Some(red),
                    ..Default::default()
                }),
                text("X"),
            ]
        );
    }

    #[test]
    fn test_style_is_cumulative_across_sequences() {
        let tokens = Tokenizer::tokenize("\x1b[1mA\x1b[4mB");
        assert_eq!(
            tokens[2],
            Token::StyleChange(Style {
                weight: Some(Weight::Bold),
                underline: Some(Underline::On),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_reset_clears_accumulated_style() {
        let tokens = Tokenizer::tokenize("\x1b[1;3mA\x1b[0;4mB");
        assert_eq!(tokens[3], Token::Reset);
        assert_eq!(
            tokens[4],
            Token::StyleChange(Style {
                underline: Some(Underline::On),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_fixed_and_true_color() {
        let tokens = Tokenizer::tokenize("\x1b[38;5;196;48;2;1;2;3mX");
        assert_eq!(
            tokens[1],
            Token::StyleChange(Style {
                foreground: Some(Color::from_rgb(255, 0, 0)),
                background: Some(Color::from_rgb(1, 2, 3)),
                ..Default::default()
            })
        );
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_extended_color_arguments_are_consumed() {
        // 31 here is the fixed index, not a standard color code.
        let tokens = Tokenizer::tokenize("\x1b[38;5;31mX");
        assert_eq!(tokens, vec![Token::StyleChange(fg(&Color::from_fixed(31))), text("X")]);
    }

    #[test]
    fn test_incomplete_extended_color_consumes_nothing() {
        let tokens = Tokenizer::tokenize("\x1b[38;2;1;2mX");
        // 38 is ignored, 2 is ignored, 1 sets bold, 2 is ignored.
        assert_eq!(
            tokens,
            vec![
                Token::StyleChange(Style {
                    weight: Some(Weight::Bold),
                    ..Default::default()
                }),
                text("X"),
            ]
        );
        assert_eq!(Tokenizer::tokenize("\x1b[48mX"), vec![text("X")]);
        assert_eq!(Tokenizer::tokenize("\x1b[38;5mX"), vec![text("X")]);
    }

    #[test]
    fn test_empty_parameter_list_is_noop() {
        assert_eq!(Tokenizer::tokenize("a\x1b[mb"), vec![text("a"), text("b")]);
        assert_eq!(Tokenizer::tokenize("\x1b[;m"), vec![]);
    }

    #[test]
    fn test_non_numeric_fragments_are_dropped() {
        let tokens = Tokenizer::tokenize("\x1b[x;1;;y4mZ");
        assert_eq!(tokens.len(), 2);
        assert_eq!(
            tokens[0],
            Token::StyleChange(Style {
                weight: Some(Weight::Bold),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_unknown_codes_emit_nothing() {
        assert_eq!(Tokenizer::tokenize("\x1b[2;5;39;49mX"), vec![text("X")]);
    }

    #[test]
    fn test_unterminated_sequence_is_literal() {
        assert_eq!(
            Tokenizer::tokenize("ok \x1b[31 broken"),
            vec![text("ok \x1b[31 broken")]
        );
        assert_eq!(Tokenizer::tokenize("\x1b["), vec![text("\x1b[")]);
    }

    #[test]
    fn test_lone_escape_is_literal() {
        assert_eq!(Tokenizer::tokenize("a\x1bb"), vec![text("a\x1bb")]);
        assert_eq!(Tokenizer::tokenize("end\x1b"), vec![text("end\x1b")]);
        assert_eq!(Tokenizer::tokenize("\x1b]0;title\x07"), vec![text("\x1b]0;title\x07")]);
    }

    #[test]
    fn test_double_escape_before_csi() {
        let tokens = Tokenizer::tokenize("\x1b\x1b[1mX");
        assert_eq!(tokens[0], text("\x1b"));
        assert!(matches!(tokens[1], Token::StyleChange(_)));
        assert_eq!(tokens[2], text("X"));
    }

    #[test]
    fn test_terminator_search_spans_other_characters() {
        // A non-SGR CSI swallows everything up to the next `m`.
        assert_eq!(Tokenizer::tokenize("\x1b[2Jhome tail"), vec![text("e tail")]);
    }

    #[test]
    fn test_multibyte_text_is_preserved() {
        assert_eq!(
            Tokenizer::tokenize("héllo \x1b[32m世界\x1b[0m"),
            vec![
                text("héllo "),
                Token::StyleChange(fg(&Color::from_sgr(32).unwrap())),
                text("世界"),
                Token::Reset,
            ]
        );
    }

    #[test]
    fn test_parse_codes() {
        assert_eq!(parse_codes(""), Vec::<u32>::new());
        assert_eq!(parse_codes("1;31"), vec![1, 31]);
        assert_eq!(parse_codes("-1;+;1.5;7"), vec![7]);
        assert_eq!(parse_codes("+5;+0"), vec![5, 0]);
        assert_eq!(parse_codes("99999999999;4"), vec![u32::MAX, 4]);
        assert_eq!(parse_codes("-99999999999;4"), vec![4]);
    }

    #[test]
    fn test_oversized_parameter_keeps_its_slot() {
        let tokens = Tokenizer::tokenize("\x1b[38;5;99999999999;1mX");
        assert_eq!(
            tokens,
            vec![
                Token::StyleChange(fg(&Color::from_fixed(u32::MAX))),
                Token::StyleChange(Style {
                    foreground: Some(Color::from_fixed(u32::MAX)),
                    weight: Some(Weight::Bold),
                    ..Default::default()
                }),
                text("X"),
            ]
        );
    }

    #[test]
    fn test_oversized_fixed_index_does_not_panic() {
        let tokens = Tokenizer::tokenize("\x1b[48;5;4294967295mY");
        assert_eq!(
            tokens[0],
            Token::StyleChange(Style {
                background: Some(Color::from_fixed(u32::MAX)),
                ..Default::default()
            })
        );
    }

    #[test]
    #[traced_test]
    fn test_degradation_is_traced() {
        Tokenizer::tokenize("\x1b[38;5mA\x1b[xyz;7mB\x1b[31");
        assert!(logs_contain("extended color without sub-parameters ignored"));
        assert!(logs_contain("non-numeric parameter dropped"));
        assert!(logs_contain("unsupported graphic rendition code ignored"));
        assert!(logs_contain("unterminated control sequence kept as text"));
    }
}

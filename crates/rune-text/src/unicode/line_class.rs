//! Resumable UAX #14 line-break automaton.
//!
//! `unicode-linebreak` exposes a whole-string iterator, which cannot be
//! paused between grapheme clusters. This module drives the same pair rules
//! one code point at a time from a small `Copy` state, so a scan can be
//! resumed from a cursor without revisiting consumed text.

use unicode_linebreak::{break_property, BreakClass};

use crate::layout::BreakKind;

/// Context carried through a run of spaces (LB8, LB14-LB17).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpaceRun {
    None,
    /// `ZW SP*`
    ZeroWidth,
    /// `OP SP*`
    Open,
    /// `QU SP*`
    Quote,
    /// `(CL | CP) SP*`
    Close,
    /// `B2 SP*`
    BreakBoth,
}

/// Resume point of the line-break automaton.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineBreakState {
    /// Resolved class of the last base character, `None` at start of text.
    prev: Option<BreakClass>,
    space_run: SpaceRun,
    after_zwj: bool,
    /// `HL (HY | BA)` just seen (LB21a).
    hebrew_hyphen: bool,
    /// Odd number of regional indicators in the current run (LB30a).
    ri_odd: bool,
}

impl Default for LineBreakState {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBreakState {
    /// State at the start of text.
    pub const fn new() -> Self {
        Self {
            prev: None,
            space_run: SpaceRun::None,
            after_zwj: false,
            hebrew_hyphen: false,
            ri_odd: false,
        }
    }

    /// Consume one code point and return the break action for the boundary
    /// *before* it. Returns `None` at start of text (LB2).
    pub fn feed(&mut self, c: char) -> Option<BreakKind> {
        let raw = resolve(break_property(c as u32));
        let is_mark = matches!(raw, BreakClass::CombiningMark | BreakClass::ZeroWidthJoiner);

        let Some(prev) = self.prev else {
            // LB10: a leading mark has no base to attach to.
            let class = if is_mark { BreakClass::Alphabetic } else { raw };
            self.advance(class, raw);
            return None;
        };

        // LB9: X (CM | ZWJ)* keeps the properties of X.
        if is_mark && !is_line_end_or_space(prev) {
            self.after_zwj = raw == BreakClass::ZeroWidthJoiner;
            return Some(BreakKind::NoBreak);
        }

        let class = if is_mark { BreakClass::Alphabetic } else { raw };
        let action = self.pair(prev, class);
        self.advance(class, raw);
        Some(action)
    }

    /// Break action before `c` without consuming it.
    pub fn peek(&self, c: char) -> BreakKind {
        let mut probe = *self;
        probe.feed(c).unwrap_or(BreakKind::NoBreak)
    }

    fn advance(&mut self, class: BreakClass, raw: BreakClass) {
        use BreakClass as C;

        self.space_run = match class {
            C::ZeroWidthSpace => SpaceRun::ZeroWidth,
            C::OpenPunctuation => SpaceRun::Open,
            C::Quotation => SpaceRun::Quote,
            C::ClosePunctuation | C::CloseParenthesis => SpaceRun::Close,
            C::BeforeAndAfter => SpaceRun::BreakBoth,
            C::Space => self.space_run,
            _ => SpaceRun::None,
        };
        self.hebrew_hyphen =
            matches!(class, C::Hyphen | C::After) && self.prev == Some(C::HebrewLetter);
        self.ri_odd = class == C::RegionalIndicator && !self.ri_odd;
        self.after_zwj = raw == C::ZeroWidthJoiner;
        self.prev = Some(class);
    }

    fn pair(&self, prev: BreakClass, cur: BreakClass) -> BreakKind {
        use BreakClass as C;
        use BreakKind::{Mandatory, NoBreak, Optional};

        // LB4, LB5
        match (prev, cur) {
            (C::Mandatory, _) => return Mandatory,
            (C::CarriageReturn, C::LineFeed) => return NoBreak,
            (C::CarriageReturn | C::LineFeed | C::NextLine, _) => return Mandatory,
            _ => {}
        }
        // LB6, LB7
        if is_line_end_or_space(cur) {
            return NoBreak;
        }
        // LB8, LB8a
        if self.space_run == SpaceRun::ZeroWidth {
            return Optional;
        }
        if self.after_zwj {
            return NoBreak;
        }
        // LB11, LB12, LB12a
        if prev == C::WordJoiner || cur == C::WordJoiner || prev == C::NonBreakingGlue {
            return NoBreak;
        }
        if cur == C::NonBreakingGlue && !matches!(prev, C::Space | C::After | C::Hyphen) {
            return NoBreak;
        }
        // LB13
        if matches!(
            cur,
            C::ClosePunctuation
                | C::CloseParenthesis
                | C::Exclamation
                | C::InfixSeparator
                | C::Symbol
        ) {
            return NoBreak;
        }
        // LB14-LB17
        match (self.space_run, cur) {
            (SpaceRun::Open, _)
            | (SpaceRun::Quote, C::OpenPunctuation)
            | (SpaceRun::Close, C::NonStarter)
            | (SpaceRun::BreakBoth, C::BeforeAndAfter) => return NoBreak,
            _ => {}
        }
        // LB18
        if prev == C::Space {
            return Optional;
        }
        // LB19, LB20
        if prev == C::Quotation || cur == C::Quotation {
            return NoBreak;
        }
        if prev == C::Contingent || cur == C::Contingent {
            return Optional;
        }
        // LB21, LB21a, LB21b, LB22
        if matches!(cur, C::After | C::Hyphen | C::NonStarter | C::Inseparable)
            || prev == C::Before
            || self.hebrew_hyphen
            || (prev == C::Symbol && cur == C::HebrewLetter)
        {
            return NoBreak;
        }

        if joins(prev, cur) || (self.ri_odd && cur == C::RegionalIndicator) {
            NoBreak
        } else {
            // LB31
            Optional
        }
    }
}

/// LB1 resolution of classes the pair rules do not handle directly.
fn resolve(class: BreakClass) -> BreakClass {
    use BreakClass as C;

    match class {
        C::Ambiguous | C::Surrogate | C::Unknown | C::ComplexContext => C::Alphabetic,
        C::ConditionalJapaneseStarter => C::NonStarter,
        other => other,
    }
}

fn is_line_end_or_space(class: BreakClass) -> bool {
    use BreakClass as C;

    matches!(
        class,
        C::Mandatory
            | C::CarriageReturn
            | C::LineFeed
            | C::NextLine
            | C::Space
            | C::ZeroWidthSpace
    )
}

/// Context-free pairs that never break (LB23-LB30b).
fn joins(prev: BreakClass, cur: BreakClass) -> bool {
    use BreakClass as C;

    let letter = |c: BreakClass| matches!(c, C::Alphabetic | C::HebrewLetter);
    let ideo = |c: BreakClass| matches!(c, C::Ideographic | C::EmojiBase | C::EmojiModifier);
    let jamo = |c: BreakClass| {
        matches!(
            c,
            C::HangulLJamo
                | C::HangulVJamo
                | C::HangulTJamo
                | C::HangulLvSyllable
                | C::HangulLvtSyllable
        )
    };

    // LB23
    (letter(prev) && cur == C::Numeric)
        || (prev == C::Numeric && letter(cur))
        // LB23a
        || (prev == C::Prefix && ideo(cur))
        || (ideo(prev) && cur == C::Postfix)
        // LB24
        || (matches!(prev, C::Prefix | C::Postfix) && letter(cur))
        || (letter(prev) && matches!(cur, C::Prefix | C::Postfix))
        // LB25
        || (matches!(prev, C::ClosePunctuation | C::CloseParenthesis | C::Numeric)
            && matches!(cur, C::Postfix | C::Prefix))
        || (matches!(prev, C::Postfix | C::Prefix)
            && matches!(cur, C::OpenPunctuation | C::Numeric))
        || (matches!(prev, C::Hyphen | C::InfixSeparator | C::Numeric | C::Symbol)
            && cur == C::Numeric)
        // LB26
        || (prev == C::HangulLJamo
            && matches!(
                cur,
                C::HangulLJamo | C::HangulVJamo | C::HangulLvSyllable | C::HangulLvtSyllable
            ))
        || (matches!(prev, C::HangulVJamo | C::HangulLvSyllable)
            && matches!(cur, C::HangulVJamo | C::HangulTJamo))
        || (matches!(prev, C::HangulTJamo | C::HangulLvtSyllable) && cur == C::HangulTJamo)
        // LB27
        || (jamo(prev) && cur == C::Postfix)
        || (prev == C::Prefix && jamo(cur))
        // LB28, LB29
        || (letter(prev) && letter(cur))
        || (prev == C::InfixSeparator && letter(cur))
        // LB30
        || ((letter(prev) || prev == C::Numeric) && cur == C::OpenPunctuation)
        || (prev == C::CloseParenthesis && (letter(cur) || cur == C::Numeric))
        // LB30b
        || (prev == C::EmojiBase && cur == C::EmojiModifier)
}

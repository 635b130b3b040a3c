//! Token-level lookups into GraphQL source text.
//!
//! `graphql_parser` records a position for definitions, fields, directives
//! and a few other nodes, but not for the named types nested inside them.
//! [`SourceScanner`] re-reads the source from a recorded position to find
//! where those named types start. Every lookup checks the tokens it steps
//! over, so a source that doesn't line up yields `None` rather than a wrong
//! position.

use crate::loc::SourcePosition;

/// One token (or optional token group) to step over while scanning.
#[derive(Clone, Copy, Debug)]
pub(super) enum Step {
    /// Zero or more `@name(args...)` directive annotations.
    Directives,
    Keyword(&'static str),
    Name,
    OptionalGroup(char, char),
    OptionalPunct(char),
    /// An optional description string or block string.
    OptionalString,
    Punct(char),
}

pub(super) struct SourceScanner<'src> {
    line_starts: Vec<usize>,
    src: &'src str,
}
impl<'src> SourceScanner<'src> {
    pub(super) fn new(src: &'src str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(src.match_indices('\n').map(|(idx, _)| idx + 1))
            .collect();
        Self { line_starts, src }
    }

    /// Byte offset of a position as `graphql_parser` counts them (tabs are 8
    /// columns wide, `\r` and the BOM take no columns).
    pub(super) fn offset_of(&self, position: SourcePosition) -> Option<usize> {
        let line_start = *self.line_starts.get(position.line.checked_sub(1)?)?;
        let mut column = 1;
        for (idx, ch) in self.src.get(line_start..)?.char_indices() {
            if column == position.column {
                return Some(line_start + idx);
            }
            if ch == '\n' {
                break;
            }
            column += column_width(ch);
        }
        None
    }

    pub(super) fn position_at(&self, offset: usize) -> Option<SourcePosition> {
        let line_idx = self.line_starts
            .partition_point(|&line_start| line_start <= offset)
            .checked_sub(1)?;
        let line_start = *self.line_starts.get(line_idx)?;
        let column = 1 + self.src
            .get(line_start..offset)?
            .chars()
            .map(column_width)
            .sum::<usize>();
        Some(SourcePosition::new(line_idx + 1, column))
    }

    /// Start offset of the token that follows `steps`, scanning from
    /// `position`.
    pub(super) fn seek(
        &self,
        position: SourcePosition,
        steps: &[Step],
    ) -> Option<usize> {
        let mut offset = self.offset_of(position)?;
        for step in steps {
            offset = self.step(offset, *step)?;
        }
        Some(self.skip_ignored(offset))
    }

    /// The position of `name` if it is the name token starting at `start`.
    pub(super) fn name_position(
        &self,
        start: Option<usize>,
        name: &str,
    ) -> Option<SourcePosition> {
        let start = start?;
        let end = self.name_end(start)?;
        if self.src.get(start..end)? != name {
            return None;
        }
        self.position_at(start)
    }

    /// Start offsets of `count` names separated by `separator`, the first of
    /// which starts at `start`.
    pub(super) fn separated_names(
        &self,
        start: Option<usize>,
        count: usize,
        separator: char,
    ) -> Vec<Option<usize>> {
        let mut next = start;
        (0..count).map(|_| {
            let name_start = next;
            next = name_start
                .and_then(|offset| self.step(offset, Step::Name))
                .and_then(|offset| self.step(offset, Step::Punct(separator)))
                .map(|offset| self.skip_ignored(offset));
            name_start
        }).collect()
    }

    /// `(operation keyword, type name start)` for each entry of the
    /// `schema { ... }` definition at `position`, in source order.
    pub(super) fn root_operation_types(
        &self,
        position: SourcePosition,
    ) -> Vec<(&'src str, usize)> {
        let mut found = vec![];
        let mut next = self.seek(position, &[
            Step::Keyword("schema"),
            Step::Directives,
            Step::Punct('{'),
        ]);
        while let Some(offset) = next {
            let Some(operation_end) = self.step(offset, Step::Name) else {
                break;
            };
            let Some(type_start) = self.step(operation_end, Step::Punct(':'))
                .map(|offset| self.skip_ignored(offset)) else {
                break;
            };
            let (Some(operation), Some(type_end)) = (
                self.src.get(offset..operation_end),
                self.step(type_start, Step::Name),
            ) else {
                break;
            };
            found.push((operation, type_start));
            next = Some(self.skip_ignored(type_end));
        }
        found
    }

    pub(super) fn peek(&self, offset: usize) -> Option<char> {
        self.src.get(offset..)?.chars().next()
    }

    pub(super) fn skip_ignored(&self, mut offset: usize) -> usize {
        while let Some(ch) = self.peek(offset) {
            match ch {
                ' ' | '\t' | '\n' | '\r' | ',' | '\u{feff}' =>
                    offset += ch.len_utf8(),
                '#' => offset = self.comment_end(offset),
                _ => break,
            }
        }
        offset
    }

    /// Skip ignored tokens and then `step`; returns the offset just past it.
    pub(super) fn step(&self, offset: usize, step: Step) -> Option<usize> {
        let offset = self.skip_ignored(offset);
        match step {
            Step::Directives => {
                let mut offset = offset;
                while self.peek(offset) == Some('@') {
                    offset = self.step(offset + 1, Step::Name)?;
                    offset = self.step(offset, Step::OptionalGroup('(', ')'))?;
                    offset = self.skip_ignored(offset);
                }
                Some(offset)
            },

            Step::Keyword(keyword) => {
                let end = self.name_end(offset)?;
                (self.src.get(offset..end)? == keyword).then_some(end)
            },

            Step::Name => self.name_end(offset),

            Step::OptionalGroup(open, close) =>
                if self.peek(offset) == Some(open) {
                    self.group_end(offset, open, close)
                } else {
                    Some(offset)
                },

            Step::OptionalPunct(punct) =>
                if self.peek(offset) == Some(punct) {
                    Some(offset + punct.len_utf8())
                } else {
                    Some(offset)
                },

            Step::OptionalString =>
                if self.peek(offset) == Some('"') {
                    self.string_end(offset)
                } else {
                    Some(offset)
                },

            Step::Punct(punct) =>
                (self.peek(offset) == Some(punct))
                    .then_some(offset + punct.len_utf8()),
        }
    }

    fn comment_end(&self, offset: usize) -> usize {
        self.src
            .get(offset..)
            .and_then(|rest| rest.find(['\n', '\r']))
            .map_or(self.src.len(), |idx| offset + idx)
    }

    fn group_end(&self, offset: usize, open: char, close: char) -> Option<usize> {
        let mut depth = 0usize;
        let mut idx = offset;
        while let Some(ch) = self.peek(idx) {
            match ch {
                '"' => {
                    idx = self.string_end(idx)?;
                    continue;
                },
                '#' => {
                    idx = self.comment_end(idx);
                    continue;
                },
                _ if ch == open => depth += 1,
                _ if ch == close => {
                    depth = depth.checked_sub(1)?;
                    if depth == 0 {
                        return Some(idx + ch.len_utf8());
                    }
                },
                _ => (),
            }
            idx += ch.len_utf8();
        }
        None
    }

    fn name_end(&self, offset: usize) -> Option<usize> {
        let rest = self.src.get(offset..)?;
        let mut chars = rest.char_indices();
        match chars.next() {
            Some((_, ch)) if ch == '_' || ch.is_ascii_alphabetic() => (),
            _ => return None,
        }
        let len = chars
            .find(|(_, ch)| !(*ch == '_' || ch.is_ascii_alphanumeric()))
            .map_or(rest.len(), |(idx, _)| idx);
        Some(offset + len)
    }

    fn string_end(&self, offset: usize) -> Option<usize> {
        let rest = self.src.get(offset..)?;
        if let Some(block) = rest.strip_prefix("\"\"\"") {
            return block
                .match_indices("\"\"\"")
                .find(|(idx, _)| !block[..*idx].ends_with('\\'))
                .map(|(idx, _)| offset + 3 + idx + 3);
        }

        let mut escaped = false;
        for (idx, ch) in rest.char_indices().skip(1) {
            match ch {
                '"' if !escaped => return Some(offset + idx + 1),
                '\n' => return None,
                _ => (),
            }
            escaped = !escaped && ch == '\\';
        }
        None
    }
}

fn column_width(ch: char) -> usize {
    match ch {
        '\t' => 8,
        '\r' | '\u{feff}' => 0,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_and_positions_agree() {
        let scanner = SourceScanner::new("query {\n\tme\r\n  # x\n  id }");

        assert_eq!(scanner.offset_of(SourcePosition::new(1, 1)), Some(0));
        assert_eq!(scanner.offset_of(SourcePosition::new(2, 9)), Some(9));
        assert_eq!(scanner.position_at(9), Some(SourcePosition::new(2, 9)));
        assert_eq!(scanner.position_at(21), Some(SourcePosition::new(4, 3)));
        assert_eq!(scanner.offset_of(SourcePosition::new(9, 1)), None);
    }

    #[test]
    fn seek_steps_over_descriptions_and_arguments() {
        let src = concat!(
            r#""""doc (""" "#,
            r#"friends(first: Int = 1, """x)""" after: String): [User!]"#,
        );
        let scanner = SourceScanner::new(src);

        let type_start = scanner.seek(SourcePosition::new(1, 1), &[
            Step::OptionalString,
            Step::Name,
            Step::OptionalGroup('(', ')'),
            Step::Punct(':'),
        ]);
        assert_eq!(type_start.and_then(|offset| scanner.peek(offset)), Some('['));
        assert_eq!(
            scanner.name_position(type_start.map(|offset| offset + 1), "User"),
            Some(SourcePosition::new(1, 63)),
        );
    }

    #[test]
    fn mismatched_tokens_yield_none() {
        let scanner = SourceScanner::new("fragment F on Dog { name }");

        assert!(scanner.seek(SourcePosition::new(1, 1), &[Step::Keyword("query")]).is_none());
        assert!(scanner.name_position(Some(14), "Cat").is_none());
        assert_eq!(
            scanner.name_position(Some(14), "Dog"),
            Some(SourcePosition::new(1, 15)),
        );
    }

    #[test]
    fn separated_names_and_root_types() {
        let scanner = SourceScanner::new(
            "schema @a(b: \"}\") { mutation: M query: Q }\nunion U = | A | B",
        );

        assert_eq!(scanner.root_operation_types(SourcePosition::new(1, 1)), vec![
            ("mutation", 30),
            ("query", 39),
        ]);

        let first = scanner.seek(SourcePosition::new(2, 1), &[
            Step::Keyword("union"),
            Step::Name,
            Step::Directives,
            Step::Punct('='),
            Step::OptionalPunct('|'),
        ]);
        let starts = scanner.separated_names(first, 2, '|');
        assert_eq!(starts.len(), 2);
        assert_eq!(
            scanner.name_position(starts[1], "B"),
            Some(SourcePosition::new(2, 17)),
        );
    }
}

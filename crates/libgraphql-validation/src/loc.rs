/// A 1-based line/column position within a GraphQL source text.
///
/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), which is
/// where most positions originate.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SourcePosition {
    pub line: usize,
    pub column: usize,
}
impl SourcePosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub(crate) fn from_pos(pos: graphql_parser::Pos) -> Self {
        Self {
            line: pos.line,
            column: pos.column,
        }
    }
}
impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Where a schema entity was defined.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SchemaDefLocation {
    GraphQLBuiltIn,
    Schema(SourcePosition),
}
impl SchemaDefLocation {
    pub fn position(&self) -> Option<SourcePosition> {
        match self {
            Self::GraphQLBuiltIn => None,
            Self::Schema(pos) => Some(*pos),
        }
    }
}
impl std::convert::From<SourcePosition> for SchemaDefLocation {
    fn from(value: SourcePosition) -> Self {
        Self::Schema(value)
    }
}
